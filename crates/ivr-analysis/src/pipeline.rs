//! End-to-end analysis: simulate, lay out, report.

use ivr_core::config::IvrConfig;
use ivr_core::errors::SimulationError;
use ivr_core::graph::MenuGraph;

use crate::layout::{HierarchicalLayout, LayoutParams};
use crate::report::Report;
use crate::simulation::{SimulationEngine, SimulationParams};

/// Run the analysis `config` describes on `graph`.
///
/// In label mode the simulation is skipped and the report carries labels
/// only, as the labels view has no use for frustration values.
pub fn analyze(graph: &MenuGraph, config: &IvrConfig) -> Result<Report, SimulationError> {
    let show_labels = config.report.effective_show_labels();

    let stats = if show_labels {
        None
    } else {
        let params = SimulationParams::from(&config.simulation);
        Some(SimulationEngine::new(graph, params)?.run())
    };

    let layout = HierarchicalLayout::new(LayoutParams::from_config(&config.layout, show_labels))
        .compute(graph, graph.start_index());

    Ok(Report::build(
        graph,
        stats.as_ref(),
        &layout,
        show_labels,
        config.report.effective_confidence_level(),
    ))
}
