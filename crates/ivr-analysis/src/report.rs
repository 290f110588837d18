//! Report handed to renderers: per-menu values, roles and positions.

use std::fmt::Write as _;

use ivr_core::graph::{MenuGraph, NodeId};
use serde::{Deserialize, Serialize};

use crate::layout::{Layout, Position};
use crate::simulation::FrustrationStats;

/// Style class of a menu. End wins over start when a menu is both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeRole {
    Start,
    End,
    Menu,
}

impl NodeRole {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::End => "end",
            Self::Menu => "menu",
        }
    }
}

/// Everything a renderer needs about one menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeReport {
    pub index: NodeId,
    pub label: String,
    pub role: NodeRole,
    pub is_start: bool,
    pub is_end: bool,
    /// Share of all simulated users who gave up here. Absent in label mode.
    pub frustration: Option<f64>,
    /// Absent for menus unreachable from the start.
    pub position: Option<Position>,
    /// Text to draw on the node: the label, or the frustration percentage.
    pub annotation: String,
}

/// Complete analysis result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub show_labels: bool,
    pub average_frustration: Option<f64>,
    pub success_rate: Option<f64>,
    /// `(low, high, level)` normal-approximation interval for the average.
    pub confidence_interval: Option<(f64, f64, f64)>,
    pub iterations: Option<u64>,
    pub seed: Option<u64>,
    pub nodes: Vec<NodeReport>,
}

impl Report {
    /// Assemble a report. Without `stats` (label mode) only labels, roles
    /// and positions are filled in.
    pub fn build(
        graph: &MenuGraph,
        stats: Option<&FrustrationStats>,
        layout: &Layout,
        show_labels: bool,
        confidence_level: f64,
    ) -> Self {
        let nodes = graph
            .nodes()
            .iter()
            .enumerate()
            .map(|(index, menu)| {
                let frustration = stats.and_then(|s| s.per_node_frustration.get(index).copied());
                let annotation = match (show_labels, frustration) {
                    (true, _) => menu.label.clone(),
                    (false, Some(f)) => format!("{:.1}%", f * 100.0),
                    (false, None) => String::new(),
                };
                let role = if menu.is_end {
                    NodeRole::End
                } else if menu.is_start {
                    NodeRole::Start
                } else {
                    NodeRole::Menu
                };
                NodeReport {
                    index,
                    label: menu.label.clone(),
                    role,
                    is_start: menu.is_start,
                    is_end: menu.is_end,
                    frustration,
                    position: layout.get(index),
                    annotation,
                }
            })
            .collect();

        Self {
            show_labels,
            average_frustration: stats.map(|s| s.average_frustration),
            success_rate: stats.map(FrustrationStats::success_rate),
            confidence_interval: stats
                .and_then(|s| s.confidence_interval(confidence_level))
                .map(|(low, high)| (low, high, confidence_level)),
            iterations: stats.map(|s| s.num_iterations),
            seed: stats.map(|s| s.seed),
            nodes,
        }
    }

    /// The one-line summary printed by the original tool.
    pub fn headline(&self) -> Option<String> {
        self.average_frustration
            .map(|avg| format!("Average Frustration: {:.2}%", avg * 100.0))
    }

    /// Human-readable rendering: headline, interval, and a row per menu.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        if let Some(headline) = self.headline() {
            let _ = writeln!(out, "{headline}");
        }
        if let Some((low, high, level)) = self.confidence_interval {
            let _ = writeln!(
                out,
                "{:.0}% interval: {:.2}% - {:.2}%",
                level * 100.0,
                low * 100.0,
                high * 100.0
            );
        }
        for node in &self.nodes {
            let position = match node.position {
                Some(p) => format!("({:>7.3}, {:>7.3})", p.x, p.y),
                None => format!("{:<18}", "(unplaced)"),
            };
            let _ = writeln!(
                out,
                "[{:>3}] {:<5} {} {}",
                node.index,
                node.role.name(),
                position,
                node.annotation
            );
        }
        out
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
