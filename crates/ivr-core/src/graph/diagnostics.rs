//! Structural warnings about a menu graph. None of these reject a graph.

use petgraph::algo::tarjan_scc;
use serde::Serialize;

use super::{MenuGraph, NodeId};

/// Findings about a graph that are legal but usually unintended.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GraphDiagnostics {
    /// Menus no walk from the start can ever visit. Walks stop at end menus.
    pub unreachable: Vec<NodeId>,
    /// Reachable non-end menus without options. Every walk reaching one is frustrated.
    pub dead_ends: Vec<NodeId>,
    /// Cycles anywhere in the graph: SCCs with more than one menu, plus self-loops.
    pub cycles: Vec<Vec<NodeId>>,
    /// End menus that still list options (never followed).
    pub end_with_options: Vec<NodeId>,
    /// Whether any end menu is reachable from the start.
    pub end_reachable: bool,
}

impl GraphDiagnostics {
    /// True when nothing worth warning about was found.
    pub fn is_clean(&self) -> bool {
        self.unreachable.is_empty()
            && self.dead_ends.is_empty()
            && self.cycles.is_empty()
            && self.end_with_options.is_empty()
            && self.end_reachable
    }

    /// Emit one `tracing` warning per finding.
    pub fn log_warnings(&self) {
        if !self.end_reachable {
            tracing::warn!("no end menu is reachable from the start; every user will be frustrated");
        }
        if !self.unreachable.is_empty() {
            tracing::warn!(menus = ?self.unreachable, "menus unreachable from the start");
        }
        if !self.dead_ends.is_empty() {
            tracing::warn!(menus = ?self.dead_ends, "reachable menus with no options and no end");
        }
        for cycle in &self.cycles {
            tracing::warn!(menus = ?cycle, "menu cycle");
        }
        if !self.end_with_options.is_empty() {
            tracing::warn!(menus = ?self.end_with_options, "end menus with options that are never followed");
        }
    }
}

/// Inspect `graph` for unreachable menus, dead ends, cycles and similar.
pub fn diagnose(graph: &MenuGraph) -> GraphDiagnostics {
    let reachable = graph.walk_reachable();

    let mut diagnostics = GraphDiagnostics::default();
    for (idx, menu) in graph.nodes().iter().enumerate() {
        if !reachable[idx] {
            diagnostics.unreachable.push(idx);
            continue;
        }
        if menu.is_end {
            diagnostics.end_reachable = true;
        } else if menu.next.is_empty() {
            diagnostics.dead_ends.push(idx);
        }
    }

    diagnostics.end_with_options = graph
        .nodes()
        .iter()
        .enumerate()
        .filter(|(_, menu)| menu.is_end && !menu.next.is_empty())
        .map(|(idx, _)| idx)
        .collect();

    for scc in tarjan_scc(&graph.to_digraph()) {
        let is_cycle = match scc.as_slice() {
            [single] => graph.nodes()[single.index()].next.contains(&single.index()),
            _ => true,
        };
        if is_cycle {
            let mut members: Vec<NodeId> = scc.iter().map(|n| n.index()).collect();
            members.sort_unstable();
            diagnostics.cycles.push(members);
        }
    }
    diagnostics.cycles.sort();

    diagnostics
}
