//! `MenuGraph` and `MenuNode`, validated at construction and immutable after.

use petgraph::graph::{DiGraph, NodeIndex};
use serde::{Deserialize, Serialize};

use crate::errors::GraphError;

/// Position of a node in `MenuGraph::nodes`. Stable for the graph's lifetime.
pub type NodeId = usize;

/// A single menu, with ordered options leading to other menus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuNode {
    /// Entry point of every simulated walk. Exactly one per graph.
    pub is_start: bool,
    /// Reaching this menu ends the walk successfully. Outgoing edges of an
    /// end menu are never followed.
    pub is_end: bool,
    /// Human-readable description. Not used by the simulation.
    pub label: String,
    /// Outgoing options. Order matters: the position of the chosen option
    /// drives breadth-sensitive dropout.
    pub next: Vec<NodeId>,
}

impl MenuNode {
    /// An intermediate menu with the given options.
    pub fn new(label: impl Into<String>, next: Vec<NodeId>) -> Self {
        Self {
            is_start: false,
            is_end: false,
            label: label.into(),
            next,
        }
    }

    /// The entry menu.
    pub fn start(label: impl Into<String>, next: Vec<NodeId>) -> Self {
        Self {
            is_start: true,
            ..Self::new(label, next)
        }
    }

    /// A successful terminal menu.
    pub fn end(label: impl Into<String>) -> Self {
        Self {
            is_end: true,
            ..Self::new(label, Vec::new())
        }
    }

    /// Number of outgoing options.
    pub fn out_degree(&self) -> usize {
        self.next.len()
    }
}

/// Ordered menus plus the index of the unique start menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuGraph {
    nodes: Vec<MenuNode>,
    start_index: NodeId,
}

impl MenuGraph {
    /// Validate and build a graph.
    ///
    /// Fails if the number of start menus is not exactly one, or if any
    /// option points outside `0..nodes.len()`. Unreachable menus, cycles,
    /// self-loops and end menus with options are all accepted.
    pub fn new(nodes: Vec<MenuNode>) -> Result<Self, GraphError> {
        let node_count = nodes.len();

        for (node, menu) in nodes.iter().enumerate() {
            if let Some(&target) = menu.next.iter().find(|&&t| t >= node_count) {
                return Err(GraphError::EdgeOutOfRange {
                    node,
                    target,
                    node_count,
                });
            }
        }

        let starts: Vec<NodeId> = nodes
            .iter()
            .enumerate()
            .filter(|(_, menu)| menu.is_start)
            .map(|(idx, _)| idx)
            .collect();
        let start_index = match starts.as_slice() {
            [idx] => *idx,
            other => return Err(GraphError::StartNodeCount { count: other.len() }),
        };

        Ok(Self { nodes, start_index })
    }

    /// Number of menus.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of option edges, counting duplicates.
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(MenuNode::out_degree).sum()
    }

    /// The menu at `idx`, if it exists.
    pub fn node(&self, idx: NodeId) -> Option<&MenuNode> {
        self.nodes.get(idx)
    }

    pub fn nodes(&self) -> &[MenuNode] {
        &self.nodes
    }

    pub fn start_index(&self) -> NodeId {
        self.start_index
    }

    /// Largest number of options on any single menu.
    pub fn max_out_degree(&self) -> usize {
        self.nodes.iter().map(MenuNode::out_degree).max().unwrap_or(0)
    }

    /// Menus a simulated walk can visit, indexed like `nodes`.
    ///
    /// The walk stops at end menus, so their options are never followed and
    /// anything only reachable through them stays `false`.
    pub fn walk_reachable(&self) -> Vec<bool> {
        let mut reachable = vec![false; self.node_count()];
        let mut stack = vec![self.start_index];
        while let Some(idx) = stack.pop() {
            if std::mem::replace(&mut reachable[idx], true) {
                continue;
            }
            let menu = &self.nodes[idx];
            if !menu.is_end {
                stack.extend(menu.next.iter().copied().filter(|&t| !reachable[t]));
            }
        }
        reachable
    }

    /// Largest number of options on a menu a walk can actually choose from:
    /// reachable from the start and not an end menu.
    pub fn max_walk_out_degree(&self) -> usize {
        self.walk_reachable()
            .into_iter()
            .zip(&self.nodes)
            .filter(|(reachable, menu)| *reachable && !menu.is_end)
            .map(|(_, menu)| menu.out_degree())
            .max()
            .unwrap_or(0)
    }

    /// Directed `petgraph` view. Node `i` of the result is menu `i`.
    /// Duplicate options become parallel edges.
    pub fn to_digraph(&self) -> DiGraph<NodeId, usize> {
        let mut graph = DiGraph::with_capacity(self.node_count(), self.edge_count());
        for idx in 0..self.node_count() {
            graph.add_node(idx);
        }
        for (idx, menu) in self.nodes.iter().enumerate() {
            for (rank, &target) in menu.next.iter().enumerate() {
                graph.add_edge(NodeIndex::new(idx), NodeIndex::new(target), rank);
            }
        }
        graph
    }
}
