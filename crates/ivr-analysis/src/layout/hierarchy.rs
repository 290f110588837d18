//! Tree-style layout of a menu graph, rooted at one menu.
//!
//! Each menu's horizontal span is split evenly among its children, and each
//! level sits `vertical_gap` below its parent. Graphs with shared children or
//! cycles are laid out as the depth-first spanning tree: a menu is placed the
//! first time the traversal reaches it and never moved afterwards, so the
//! result depends on option order rather than on shortest paths.

use std::collections::{BTreeMap, HashSet};

use ivr_core::config::LayoutConfig;
use ivr_core::constants;
use ivr_core::graph::{MenuGraph, NodeId};
use serde::{Deserialize, Serialize};

/// A point in layout space. `y` decreases with depth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Geometry of the layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutParams {
    /// Horizontal space allotted to the root's subtree.
    pub width: f64,
    /// Distance between a menu and its children.
    pub vertical_gap: f64,
    /// `y` of the root.
    pub root_vertical: f64,
    /// `x` of the root.
    pub root_horizontal: f64,
    /// Extra drop per sibling rank, to keep long labels of neighbours apart.
    pub sibling_y_offset: f64,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            width: constants::DEFAULT_LAYOUT_WIDTH,
            vertical_gap: constants::DEFAULT_VERTICAL_GAP,
            root_vertical: constants::DEFAULT_ROOT_VERTICAL,
            root_horizontal: constants::DEFAULT_ROOT_HORIZONTAL,
            sibling_y_offset: 0.0,
        }
    }
}

impl LayoutParams {
    pub fn from_config(config: &LayoutConfig, show_labels: bool) -> Self {
        Self {
            width: config.effective_width(),
            vertical_gap: config.effective_vertical_gap(),
            root_vertical: config.effective_root_vertical(),
            root_horizontal: config.effective_root_horizontal(),
            sibling_y_offset: config.effective_sibling_y_offset(show_labels),
        }
    }
}

/// Positions of every menu reachable from the layout root.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    positions: BTreeMap<NodeId, Position>,
}

impl Layout {
    pub fn get(&self, node: NodeId) -> Option<Position> {
        self.positions.get(&node).copied()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Positions in node order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, Position)> + '_ {
        self.positions.iter().map(|(&node, &pos)| (node, pos))
    }
}

/// One pending placement on the traversal stack.
struct Frame {
    node: NodeId,
    parent: Option<NodeId>,
    width: f64,
    position: Position,
}

/// Depth-first hierarchical layout.
#[derive(Debug, Clone, Default)]
pub struct HierarchicalLayout {
    params: LayoutParams,
}

impl HierarchicalLayout {
    pub fn new(params: LayoutParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &LayoutParams {
        &self.params
    }

    /// Place every menu reachable from `root`.
    ///
    /// The root sits exactly at `(root_horizontal, root_vertical)`. Children
    /// are the distinct targets of a menu's options in option order, minus
    /// the menu the traversal came from. Each child gets an equal share of
    /// the parent's width; children already placed keep their share but are
    /// not moved or descended into again. An out-of-range root yields an
    /// empty layout.
    pub fn compute(&self, graph: &MenuGraph, root: NodeId) -> Layout {
        let mut layout = Layout::default();
        if graph.node(root).is_none() {
            tracing::warn!(root, nodes = graph.node_count(), "layout root out of range");
            return layout;
        }

        let mut placed: HashSet<NodeId> = HashSet::with_capacity(graph.node_count());
        let mut stack = vec![Frame {
            node: root,
            parent: None,
            width: self.params.width,
            position: Position {
                x: self.params.root_horizontal,
                y: self.params.root_vertical,
            },
        }];

        while let Some(frame) = stack.pop() {
            if !placed.insert(frame.node) {
                continue;
            }
            layout.positions.insert(frame.node, frame.position);

            let children = children(graph, frame.node, frame.parent);
            if children.is_empty() {
                continue;
            }
            let child_width = frame.width / children.len() as f64;
            let left = frame.position.x - frame.width / 2.0;

            // Reverse push so the first option is laid out first.
            for (rank, &child) in children.iter().enumerate().rev() {
                stack.push(Frame {
                    node: child,
                    parent: Some(frame.node),
                    width: child_width,
                    position: Position {
                        x: left + (rank as f64 + 0.5) * child_width,
                        y: frame.position.y
                            - self.params.vertical_gap
                            - rank as f64 * self.params.sibling_y_offset,
                    },
                });
            }
        }

        tracing::debug!(root, placed = layout.len(), "layout computed");
        layout
    }
}

/// Distinct option targets of `node` in first-occurrence order, excluding
/// `parent`.
fn children(graph: &MenuGraph, node: NodeId, parent: Option<NodeId>) -> Vec<NodeId> {
    let mut seen = HashSet::new();
    graph
        .node(node)
        .map(|menu| menu.next.as_slice())
        .unwrap_or_default()
        .iter()
        .copied()
        .filter(|&target| Some(target) != parent && seen.insert(target))
        .collect()
}
