//! Tests for MenuGraph construction and diagnostics.

use ivr_core::errors::GraphError;
use ivr_core::graph::{diagnose, MenuGraph, MenuNode};

fn menu(start: bool, end: bool, next: Vec<usize>) -> MenuNode {
    MenuNode {
        is_start: start,
        is_end: end,
        label: String::new(),
        next,
    }
}

#[test]
fn single_start_graph_builds() {
    let graph = MenuGraph::new(vec![
        MenuNode::start("Main", vec![1, 2]),
        MenuNode::end("Billing"),
        MenuNode::end("Support"),
    ])
    .unwrap();

    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.start_index(), 0);
    assert_eq!(graph.max_out_degree(), 2);
    assert_eq!(graph.node(1).unwrap().label, "Billing");
    assert!(graph.node(3).is_none());
}

#[test]
fn start_index_is_not_assumed_to_be_zero() {
    let graph = MenuGraph::new(vec![
        MenuNode::end("Done"),
        MenuNode::start("Main", vec![0]),
    ])
    .unwrap();
    assert_eq!(graph.start_index(), 1);
}

#[test]
fn no_start_node_is_rejected() {
    let err = MenuGraph::new(vec![menu(false, true, vec![])]).unwrap_err();
    assert_eq!(err, GraphError::StartNodeCount { count: 0 });
}

#[test]
fn empty_graph_is_rejected() {
    let err = MenuGraph::new(Vec::new()).unwrap_err();
    assert_eq!(err, GraphError::StartNodeCount { count: 0 });
}

#[test]
fn two_start_nodes_are_rejected() {
    let err = MenuGraph::new(vec![
        menu(true, false, vec![1]),
        menu(true, true, vec![]),
        menu(true, false, vec![]),
    ])
    .unwrap_err();
    assert_eq!(err, GraphError::StartNodeCount { count: 3 });
}

#[test]
fn out_of_range_edge_is_rejected() {
    let err = MenuGraph::new(vec![menu(true, false, vec![0, 5])]).unwrap_err();
    assert_eq!(
        err,
        GraphError::EdgeOutOfRange {
            node: 0,
            target: 5,
            node_count: 1
        }
    );
}

#[test]
fn cycles_self_loops_and_duplicates_are_legal() {
    let graph = MenuGraph::new(vec![
        menu(true, false, vec![0, 1, 1]),
        menu(false, false, vec![0]),
    ])
    .unwrap();
    assert_eq!(graph.edge_count(), 4);
    assert_eq!(graph.to_digraph().edge_count(), 4);
}

#[test]
fn digraph_view_preserves_indices() {
    let graph = MenuGraph::new(vec![
        MenuNode::start("Main", vec![2]),
        MenuNode::end("Orphan"),
        MenuNode::end("Done"),
    ])
    .unwrap();
    let digraph = graph.to_digraph();
    assert_eq!(digraph.node_count(), 3);
    let (src, dst) = digraph
        .edge_endpoints(digraph.edge_indices().next().unwrap())
        .unwrap();
    assert_eq!((src.index(), dst.index()), (0, 2));
}

#[test]
fn diagnostics_clean_for_simple_tree() {
    let graph = MenuGraph::new(vec![
        MenuNode::start("Main", vec![1, 2]),
        MenuNode::end("A"),
        MenuNode::end("B"),
    ])
    .unwrap();
    let diagnostics = diagnose(&graph);
    assert!(diagnostics.is_clean(), "{diagnostics:?}");
}

#[test]
fn diagnostics_report_structural_findings() {
    let graph = MenuGraph::new(vec![
        menu(true, false, vec![1, 3]), // 0
        menu(false, false, vec![2]),   // 1
        menu(false, false, vec![1]),   // 2: cycle 1 <-> 2
        menu(false, false, vec![]),    // 3: dead end
        menu(false, true, vec![4]),    // 4: unreachable end with self-loop
    ])
    .unwrap();
    let diagnostics = diagnose(&graph);

    assert_eq!(diagnostics.unreachable, vec![4]);
    assert_eq!(diagnostics.dead_ends, vec![3]);
    assert_eq!(diagnostics.cycles, vec![vec![1, 2], vec![4]]);
    assert_eq!(diagnostics.end_with_options, vec![4]);
    assert!(!diagnostics.end_reachable);
    assert!(!diagnostics.is_clean());
}

#[test]
fn walks_stop_at_end_menus() {
    let graph = MenuGraph::new(vec![
        menu(true, false, vec![1, 2]), // 0
        menu(false, true, vec![3, 4]), // 1: end with options
        menu(false, false, vec![1]),   // 2
        menu(false, false, vec![]),    // 3: only behind the end menu
        menu(false, false, vec![1, 1, 1, 1]), // 4: only behind the end menu
    ])
    .unwrap();

    assert_eq!(graph.walk_reachable(), vec![true, true, true, false, false]);
    assert_eq!(graph.max_out_degree(), 4);
    assert_eq!(graph.max_walk_out_degree(), 2);

    let diagnostics = diagnose(&graph);
    assert_eq!(diagnostics.unreachable, vec![3, 4]);
    assert!(diagnostics.dead_ends.is_empty());
    assert_eq!(diagnostics.end_with_options, vec![1]);
    assert!(diagnostics.end_reachable);
}

#[test]
fn start_that_is_also_end_has_no_walkable_options() {
    let graph = MenuGraph::new(vec![
        menu(true, true, vec![1, 1, 1]),
        menu(false, false, vec![]),
    ])
    .unwrap();
    assert_eq!(graph.walk_reachable(), vec![true, false]);
    assert_eq!(graph.max_walk_out_degree(), 0);
}
