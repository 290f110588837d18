//! Property tests for MenuGraph construction.

use proptest::prelude::*;

use ivr_core::errors::GraphError;
use ivr_core::graph::{MenuGraph, MenuNode};

fn menus(n: usize, starts: &[bool], edges: &[Vec<usize>]) -> Vec<MenuNode> {
    (0..n)
        .map(|i| MenuNode {
            is_start: starts[i],
            is_end: false,
            label: format!("Menu {i}"),
            next: edges[i].clone(),
        })
        .collect()
}

proptest! {
    #[test]
    fn construction_succeeds_iff_exactly_one_start(
        starts in prop::collection::vec(any::<bool>(), 1..12)
    ) {
        let n = starts.len();
        let edges = vec![Vec::new(); n];
        let start_count = starts.iter().filter(|s| **s).count();

        match MenuGraph::new(menus(n, &starts, &edges)) {
            Ok(graph) => {
                prop_assert_eq!(start_count, 1);
                prop_assert!(graph.node(graph.start_index()).unwrap().is_start);
            }
            Err(GraphError::StartNodeCount { count }) => {
                prop_assert_ne!(start_count, 1);
                prop_assert_eq!(count, start_count);
            }
            Err(other) => prop_assert!(false, "unexpected error {:?}", other),
        }
    }
}

proptest! {
    #[test]
    fn in_range_edges_always_accepted(
        n in 1_usize..10,
        raw_edges in prop::collection::vec(prop::collection::vec(0_usize..100, 0..5), 10)
    ) {
        let edges: Vec<Vec<usize>> = raw_edges
            .iter()
            .take(n)
            .map(|e| e.iter().map(|t| t % n).collect())
            .collect();
        let mut starts = vec![false; n];
        starts[0] = true;

        let graph = MenuGraph::new(menus(n, &starts, &edges)).unwrap();
        let expected: usize = edges.iter().map(Vec::len).sum();
        prop_assert_eq!(graph.edge_count(), expected);
        prop_assert_eq!(graph.to_digraph().edge_count(), expected);
    }
}
