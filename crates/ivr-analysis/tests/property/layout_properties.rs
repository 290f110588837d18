//! Property tests for the hierarchical layout.

use std::collections::{HashSet, VecDeque};

use proptest::prelude::*;

use ivr_analysis::layout::HierarchicalLayout;
use ivr_core::graph::{MenuGraph, MenuNode};

fn build_graph(n: usize, edges: &[Vec<usize>]) -> MenuGraph {
    let nodes = (0..n)
        .map(|i| MenuNode {
            is_start: i == 0,
            is_end: false,
            label: String::new(),
            next: edges[i].iter().map(|t| t % n).collect(),
        })
        .collect();
    MenuGraph::new(nodes).unwrap()
}

fn reachable(graph: &MenuGraph, root: usize) -> HashSet<usize> {
    let mut seen = HashSet::from([root]);
    let mut queue = VecDeque::from([root]);
    while let Some(node) = queue.pop_front() {
        for &next in &graph.node(node).unwrap().next {
            if seen.insert(next) {
                queue.push_back(next);
            }
        }
    }
    seen
}

proptest! {
    #[test]
    fn places_exactly_the_reachable_menus(
        (n, edges) in (1_usize..15).prop_flat_map(|n| {
            (Just(n), prop::collection::vec(prop::collection::vec(0_usize..64, 0..4), n))
        })
    ) {
        let graph = build_graph(n, &edges);
        let layout = HierarchicalLayout::default().compute(&graph, 0);

        let expected = reachable(&graph, 0);
        let placed: HashSet<usize> = layout.iter().map(|(node, _)| node).collect();
        prop_assert_eq!(placed, expected);

        let root = layout.get(0).unwrap();
        prop_assert_eq!((root.x, root.y), (0.5, 0.0));

        for (node, pos) in layout.iter() {
            if node != 0 {
                prop_assert!(pos.y < 0.0, "menu {} not below root", node);
            }
            prop_assert!(pos.x >= 0.5 - 1.25 && pos.x <= 0.5 + 1.25);
        }
    }
}
