//! Property tests for the simulation engine.

use proptest::prelude::*;

use ivr_analysis::simulation::{DropoutModel, SimulationEngine, SimulationParams};
use ivr_core::graph::{MenuGraph, MenuNode};

/// Random graph of `n` menus: menu 0 is the start, `ends` marks end menus,
/// option targets are reduced modulo `n`.
fn build_graph(n: usize, ends: &[bool], edges: &[Vec<usize>]) -> MenuGraph {
    let nodes = (0..n)
        .map(|i| MenuNode {
            is_start: i == 0,
            is_end: ends[i],
            label: format!("Menu {i}"),
            next: edges[i].iter().map(|t| t % n).collect(),
        })
        .collect();
    MenuGraph::new(nodes).unwrap()
}

fn graph_strategy() -> impl Strategy<Value = MenuGraph> {
    (1_usize..8).prop_flat_map(|n| {
        (
            Just(n),
            prop::collection::vec(any::<bool>(), n),
            prop::collection::vec(prop::collection::vec(0_usize..64, 0..4), n),
        )
            .prop_map(|(n, ends, edges)| build_graph(n, &ends, &edges))
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn frustration_is_a_probability_and_sums(
        graph in graph_strategy(),
        rate in 0.05_f64..0.25,
        breadth in any::<bool>(),
        seed in any::<u64>(),
    ) {
        let params = SimulationParams {
            num_iterations: 500,
            base_dropout_rate: rate,
            breadth_sensitive: breadth,
            seed: Some(seed),
            threads: 1,
        };
        let stats = SimulationEngine::new(&graph, params).unwrap().run();

        prop_assert!((0.0..=1.0).contains(&stats.average_frustration));
        let sum: f64 = stats.per_node_frustration.iter().sum();
        prop_assert!((sum - stats.average_frustration).abs() < 1e-9);
        prop_assert_eq!(stats.per_node_frustration.len(), graph.node_count());
        prop_assert!((stats.success_rate() + stats.average_frustration - 1.0).abs() < 1e-12);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn end_menus_are_never_credited(
        graph in graph_strategy(),
        seed in any::<u64>(),
    ) {
        let params = SimulationParams {
            num_iterations: 300,
            base_dropout_rate: 0.1,
            breadth_sensitive: false,
            seed: Some(seed),
            threads: 1,
        };
        let stats = SimulationEngine::new(&graph, params).unwrap().run();
        for (idx, menu) in graph.nodes().iter().enumerate() {
            if menu.is_end {
                prop_assert_eq!(stats.per_node_counts[idx], 0);
            }
        }
    }
}

proptest! {
    #[test]
    fn breadth_first_option_is_cheapest(
        base in 0.001_f64..0.3,
        k in 1_usize..32,
    ) {
        let model = DropoutModel::new(base, true);
        prop_assert!(model.probability(0) < model.probability(k));
    }
}
