use criterion::{criterion_group, criterion_main, Criterion};

use ivr_analysis::layout::HierarchicalLayout;
use ivr_analysis::simulation::{SimulationEngine, SimulationParams};
use ivr_core::graph::{MenuGraph, MenuNode};

/// Complete tree: `depth` levels of menus with `fanout` options each,
/// leaves are end menus.
fn build_menu_tree(depth: u32, fanout: usize) -> MenuGraph {
    let mut nodes = vec![MenuNode::start("root", Vec::new())];
    let mut frontier = vec![0];
    for level in 0..depth {
        let mut next_frontier = Vec::new();
        for parent in frontier {
            for _ in 0..fanout {
                let idx = nodes.len();
                nodes.push(if level + 1 == depth {
                    MenuNode::end(format!("leaf {idx}"))
                } else {
                    MenuNode::new(format!("menu {idx}"), Vec::new())
                });
                nodes[parent].next.push(idx);
                next_frontier.push(idx);
            }
        }
        frontier = next_frontier;
    }
    MenuGraph::new(nodes).unwrap()
}

fn bench_simulation_100k(c: &mut Criterion) {
    let graph = build_menu_tree(4, 4);
    let params = SimulationParams {
        seed: Some(1),
        breadth_sensitive: true,
        ..SimulationParams::default()
    };
    let engine = SimulationEngine::new(&graph, params).unwrap();

    c.bench_function("simulation_100k_depth4_fanout4", |b| {
        b.iter(|| engine.run());
    });
}

fn bench_simulation_100k_parallel(c: &mut Criterion) {
    let graph = build_menu_tree(4, 4);
    let params = SimulationParams {
        seed: Some(1),
        breadth_sensitive: true,
        threads: 4,
        ..SimulationParams::default()
    };
    let engine = SimulationEngine::new(&graph, params).unwrap();

    c.bench_function("simulation_100k_depth4_fanout4_4_chunks", |b| {
        b.iter(|| engine.run());
    });
}

fn bench_layout(c: &mut Criterion) {
    let graph = build_menu_tree(6, 4);
    let layout = HierarchicalLayout::default();

    c.bench_function("layout_depth6_fanout4", |b| {
        b.iter(|| layout.compute(&graph, 0));
    });
}

criterion_group!(
    benches,
    bench_simulation_100k,
    bench_simulation_100k_parallel,
    bench_layout
);
criterion_main!(benches);
