//! Criterion benchmarks for graph store operations
//!
//! Covers:
//! - Store construction via `add_edge` (write lock per call)
//! - Neighbor queries (children vs parents)
//! - Node deletion purge cost
//! - JSON ingestion

use arbor_graph::{GraphStore, Node, NodeId};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

/// Generate scale-free-ish edge list (LCG for reproducibility)
fn generate_edges(num_nodes: usize, edges_per_node: usize) -> Vec<(usize, usize, f64)> {
    let mut edges = Vec::new();
    let mut rng_state = 12345_u64;

    for node in 0..num_nodes {
        for _ in 0..edges_per_node {
            rng_state = rng_state.wrapping_mul(1103515245).wrapping_add(12345);
            let target = (rng_state % num_nodes as u64) as usize;

            if target != node {
                edges.push((node, target, 1.0));
            }
        }
    }

    edges
}

fn ids(num_nodes: usize) -> Vec<NodeId> {
    (0..num_nodes).map(|i| NodeId::from(format!("n{i}"))).collect()
}

fn build_store(ids: &[NodeId], edges: &[(usize, usize, f64)]) -> GraphStore {
    let graph = GraphStore::new("bench");
    for id in ids {
        graph.add_node(Node::new(id.clone()));
    }
    for &(src, tgt, weight) in edges {
        graph.add_edge(&ids[src], &ids[tgt], weight).unwrap();
    }
    graph
}

/// Benchmark: building a store edge by edge
fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");

    for size in [100, 500, 1000, 5000].iter() {
        let node_ids = ids(*size);
        let edges = generate_edges(*size, 3);

        group.bench_with_input(BenchmarkId::new("add_edge", size), &edges, |b, edges| {
            b.iter(|| {
                let graph = build_store(black_box(&node_ids), black_box(edges));
                black_box(graph);
            });
        });
    }

    group.finish();
}

/// Benchmark: neighbor queries (children vs parents)
fn bench_neighbor_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("neighbor_queries");

    let node_ids = ids(1000);
    let graph = build_store(&node_ids, &generate_edges(1000, 5));

    group.bench_function("child_nodes", |b| {
        b.iter(|| {
            for id in &node_ids[..100] {
                black_box(graph.child_nodes(id).unwrap());
            }
        });
    });

    group.bench_function("parent_nodes", |b| {
        b.iter(|| {
            for id in &node_ids[..100] {
                black_box(graph.parent_nodes(id).unwrap());
            }
        });
    });

    group.bench_function("edge_weight", |b| {
        b.iter(|| {
            for pair in node_ids[..101].windows(2) {
                let _ = black_box(graph.edge_weight(&pair[0], &pair[1]));
            }
        });
    });

    group.finish();
}

/// Benchmark: delete_node purging both directions
fn bench_delete_node(c: &mut Criterion) {
    let mut group = c.benchmark_group("delete_node");

    for size in [100, 1000].iter() {
        let node_ids = ids(*size);
        let edges = generate_edges(*size, 5);

        group.bench_with_input(BenchmarkId::new("purge", size), &edges, |b, edges| {
            b.iter_batched(
                || build_store(&node_ids, edges),
                |graph| {
                    for id in &node_ids[..10] {
                        graph.delete_node(black_box(id));
                    }
                    graph
                },
                criterion::BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

/// Benchmark: JSON ingestion
fn bench_json_ingestion(c: &mut Criterion) {
    let mut group = c.benchmark_group("json_ingestion");

    for size in [100, 1000].iter() {
        let node_ids = ids(*size);
        let json = build_store(&node_ids, &generate_edges(*size, 3))
            .to_json_string()
            .unwrap();

        group.bench_with_input(BenchmarkId::new("from_json_str", size), &json, |b, json| {
            b.iter(|| {
                let graph = GraphStore::from_json_str(black_box(json), "bench").unwrap();
                black_box(graph);
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_construction,
    bench_neighbor_queries,
    bench_delete_node,
    bench_json_ingestion
);
criterion_main!(benches);
