//! Benchmarks for graph traversal performance
//!
//! Measures adjacency construction, cycle detection and topological
//! sorting on layered acyclic graphs of increasing size.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use graphcheck::graph::{cycle, topo, AdjacencyList, CycleScan, Edge};

/// Create a layered DAG where every vertex points at `fan_out` vertices
/// in the next layer
fn create_layered_dag(node_count: usize, layer_width: usize, fan_out: usize) -> Vec<Edge> {
    let mut edges = Vec::with_capacity(node_count * fan_out);
    for vertex in 0..node_count {
        let next_layer = (vertex / layer_width + 1) * layer_width;
        for offset in 0..fan_out {
            let target = next_layer + (vertex + offset) % layer_width;
            if target < node_count {
                edges.push((vertex, target));
            }
        }
    }
    edges
}

/// Benchmark adjacency list construction
fn bench_adjacency(c: &mut Criterion) {
    let mut group = c.benchmark_group("adjacency_build");

    for size in [1_000, 10_000, 100_000].iter() {
        let edges = create_layered_dag(*size, 100, 4);

        group.bench_with_input(BenchmarkId::new("nodes", size), &edges, |b, edges| {
            b.iter(|| black_box(AdjacencyList::from_edges(edges, true)));
        });
    }

    group.finish();
}

/// Benchmark cycle detection on acyclic input (full traversal)
fn bench_has_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("has_cycle");

    for size in [1_000, 10_000, 100_000].iter() {
        let edges = create_layered_dag(*size, 100, 4);
        let directed = AdjacencyList::from_edges(&edges, true);
        let undirected = AdjacencyList::from_edges(&edges, false);

        group.bench_with_input(BenchmarkId::new("directed", size), size, |b, &n| {
            b.iter(|| black_box(cycle::has_directed_cycle(&directed, n, CycleScan::AllRoots)));
        });
        group.bench_with_input(BenchmarkId::new("undirected", size), size, |b, &n| {
            b.iter(|| black_box(cycle::has_undirected_cycle(&undirected, n, CycleScan::AllRoots)));
        });
    }

    group.finish();
}

/// Benchmark topological sort
fn bench_topological_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("topological_sort");

    for size in [1_000, 10_000, 100_000].iter() {
        let edges = create_layered_dag(*size, 100, 4);
        let adj = AdjacencyList::from_edges(&edges, true);

        group.bench_with_input(BenchmarkId::new("nodes", size), size, |b, &n| {
            b.iter(|| black_box(topo::topological_sort(&adj, n)));
        });
    }

    group.finish();
}

/// Benchmark a deep chain, where traversal depth equals node count
fn bench_deep_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("deep_chain");

    for size in [10_000, 100_000].iter() {
        let edges: Vec<Edge> = (0..*size - 1).map(|v| (v, v + 1)).collect();
        let adj = AdjacencyList::from_edges(&edges, true);

        group.bench_with_input(BenchmarkId::new("topological_sort", size), size, |b, &n| {
            b.iter(|| black_box(topo::topological_sort(&adj, n)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_adjacency,
    bench_has_cycle,
    bench_topological_sort,
    bench_deep_chain
);
criterion_main!(benches);
