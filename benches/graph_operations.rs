//! 邻接表实现与边列表参考实现的基准对比

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use wdgraph::{Graph, WeightedDigraph};

#[path = "../tests/common/edge_list.rs"]
mod edge_list;

use edge_list::EdgeListGraph;

/// 环形图加跨越边：每个顶点出度 2，入度 2
fn build<G: WeightedDigraph + Default>(n: usize) -> G {
    let mut graph = G::default();
    for i in 0..n {
        let v = format!("v{}", i);
        graph.set(&v, &format!("v{}", (i + 1) % n), 1);
        graph.set(&v, &format!("v{}", (i + 7) % n), 2);
    }
    graph
}

fn bench_set(c: &mut Criterion) {
    let mut group = c.benchmark_group("set");
    for n in [100usize, 1_000] {
        group.bench_with_input(BenchmarkId::new("adjacency", n), &n, |b, &n| {
            b.iter(|| black_box(build::<Graph>(n)))
        });
        group.bench_with_input(BenchmarkId::new("edge_list", n), &n, |b, &n| {
            b.iter(|| black_box(build::<EdgeListGraph>(n)))
        });
    }
    group.finish();
}

fn bench_sources(c: &mut Criterion) {
    let mut group = c.benchmark_group("sources");
    for n in [100usize, 1_000] {
        let adjacency = build::<Graph>(n);
        let edge_list = build::<EdgeListGraph>(n);
        group.bench_with_input(BenchmarkId::new("adjacency", n), &n, |b, _| {
            b.iter(|| black_box(adjacency.sources("v42")))
        });
        group.bench_with_input(BenchmarkId::new("edge_list", n), &n, |b, _| {
            b.iter(|| black_box(edge_list.sources("v42")))
        });
    }
    group.finish();
}

fn bench_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove");
    for n in [100usize, 1_000] {
        let adjacency = build::<Graph>(n);
        let edge_list = build::<EdgeListGraph>(n);
        group.bench_with_input(BenchmarkId::new("adjacency", n), &n, |b, _| {
            b.iter_batched(
                || adjacency.clone(),
                |mut g| black_box(g.remove("v42")),
                criterion::BatchSize::SmallInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("edge_list", n), &n, |b, _| {
            b.iter_batched(
                || edge_list.clone(),
                |mut g| black_box(g.remove("v42")),
                criterion::BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_set, bench_sources, bench_remove);
criterion_main!(benches);
