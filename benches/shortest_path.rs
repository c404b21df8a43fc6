use criterion::{black_box, criterion_group, criterion_main, Criterion};
use routeatlas::atlas::world_graph;
use routeatlas::{shortest_path, ShortestPaths};

fn criterion_benchmark(c: &mut Criterion) {
    let graph = world_graph();
    let from = "Lima, Peru".to_string();
    let to = "Tokyo, Japan".to_string();

    c.bench_function("world_route", |b| {
        b.iter(|| shortest_path(black_box(&graph), &from, &to))
    });

    c.bench_function("world_all_distances", |b| {
        b.iter(|| ShortestPaths::from_source(black_box(&graph), from.clone()))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
