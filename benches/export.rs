//! Performance benchmarks for the export kernel.
//!
//! Run with: `cargo bench --bench export`

use criterion::{
    black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput,
};

use export_kernel::{Composite, ExportOptions, Exporter, ReferenceValue, Value};

/// Flat positional list of `n` integers.
fn wide_list(n: usize) -> Value {
    Value::Composite(Composite::list((0..n).map(|i| Value::Int(i as i64))))
}

/// Keyed map nested `depth` levels deep, one entry per level.
fn deep_map(depth: usize) -> Value {
    let mut value = Value::Int(0);
    for level in 0..depth {
        value = Value::Composite(Composite::new().with(format!("level{}", level), value));
    }
    value
}

/// Balanced tree of distinct reference instances.
fn reference_tree(depth: usize, breadth: usize) -> Value {
    if depth == 0 {
        return Value::Reference(ReferenceValue::new("Leaf"));
    }
    let mut node = ReferenceValue::new("Node");
    for i in 0..breadth {
        node = node.with_field(format!("child{}", i), reference_tree(depth - 1, breadth));
    }
    Value::Reference(node)
}

fn bench_wide_lists(c: &mut Criterion) {
    let exporter = Exporter::new(ExportOptions::default());
    let mut group = c.benchmark_group("export_wide_list");
    for n in [64usize, 512, 4096] {
        let value = wide_list(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &value, |b, value| {
            b.iter(|| exporter.export(black_box(value)).unwrap());
        });
    }
    group.finish();
}

fn bench_deep_maps(c: &mut Criterion) {
    let exporter = Exporter::new(ExportOptions::default());
    let mut group = c.benchmark_group("export_deep_map");
    for depth in [8usize, 64, 256] {
        let value = deep_map(depth);
        group.throughput(Throughput::Elements(depth as u64));
        group.bench_with_input(BenchmarkId::from_parameter(depth), &value, |b, value| {
            b.iter(|| exporter.export(black_box(value)).unwrap());
        });
    }
    group.finish();
}

fn bench_reference_trees(c: &mut Criterion) {
    let exporter = Exporter::new(ExportOptions::default());
    let mut group = c.benchmark_group("export_reference_tree");
    for depth in [4usize, 6] {
        let value = reference_tree(depth, 3);
        group.bench_with_input(BenchmarkId::from_parameter(depth), &value, |b, value| {
            b.iter(|| exporter.export(black_box(value)).unwrap());
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_wide_lists,
    bench_deep_maps,
    bench_reference_trees
);
criterion_main!(benches);
