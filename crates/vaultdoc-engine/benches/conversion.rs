use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use vaultdoc_engine::{Converter, extract_links, parse_blocks, scan_inline, serialize};
mod common;

fn bench_import(c: &mut Criterion) {
    let mut group = c.benchmark_group("import");
    group.sample_size(10);

    let converter = Converter::default();
    for size in [10, 100] {
        let content = common::generate_note(size);
        group.bench_with_input(BenchmarkId::new("full_pipeline", size), &content, |b, content| {
            b.iter(|| black_box(converter.import(black_box(content))));
        });
    }

    let content = common::generate_note(100);
    group.bench_function("parse_blocks", |b| {
        b.iter(|| black_box(parse_blocks(black_box(&content))));
    });
    group.bench_function("extract_links", |b| {
        b.iter(|| black_box(extract_links(black_box(&content), &[])));
    });

    group.finish();
}

fn bench_inline(c: &mut Criterion) {
    let mut group = c.benchmark_group("inline");
    group.sample_size(10);

    let line = common::generate_long_line(50);
    group.bench_function("scan_inline_long_line", |b| {
        b.iter(|| black_box(scan_inline(black_box(&line))));
    });

    group.finish();
}

fn bench_export(c: &mut Criterion) {
    let mut group = c.benchmark_group("export");
    group.sample_size(10);

    let converter = Converter::default();
    let doc = converter.import(&common::generate_note(100));
    group.bench_function("serialize", |b| {
        b.iter(|| black_box(serialize(black_box(&doc.nodes))));
    });
    group.bench_function("export_file", |b| {
        b.iter(|| black_box(converter.export_file(&doc.front_matter, black_box(&doc.nodes))));
    });

    group.finish();
}

criterion_group!(benches, bench_import, bench_inline, bench_export);
criterion_main!(benches);
