//! Tokenizer throughput benchmarks.
//!
//! Measures pure scanning speed over single long lines: no rendering, no
//! diagnostics. ASCII-only and mixed-script lines are measured separately
//! since the latter take the UTF-8 decode and table lookup path.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lino_lexer_core::{tokenize, Tokenizer};

/// A line of `n` ASCII assignments.
fn ascii_line(n: usize) -> String {
    (0..n)
        .map(|i| format!("x{i} = (y{i} + {i}.5) * z_{i} "))
        .collect()
}

/// A line of `n` assignments using non-ASCII identifiers.
fn unicode_line(n: usize) -> String {
    (0..n)
        .map(|i| format!("λ{i} = µs{i} * 変数{i} - é "))
        .collect()
}

fn bench_throughput(c: &mut Criterion, name: &str, make_line: fn(usize) -> String) {
    let mut group = c.benchmark_group(format!("tokenizer/{name}/throughput"));

    for n in [10, 100, 1000, 10_000] {
        let line = make_line(n);
        group.throughput(Throughput::Bytes(line.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), line.as_bytes(), |b, line| {
            b.iter(|| {
                let mut tokenizer = Tokenizer::new(line);
                for token in &mut tokenizer {
                    black_box(token);
                }
                black_box(tokenizer.issues().len());
            });
        });
    }

    group.finish();
}

fn bench_ascii(c: &mut Criterion) {
    bench_throughput(c, "ascii", ascii_line);
}

fn bench_unicode(c: &mut Criterion) {
    bench_throughput(c, "unicode", unicode_line);
}

/// Cost of collecting into a `Vec` compared to streaming.
fn bench_collect(c: &mut Criterion) {
    let line = ascii_line(1000);
    c.bench_function("tokenizer/collect/1000", |b| {
        b.iter(|| black_box(tokenize(black_box(line.as_bytes()))));
    });
}

criterion_group!(benches, bench_ascii, bench_unicode, bench_collect);
criterion_main!(benches);
