//! Formatter benchmarks for golex.
//!
//! Token streams are built once outside the timed loop, so only the spacing
//! pass is measured.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use golex_fmt::{format, with_whitespace};
use golex_lexer::tokenize_str;
use std::hint::black_box;

fn generate_n_functions(n: usize) -> String {
    (0..n)
        .map(|i| format!("func f{i}(x int) int {{\nif x>={i}{{\nreturn x&{i}\n}}\nreturn fmt.Sprint(x)\n}}\n"))
        .collect()
}

fn bench_format_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("formatter/text");

    for size in [10, 100, 1000] {
        let tokens = tokenize_str(&generate_n_functions(size));
        group.bench_with_input(BenchmarkId::new("functions", size), &tokens, |b, tokens| {
            b.iter(|| black_box(format(black_box(tokens))));
        });
    }

    group.finish();
}

fn bench_format_tokens(c: &mut Criterion) {
    let tokens = tokenize_str(&generate_n_functions(100));

    c.bench_function("formatter/with_whitespace", |b| {
        b.iter(|| black_box(with_whitespace(black_box(&tokens))));
    });
}

fn bench_round_trip(c: &mut Criterion) {
    let source = generate_n_functions(100);

    c.bench_function("formatter/lex_and_format", |b| {
        b.iter(|| black_box(format(&tokenize_str(black_box(&source)))));
    });
}

criterion_group!(
    benches,
    bench_format_text,
    bench_format_tokens,
    bench_round_trip
);
criterion_main!(benches);
