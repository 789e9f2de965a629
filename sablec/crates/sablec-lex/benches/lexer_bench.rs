//! Lexer benchmarks.
//!
//! Run with: `cargo bench --package sablec-lex`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use sablec_lex::Lexer;
use sablec_util::{Handler, SourceMap};

fn token_count(source: &str) -> usize {
    let handler = Handler::new();
    let map = SourceMap::new();
    Lexer::from_string("bench.sb", source, &handler, &map).count()
}

fn bench_keywords_and_idents(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer");

    let source = "let x = 42; fn main() { let y = x + 1; return y; }";
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("simple_let", |b| {
        b.iter(|| token_count(black_box("let x = 42;")))
    });

    group.bench_function("function_with_body", |b| {
        b.iter(|| token_count(black_box(source)))
    });

    group.finish();
}

fn bench_complex_source(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_complex");

    let source = r#"
        fn fibonacci(n: i32) -> i32 {
            if n <= 1 {
                return n;
            }
            return fibonacci(n - 1) + fibonacci(n - 2);
        }

        struct Matrix<'a, T> {
            rows: &'a Vec<Vec<T>>,
        }

        impl<'a, T> Matrix<'a, T> {
            fn get(&self, r: usize, c: usize) -> &T {
                &self.rows[r][c]
            }
        }
    "#;

    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("generic_heavy", |b| {
        b.iter(|| token_count(black_box(source)))
    });

    group.finish();
}

fn bench_literals(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_literals");

    group.bench_function("integers", |b| {
        b.iter(|| token_count(black_box("0 1_000u32 0xDEAD_BEEF 0o777 0b1010_1010u8")))
    });

    group.bench_function("floats", |b| {
        b.iter(|| token_count(black_box("3.14159 1e10 2.5e-3 1f32 9.0f64")))
    });

    group.bench_function("strings_with_escapes", |b| {
        b.iter(|| {
            token_count(black_box(
                r#"let s = "line1\nline2\ttab\\back\"quote\u{1F600}";"#,
            ))
        })
    });

    group.bench_function("raw_strings", |b| {
        b.iter(|| token_count(black_box(r##"let s = r#"no \escapes "here" at all"#;"##)))
    });

    group.finish();
}

fn bench_lookahead(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_lookahead");

    let source = "a + b * c - d / e % f << g >> h".repeat(16);
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("deep_peek_then_consume", |b| {
        b.iter(|| {
            let handler = Handler::new();
            let map = SourceMap::new();
            let mut lexer = Lexer::from_string("bench.sb", black_box(&source), &handler, &map);
            // Force a deep first-time peek, then sequential consumption.
            let _ = lexer.peek_nth(64).clone();
            lexer.count()
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_keywords_and_idents,
    bench_complex_source,
    bench_literals,
    bench_lookahead
);
criterion_main!(benches);
