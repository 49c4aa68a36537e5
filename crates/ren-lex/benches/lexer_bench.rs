//! Lexer benchmarks.
//!
//! Run with: `cargo bench --package ren-lex`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use ren_lex::lex;

fn token_count(source: &str) -> usize {
    lex(source).unwrap().len()
}

fn bench_lexer_let_bindings(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_let_bindings");

    let source = "let x = 42\nlet y = x + 1\nlet z = y * 2";
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("single_let", |b| {
        b.iter(|| token_count(black_box("let x = 42")))
    });

    group.bench_function("several_lets", |b| b.iter(|| token_count(black_box(source))));

    group.finish();
}

fn bench_lexer_complex(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_complex");

    let source = r#"
        import "List" as List exposing { map, filter }

        // computes a factorial
        fn factorial n =
            case n of
                0 -> 1
                _ -> n * factorial (n - 1)

        type Shape =
            | Circle Float
            | Rectangle Float Float
    "#;

    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("module_with_import_and_case", |b| {
        b.iter(|| token_count(black_box(source)))
    });

    group.finish();
}

fn bench_lexer_strings(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_strings");

    group.bench_function("short_string", |b| {
        b.iter(|| token_count(black_box(r#"let s = "hello""#)))
    });

    group.bench_function("long_string", |b| {
        let source = r#"let s = "This is a longer string used for benchmarking purposes.""#;
        b.iter(|| token_count(black_box(source)))
    });

    group.bench_function("string_with_escapes", |b| {
        b.iter(|| token_count(black_box(r#"let s = "a\nb\tc\rd""#)))
    });

    group.finish();
}

fn bench_lexer_numbers(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_numbers");

    group.bench_function("integer", |b| b.iter(|| token_count(black_box("let x = 123456"))));

    group.bench_function("float", |b| b.iter(|| token_count(black_box("let x = 3.14159"))));

    group.bench_function("exponent", |b| b.iter(|| token_count(black_box("let x = 2.5e-3"))));

    group.finish();
}

fn bench_lexer_comments(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_comments");

    group.bench_function("single_comment", |b| {
        b.iter(|| token_count(black_box("// a short comment\nlet x = 1")))
    });

    group.bench_function("many_adjacent_comments", |b| {
        let source = "// a\n// b\n// c\n// d\n// e\nlet x = 1";
        b.iter(|| token_count(black_box(source)))
    });

    group.finish();
}

fn bench_lexer_identifiers(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_identifiers");

    group.bench_function("short_ident", |b| b.iter(|| token_count(black_box("let x = 42"))));

    group.bench_function("long_ident", |b| {
        b.iter(|| token_count(black_box("let very_long_variable_name = 42")))
    });

    group.bench_function("many_idents", |b| {
        b.iter(|| {
            token_count(black_box(
                "let a = 1\nlet b = 2\nlet c = 3\nlet d = 4\nlet e = 5",
            ))
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_lexer_let_bindings,
    bench_lexer_complex,
    bench_lexer_strings,
    bench_lexer_numbers,
    bench_lexer_comments,
    bench_lexer_identifiers
);
criterion_main!(benches);
