//! Benchmarks for truth table construction and normal-form synthesis
//!
//! Formulas are generated with a growing number of variables so the results
//! show how each stage scales with the table size.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use truth_forms::{Formula, Notation, RemovalMode, TruthTable};

const SIZES: [usize; 4] = [4, 8, 12, 16];

/// A formula over `n` variables mixing every binary operator
fn formula_text(n: usize) -> String {
    let ops = ['&', '+', '@', '~', '>', '|', '!'];
    let mut text = String::from("x_1");
    for i in 2..=n {
        let op = ops[(i - 2) % ops.len()];
        if i % 3 == 0 {
            text = format!("-({}) {} x_{}", text, op, i);
        } else {
            text = format!("{} {} x_{}", text, op, i);
        }
    }
    text
}

fn build_table(n: usize) -> TruthTable {
    let formula = Formula::parse(&formula_text(n)).unwrap();
    TruthTable::build(&formula).unwrap()
}

/// Benchmark: Parse formulas
fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for n in SIZES {
        let text = formula_text(n);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &text, |b, data| {
            b.iter(|| {
                let formula = Formula::parse(black_box(data)).unwrap();
                black_box(formula);
            });
        });
    }

    group.finish();
}

/// Benchmark: Evaluate every row
fn bench_build_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_table");

    for n in SIZES {
        let formula = Formula::parse(&formula_text(n)).unwrap();
        group.throughput(Throughput::Elements(1 << n));
        group.bench_with_input(BenchmarkId::from_parameter(n), &formula, |b, formula| {
            b.iter(|| {
                let table = TruthTable::build(black_box(formula)).unwrap();
                black_box(table);
            });
        });
    }

    group.finish();
}

/// Benchmark: Fictitious-variable analysis and removal
fn bench_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("analysis");

    for n in SIZES {
        let table = build_table(n);
        group.throughput(Throughput::Elements(1 << n));
        group.bench_with_input(BenchmarkId::new("essentiality", n), &table, |b, table| {
            b.iter(|| black_box(table.essentiality()));
        });
        group.bench_with_input(BenchmarkId::new("remove", n), &table, |b, table| {
            b.iter(|| black_box(table.remove_fictitious(RemovalMode::FixedPoint)));
        });
    }

    group.finish();
}

/// Benchmark: SDNF, SKNF and Zhegalkin polynomial
fn bench_forms(c: &mut Criterion) {
    let mut group = c.benchmark_group("forms");

    // Text forms grow with the table, keep them to moderate sizes
    for n in [4, 8, 12] {
        let table = build_table(n);
        group.throughput(Throughput::Elements(1 << n));
        group.bench_with_input(BenchmarkId::new("sdnf", n), &table, |b, table| {
            b.iter(|| black_box(table.sdnf(Notation::Unicode)));
        });
        group.bench_with_input(BenchmarkId::new("sknf", n), &table, |b, table| {
            b.iter(|| black_box(table.sknf(Notation::Unicode)));
        });
        group.bench_with_input(BenchmarkId::new("zhegalkin", n), &table, |b, table| {
            b.iter(|| black_box(table.zhegalkin()));
        });
        group.bench_with_input(BenchmarkId::new("dual", n), &table, |b, table| {
            b.iter(|| black_box(table.dual()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_parse,
    bench_build_table,
    bench_analysis,
    bench_forms
);
criterion_main!(benches);
