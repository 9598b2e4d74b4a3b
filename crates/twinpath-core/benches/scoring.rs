use criterion::{black_box, criterion_group, criterion_main, Criterion};

use twinpath_core::answers::AnswerSheet;
use twinpath_core::bank;
use twinpath_core::scoring::{psychometric_score, score, technical_score};

fn full_sheet() -> AnswerSheet {
    let bank = bank::builtin();
    let mut sheet = AnswerSheet::new();
    for i in 1..=10 {
        sheet.record(format!("psych_{i}"), 4u8);
    }
    for q in bank.questions.iter().filter(|q| q.is_scored()) {
        sheet.record(q.id.clone(), q.correct_answer.clone().unwrap());
    }
    sheet
}

fn bench_score(c: &mut Criterion) {
    let bank = bank::builtin();
    let mut group = c.benchmark_group("score");

    group.bench_function("empty_sheet", |b| {
        let sheet = AnswerSheet::new();
        b.iter(|| score(black_box(&bank), black_box(&sheet)))
    });

    group.bench_function("full_sheet", |b| {
        let sheet = full_sheet();
        b.iter(|| score(black_box(&bank), black_box(&sheet)))
    });

    group.finish();
}

fn bench_base_scores(c: &mut Criterion) {
    let bank = bank::builtin();
    let sheet = full_sheet();
    let mut group = c.benchmark_group("base_scores");

    group.bench_function("psychometric", |b| {
        b.iter(|| psychometric_score(black_box(&sheet)))
    });

    group.bench_function("technical", |b| {
        b.iter(|| technical_score(black_box(&bank), black_box(&sheet)))
    });

    group.finish();
}

criterion_group!(benches, bench_score, bench_base_scores);
criterion_main!(benches);
