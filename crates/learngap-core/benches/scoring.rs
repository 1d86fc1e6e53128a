use std::collections::BTreeMap;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use learngap_core::model::AssessmentInput;
use learngap_core::scorer::{analyze_student, score_learning_style};

fn ratings(values: &[u8]) -> Option<BTreeMap<String, u8>> {
    Some(
        values
            .iter()
            .enumerate()
            .map(|(i, v)| (format!("q{}", i + 1), *v))
            .collect(),
    )
}

fn make_input(teacher: &[u8], parent: &[u8], quiz: &[&str], diagnosed: bool) -> AssessmentInput {
    AssessmentInput {
        teacher_responses: ratings(teacher),
        parent_responses: ratings(parent),
        student_quiz_answers: Some(quiz.iter().map(|s| s.to_string()).collect()),
        uploaded_text: None,
        diagnosed_difficulty: diagnosed,
    }
}

fn bench_learning_style(c: &mut Criterion) {
    let mut group = c.benchmark_group("learning_style");
    let answers: Vec<String> = ["visual", "auditory", "reading", "kinesthetic", "unknown"]
        .iter()
        .cycle()
        .take(100)
        .map(|s| s.to_string())
        .collect();

    group.bench_function("uniform", |b| b.iter(|| score_learning_style(black_box(None))));

    group.bench_function("100_answers", |b| {
        b.iter(|| score_learning_style(black_box(Some(answers.as_slice()))))
    });

    group.finish();
}

fn bench_analyze(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze_student");

    group.bench_function("low_risk", |b| {
        let input = make_input(&[5; 12], &[4; 8], &["visual"; 10], false);
        b.iter(|| analyze_student(black_box(&input)))
    });

    group.bench_function("high_risk", |b| {
        let input = make_input(&[1; 12], &[2; 8], &["kinesthetic"; 10], true);
        b.iter(|| analyze_student(black_box(&input)))
    });

    group.bench_function("quiz_only", |b| {
        let input = AssessmentInput {
            student_quiz_answers: Some(vec!["reading".to_string(); 10]),
            ..Default::default()
        };
        b.iter(|| analyze_student(black_box(&input)))
    });

    group.finish();
}

criterion_group!(benches, bench_learning_style, bench_analyze);
criterion_main!(benches);
