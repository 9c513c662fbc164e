//! Validation Benchmarks
//!
//! Measures the cost of:
//! - Registering rules over a nested object graph
//! - Running a validation pass with and without failures
//! - Rendering message templates
//!
//! Run with: cargo bench --package objval-bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use objval::prelude::*;
use objval::substitute;

#[derive(Properties)]
struct Message {
    subject: String,
    body: String,
    attachments: Vec<Attachment>,
}

#[derive(Properties)]
struct Attachment {
    file_name: String,
}

fn create_message(attachments: usize, valid: bool) -> Message {
    let file_name = |i: usize| {
        if valid || i % 2 == 0 {
            format!("file{}.txt", i)
        } else {
            String::new()
        }
    };
    Message {
        subject: if valid { "Report".into() } else { String::new() },
        body: "Body".into(),
        attachments: (0..attachments)
            .map(|i| Attachment {
                file_name: file_name(i),
            })
            .collect(),
    }
}

fn register(validator: &Validator<'_, Message>) {
    validator.bind(Message::SUBJECT).not_empty().length(3, 50);
    validator.bind(Message::BODY).not_empty();
    for attachment in validator.bind(Message::ATTACHMENTS).validators_for() {
        attachment
            .bind(Attachment::FILE_NAME)
            .not_empty()
            .length(1, 255);
    }
}

fn benchmark_registration(c: &mut Criterion) {
    let mut group = c.benchmark_group("registration");

    for size in [1, 10, 100].iter() {
        let message = create_message(*size, true);

        group.bench_with_input(BenchmarkId::new("rules", size), size, |b, _| {
            b.iter(|| {
                let validator = validator_of(&message);
                register(&validator);
                black_box(validator.command().len())
            });
        });
    }

    group.finish();
}

fn benchmark_validation(c: &mut Criterion) {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap();
    let mut group = c.benchmark_group("validation");

    for size in [1, 10, 100].iter() {
        for (label, valid) in [("valid", true), ("invalid", false)] {
            let message = create_message(*size, valid);
            let validator = validator_of(&message);
            register(&validator);

            group.bench_with_input(BenchmarkId::new(label, size), size, |b, _| {
                b.iter(|| black_box(runtime.block_on(validator.validate()).unwrap()));
            });
        }
    }

    group.finish();
}

fn benchmark_formatting(c: &mut Criterion) {
    let mut group = c.benchmark_group("formatting");
    let template =
        "'{PropertyName}' must be between {MinLength} and {MaxLength} characters. You entered {TotalLength} characters.";

    group.bench_function("formatter", |b| {
        b.iter(|| {
            MessageFormatter::new()
                .param("PropertyName", "Subject")
                .param("MinLength", 3)
                .param("MaxLength", 5)
                .param("TotalLength", 8)
                .format(black_box(template))
        });
    });

    group.bench_function("substitute", |b| {
        b.iter(|| {
            substitute(
                black_box(template),
                &[
                    ("PropertyName", Some("Subject")),
                    ("MinLength", Some("3")),
                    ("MaxLength", Some("5")),
                    ("TotalLength", Some("8")),
                ],
            )
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_registration,
    benchmark_validation,
    benchmark_formatting,
);
criterion_main!(benches);
