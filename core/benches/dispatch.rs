use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use request_validator::api::*;
use request_validator::validation::parse_int;
use serde_json::json;
use std::hint::black_box;
use std::time::Duration;

fn rules(count: usize) -> ValidatorOptions {
    let mut builder = ValidatorOptions::builder().body_required(true);
    for i in 0..count {
        builder = builder.field(format!("field_{}", i), Strategy::function(NumberRange::between(1, 1000)));
    }
    builder.build()
}

fn benchmark_json_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("json_dispatch");
    group.measurement_time(Duration::from_secs(5));

    for count in [1, 10, 50].iter() {
        let validator = ValidatorMiddleware::new(rules(*count));
        let body: serde_json::Map<String, serde_json::Value> =
            (0..*count).map(|i| (format!("field_{}", i), json!(i + 1))).collect();
        let request = HttpRequest::new("/bench").with_body(RequestBody::Json(body.into()));

        group.bench_with_input(BenchmarkId::new("rules", count), &request, |b, request| {
            b.iter(|| black_box(validator.validate(black_box(request))));
        });
    }

    group.finish();
}

fn benchmark_form_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("form_dispatch");

    let validator = ValidatorMiddleware::new(
        ValidatorOptions::builder()
            .field("kind", Strategy::function(OneOf::new(["a", "b", "c"])))
            .field("page", Strategy::function(NumberRange::between(1, 100)))
            .build(),
    );

    let raw = b"kind=b&page=7&page=8&page=9";
    group.bench_function("parse_and_validate", |b| {
        b.iter(|| {
            let request = HttpRequest::new("/bench")
                .with_header("Content-Type", "application/x-www-form-urlencoded")
                .with_raw_body(black_box(raw))
                .map(|request| validator.validate(&request).is_ok());
            black_box(request)
        });
    });

    let rejected = HttpRequest::new("/bench")
        .with_header("Content-Type", "application/x-www-form-urlencoded")
        .with_raw_body(b"kind=z&page=7")
        .unwrap();
    group.bench_function("reject_with_message", |b| {
        b.iter(|| black_box(validator.validate(black_box(&rejected))));
    });

    group.finish();
}

fn benchmark_parse_int(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_int");

    for input in ["42", "  -9000", "0x1F", "12px"].iter() {
        group.bench_with_input(BenchmarkId::new("auto_radix", input), input, |b, input| {
            b.iter(|| black_box(parse_int(black_box(input), None)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_json_dispatch,
    benchmark_form_dispatch,
    benchmark_parse_int
);
criterion_main!(benches);
