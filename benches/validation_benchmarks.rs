//! Benchmarks for the form validator.

use contact_intake::{validate, ContactForm};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn valid_form() -> ContactForm {
    ContactForm {
        name: "John Doe".to_string(),
        number: "+14155550134".to_string(),
        email: "john@example.com".to_string(),
        address: "12 Harbor Rd, Ras Al Khaimah".to_string(),
        service: "Web & App Development".to_string(),
        message: "I would like a quote for a new marketing site.".to_string(),
    }
}

fn invalid_form() -> ContactForm {
    ContactForm {
        name: "J".to_string(),
        number: "123".to_string(),
        email: "not-an-email".to_string(),
        address: "a".repeat(501),
        service: String::new(),
        message: "short".to_string(),
    }
}

fn bench_validate(c: &mut Criterion) {
    let valid = valid_form();
    let invalid = invalid_form();

    c.bench_function("validate_valid_form", |b| {
        b.iter(|| validate(black_box(&valid)))
    });

    c.bench_function("validate_all_fields_invalid", |b| {
        b.iter(|| validate(black_box(&invalid)))
    });
}

criterion_group!(benches, bench_validate);
criterion_main!(benches);
