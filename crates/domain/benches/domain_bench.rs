use chrono::{NaiveDate, NaiveDateTime};
use criterion::{Criterion, criterion_group, criterion_main};
use domain::{CreateOrder, validate};
use rust_decimal::Decimal;

fn clock() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 6, 1)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

fn bench_validate_valid(c: &mut Criterion) {
    let cmd = CreateOrder::new(
        "Москва",
        "ул. Пушкина д. 5 кв. 12",
        "Казань",
        "ул. Ленина д. 10 кв. 5",
        Decimal::new(125, 1),
        NaiveDate::from_ymd_opt(2099, 1, 1)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap(),
    );
    let now = clock();

    c.bench_function("domain/validate_valid_submission", |b| {
        b.iter(|| validate(&cmd, now).unwrap());
    });
}

fn bench_validate_invalid(c: &mut Criterion) {
    let mut cmd = CreateOrder::new(
        "Москва",
        "ул. Pushkina д. 5 кв. 12",
        "Казань",
        "проспект Ленина 10",
        Decimal::ZERO,
        NaiveDate::from_ymd_opt(2000, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap(),
    );
    cmd.receiver_city = None;
    let now = clock();

    c.bench_function("domain/validate_invalid_submission", |b| {
        b.iter(|| validate(&cmd, now).unwrap_err());
    });
}

criterion_group!(benches, bench_validate_valid, bench_validate_invalid);
criterion_main!(benches);
