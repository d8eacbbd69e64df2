use countries_core::{CountrySearch, Dataset};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn bench_lookups(c: &mut Criterion) {
    let db = Dataset::load().expect("bundled dataset loads");

    c.bench_function("search alpha2", |b| {
        b.iter(|| db.search(black_box("US")))
    });
    c.bench_function("search alpha3 fallback", |b| {
        b.iter(|| db.search(black_box("USA")))
    });
    c.bench_function("find_by_name alternate", |b| {
        b.iter(|| db.find_by_name(black_box("Polonia")))
    });
    c.bench_function("subdivision get", |b| {
        let us = db.search("US").expect("US");
        b.iter(|| us.subdivisions().get(black_box("WY")).is_some())
    });
    c.bench_function("substring search", |b| {
        b.iter(|| db.find_countries_by_substring(black_box("land")).len())
    });
}

criterion_group!(benches, bench_lookups);
criterion_main!(benches);
