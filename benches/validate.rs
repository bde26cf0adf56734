use criterion::{criterion_group, criterion_main, Criterion};
use theshow_companion::response::ListingsPage;
use theshow_companion::schema::{self, Shape};

fn criterion_benchmark(c: &mut Criterion) {
    let listings_bytes = include_bytes!("../src/response/fixtures/listings.json");
    let value: serde_json::Value = serde_json::from_slice(listings_bytes).unwrap();
    let page_schema = ListingsPage::schema();

    c.bench_function("validates listings page", |b| b.iter(|| {
        page_schema.validate(&value).ok();
    }));

    c.bench_function("parses listings page", |b| b.iter(|| {
        schema::parse::<ListingsPage>(&value).ok();
    }));

    c.bench_function("deserializes listings page without validation", |b| b.iter(|| {
        serde_json::from_slice::<ListingsPage>(listings_bytes).ok();
    }));
}

criterion_group!{
    name = benches;
    config = Criterion::default().sample_size(100);
    targets = criterion_benchmark
}

criterion_main!(benches);
