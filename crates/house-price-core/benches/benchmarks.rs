use criterion::{criterion_group, criterion_main, Criterion};
use house_price_core::prelude::*;
use std::hint::black_box;

fn synthetic_predictor(locations: usize) -> Predictor {
    let mut columns = vec!["total_sqft".to_string(), "bath".to_string(), "bhk".to_string()];
    columns.extend((0..locations).map(|i| format!("location {i}")));
    let coefficients = (0..columns.len()).map(|i| i as f64 * 0.01).collect();
    let schema = FeatureSchema::new(columns).expect("schema");
    Predictor::new(schema, LinearRegression::new(-10.0, coefficients)).expect("predictor")
}

fn bench_features(c: &mut Criterion) {
    let p = synthetic_predictor(240);
    c.bench_function("build_features_known_location", |b| {
        b.iter(|| p.schema().build_features(black_box("Location 200"), 1200.0, 2.0, 3.0))
    });
    c.bench_function("build_features_unknown_location", |b| {
        b.iter(|| p.schema().build_features(black_box("nowhere"), 1200.0, 2.0, 3.0))
    });
}

fn bench_predict(c: &mut Criterion) {
    let p = synthetic_predictor(240);
    let input = PropertyInput::new("location 17", 1450.0, 2.0, 2.0);
    c.bench_function("predict_price", |b| {
        b.iter(|| p.predict_price(black_box(&input)).expect("prediction"))
    });
}

criterion_group!(benches, bench_features, bench_predict);
criterion_main!(benches);
