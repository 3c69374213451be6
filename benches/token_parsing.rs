//! Token parsing benchmarks
//!
//! Measures how `Token::load` scales with payload size, how the individual
//! stages compare, and how quickly malformed input is rejected.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use jwtseal::*;

const SECRET: &[u8] = b"benchmark-secret";

mod helpers {
    use super::*;

    /// Signed HS256 token whose custom claim pads the payload to roughly `size` bytes
    pub fn token_of_size(size: usize) -> String {
        TokenBuilder::new()
            .issuer("https://example.com")
            .subject("user123")
            .custom("data", "x".repeat(size))
            .sign(SECRET)
            .unwrap()
    }

    pub fn encoded(segment: &str) -> String {
        jwtseal::utils::base64url::encode(segment)
    }
}

fn bench_parse_by_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_by_size");

    for size in [64, 256, 1024, 4096, 16384] {
        let jwt = helpers::token_of_size(size);
        group.throughput(Throughput::Bytes(jwt.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &jwt, |b, jwt| {
            b.iter(|| Token::load(black_box(jwt)).unwrap());
        });
    }

    group.finish();
}

fn bench_parse_stages(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_stages");
    let jwt = helpers::token_of_size(256);
    let token = Token::load(&jwt).unwrap();

    group.bench_function("load", |b| {
        b.iter(|| Token::load(black_box(&jwt)).unwrap());
    });
    group.bench_function("data", |b| {
        b.iter(|| black_box(&token).data().unwrap());
    });
    group.bench_function("parse", |b| {
        b.iter(|| black_box(&token).parse().unwrap());
    });
    group.bench_function("load_and_validate", |b| {
        b.iter(|| Token::load(black_box(&jwt)).unwrap().validate(SECRET));
    });

    group.finish();
}

fn bench_parse_invalid(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_invalid");
    let header = helpers::encoded(r#"{"alg":"HS256","typ":"JWT"}"#);

    let missing_parts = format!("{header}.payload");
    group.bench_function("missing_parts", |b| {
        b.iter(|| Token::load(black_box(&missing_parts)).unwrap_err());
    });

    let invalid_base64 = format!("{header}.!!!invalid!!!.signature");
    group.bench_function("invalid_base64", |b| {
        b.iter(|| Token::load(black_box(&invalid_base64)).unwrap_err());
    });

    let invalid_json = format!("{header}.{}.signature", helpers::encoded("{not json"));
    group.bench_function("invalid_json", |b| {
        b.iter(|| Token::load(black_box(&invalid_json)).unwrap_err());
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_parse_by_size,
    bench_parse_stages,
    bench_parse_invalid
);
criterion_main!(benches);
