use criterion::{Criterion, black_box, criterion_group, criterion_main};
use tokoid::{MAX_TOKEN_LENGTH, Token, TokenGenerator};

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    for raw in [3_781, 225_557_475_374_453, u64::MAX] {
        let token = Token::from_raw(raw);
        group.bench_function(format!("raw/{raw}"), |b| {
            b.iter(|| black_box(token).encode())
        });
    }

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    for encoded in ["yz", "123456789", "opqrstuvwx"] {
        group.bench_function(format!("chars/{}", encoded.len()), |b| {
            b.iter(|| Token::decode(black_box(encoded)))
        });
    }

    group.finish();
}

fn bench_generate(c: &mut Criterion) {
    let generator = TokenGenerator::new();
    let mut group = c.benchmark_group("generate");

    group.bench_function("default", |b| b.iter(|| black_box(generator.generate())));
    group.bench_function("max", |b| {
        b.iter(|| black_box(generator.generate_with_length(MAX_TOKEN_LENGTH)))
    });

    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode, bench_generate);
criterion_main!(benches);
