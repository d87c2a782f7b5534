use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

use bookchain_core::{canonical_payload_bytes, is_valid, CheckoutRecord};
use bookchain_testkit::TestFixture;

fn bench_append(c: &mut Criterion) {
    c.bench_function("append", |b| {
        b.iter_batched(
            TestFixture::new,
            |mut fixture| {
                fixture.checkout("b1", "alice");
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_verify(c: &mut Criterion) {
    let fixture = TestFixture::with_checkouts(1_000);
    c.bench_function("verify_1000", |b| {
        b.iter(|| black_box(&fixture.chain).verify())
    });

    let blocks = fixture.chain.blocks();
    c.bench_function("is_valid", |b| {
        b.iter(|| is_valid(black_box(&blocks[500]), black_box(&blocks[499])))
    });
}

fn bench_canonical(c: &mut Criterion) {
    let record = CheckoutRecord::new("978-0441013593", "alice", "2024-01-01");
    c.bench_function("canonical_payload", |b| {
        b.iter(|| canonical_payload_bytes(black_box(&record)))
    });
}

criterion_group!(benches, bench_append, bench_verify, bench_canonical);
criterion_main!(benches);
