use criterion::{black_box, criterion_group, criterion_main, Criterion};

use deadbolt_constant_time::eq;

const LEN: usize = 1024;

fn bench_eq(c: &mut Criterion) {
    let secret = [b'a'; LEN];

    let mut early = [b'a'; LEN];
    early[0] = b'b';
    let mut late = [b'a'; LEN];
    late[LEN - 1] = b'b';
    let equal = secret;

    let mut group = c.benchmark_group("eq");
    group.bench_function("early_mismatch", |b| {
        b.iter(|| eq(black_box(&secret), black_box(&early)))
    });
    group.bench_function("late_mismatch", |b| {
        b.iter(|| eq(black_box(&secret), black_box(&late)))
    });
    group.bench_function("no_mismatch", |b| {
        b.iter(|| eq(black_box(&secret), black_box(&equal)))
    });
    group.finish();
}

criterion_group!(benches, bench_eq);
criterion_main!(benches);
