//! Micro-benchmarks for the count-vector hot paths: accumulation during
//! traversal and pairwise difference during clustering.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use codeclone_core::{from_fn, BoxedCondition, CountVector};

/// Realistic condition counts: small hand-picked sets up to generous ones.
const DIMS: [usize; 3] = [8, 32, 64];

/// Profile over `u64` evidence where condition `i` fires on bit `i % 64`.
fn bit_profile(dims: usize, references: u64) -> CountVector<u64> {
    let conditions: Vec<BoxedCondition<u64>> = (0..dims)
        .map(|i| from_fn(move |bits: &u64| bits & (1u64 << (i % 64)) != 0))
        .collect();
    let mut profile = CountVector::new("bench", conditions);
    // Weyl sequence gives a cheap deterministic spread of evidence values.
    for i in 0..references {
        profile.count_reference(&i.wrapping_mul(0x9e37_79b9_7f4a_7c15));
    }
    profile
}

fn bench_count_reference(c: &mut Criterion) {
    let mut group = c.benchmark_group("count_reference");
    for dims in DIMS {
        let mut profile = bit_profile(dims, 0);
        group.bench_function(format!("dims/{dims}"), |b| {
            b.iter(|| profile.count_reference(black_box(&0xDEAD_BEEF_u64)));
        });
    }
    group.finish();
}

fn bench_difference(c: &mut Criterion) {
    let mut group = c.benchmark_group("difference");
    for dims in DIMS {
        let a = bit_profile(dims, 1024);
        let b = bit_profile(dims, 768);
        group.bench_function(format!("dims/{dims}"), |bencher| {
            bencher.iter(|| {
                a.difference(black_box(&b))
                    .expect("profiles share dimensionality")
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_count_reference, bench_difference);
criterion_main!(benches);
