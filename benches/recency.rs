use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rucache::cache::RecencyCache;
use rucache::policy::{EvictionPolicy, Lru, Mru, RecencyPolicy};

const CAPACITY: u64 = 1024;

fn filled<P: EvictionPolicy>(policy: P) -> RecencyCache<u64, u64, P> {
    let mut cache = RecencyCache::with_policy(CAPACITY as usize, policy);
    for i in 0..CAPACITY {
        cache.put(i, i);
    }
    cache
}

fn bench_put_get<P: EvictionPolicy + Copy>(c: &mut Criterion, name: &str, policy: P) {
    c.bench_function(name, |b| {
        b.iter_batched(
            || filled(policy),
            |mut cache| {
                for i in 0..CAPACITY {
                    cache.put(std::hint::black_box(i + 10_000), i);
                    let _ = std::hint::black_box(cache.get(&std::hint::black_box(i)));
                }
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_eviction_churn<P: EvictionPolicy + Copy>(c: &mut Criterion, name: &str, policy: P) {
    c.bench_function(name, |b| {
        b.iter_batched(
            || filled(policy),
            |mut cache| {
                for i in 0..4 * CAPACITY {
                    cache.put(std::hint::black_box(10_000 + i), i);
                }
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_hit_path(c: &mut Criterion) {
    c.bench_function("lru_get_hotset", |b| {
        b.iter_batched(
            || filled(Lru),
            |mut cache| {
                for i in 0..CAPACITY {
                    let _ = std::hint::black_box(cache.get(&std::hint::black_box(i)));
                }
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_random_mixed(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_mixed");
    for policy in [RecencyPolicy::Lru, RecencyPolicy::Mru] {
        group.bench_function(policy.to_string(), |b| {
            b.iter_batched(
                || (filled(policy), SmallRng::seed_from_u64(42)),
                |(mut cache, mut rng)| {
                    for _ in 0..CAPACITY {
                        let key = rng.gen_range(0..2 * CAPACITY);
                        if rng.gen_bool(0.7) {
                            let _ = std::hint::black_box(cache.get(&key));
                        } else {
                            cache.put(key, key);
                        }
                    }
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_policies(c: &mut Criterion) {
    bench_put_get(c, "lru_put_get", Lru);
    bench_put_get(c, "mru_put_get", Mru);
    bench_eviction_churn(c, "lru_eviction_churn", Lru);
    bench_eviction_churn(c, "mru_eviction_churn", Mru);
}

criterion_group!(benches, bench_policies, bench_hit_path, bench_random_mixed);
criterion_main!(benches);
