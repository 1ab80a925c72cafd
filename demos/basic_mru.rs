use rucache::policy::MruCache;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Cyclic scan over one more key than fits. LRU would miss every time;
    // MRU keeps most of the cycle resident.
    let mut cache: MruCache<u32, u32> = MruCache::new(3);
    let mut hits = 0;
    for _ in 0..4 {
        for key in 0..4 {
            if cache.get(&key).is_some() {
                hits += 1;
            } else {
                cache.put(key, key * 10);
            }
        }
    }

    let resident: Vec<u32> = cache.iter().map(|(k, _)| *k).collect();
    println!("hits: {hits} of 16");
    println!("resident (most recent first): {resident:?}");
}

// Run with RUST_LOG=rucache=trace to see which slot each eviction reuses.
