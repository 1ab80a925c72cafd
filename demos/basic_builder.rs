use rucache::builder::CacheBuilder;
use rucache::policy::RecencyPolicy;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let policy = match std::env::args().nth(1).as_deref() {
        Some("mru") => RecencyPolicy::Mru,
        _ => RecencyPolicy::Lru,
    };

    let mut cache = CacheBuilder::new(3).policy(policy).build::<&str, u32>();
    for (i, word) in ["red", "green", "blue", "red", "cyan", "magenta"]
        .into_iter()
        .enumerate()
    {
        if let Some(displaced) = cache.put(word, i as u32) {
            println!("put {word}: displaced {displaced}");
        }
    }

    println!("policy: {}", cache.policy());
    println!("stored {} of {}", cache.len(), cache.capacity());
    for (key, value) in &cache {
        println!("  {key} => {value}");
    }
}
