#![no_main]

use libfuzzer_sys::fuzz_target;
use rucache::cache::RecencyCache;
use rucache::policy::RecencyPolicy;

// Fuzz arbitrary operation sequences on RecencyCache
//
// The first byte picks the policy and capacity, the rest is read as
// (op, key) pairs driving get, put, contains, peek and flush.
fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    let policy = if data[0] & 1 == 0 {
        RecencyPolicy::Lru
    } else {
        RecencyPolicy::Mru
    };
    // 0 must come back as capacity 1
    let capacity = (data[0] as usize >> 1) % 33;
    let mut cache: RecencyCache<u8, u32, RecencyPolicy> =
        RecencyCache::with_policy(capacity, policy);
    assert_eq!(cache.capacity(), capacity.max(1));

    let mut idx = 1;
    while idx + 1 < data.len() {
        let op = data[idx] % 5;
        let key = data[idx + 1];

        match op {
            0 => {
                let was_present = cache.contains(&key);
                let was_full = cache.is_at_capacity();
                let displaced = cache.put(key, u32::from(key));
                assert_eq!(displaced.is_some(), was_present || was_full);
                assert!(cache.contains(&key));
            }
            1 => {
                let present = cache.contains(&key);
                assert_eq!(cache.get(&key).is_some(), present);
                if present {
                    assert_eq!(cache.iter().next().map(|(k, _)| *k), Some(key));
                }
            }
            2 => {
                let _ = cache.contains(&key);
            }
            3 => {
                let _ = cache.peek(&key);
                let _ = cache.peek_victim();
            }
            4 => {
                cache.flush();
                assert!(cache.is_empty());
            }
            _ => unreachable!(),
        }

        assert!(cache.len() <= cache.capacity());
        assert!(cache.check_invariants().is_ok());

        idx += 2;
    }
});
