// ==============================================
// CROSS-POLICY INVARIANT TESTS (integration)
// ==============================================
//
// Behavior every recency policy must share, checked through the public
// API only.

use rucache::builder::CacheBuilder;
use rucache::cache::RecencyCache;
use rucache::policy::{EvictionPolicy, Lru, LruCache, Mru, MruCache, RecencyPolicy};
use rucache::traits::CoreCache;

fn run_mixed_workload<C: CoreCache<u32, u32>>(cache: &mut C) {
    for i in 0..500u32 {
        cache.put(i % 37, i);
        if i % 3 == 0 {
            cache.get(&(i % 11));
        }
        if i % 97 == 0 {
            cache.flush();
        }
        assert!(cache.len() <= cache.capacity());
    }
}

fn check_static<P: EvictionPolicy + Default>() {
    let mut cache: RecencyCache<u32, u32, P> = RecencyCache::new(8);
    run_mixed_workload(&mut cache);
    assert!(cache.check_invariants().is_ok());
}

// ==============================================
// Capacity-0 Behavior
// ==============================================
//
// Every policy coerces capacity 0 to 1 and keeps accepting inserts.

mod zero_capacity {
    use super::*;

    #[test]
    fn capacity_zero_is_coerced_for_every_policy() {
        for policy in [RecencyPolicy::Lru, RecencyPolicy::Mru] {
            let mut cache = RecencyCache::with_policy(0, policy);
            assert_eq!(
                cache.capacity(),
                1,
                "{policy} cache built with capacity 0 should hold one entry"
            );
            cache.put("key", 42);
            assert_eq!(cache.len(), 1);
            assert_eq!(cache.put("other", 7), Some(42));
            assert_eq!(cache.len(), 1);
        }
    }

    #[test]
    fn builder_coerces_capacity_zero() {
        let cache = CacheBuilder::new(0).build::<u8, u8>();
        assert_eq!(cache.capacity(), 1);
    }
}

// ==============================================
// Large Capacities
// ==============================================
//
// Capacity is a bound, not an allocation request: construction must succeed
// for any capacity and entries are stored as they arrive.

mod large_capacity {
    use super::*;

    #[test]
    fn usize_max_capacity_constructs_and_stores() {
        let mut cache: LruCache<u32, u32> = LruCache::new(usize::MAX);
        assert_eq!(cache.capacity(), usize::MAX);
        assert_eq!(cache.put(7, 70), None);
        assert_eq!(cache.get(&7), Some(&70));
        assert_eq!(cache.len(), 1);
        assert!(!cache.is_at_capacity());
    }

    #[test]
    fn large_capacity_for_every_constructor() {
        let capacity = 1usize << 40;

        let mru: MruCache<u64, u64> = MruCache::new(capacity);
        assert_eq!(mru.capacity(), capacity);

        let mut built = CacheBuilder::new(capacity)
            .policy(RecencyPolicy::Mru)
            .build::<u64, u64>();
        for i in 0..1_000 {
            built.put(i, i);
        }
        assert_eq!(built.len(), 1_000);
        assert_eq!(built.capacity(), capacity);
        assert!(built.check_invariants().is_ok());
    }
}

// ==============================================
// Shared Invariants
// ==============================================

mod shared {
    use super::*;

    #[test]
    fn lru_and_mru_keep_index_and_list_in_sync() {
        check_static::<Lru>();
        check_static::<Mru>();
        check_static::<RecencyPolicy>();
    }

    #[test]
    fn policies_differ_only_in_victim() {
        let mut lru = RecencyCache::with_policy(3, Lru);
        let mut mru = RecencyCache::with_policy(3, Mru);
        for k in ["a", "b", "c"] {
            lru.put(k, ());
            mru.put(k, ());
        }
        assert_eq!(lru.peek_victim().map(|(k, _)| *k), Some("a"));
        assert_eq!(mru.peek_victim().map(|(k, _)| *k), Some("c"));

        let lru_order: Vec<_> = lru.iter().map(|(k, _)| *k).collect();
        let mru_order: Vec<_> = mru.iter().map(|(k, _)| *k).collect();
        assert_eq!(lru_order, mru_order);
    }

    #[test]
    fn flush_keeps_policy_and_capacity() {
        let mut cache = RecencyCache::with_policy(4, RecencyPolicy::Mru);
        for i in 0..10 {
            cache.put(i, i);
        }
        cache.flush();
        assert!(cache.is_empty());
        assert_eq!(cache.capacity(), 4);
        assert_eq!(*cache.policy(), RecencyPolicy::Mru);

        cache.put(1, 1);
        cache.put(2, 2);
        assert_eq!(cache.peek_victim(), Some((&2, &2)));
    }
}
