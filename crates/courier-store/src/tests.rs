//! Unit tests for the expandable map.

#[cfg(test)]
mod basics {
    use crate::ExpandableMap;

    #[test]
    fn empty_map() {
        let m: ExpandableMap<String, i32> = ExpandableMap::new();
        assert_eq!(m.len(), 0);
        assert!(m.is_empty());
        assert_eq!(m.bucket_count(), 8);
        assert!(m.find(&"anything".to_owned()).is_none());
    }

    #[test]
    fn associate_then_find() {
        let mut m = ExpandableMap::new();
        m.associate("a".to_owned(), 1);
        m.associate("b".to_owned(), 2);
        assert_eq!(m.len(), 2);
        assert_eq!(m.find(&"a".to_owned()), Some(&1));
        assert_eq!(m.find(&"b".to_owned()), Some(&2));
        assert!(m.find(&"c".to_owned()).is_none());
    }

    #[test]
    fn overwrite_keeps_size() {
        let mut m = ExpandableMap::new();
        m.associate("k".to_owned(), 1);
        m.associate("k".to_owned(), 99);
        assert_eq!(m.len(), 1);
        assert_eq!(m.find(&"k".to_owned()), Some(&99));
    }

    #[test]
    fn find_mut_updates_in_place() {
        let mut m = ExpandableMap::new();
        m.associate(7u64, vec![1, 2]);
        m.find_mut(&7).unwrap().push(3);
        assert_eq!(m.find(&7), Some(&vec![1, 2, 3]));
        assert_eq!(m.len(), 1);
    }

    #[test]
    fn reset_restores_initial_state() {
        let mut m = ExpandableMap::new();
        for i in 0..20u64 {
            m.associate(i, i * 10);
        }
        assert!(m.bucket_count() > 8);
        m.reset();
        assert_eq!(m.len(), 0);
        assert_eq!(m.bucket_count(), 8);
        assert!(m.find(&3).is_none());
        // Usable again after reset.
        m.associate(3, 30);
        assert_eq!(m.find(&3), Some(&30));
    }
}

#[cfg(test)]
mod growth {
    use crate::ExpandableMap;

    #[test]
    fn fifth_insert_doubles_to_16() {
        let mut m = ExpandableMap::new();
        for i in 0..4u64 {
            m.associate(i, i);
        }
        // 4/8 = 0.5, not strictly greater than the max load factor.
        assert_eq!(m.bucket_count(), 8);

        m.associate(4, 4);
        // 5/8 = 0.625 > 0.5 → doubled.
        assert_eq!(m.bucket_count(), 16);
        assert_eq!(m.len(), 5);
        for i in 0..5u64 {
            assert_eq!(m.find(&i), Some(&i), "entry {i} lost in resize");
        }
    }

    #[test]
    fn ninth_insert_doubles_to_32() {
        let mut m = ExpandableMap::new();
        for i in 0..9u64 {
            m.associate(i, i + 100);
            assert_eq!(m.len() as u64, i + 1);
        }
        // 9/16 = 0.5625 > 0.5 → second doubling.
        assert_eq!(m.bucket_count(), 32);
        for i in 0..9u64 {
            assert_eq!(m.find(&i), Some(&(i + 100)));
        }
    }

    #[test]
    fn overwrite_never_triggers_growth() {
        let mut m = ExpandableMap::new();
        for i in 0..4u64 {
            m.associate(i, i);
        }
        assert_eq!(m.bucket_count(), 8);
        // Re-associating existing keys is not genuine insertion.
        for _ in 0..100 {
            m.associate(2, 42);
        }
        assert_eq!(m.bucket_count(), 8);
        assert_eq!(m.len(), 4);
    }

    #[test]
    fn large_volume_survives_many_resizes() {
        let mut m = ExpandableMap::new();
        for i in 0..10_000u64 {
            m.associate(i, i * 3);
        }
        assert_eq!(m.len(), 10_000);
        assert!(m.bucket_count() >= 10_000 * 2, "load factor bound violated");
        for i in (0..10_000u64).step_by(997) {
            assert_eq!(m.find(&i), Some(&(i * 3)));
        }
    }

    #[test]
    fn nonpositive_load_factor_falls_back_to_default() {
        let mut m: ExpandableMap<u64, u64> = ExpandableMap::with_load_factor(-1.0);
        for i in 0..5 {
            m.associate(i, i);
        }
        assert_eq!(m.bucket_count(), 16); // behaves like 0.5
    }

    #[test]
    fn relaxed_load_factor_delays_growth() {
        let mut m: ExpandableMap<u64, u64> = ExpandableMap::with_load_factor(2.0);
        for i in 0..16 {
            m.associate(i, i);
        }
        // 16/8 = 2.0 is not strictly greater than 2.0.
        assert_eq!(m.bucket_count(), 8);
        m.associate(16, 16);
        assert_eq!(m.bucket_count(), 16);
    }
}

#[cfg(test)]
mod hashing {
    use std::hash::{BuildHasherDefault, Hasher};

    use crate::ExpandableMap;

    /// Hasher that sends every key to the same bucket, forcing collisions.
    #[derive(Default)]
    struct Degenerate(u64);

    impl Hasher for Degenerate {
        fn finish(&self) -> u64 {
            0
        }
        fn write(&mut self, _bytes: &[u8]) {}
    }

    #[test]
    fn colliding_keys_stay_distinct() {
        let mut m: ExpandableMap<u64, &str, BuildHasherDefault<Degenerate>> =
            ExpandableMap::with_hasher(BuildHasherDefault::default());
        m.associate(1, "one");
        m.associate(2, "two");
        m.associate(3, "three");
        // All three share a chain; equality comparison keeps them apart.
        assert_eq!(m.find(&1), Some(&"one"));
        assert_eq!(m.find(&2), Some(&"two"));
        assert_eq!(m.find(&3), Some(&"three"));
        assert!(m.find(&4).is_none());
        assert_eq!(m.len(), 3);
    }

    #[test]
    fn collisions_survive_resize() {
        let mut m: ExpandableMap<u64, u64, BuildHasherDefault<Degenerate>> =
            ExpandableMap::with_hasher(BuildHasherDefault::default());
        for i in 0..50 {
            m.associate(i, i);
        }
        assert_eq!(m.len(), 50);
        for i in 0..50 {
            assert_eq!(m.find(&i), Some(&i));
        }
    }
}
