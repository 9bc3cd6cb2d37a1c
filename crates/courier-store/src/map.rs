//! `ExpandableMap` — a chained hash map that doubles its bucket array under
//! load.
//!
//! # Why not `std::collections::HashMap`?
//!
//! The routing layer owes its callers a specific, observable growth contract:
//! 8 initial buckets, doubling whenever the entry/bucket ratio exceeds the
//! maximum load factor, with every entry rehashed into the new array by
//! ownership transfer.  Route reproducibility tests pin these transitions
//! (`bucket_count()` is part of the public surface), which std's opaque
//! growth policy cannot provide.
//!
//! # Storage model
//!
//! Each bucket is a `Vec<Entry<K, V>>` owned by the bucket array.  Entries
//! are value types owned exclusively by their chain; a resize drains the old
//! array with `into_iter` and moves each entry to its new chain, so no key or
//! value is ever cloned or reconstructed.
//!
//! # Concurrency
//!
//! Single-writer, single-thread use only — every mutating operation takes
//! `&mut self` and there is no interior mutability.

use std::hash::{BuildHasher, BuildHasherDefault, Hash};

use rustc_hash::FxHasher;

/// Default hashing capability: FxHash, fast on short keys like coordinates.
pub type DefaultHashBuilder = BuildHasherDefault<FxHasher>;

const INITIAL_BUCKETS: usize = 8;
const DEFAULT_MAX_LOAD_FACTOR: f64 = 0.5;

struct Entry<K, V> {
    key: K,
    value: V,
}

/// Hash map from `K` to `V` with chained buckets and doubling growth.
///
/// Keys are unique; iteration order is unspecified; there is no removal
/// operation.  The hashing capability is supplied at the boundary: `K` must
/// implement `Hash + Eq` (equal keys hash equally) and the `BuildHasher`
/// type parameter selects the hash function, [`DefaultHashBuilder`] unless
/// overridden via [`ExpandableMap::with_hasher`].
pub struct ExpandableMap<K, V, S = DefaultHashBuilder> {
    buckets: Vec<Vec<Entry<K, V>>>,
    entries: usize,
    max_load_factor: f64,
    hash_builder: S,
}

impl<K: Hash + Eq, V> ExpandableMap<K, V> {
    /// Empty map with 8 buckets and the default 0.5 maximum load factor.
    pub fn new() -> Self {
        Self::with_load_factor(DEFAULT_MAX_LOAD_FACTOR)
    }

    /// Empty map with a custom maximum load factor.  Non-positive values
    /// fall back to the 0.5 default.
    pub fn with_load_factor(max_load_factor: f64) -> Self {
        Self::with_load_factor_and_hasher(max_load_factor, DefaultHashBuilder::default())
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> ExpandableMap<K, V, S> {
    /// Empty map using `hash_builder` as its hashing capability.
    pub fn with_hasher(hash_builder: S) -> Self {
        Self::with_load_factor_and_hasher(DEFAULT_MAX_LOAD_FACTOR, hash_builder)
    }

    /// Empty map with both knobs explicit.
    pub fn with_load_factor_and_hasher(max_load_factor: f64, hash_builder: S) -> Self {
        let max_load_factor = if max_load_factor <= 0.0 {
            DEFAULT_MAX_LOAD_FACTOR
        } else {
            max_load_factor
        };
        Self {
            buckets: new_bucket_array(INITIAL_BUCKETS),
            entries: 0,
            max_load_factor,
            hash_builder,
        }
    }

    /// Number of distinct keys stored.
    pub fn len(&self) -> usize {
        self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries == 0
    }

    /// Current size of the bucket array.  Grows in powers of two from 8.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Restore the empty state: no entries, bucket count back to 8.  The
    /// load factor and hashing capability are retained.
    pub fn reset(&mut self) {
        self.buckets = new_bucket_array(INITIAL_BUCKETS);
        self.entries = 0;
    }

    /// Insert `value` under `key`, overwriting in place if the key is
    /// already present.  The growth check runs only on genuine insertion,
    /// never on overwrite.
    pub fn associate(&mut self, key: K, value: V) {
        let idx = self.bucket_index(&key);
        if let Some(entry) = self.buckets[idx].iter_mut().find(|e| e.key == key) {
            entry.value = value;
            return;
        }

        // Genuine insertion: the new entry counts toward the load factor
        // before the check, so the 5th key in 8 buckets (0.625 > 0.5)
        // triggers the doubling that it lands in.
        self.entries += 1;
        if self.entries as f64 / self.buckets.len() as f64 > self.max_load_factor {
            self.grow();
        }

        let idx = self.bucket_index(&key);
        self.buckets[idx].push(Entry { key, value });
    }

    /// Shared reference to the value stored under `key`, or `None` if the
    /// key is absent.  A missing key is a normal outcome, not an error.
    pub fn find(&self, key: &K) -> Option<&V> {
        let idx = self.bucket_index(key);
        // The hash only narrows the bucket; full key equality decides, so
        // colliding keys can never alias each other's values.
        self.buckets[idx]
            .iter()
            .find(|e| e.key == *key)
            .map(|e| &e.value)
    }

    /// Mutable reference to the value stored under `key` for in-place
    /// update.
    pub fn find_mut(&mut self, key: &K) -> Option<&mut V> {
        let idx = self.bucket_index(key);
        self.buckets[idx]
            .iter_mut()
            .find(|e| e.key == *key)
            .map(|e| &mut e.value)
    }

    fn bucket_index(&self, key: &K) -> usize {
        (self.hash_builder.hash_one(key) % self.buckets.len() as u64) as usize
    }

    /// Double the bucket array and rehash every entry into it.  O(n); each
    /// entry moves by value, keeping its key and value untouched.
    fn grow(&mut self) {
        let new_count = self.buckets.len() * 2;
        let old = std::mem::replace(&mut self.buckets, new_bucket_array(new_count));
        for chain in old {
            for entry in chain {
                let idx =
                    (self.hash_builder.hash_one(&entry.key) % new_count as u64) as usize;
                self.buckets[idx].push(entry);
            }
        }
    }
}

impl<K: Hash + Eq, V> Default for ExpandableMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

fn new_bucket_array<K, V>(count: usize) -> Vec<Vec<Entry<K, V>>> {
    let mut buckets = Vec::with_capacity(count);
    buckets.resize_with(count, Vec::new);
    buckets
}
