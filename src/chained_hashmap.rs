use std::mem;

use crate::hasher;

/// Bucket count used by [`ChainedHashMap::new`].
const DEFAULT_CAPACITY: usize = 16;

/// Upper bound on `len / capacity`; the bucket array doubles beyond it.
const MAX_LOAD_FACTOR: f64 = 0.75;

/// A key/value pair stored in a bucket chain.
#[derive(Debug, Clone)]
struct Entry<V> {
    /// The key that selected this entry's bucket.
    key: String,
    /// The value associated with the key.
    value: V,
}

/// One bucket: the owned chain of every entry whose key hashes to its slot.
type Bucket<V> = Vec<Entry<V>>;

/// A string-keyed hash table using separate chaining.
///
/// Keys are hashed with a polynomial rolling hash (multiplier 31) and
/// reduced modulo the capacity; colliding keys chain inside their shared
/// bucket. A count-changing insertion that pushes the load factor
/// (`len / capacity`) above 0.75 doubles the bucket array and
/// redistributes every entry under the new capacity. Capacity never
/// shrinks, and `clear` keeps it.
///
/// Note: this implementation is not thread-safe. Shared access needs an
/// external lock around the whole map.
#[derive(Debug, Clone)]
pub struct ChainedHashMap<V> {
    /// The bucket array; its length is the current capacity.
    buckets: Vec<Bucket<V>>,
    /// Number of distinct keys currently stored.
    size: usize,
}

impl<V> Default for ChainedHashMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Extend<(String, V)> for ChainedHashMap<V> {
    fn extend<T: IntoIterator<Item = (String, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<V> FromIterator<(String, V)> for ChainedHashMap<V> {
    fn from_iter<T: IntoIterator<Item = (String, V)>>(iter: T) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<V> ChainedHashMap<V> {
    /// Creates an empty map with the default capacity of 16 buckets.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty map with `capacity` buckets.
    ///
    /// The capacity is used exactly as given, never rounded to a power of
    /// two; zero is bumped to a single bucket so indexing stays defined.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let mut buckets = Vec::with_capacity(capacity);
        buckets.resize_with(capacity, Bucket::new);
        Self { buckets, size: 0 }
    }

    /// Returns a reference to the value stored for `key`.
    pub fn get(&self, key: &str) -> Option<&V> {
        self.bucket(key)?.iter().find(|entry| entry.key == key).map(|entry| &entry.value)
    }

    /// Returns the stored key/value pair for `key`.
    ///
    /// The key handed back is the instance owned by the map, which is what
    /// a set wrapper returns from its identity probes.
    pub fn get_key_value(&self, key: &str) -> Option<(&str, &V)> {
        self.bucket(key)?
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| (entry.key.as_str(), &entry.value))
    }

    /// Returns a mutable reference to the value stored for `key`.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        self.bucket_mut(key)?
            .iter_mut()
            .find(|entry| entry.key == key)
            .map(|entry| &mut entry.value)
    }

    /// Returns true if `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Inserts a key/value pair, returning the value it displaced.
    ///
    /// An existing entry keeps its key and has its value replaced in
    /// place; a new key joins its bucket's chain and is counted, after
    /// which the map grows if the load factor went above the threshold.
    pub fn insert(&mut self, key: String, value: V) -> Option<V> {
        // In range by the digest modulus; a miss here would mean the index
        // invariant broke, which debug builds catch in `hasher::bucket_index`.
        let Some(bucket) = self.bucket_mut(&key) else {
            return None;
        };
        if let Some(entry) = bucket.iter_mut().find(|entry| entry.key == key) {
            return Some(mem::replace(&mut entry.value, value));
        }
        bucket.push(Entry { key, value });
        self.size = self.size.saturating_add(1);
        self.grow_if_overloaded();
        None
    }

    /// Removes `key`, returning the stored key and value.
    pub fn remove_entry(&mut self, key: &str) -> Option<(String, V)> {
        let bucket = self.bucket_mut(key)?;
        let position = bucket.iter().position(|entry| entry.key == key)?;
        // Chain order is not part of the contract, so the cheap unlink works.
        let entry = bucket.swap_remove(position);
        self.size = self.size.saturating_sub(1);
        Some((entry.key, entry.value))
    }

    /// Removes `key`, returning the value that was stored for it.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        self.remove_entry(key).map(|(_, value)| value)
    }

    /// Number of distinct keys currently stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns true if no keys are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Removes every entry, leaving the capacity as is.
    pub fn clear(&mut self) {
        for bucket in &mut self.buckets {
            bucket.clear();
        }
        self.size = 0;
    }

    /// Current number of bucket slots.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Ratio of stored keys to bucket slots.
    #[must_use]
    #[allow(clippy::arithmetic_side_effects, clippy::cast_precision_loss)]
    pub fn load_factor(&self) -> f64 {
        self.size as f64 / self.buckets.len() as f64
    }

    /// Returns an iterator over the stored key/value pairs.
    ///
    /// The traversal order is unspecified and changes when the map grows.
    #[must_use]
    #[allow(clippy::iter_without_into_iter)]
    pub fn iter(&self) -> Iter<'_, V> {
        Iter { buckets: &self.buckets, bucket: 0, entry: 0 }
    }

    /// The bucket `key` hashes to under the current capacity.
    fn bucket(&self, key: &str) -> Option<&Bucket<V>> {
        self.buckets.get(hasher::bucket_index(key, self.buckets.len()))
    }

    /// Mutable access to the bucket `key` hashes to.
    fn bucket_mut(&mut self, key: &str) -> Option<&mut Bucket<V>> {
        let index = hasher::bucket_index(key, self.buckets.len());
        self.buckets.get_mut(index)
    }

    /// Doubles the bucket array until the load factor is back within bounds.
    ///
    /// One doubling suffices after a single insertion; the loop also
    /// settles a map constructed over an arbitrarily loaded state.
    fn grow_if_overloaded(&mut self) {
        while self.load_factor() > MAX_LOAD_FACTOR {
            self.grow();
        }
    }

    /// Doubles the capacity and redistributes every entry under it.
    fn grow(&mut self) {
        let new_capacity = self.buckets.len().saturating_mul(2);
        let mut buckets = Vec::with_capacity(new_capacity);
        buckets.resize_with(new_capacity, Bucket::new);
        for entry in mem::replace(&mut self.buckets, buckets).into_iter().flatten() {
            let index = hasher::bucket_index(&entry.key, new_capacity);
            // The fresh modulus keeps every recomputed index in range.
            if let Some(bucket) = self.buckets.get_mut(index) {
                bucket.push(entry);
            }
        }
        // Entries moved, none created or dropped: `size` is already right.
    }
}

/// Iterator over a map's key/value pairs, bucket by bucket.
#[derive(Debug, Clone)]
pub struct Iter<'a, V> {
    /// The bucket array being walked.
    buckets: &'a [Bucket<V>],
    /// Index of the bucket currently being traversed.
    bucket: usize,
    /// Position inside the current bucket's chain.
    entry: usize,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(bucket) = self.buckets.get(self.bucket) {
            if let Some(entry) = bucket.get(self.entry) {
                self.entry = self.entry.saturating_add(1);
                return Some((entry.key.as_str(), &entry.value));
            }
            self.bucket = self.bucket.saturating_add(1);
            self.entry = 0;
        }
        None
    }
}
