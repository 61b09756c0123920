use crate::chained_hashmap::ChainedHashMap;

/// A set of strings layered over [`ChainedHashMap`].
///
/// Elements are the keys of an inner map whose values are the unit type,
/// so membership costs exactly one map probe and the set inherits the
/// map's hashing, chaining and growth behavior unchanged.
#[derive(Debug, Clone)]
pub struct ChainedHashSet {
    /// Backing map; `()` stands in for the absent value.
    map: ChainedHashMap<()>,
}

impl Default for ChainedHashSet {
    fn default() -> Self {
        Self::new()
    }
}

impl Extend<String> for ChainedHashSet {
    fn extend<T: IntoIterator<Item = String>>(&mut self, iter: T) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl FromIterator<String> for ChainedHashSet {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl ChainedHashSet {
    /// Creates an empty set with the backing map's default capacity.
    #[must_use]
    pub fn new() -> Self {
        Self { map: ChainedHashMap::new() }
    }

    /// Adds `value` to the set, returning whether it was newly added.
    pub fn insert(&mut self, value: String) -> bool {
        self.map.insert(value, ()).is_none()
    }

    /// Returns the stored element equal to `value`, if any.
    pub fn get(&self, value: &str) -> Option<&str> {
        self.map.get_key_value(value).map(|(stored, ())| stored)
    }

    /// Returns true if `value` is in the set.
    #[must_use]
    pub fn contains(&self, value: &str) -> bool {
        self.map.contains_key(value)
    }

    /// Removes `value`, returning the element the set was storing.
    pub fn take(&mut self, value: &str) -> Option<String> {
        self.map.remove_entry(value).map(|(stored, ())| stored)
    }

    /// Removes `value`, returning whether it was present.
    pub fn remove(&mut self, value: &str) -> bool {
        self.take(value).is_some()
    }

    /// Number of elements in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns true if the set holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.map.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_take() {
        let mut set = ChainedHashSet::new();
        assert!(!set.contains("kuma"));
        assert!(set.insert("kuma".to_string()));
        assert!(set.contains("kuma"));
        assert_eq!(set.take("kuma"), Some("kuma".to_string()));
        assert!(!set.contains("kuma"));
    }

    #[test]
    fn test_duplicate_insert() {
        let mut set = ChainedHashSet::new();
        assert!(set.insert("burger".to_string()));
        assert!(!set.insert("burger".to_string()));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_len_and_is_empty() {
        let mut set = ChainedHashSet::new();
        assert!(set.is_empty());
        for value in ["burger", "sandwich", "ham"] {
            set.insert(value.to_string());
        }
        assert_eq!(set.len(), 3);
        assert!(!set.is_empty());
    }

    #[test]
    fn test_get_identity() {
        let mut set = ChainedHashSet::new();
        set.insert("tuna".to_string());
        assert_eq!(set.get("tuna"), Some("tuna"));
        assert_eq!(set.get("kuma"), None);
    }

    #[test]
    fn test_take_missing() {
        let mut set = ChainedHashSet::new();
        assert_eq!(set.take("tuna"), None);
        assert!(!set.remove("tuna"));
    }

    #[test]
    fn test_remove() {
        let mut set = ChainedHashSet::new();
        set.insert("tuna".to_string());
        assert!(set.remove("tuna"));
        assert!(!set.remove("tuna"));
        assert!(set.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut set: ChainedHashSet =
            ["a", "b", "c"].into_iter().map(str::to_string).collect();
        assert_eq!(set.len(), 3);
        set.clear();
        assert!(set.is_empty());
        assert!(!set.contains("a"));
    }

    #[test]
    fn test_extend() {
        let mut set = ChainedHashSet::new();
        set.extend(["a".to_string(), "b".to_string(), "a".to_string()]);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_default() {
        let set = ChainedHashSet::default();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
    }
}
