//! Utility extensions for `ChainedHashMap` snapshots

use crate::chained_hashmap::ChainedHashMap;

/// Extension trait for maps that provides bulk snapshot methods
pub trait MapExtensions<V> {
    /// Returns every stored key as a Vec
    fn keys(&self) -> Vec<String>;

    /// Returns every stored value as a Vec
    fn values(&self) -> Vec<V>;

    /// Returns every stored key/value pair as a Vec
    fn entries(&self) -> Vec<(String, V)>;
}

impl<V: Clone> MapExtensions<V> for ChainedHashMap<V> {
    fn keys(&self) -> Vec<String> {
        self.iter().map(|(key, _)| key.to_string()).collect()
    }

    fn values(&self) -> Vec<V> {
        self.iter().map(|(_, value)| value.clone()).collect()
    }

    fn entries(&self) -> Vec<(String, V)> {
        self.iter().map(|(key, value)| (key.to_string(), value.clone())).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_and_values() {
        let mut map = ChainedHashMap::new();
        map.insert("bonito".to_string(), 1);
        map.insert("potato".to_string(), 2);
        map.insert("yam".to_string(), 3);

        let mut keys = map.keys();
        keys.sort(); // sort for a predictable comparison

        let mut values = map.values();
        values.sort_unstable();

        assert_eq!(keys, vec!["bonito".to_string(), "potato".to_string(), "yam".to_string()]);
        assert_eq!(values, vec![1, 2, 3]);
    }

    #[test]
    fn test_entries() {
        let mut map = ChainedHashMap::new();
        map.insert("bonito".to_string(), "burger".to_string());
        map.insert("potato".to_string(), "sandwich".to_string());
        map.insert("yam".to_string(), "ham".to_string());

        let mut entries = map.entries();
        entries.sort();

        assert_eq!(map.len(), 3);
        assert_eq!(
            entries,
            vec![
                ("bonito".to_string(), "burger".to_string()),
                ("potato".to_string(), "sandwich".to_string()),
                ("yam".to_string(), "ham".to_string()),
            ]
        );
    }

    #[test]
    fn test_entries_match_lookups() {
        let mut map = ChainedHashMap::new();
        map.insert("bonito".to_string(), 1);
        map.insert("potato".to_string(), 2);
        map.insert("yam".to_string(), 3);

        let entries = map.entries();
        assert_eq!(entries.len(), map.len());
        for (key, value) in &entries {
            assert_eq!(map.get(key), Some(value));
        }
    }

    #[test]
    fn test_empty_snapshots() {
        let map: ChainedHashMap<i32> = ChainedHashMap::new();
        assert!(map.keys().is_empty());
        assert!(map.values().is_empty());
        assert!(map.entries().is_empty());
    }

    #[test]
    fn test_snapshots_after_resize() {
        let mut map = ChainedHashMap::with_capacity(4);
        for value in 0..20 {
            map.insert(value.to_string(), value);
        }

        let mut keys = map.keys();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), 20);
        assert_eq!(map.values().len(), 20);
    }
}
