//! # Chained Hash Map
//!
//! A Rust implementation of a string-keyed hash table with separate chaining.
//!
//! This crate provides two containers:
//!
//! - `ChainedHashMap`: a map from `String` keys to arbitrary values
//! - `ChainedHashSet`: a set of `String` elements derived from the map
//!
//! Keys are placed by a polynomial rolling hash (multiplier 31) reduced modulo
//! the bucket count. Colliding keys chain inside their shared bucket, and the
//! bucket array doubles whenever the load factor rises above 0.75, so chains
//! stay short as entries accumulate.
//!
//! ## Map Usage
//!
//! ```rust
//! use chainmap::ChainedHashMap;
//!
//! // Create a new hash map
//! let mut map = ChainedHashMap::new();
//!
//! // Insert values
//! map.insert("apple".to_string(), 1);
//! map.insert("banana".to_string(), 2);
//!
//! // Retrieve values
//! assert_eq!(map.get("apple"), Some(&1));
//!
//! // Update values
//! map.insert("apple".to_string(), 10);
//! assert_eq!(map.get("apple"), Some(&10));
//!
//! // Remove values
//! map.remove("apple");
//! assert_eq!(map.get("apple"), None);
//! ```
//!
//! ## Set Usage
//!
//! ```rust
//! use chainmap::ChainedHashSet;
//!
//! let mut set = ChainedHashSet::new();
//!
//! assert!(set.insert("kuma".to_string()));
//! assert!(set.contains("kuma"));
//!
//! // A repeated insert reports that nothing was added
//! assert!(!set.insert("kuma".to_string()));
//!
//! // Removal hands back the element the set was storing
//! assert_eq!(set.take("kuma"), Some("kuma".to_string()));
//! assert!(!set.contains("kuma"));
//! ```
//!
//! Neither container is thread-safe. Share one across threads only behind an
//! external lock such as `std::sync::Mutex`.

/// Module implementing the separate-chaining hash map
mod chained_hashmap;
/// Module implementing the string set layered over the map
mod chained_hashset;
/// Module implementing the polynomial rolling hash for string keys
mod hasher;
/// Utility functions and traits for the hash map
mod utils;

pub use chained_hashmap::{ChainedHashMap, Iter};
pub use chained_hashset::ChainedHashSet;
pub use utils::MapExtensions;
