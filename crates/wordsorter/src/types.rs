//! # Common Types

/// Type Alias for hash maps in this crate.
pub type WsHashMap<K, V> = ahash::AHashMap<K, V>;

/// Type Alias for hash sets in this crate.
pub type WsHashSet<V> = ahash::AHashSet<V>;

/// Create a new empty hash map.
pub fn hash_map_new<K, V>() -> WsHashMap<K, V> {
    WsHashMap::new()
}

/// Create a new hash map with the given capacity.
pub fn hash_map_with_capacity<K, V>(capacity: usize) -> WsHashMap<K, V> {
    WsHashMap::with_capacity(capacity)
}

/// Create a new empty hash set.
pub fn hash_set_new<V>() -> WsHashSet<V> {
    WsHashSet::new()
}
