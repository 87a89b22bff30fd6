//! Fx hash map aliases used by the catalog indexes.
//!
//! Keys are short strings (country names) and small integer handles, and the
//! data is local to one process, so the Fx hash from `rustc-hash` is used
//! instead of the DoS-resistant std hasher.
//!
//! ```
//! use rcat_core::{FxHashMap, fx_hash_map};
//!
//! let mut countries: FxHashMap<String, usize> = fx_hash_map();
//! countries.insert("Georgian".to_owned(), 2);
//! assert_eq!(countries.get("Georgian"), Some(&2));
//! ```

/// A [`HashMap`](std::collections::HashMap) using the Fx hash algorithm.
pub type FxHashMap<K, V> = rustc_hash::FxHashMap<K, V>;

/// The hasher used by [`FxHashMap`].
pub type FxBuildHasher = rustc_hash::FxBuildHasher;

/// Creates a new empty [`FxHashMap`].
#[inline]
#[must_use]
pub fn fx_hash_map<K, V>() -> FxHashMap<K, V> {
    FxHashMap::default()
}

/// Creates a new [`FxHashMap`] that can hold `capacity` entries without
/// reallocating.
#[inline]
#[must_use]
pub fn fx_hash_map_with_capacity<K, V>(capacity: usize) -> FxHashMap<K, V> {
    FxHashMap::with_capacity_and_hasher(capacity, FxBuildHasher::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fx_hash_map_with_capacity() {
        let map: FxHashMap<String, u64> = fx_hash_map_with_capacity(16);
        assert!(map.capacity() >= 16);
        assert!(map.is_empty());
    }
}
