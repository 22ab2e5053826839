//! The hash-map used by the topology and contour caches.

pub use hashbrown::hash_map::Entry;

/// Hashmap using [`hashbrown::HashMap`].
///
/// Iteration order is unspecified: callers needing a deterministic order must
/// not rely on iterating this map.
pub type HashMap<K, V> = hashbrown::hash_map::HashMap<K, V, hashbrown::DefaultHashBuilder>;
