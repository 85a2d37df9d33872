use core::{fmt, hash::Hash};

use hashbrown::HashMap;
use log::debug;

use crate::error::BiMapError;

/// A map whose values are as unique as its keys,
/// so that it can be looked up in both directions.
///
/// ```
/// # use hyper_collections::{BiMap, BiMapError};
/// let mut codes = BiMap::new();
/// codes.put("one", 1).unwrap();
/// codes.put("two", 2).unwrap();
/// assert_eq!(codes.put("uno", 1), Err(BiMapError::DuplicateValue));
///
/// let names = codes.inverse();
/// assert_eq!(names.get(&2), Some(&"two"));
/// ```
#[derive(Clone)]
pub struct BiMap<K, V> {
    map: HashMap<K, V>,
}

impl<K, V> Default for BiMap<K, V> {
    fn default() -> Self {
        Self {
            map: HashMap::default(),
        }
    }
}

impl<K, V> BiMap<K, V> {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of key-value pairs.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether the map holds no pairs.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterate over the values in arbitrary order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.map.values()
    }

    /// Iterate over the key-value pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.map.iter()
    }
}

impl<K, V> BiMap<K, V>
where
    K: Hash + Eq,
    V: Hash + Eq,
{
    /// Bind `key` to `value`.
    ///
    /// # Errors
    ///
    /// - [`BiMapError::DuplicateKey`] if `key` is already bound;
    /// - [`BiMapError::DuplicateValue`] if `value` is bound to some key.
    ///
    /// The map is left unchanged on error.
    pub fn put(&mut self, key: K, value: V) -> Result<(), BiMapError> {
        if self.map.contains_key(&key) {
            return Err(BiMapError::DuplicateKey);
        }
        if self.contains_value(&value) {
            return Err(BiMapError::DuplicateValue);
        }
        self.map.insert(key, value);
        Ok(())
    }

    /// [`put`][Self::put] every pair in order.
    ///
    /// # Errors
    ///
    /// Stops at the first rejected pair, keeping the ones inserted before it.
    pub fn put_all<I>(&mut self, pairs: I) -> Result<(), BiMapError>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        pairs
            .into_iter()
            .try_for_each(|(key, value)| self.put(key, value))
    }

    /// Bind `key` to `value`, dropping any pair that uses either of them.
    ///
    /// Returns the value `key` was bound to before.
    pub fn force_put(&mut self, key: K, value: V) -> Option<V> {
        let previous = self.map.remove(&key);
        let before = self.map.len();
        self.map.retain(|_, v| v != &value);
        if self.map.len() != before {
            debug!("forced bimap insertion evicted the previous owner of the value");
        }
        self.map.insert(key, value);
        previous
    }

    /// The value bound to `key`.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.map.get(key)
    }

    /// The key bound to `value`.
    pub fn get_by_value(&self, value: &V) -> Option<&K> {
        self.map.iter().find_map(|(k, v)| (v == value).then_some(k))
    }

    /// Whether `key` is bound.
    pub fn contains_key(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }

    /// Whether some key is bound to `value`.
    pub fn contains_value(&self, value: &V) -> bool {
        self.map.values().any(|v| v == value)
    }

    /// Unbind `key`, returning its value.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.map.remove(key)
    }

    /// Swap the roles of keys and values.
    #[must_use]
    pub fn inverse(self) -> BiMap<V, K> {
        BiMap {
            map: self.map.into_iter().map(|(k, v)| (v, k)).collect(),
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for BiMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.map.iter()).finish()
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for BiMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (k, v)) in self.map.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{k}={v}")?;
        }
        f.write_str("}")
    }
}
