//! Module implementing a thread-safe resource cache.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use antidote::RwLock;


/// A thread-safe cache of keys & cached values.
/// Actual values stored in the cache are `Arc<V>`'s.
///
/// Any number of readers may consult the cache simultaneously;
/// a write (on a cache miss) briefly excludes them.
/// Entries are only ever removed through an explicit `clear` or `remove`.
///
/// The cache also counts various statistics, like cache hits or misses.
pub struct ThreadSafeCache<K: Eq + Hash, V> {
    inner: RwLock<HashMap<K, Arc<V>>>,
    // Cache statistics.
    hits: AtomicUsize,
    misses: AtomicUsize,
}

impl<K: Eq + Hash, V> ThreadSafeCache<K, V> {
    /// Create an empty cache.
    pub fn new() -> Self {
        ThreadSafeCache{
            inner: RwLock::new(HashMap::new()),
            hits: AtomicUsize::new(0),
            misses: AtomicUsize::new(0),
        }
    }
}

// Map interface wrappers.
impl<K: Eq + Hash, V> ThreadSafeCache<K, V> {
    /// Check if the cache contains given key.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
        where K: Borrow<Q>, Q: ?Sized + Eq + Hash
    {
        self.inner.read().contains_key(key)
    }

    /// Get the element corresponding to given key if it's present in the cache.
    pub fn get<Q>(&self, key: &Q) -> Option<Arc<V>>
        where K: Borrow<Q>, Q: ?Sized + Eq + Hash
    {
        match self.inner.read().get(key) {
            Some(v) => { self.hit(); Some(v.clone()) }
            None => { self.miss(); None }
        }
    }

    /// Put an item into cache under given key.
    ///
    /// Returns the (`Arc`'d) value that is now under the key.
    /// If two callers race on the same key, the entry of the later one wins.
    pub fn put(&self, k: K, v: V) -> Arc<V> {
        let value = Arc::new(v);
        self.inner.write().insert(k, value.clone());
        value
    }

    /// Removes a key from the cache, if present, and returns its value.
    pub fn remove<Q>(&self, key: &Q) -> Option<Arc<V>>
        where K: Borrow<Q>, Q: ?Sized + Eq + Hash
    {
        self.inner.write().remove(key)
    }

    /// Current size of the cache.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Remove all elements from the cache.
    ///
    /// Subsequent lookups will be cache misses.
    pub fn clear(&self) {
        self.inner.write().clear()
    }
}

// Incrementing the statistics' counters.
impl<K: Eq + Hash, V> ThreadSafeCache<K, V> {
    /// Increment the number of cache hits. Returns the new total.
    fn hit(&self) -> usize {
        let inc = 1;
        self.hits.fetch_add(inc, Ordering::Relaxed) + inc
    }

    /// Increment the number of cache misses. Returns the new total.
    fn miss(&self) -> usize {
        let inc = 1;
        self.misses.fetch_add(inc, Ordering::Relaxed) + inc
    }
}

// Getting counter values.
impl<K: Eq + Hash, V> ThreadSafeCache<K, V> {
    /// Returns the number of cache hits.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::Relaxed)
    }

    /// Returns the number of cache misses.
    pub fn misses(&self) -> usize {
        self.misses.load(Ordering::Relaxed)
    }
}

impl<K: Eq + Hash, V> fmt::Debug for ThreadSafeCache<K, V> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        let mut ds = fmt.debug_struct("ThreadSafeCache");
        if let Ok(inner) = self.inner.try_read() {
            ds.field("len", &inner.len());
        }
        ds.field("hits", &self.hits());
        ds.field("misses", &self.misses());
        ds.finish()
    }
}


#[cfg(test)]
mod tests {
    use super::ThreadSafeCache;

    #[test]
    fn get_after_put() {
        let cache: ThreadSafeCache<String, u32> = ThreadSafeCache::new();
        assert!(cache.get("answer").is_none());

        cache.put("answer".into(), 42);
        assert_eq!(Some(42), cache.get("answer").map(|v| *v));
        assert_eq!(1, cache.len());
    }

    #[test]
    fn clear_forces_misses() {
        let cache: ThreadSafeCache<String, u32> = ThreadSafeCache::new();
        cache.put("a".into(), 1);
        cache.put("b".into(), 2);
        assert_eq!(2, cache.len());

        cache.clear();
        assert!(cache.is_empty());
        assert!(cache.get("a").is_none());
    }

    #[test]
    fn counts_hits_and_misses() {
        let cache: ThreadSafeCache<String, u32> = ThreadSafeCache::new();
        cache.get("nope");
        cache.put("yep".into(), 1);
        cache.get("yep");
        cache.get("yep");

        assert_eq!(2, cache.hits());
        assert_eq!(1, cache.misses());
    }

    #[test]
    fn last_writer_wins() {
        let cache: ThreadSafeCache<String, u32> = ThreadSafeCache::new();
        cache.put("key".into(), 1);
        let newer = cache.put("key".into(), 2);
        assert_eq!(2, *newer);
        assert_eq!(Some(2), cache.get("key").map(|v| *v));
    }
}
