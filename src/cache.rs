//! Time-limited store of parsed results, keyed by request parameters.

use log::debug;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};

struct Entry<V> {
    value: V,
    stored_at: Instant,
}

impl<V> Entry<V> {
    fn is_expired(&self, ttl: Duration) -> bool {
        self.stored_at.elapsed() >= ttl
    }
}

pub struct ResultCache<V> {
    ttl: Duration,
    capacity: usize,
    entries: Mutex<HashMap<String, Entry<V>>>,
}

impl<V: Clone> ResultCache<V> {
    pub fn new(ttl: Duration, capacity: usize) -> Self {
        Self {
            ttl,
            capacity: capacity.max(1),
            entries: Mutex::new(HashMap::new()),
        }
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<String, Entry<V>>> {
        // entries are replaced whole, so a poisoned map is still consistent
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Cached value for `key`, unless it has expired.
    pub fn get(&self, key: &str) -> Option<V> {
        let mut entries = self.entries();
        match entries.get(key) {
            Some(entry) if !entry.is_expired(self.ttl) => {
                debug!("Cache hit: {}", key);
                Some(entry.value.clone())
            }
            Some(_) => {
                debug!("Cache entry expired: {}", key);
                entries.remove(key);
                None
            }
            None => {
                debug!("Cache miss: {}", key);
                None
            }
        }
    }

    /// Store `value`, evicting the oldest entry when the cache is full.
    pub fn insert(&self, key: impl Into<String>, value: V) {
        let key = key.into();
        let mut entries = self.entries();

        if !entries.contains_key(&key) && entries.len() >= self.capacity {
            let ttl = self.ttl;
            entries.retain(|_, entry| !entry.is_expired(ttl));

            if entries.len() >= self.capacity {
                let oldest = entries
                    .iter()
                    .min_by_key(|(_, entry)| entry.stored_at)
                    .map(|(k, _)| k.clone());
                if let Some(oldest) = oldest {
                    debug!("Cache full, evicting {}", oldest);
                    entries.remove(&oldest);
                }
            }
        }

        entries.insert(
            key,
            Entry {
                value,
                stored_at: Instant::now(),
            },
        );
    }

    pub fn purge_expired(&self) {
        let ttl = self.ttl;
        self.entries().retain(|_, entry| !entry.is_expired(ttl));
    }

    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.entries().clear();
    }
}

/// Cache key for a request: `kind` followed by its parameters sorted by name.
///
/// `cache_key("detail", &[("id", "42"), ("payload", "1")])` gives
/// `detail?id=42&payload=1`, whatever order the parameters arrive in.
pub fn cache_key(kind: &str, params: &[(&str, &str)]) -> String {
    let mut params = params.to_vec();
    params.sort();

    if params.is_empty() {
        return kind.to_string();
    }

    let query: Vec<String> = params.iter().map(|(k, v)| format!("{k}={v}")).collect();
    format!("{}?{}", kind, query.join("&"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    #[test]
    fn test_get_after_insert() {
        let cache = ResultCache::new(Duration::from_secs(60), 4);
        cache.insert("a", 1);
        assert_eq!(cache.get("a"), Some(1));
        assert_eq!(cache.get("b"), None);
    }

    #[test]
    fn test_expired_entries_are_absent() {
        let cache = ResultCache::new(Duration::from_millis(10), 4);
        cache.insert("a", "x".to_string());
        sleep(Duration::from_millis(30));
        assert_eq!(cache.get("a"), None);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_zero_ttl_never_hits() {
        let cache = ResultCache::new(Duration::ZERO, 4);
        cache.insert("a", 1);
        assert_eq!(cache.get("a"), None);
    }

    #[test]
    fn test_full_cache_evicts_oldest() {
        let cache = ResultCache::new(Duration::from_secs(60), 2);
        cache.insert("first", 1);
        sleep(Duration::from_millis(2));
        cache.insert("second", 2);
        sleep(Duration::from_millis(2));
        cache.insert("third", 3);

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get("first"), None);
        assert_eq!(cache.get("second"), Some(2));
        assert_eq!(cache.get("third"), Some(3));
    }

    #[test]
    fn test_overwrite_does_not_evict() {
        let cache = ResultCache::new(Duration::from_secs(60), 2);
        cache.insert("a", 1);
        cache.insert("b", 2);
        cache.insert("a", 10);
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get("a"), Some(10));
        assert_eq!(cache.get("b"), Some(2));
    }

    #[test]
    fn test_purge_and_clear() {
        let cache = ResultCache::new(Duration::from_millis(10), 4);
        cache.insert("a", 1);
        sleep(Duration::from_millis(30));
        cache.insert("b", 2);
        cache.purge_expired();
        assert_eq!(cache.len(), 1);
        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_cache_key_sorts_params() {
        assert_eq!(
            cache_key("detail", &[("payload", "1"), ("id", "42")]),
            "detail?id=42&payload=1"
        );
        assert_eq!(
            cache_key("detail", &[("id", "42"), ("payload", "1")]),
            cache_key("detail", &[("payload", "1"), ("id", "42")])
        );
        assert_eq!(cache_key("listing", &[]), "listing");
    }
}
