//! Memoization of catalog lookups keyed by lower-cased name.

use super::models::CatalogRecord;
use std::{
    collections::{HashMap, VecDeque},
    sync::{PoisonError, RwLock},
};

#[derive(Debug, Default)]
struct CacheEntries {
    records: HashMap<String, CatalogRecord>,
    /// Keys in insertion order, consulted only when a capacity is set
    order: VecDeque<String>,
}

/// Name → record cache shared by all lookups.
///
/// Without a capacity entries live for the process lifetime. With one, the
/// oldest-inserted entry is evicted once the cache is full.
#[derive(Debug)]
pub struct NameCache {
    entries: RwLock<CacheEntries>,
    capacity: Option<usize>,
}

impl NameCache {
    /// Create a cache, unbounded when `capacity` is `None`
    pub fn new(capacity: Option<usize>) -> Self {
        Self {
            entries: RwLock::new(CacheEntries::default()),
            capacity,
        }
    }

    /// Cached record for `key`
    pub fn get(&self, key: &str) -> Option<CatalogRecord> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries.records.get(key).cloned()
    }

    /// Store `record` under `key`, replacing any previous value
    pub fn insert(&self, key: String, record: CatalogRecord) {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);

        if entries.records.insert(key.clone(), record).is_some() {
            return;
        }

        let Some(capacity) = self.capacity else {
            return;
        };

        entries.order.push_back(key);
        while entries.order.len() > capacity {
            if let Some(oldest) = entries.order.pop_front() {
                entries.records.remove(&oldest);
                log::debug!("Evicted '{}' from catalog cache", oldest);
            }
        }
    }

    /// Number of cached names
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .records
            .len()
    }

    /// Whether nothing is cached
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Configured capacity, `None` when unbounded
    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u32) -> CatalogRecord {
        CatalogRecord {
            id,
            types: vec!["normal".to_string()],
            height: 1,
            weight: 1,
        }
    }

    #[test]
    fn test_get_after_insert() {
        let cache = NameCache::new(None);
        assert!(cache.is_empty());

        cache.insert("pikachu".to_string(), record(25));
        assert_eq!(cache.get("pikachu"), Some(record(25)));
        assert_eq!(cache.get("raichu"), None);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_unbounded_cache_keeps_everything() {
        let cache = NameCache::new(None);
        for id in 0..500 {
            cache.insert(format!("name-{id}"), record(id));
        }
        assert_eq!(cache.len(), 500);
        assert!(cache.get("name-0").is_some());
    }

    #[test]
    fn test_bounded_cache_evicts_oldest() {
        let cache = NameCache::new(Some(2));
        cache.insert("a".to_string(), record(1));
        cache.insert("b".to_string(), record(2));
        cache.insert("c".to_string(), record(3));

        assert_eq!(cache.len(), 2);
        assert!(cache.get("a").is_none());
        assert!(cache.get("b").is_some());
        assert!(cache.get("c").is_some());
    }

    #[test]
    fn test_reinsert_does_not_grow_order() {
        let cache = NameCache::new(Some(2));
        cache.insert("a".to_string(), record(1));
        cache.insert("a".to_string(), record(10));
        cache.insert("b".to_string(), record(2));

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get("a"), Some(record(10)));
    }
}
