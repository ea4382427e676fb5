//! Bounded-concurrency, cached access to the catalog.

use super::{
    cache::NameCache,
    config::UpstreamConfig,
    errors::{UpstreamError, UpstreamResult},
    fetcher::{CatalogFetcher, PokeApiFetcher},
    limiter::ConcurrencyLimiter,
    models::CatalogRecord,
    timeouts::{TimeoutError, with_timeout},
};
use serde::Serialize;
use std::{
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
    time::Duration,
};

/// Cache key for a candidate name: trimmed and lower-cased
pub fn lookup_key(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Point-in-time view of the client's counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpstreamStats {
    /// Calls actually sent to the catalog
    pub outbound_calls: u64,
    /// Lookups answered from the cache
    pub cache_hits: u64,
    /// Names currently cached
    pub cached_names: usize,
    /// Calls currently holding a limiter slot
    pub in_flight: usize,
    /// Limiter capacity
    pub max_concurrent: usize,
}

/// Resolves candidate names against the catalog.
///
/// A cache hit returns immediately without touching the limiter. A miss waits
/// for a limiter slot, checks the cache once more, then calls the catalog
/// under a timeout. Only successful lookups are cached.
pub struct UpstreamClient {
    fetcher: Arc<dyn CatalogFetcher>,
    limiter: ConcurrencyLimiter,
    cache: NameCache,
    request_timeout: Duration,
    outbound_calls: AtomicU64,
    cache_hits: AtomicU64,
}

impl UpstreamClient {
    /// Create a client around any fetcher
    pub fn new(fetcher: Arc<dyn CatalogFetcher>, config: &UpstreamConfig) -> Self {
        Self {
            fetcher,
            limiter: ConcurrencyLimiter::new(config.max_concurrent),
            cache: NameCache::new(config.cache_capacity),
            request_timeout: config.request_timeout,
            outbound_calls: AtomicU64::new(0),
            cache_hits: AtomicU64::new(0),
        }
    }

    /// Create a client talking HTTP to `config.base_url`
    ///
    /// # Errors
    ///
    /// Fails if the base URL is invalid or the HTTP client cannot be built.
    pub fn from_config(config: &UpstreamConfig) -> anyhow::Result<Self> {
        let fetcher = PokeApiFetcher::new(&config.base_url, config.request_timeout)?;
        Ok(Self::new(Arc::new(fetcher), config))
    }

    /// Resolve `name` to its catalog record
    ///
    /// # Errors
    ///
    /// * [`UpstreamError::InvalidName`] - the catalog has no such name
    /// * [`UpstreamError::Unavailable`] - transport failure, timeout,
    ///   unexpected status or malformed payload
    pub async fn resolve(&self, name: &str) -> UpstreamResult<CatalogRecord> {
        let key = lookup_key(name);
        if key.is_empty() {
            return Err(UpstreamError::InvalidName(key));
        }

        if let Some(record) = self.cached(&key) {
            return Ok(record);
        }

        let _slot = self.limiter.acquire().await?;

        // Another caller may have filled the entry while this one waited
        if let Some(record) = self.cached(&key) {
            return Ok(record);
        }

        self.outbound_calls.fetch_add(1, Ordering::Relaxed);
        log::debug!("Catalog lookup for '{}'", key);

        match with_timeout(self.request_timeout, self.fetcher.fetch(&key)).await {
            Ok(record) => {
                self.cache.insert(key, record.clone());
                Ok(record)
            }
            Err(TimeoutError::Timeout(after)) => {
                log::warn!("Catalog lookup for '{}' timed out after {:?}", key, after);
                Err(UpstreamError::Unavailable(format!(
                    "request timed out after {after:?}"
                )))
            }
            Err(TimeoutError::Fetch(err)) => {
                let err = UpstreamError::from(err);
                if err.is_transient() {
                    log::warn!("Catalog lookup for '{}' failed: {}", key, err);
                } else {
                    log::debug!("Catalog rejected '{}'", key);
                }
                Err(err)
            }
        }
    }

    fn cached(&self, key: &str) -> Option<CatalogRecord> {
        let record = self.cache.get(key)?;
        self.cache_hits.fetch_add(1, Ordering::Relaxed);
        Some(record)
    }

    /// Current counters
    pub fn stats(&self) -> UpstreamStats {
        UpstreamStats {
            outbound_calls: self.outbound_calls.load(Ordering::Relaxed),
            cache_hits: self.cache_hits.load(Ordering::Relaxed),
            cached_names: self.cache.len(),
            in_flight: self.limiter.in_flight(),
            max_concurrent: self.limiter.capacity(),
        }
    }
}
