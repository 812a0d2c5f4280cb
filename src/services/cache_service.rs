use chrono::{DateTime, Duration, Utc};
use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::config::CacheSettings;
use crate::services::ScoredPage;

#[derive(Debug, Clone)]
struct CacheEntry {
    results: Vec<ScoredPage>,
    // None never expires
    expires_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Default)]
pub struct CacheStats {
    pub total_requests: AtomicU64,
    pub hits: AtomicU64,
}

/// In-memory LRU of ranked results, keyed by a hash of the search term.
#[derive(Clone)]
pub struct SearchCache {
    ttl: Option<Duration>,
    entries: Option<Arc<Mutex<LruCache<String, CacheEntry>>>>,
    stats: Arc<CacheStats>,
}

impl SearchCache {
    pub fn new(settings: &CacheSettings) -> Self {
        // capacity 0 turns the cache off
        let entries = NonZeroUsize::new(settings.entries)
            .map(|capacity| Arc::new(Mutex::new(LruCache::new(capacity))));

        Self {
            ttl: i64::try_from(settings.ttl_seconds)
                .ok()
                .and_then(Duration::try_seconds),
            entries,
            stats: Arc::new(CacheStats::default()),
        }
    }

    pub fn disabled() -> Self {
        Self::new(&CacheSettings {
            entries: 0,
            ttl_seconds: 0,
        })
    }

    pub fn is_enabled(&self) -> bool {
        self.entries.is_some()
    }

    pub fn stats(&self) -> Arc<CacheStats> {
        self.stats.clone()
    }

    pub async fn get(&self, key: &str) -> Option<Vec<ScoredPage>> {
        let entries = self.entries.as_ref()?;
        self.stats.total_requests.fetch_add(1, Ordering::Relaxed);

        let mut cache = entries.lock().await;
        if let Some(entry) = cache.get(key) {
            if entry.expires_at.map_or(true, |expires_at| expires_at > Utc::now()) {
                self.stats.hits.fetch_add(1, Ordering::Relaxed);
                return Some(entry.results.clone());
            }
        }
        cache.pop(key);
        None
    }

    pub async fn set(&self, key: &str, results: &[ScoredPage]) {
        let Some(entries) = &self.entries else {
            return;
        };
        let mut cache = entries.lock().await;
        cache.put(
            key.to_string(),
            CacheEntry {
                results: results.to_vec(),
                expires_at: self
                    .ttl
                    .and_then(|ttl| Utc::now().checked_add_signed(ttl)),
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(url: &str) -> ScoredPage {
        ScoredPage {
            id: 0,
            url: url.to_string(),
            title: "title".to_string(),
            score: 1.0,
        }
    }

    #[actix_rt::test]
    async fn stores_and_returns_results() {
        let cache = SearchCache::new(&CacheSettings {
            entries: 2,
            ttl_seconds: 60,
        });
        assert!(cache.get("apple").await.is_none());

        cache.set("apple", &[hit("http://a.test")]).await;
        let cached = cache.get("apple").await.unwrap();
        assert_eq!(cached[0].url, "http://a.test");

        let stats = cache.stats();
        assert_eq!(stats.total_requests.load(Ordering::Relaxed), 2);
        assert_eq!(stats.hits.load(Ordering::Relaxed), 1);
    }

    #[actix_rt::test]
    async fn evicts_least_recently_used() {
        let cache = SearchCache::new(&CacheSettings {
            entries: 1,
            ttl_seconds: 60,
        });
        cache.set("first", &[hit("http://1.test")]).await;
        cache.set("second", &[hit("http://2.test")]).await;

        assert!(cache.get("first").await.is_none());
        assert!(cache.get("second").await.is_some());
    }

    #[actix_rt::test]
    async fn expired_entries_are_dropped() {
        let cache = SearchCache::new(&CacheSettings {
            entries: 4,
            ttl_seconds: 0,
        });
        cache.set("apple", &[hit("http://a.test")]).await;
        assert!(cache.get("apple").await.is_none());
    }

    #[actix_rt::test]
    async fn out_of_range_ttl_keeps_entries() {
        for ttl_seconds in [100_000_000_000_000, 10_000_000_000_000_000, u64::MAX] {
            let cache = SearchCache::new(&CacheSettings {
                entries: 4,
                ttl_seconds,
            });
            cache.set("apple", &[hit("http://a.test")]).await;
            assert!(cache.get("apple").await.is_some(), "{}", ttl_seconds);
        }
    }

    #[actix_rt::test]
    async fn disabled_cache_stores_nothing() {
        let cache = SearchCache::disabled();
        assert!(!cache.is_enabled());
        cache.set("apple", &[hit("http://a.test")]).await;
        assert!(cache.get("apple").await.is_none());
        assert_eq!(cache.stats().total_requests.load(Ordering::Relaxed), 0);
    }
}
