//! Query layer: keyed request cache between the UI and the HTTP client.
//!
//! This is the explicitly constructed counterpart of a process-wide
//! fetch/cache context: built once at startup, injected into the app, torn
//! down with [`QueryClient::shutdown`] in tests. It owns
//!
//! - an LRU cache of page responses keyed by `(limit, offset)`,
//! - a per-key error map (a failed key stays failed until invalidated),
//! - an in-flight set deduplicating concurrent requests for the same key,
//! - the background fetch thread and its result channel.
//!
//! Results are only ever stored under the key they were requested with, so
//! a response for a superseded key can never be applied to the page the
//! view currently shows - supersession is purely result-discarding, no
//! cancellation is sent to the network.

use std::collections::{HashMap, HashSet};
use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use crossbeam_channel::Receiver;
use log::warn;
use lru::LruCache;

use crate::api::{Order, PlayersClient, PlayersPage};
use crate::core::worker::{FetchDone, FetchJob, FetchWorker, SharedWaker};

/// Identity of one page request. Two renders asking for the same key share
/// one fetch and one cache slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageKey {
    pub limit: u32,
    pub offset: u32,
}

/// Lifecycle state of a single keyed request, as seen by the view.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryStatus<T> {
    Pending,
    Failed(String),
    Ready(T),
}

impl<T> QueryStatus<T> {
    pub fn as_ready(&self) -> Option<&T> {
        match self {
            QueryStatus::Ready(value) => Some(value),
            _ => None,
        }
    }
}

/// Configuration for the query layer.
///
/// `retries` is the number of extra silent attempts per request (default 1,
/// nothing is shown to the user for a retried request). `refetch_on_focus`
/// re-requests the current page when the window regains focus; it is off by
/// default and stays off in the shipped shell.
#[derive(Debug, Clone, Copy)]
pub struct QueryConfig {
    pub retries: u32,
    pub refetch_on_focus: bool,
    pub order: Option<Order>,
    pub page_cache_entries: usize,
    pub career_cache_entries: usize,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            retries: 1,
            refetch_on_focus: false,
            order: None,
            page_cache_entries: 64,
            career_cache_entries: 16,
        }
    }
}

/// Lookup counters for the status bar.
#[derive(Debug, Default)]
pub struct CacheStats {
    hits: AtomicU64,
    misses: AtomicU64,
}

impl CacheStats {
    pub fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }

    pub fn hit_rate(&self) -> f64 {
        let total = self.hits() + self.misses();
        if total == 0 {
            0.0
        } else {
            self.hits() as f64 / total as f64
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|e| e.into_inner())
}

pub struct QueryClient {
    worker: FetchWorker,
    results: Receiver<FetchDone>,
    waker: SharedWaker,
    pages: Mutex<LruCache<PageKey, PlayersPage>>,
    page_errors: Mutex<HashMap<PageKey, String>>,
    pages_in_flight: Mutex<HashSet<PageKey>>,
    careers: Mutex<LruCache<String, serde_json::Value>>,
    career_errors: Mutex<HashMap<String, String>>,
    careers_in_flight: Mutex<HashSet<String>>,
    stats: CacheStats,
    config: QueryConfig,
}

impl QueryClient {
    pub fn new(client: PlayersClient, config: QueryConfig) -> Self {
        let (results_tx, results_rx) = crossbeam_channel::unbounded();
        let waker: SharedWaker = Arc::new(Mutex::new(None));
        let worker = FetchWorker::spawn(
            client,
            config.retries,
            config.order,
            results_tx,
            Arc::clone(&waker),
        );

        let page_entries = NonZeroUsize::new(config.page_cache_entries.max(1)).unwrap();
        let career_entries = NonZeroUsize::new(config.career_cache_entries.max(1)).unwrap();

        Self {
            worker,
            results: results_rx,
            waker,
            pages: Mutex::new(LruCache::new(page_entries)),
            page_errors: Mutex::new(HashMap::new()),
            pages_in_flight: Mutex::new(HashSet::new()),
            careers: Mutex::new(LruCache::new(career_entries)),
            career_errors: Mutex::new(HashMap::new()),
            careers_in_flight: Mutex::new(HashSet::new()),
            stats: CacheStats::default(),
            config,
        }
    }

    pub fn config(&self) -> &QueryConfig {
        &self.config
    }

    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    /// Install the repaint hook called by the fetch thread whenever a
    /// result lands. Typically `ctx.request_repaint()`.
    pub fn set_waker(&self, wake: impl Fn() + Send + Sync + 'static) {
        *lock(&self.waker) = Some(Box::new(wake));
    }

    /// Status of the page at `key`, scheduling a fetch if nothing is cached
    /// and nothing is already on the wire for that key.
    pub fn page(&self, key: PageKey) -> QueryStatus<PlayersPage> {
        if let Some(page) = lock(&self.pages).get(&key) {
            self.stats.record_hit();
            return QueryStatus::Ready(page.clone());
        }
        self.stats.record_miss();
        if let Some(msg) = lock(&self.page_errors).get(&key) {
            return QueryStatus::Failed(msg.clone());
        }
        let mut in_flight = lock(&self.pages_in_flight);
        if !in_flight.contains(&key) && self.worker.submit(FetchJob::Page(key)) {
            in_flight.insert(key);
        }
        QueryStatus::Pending
    }

    /// Status of the career stats for `name`, scheduling a fetch like
    /// [`page`](Self::page).
    pub fn career(&self, name: &str) -> QueryStatus<serde_json::Value> {
        if let Some(value) = lock(&self.careers).get(name) {
            self.stats.record_hit();
            return QueryStatus::Ready(value.clone());
        }
        self.stats.record_miss();
        if let Some(msg) = lock(&self.career_errors).get(name) {
            return QueryStatus::Failed(msg.clone());
        }
        let mut in_flight = lock(&self.careers_in_flight);
        if !in_flight.contains(name)
            && self.worker.submit(FetchJob::Career(name.to_string()))
        {
            in_flight.insert(name.to_string());
        }
        QueryStatus::Pending
    }

    /// Drain completed fetches into the cache. Called once per frame (and
    /// by tests in a poll loop). Returns the number of results applied.
    pub fn pump(&self) -> usize {
        let mut drained = 0;
        while let Ok(done) = self.results.try_recv() {
            match done {
                FetchDone::Page { key, result } => {
                    lock(&self.pages_in_flight).remove(&key);
                    match result {
                        Ok(page) => {
                            lock(&self.page_errors).remove(&key);
                            lock(&self.pages).put(key, page);
                        }
                        Err(e) => {
                            warn!(
                                "page fetch failed (limit={}, offset={}): {e}",
                                key.limit, key.offset
                            );
                            lock(&self.page_errors).insert(key, e.to_string());
                        }
                    }
                }
                FetchDone::Career { name, result } => {
                    lock(&self.careers_in_flight).remove(&name);
                    match result {
                        Ok(value) => {
                            lock(&self.career_errors).remove(&name);
                            lock(&self.careers).put(name, value);
                        }
                        Err(e) => {
                            warn!("career fetch failed for {name}: {e}");
                            lock(&self.career_errors).insert(name, e.to_string());
                        }
                    }
                }
            }
            drained += 1;
        }
        drained
    }

    /// Drop the cached page (and any recorded error) for `key` so the next
    /// [`page`](Self::page) call refetches it.
    pub fn invalidate(&self, key: PageKey) {
        lock(&self.pages).pop(&key);
        lock(&self.page_errors).remove(&key);
    }

    /// Stop the fetch thread and wait for it to finish. After this every
    /// uncached lookup stays `Pending` forever; intended for tests and
    /// explicit disposal.
    pub fn shutdown(&mut self) {
        self.worker.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_shell_contract() {
        let cfg = QueryConfig::default();
        assert_eq!(cfg.retries, 1);
        assert!(!cfg.refetch_on_focus);
    }

    #[test]
    fn test_cache_stats_rate() {
        let stats = CacheStats::default();
        assert_eq!(stats.hit_rate(), 0.0);
        stats.record_hit();
        stats.record_hit();
        stats.record_hit();
        stats.record_miss();
        assert_eq!(stats.hits(), 3);
        assert_eq!(stats.misses(), 1);
        assert!((stats.hit_rate() - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn test_status_as_ready() {
        let ready: QueryStatus<u32> = QueryStatus::Ready(7);
        assert_eq!(ready.as_ready(), Some(&7));
        let pending: QueryStatus<u32> = QueryStatus::Pending;
        assert_eq!(pending.as_ready(), None);
    }
}
