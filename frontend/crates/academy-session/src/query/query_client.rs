use crate::query::{
    error::{QueryError, Result as QueryResult},
    query_key::{QueryKey, QueryName},
    query_options::QueryOptions,
    query_status::QueryStatus,
};

use academy_client::{ClientError, with_retry};

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use log::debug;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::sync::RwLock;

/// Shared query cache. Clones share the same entries.
#[derive(Clone, Default)]
pub struct QueryClient {
    inner: Arc<RwLock<QueryInner>>,
}

#[derive(Default)]
struct QueryInner {
    entries: HashMap<QueryKey, QueryEntry>,
    /// Bumped by `clear`; fetches started under an older epoch are discarded
    epoch: u64,
}

struct QueryEntry {
    status: QueryStatus,
    data: Option<Value>,
    stale: bool,
    updated_at: Option<Instant>,
    fetch_count: u32,
    error: Option<String>,
    /// Bumped by `invalidate`; a fetch that spans a bump lands stale
    generation: u64,
}

impl QueryEntry {
    fn new() -> Self {
        Self {
            status: QueryStatus::Idle,
            data: None,
            stale: false,
            updated_at: None,
            fetch_count: 0,
            error: None,
            generation: 0,
        }
    }

    fn is_fresh(&self, stale_after: Option<Duration>) -> bool {
        self.status == QueryStatus::Success
            && !self.stale
            && stale_after.is_none_or(|max| self.updated_at.is_some_and(|t| t.elapsed() < max))
    }
}

impl QueryClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current cache epoch. Pass it to [`fetch_in_epoch`](Self::fetch_in_epoch)
    /// to tie a fetch to the session that was current before it started.
    pub async fn epoch(&self) -> u64 {
        self.inner.read().await.epoch
    }

    /// Return the cached value for `key` if fresh, otherwise run `fetcher`
    /// (with the retry policy from `options`) and cache its result.
    pub async fn fetch<T, F, Fut>(
        &self,
        key: &QueryKey,
        options: &QueryOptions,
        fetcher: F,
    ) -> QueryResult<T>
    where
        T: Serialize + DeserializeOwned,
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, ClientError>>,
    {
        let epoch = self.epoch().await;
        self.fetch_in_epoch(key, options, epoch, fetcher).await
    }

    /// Like [`fetch`](Self::fetch), but discarded when the cache has been
    /// cleared since `epoch` was read, even before the fetcher runs.
    pub async fn fetch_in_epoch<T, F, Fut>(
        &self,
        key: &QueryKey,
        options: &QueryOptions,
        epoch: u64,
        fetcher: F,
    ) -> QueryResult<T>
    where
        T: Serialize + DeserializeOwned,
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, ClientError>>,
    {
        let label = key.to_string();

        let cached = {
            let inner = self.inner.read().await;
            if inner.epoch != epoch {
                debug!("Discarding {label}: cache cleared before fetch");
                return Err(QueryError::discarded(label));
            }
            inner
                .entries
                .get(key)
                .filter(|entry| entry.is_fresh(options.stale_after))
                .and_then(|entry| entry.data.clone())
        };
        if let Some(data) = cached {
            debug!("Cache hit: {label}");
            return serde_json::from_value(data).map_err(|e| QueryError::decode(label, e));
        }

        let generation = {
            let mut inner = self.inner.write().await;
            if inner.epoch != epoch {
                debug!("Discarding {label}: cache cleared before fetch");
                return Err(QueryError::discarded(label));
            }
            let entry = inner
                .entries
                .entry(key.clone())
                .or_insert_with(QueryEntry::new);
            entry.status = QueryStatus::Fetching;
            entry.fetch_count += 1;
            entry.generation
        };

        debug!("Fetching {label}");
        let result = with_retry(&options.retry, &label, fetcher).await;

        let mut inner = self.inner.write().await;
        if inner.epoch != epoch {
            debug!("Discarding {label}: cache cleared while in flight");
            return Err(QueryError::discarded(label));
        }

        let entry = inner
            .entries
            .entry(key.clone())
            .or_insert_with(QueryEntry::new);

        match result {
            Ok(value) => match serde_json::to_value(&value) {
                Ok(data) => {
                    entry.data = Some(data);
                    entry.status = QueryStatus::Success;
                    entry.stale = entry.generation != generation;
                    if entry.stale {
                        debug!("{label} invalidated while in flight, kept stale");
                    }
                    entry.updated_at = Some(Instant::now());
                    entry.error = None;
                    Ok(value)
                }
                Err(e) => {
                    entry.status = QueryStatus::Error;
                    entry.error = Some(e.to_string());
                    Err(QueryError::decode(label, e))
                }
            },
            Err(e) => {
                entry.status = QueryStatus::Error;
                entry.error = Some(e.user_message());
                Err(QueryError::fetch(label, e))
            }
        }
    }

    /// Cached value regardless of freshness
    pub async fn cached<T: DeserializeOwned>(&self, key: &QueryKey) -> Option<T> {
        let inner = self.inner.read().await;
        let data = inner.entries.get(key)?.data.clone()?;
        serde_json::from_value(data).ok()
    }

    pub async fn status(&self, key: &QueryKey) -> QueryStatus {
        let inner = self.inner.read().await;
        inner
            .entries
            .get(key)
            .map(|entry| entry.status)
            .unwrap_or(QueryStatus::Idle)
    }

    /// Number of fetcher runs for `key` since the last clear
    pub async fn fetch_count(&self, key: &QueryKey) -> u32 {
        let inner = self.inner.read().await;
        inner.entries.get(key).map(|e| e.fetch_count).unwrap_or(0)
    }

    pub async fn last_error(&self, key: &QueryKey) -> Option<String> {
        let inner = self.inner.read().await;
        inner.entries.get(key).and_then(|e| e.error.clone())
    }

    /// Mark every entry named `name` stale, across all scopes and arguments.
    /// Returns the number of entries affected.
    pub async fn invalidate(&self, name: QueryName) -> usize {
        let mut inner = self.inner.write().await;
        let mut count = 0;
        for (key, entry) in inner.entries.iter_mut() {
            if key.name == name {
                entry.stale = true;
                entry.generation = entry.generation.wrapping_add(1);
                count += 1;
            }
        }
        debug!("Invalidated {name} ({count} entries)");
        count
    }

    /// Drop all entries and discard results of in-flight fetches
    pub async fn clear(&self) {
        let mut inner = self.inner.write().await;
        let dropped = inner.entries.len();
        inner.entries.clear();
        inner.epoch = inner.epoch.wrapping_add(1);
        debug!("Query cache cleared ({dropped} entries)");
    }

    pub async fn entry_count(&self) -> usize {
        self.inner.read().await.entries.len()
    }
}
