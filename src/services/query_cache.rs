use std::collections::HashMap;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;

/// Query results keyed by query text, each stamped with when it was computed.
///
/// An entry older than the TTL is treated as missing on read. Every
/// invalidation bumps a generation counter; results computed under an older
/// generation are not stored.
pub struct QueryCache<V> {
    ttl: Duration,
    inner: RwLock<Entries<V>>,
}

struct Entries<V> {
    generation: u64,
    values: HashMap<String, (V, Instant)>,
}

impl<V: Clone> QueryCache<V> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            inner: RwLock::new(Entries {
                generation: 0,
                values: HashMap::new(),
            }),
        }
    }

    /// Fresh cached value for `query`, if any
    pub async fn get(&self, query: &str) -> Option<V> {
        let inner = self.inner.read().await;
        let (value, computed_at) = inner.values.get(query)?;

        if computed_at.elapsed() < self.ttl {
            Some(value.clone())
        } else {
            None
        }
    }

    /// Generation to pass to [`Self::insert`]; read it before running the query.
    pub async fn generation(&self) -> u64 {
        self.inner.read().await.generation
    }

    /// Store `value` unless the cache was invalidated since `generation` was read.
    pub async fn insert(&self, query: &str, value: V, generation: u64) {
        let mut inner = self.inner.write().await;
        if inner.generation != generation {
            tracing::debug!(query, "dropping result computed before invalidation");
            return;
        }
        inner.values.insert(query.to_string(), (value, Instant::now()));
    }

    /// Drop every entry, e.g. after the table changed
    pub async fn invalidate(&self) {
        let mut inner = self.inner.write().await;
        let dropped = inner.values.len();
        inner.values.clear();
        inner.generation += 1;
        tracing::debug!(dropped, generation = inner.generation, "query cache invalidated");
    }
}
