use super::{CacheResult, CacheStore, CacheWrite};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::time::Instant;
use tokio::sync::RwLock;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct ScopedKey {
    namespace: String,
    tenant_code: String,
    key: String,
}

#[derive(Debug, Clone)]
struct Entry {
    value: Value,
    expires_at: Option<Instant>,
}

/// Simple in-memory cache with optional TTL expiry.
///
/// Stands in for the external shared cache service in tests and local runs.
/// Entries written with `ttl = None` never expire, matching the platform's
/// no-expiry permission entries.
#[derive(Debug, Default)]
pub struct EphemeralCache {
    // RwLock allows concurrent readers while updates take exclusive access.
    inner: RwLock<HashMap<ScopedKey, Entry>>,
}

impl EphemeralCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}

#[async_trait]
impl CacheStore for EphemeralCache {
    async fn get(
        &self,
        key: &str,
        namespace: &str,
        tenant_code: &str,
    ) -> CacheResult<Option<Value>> {
        // Take a write lock so we can evict expired entries.
        let mut guard = self.inner.write().await;
        let scoped = ScopedKey {
            namespace: namespace.to_string(),
            tenant_code: tenant_code.to_string(),
            key: key.to_string(),
        };
        if let Some(entry) = guard.get(&scoped) {
            if let Some(expires_at) = entry.expires_at {
                // Lazy-expire on read to avoid a background sweeper.
                if Instant::now() >= expires_at {
                    guard.remove(&scoped);
                    return Ok(None);
                }
            }
            return Ok(Some(entry.value.clone()));
        }
        Ok(None)
    }

    async fn set(&self, key: &str, value: Value, write: CacheWrite) -> CacheResult<()> {
        // Compute expiry once so reads only compare Instants.
        let expires_at = write.ttl.map(|ttl| Instant::now() + ttl);
        self.inner.write().await.insert(
            ScopedKey {
                namespace: write.namespace,
                tenant_code: write.tenant_code,
                key: key.to_string(),
            },
            Entry { value, expires_at },
        );
        Ok(())
    }
}
