use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

pub mod memory;

/// A cache-store fault. A miss is not an error; faults are store-level
/// failures (backend unreachable, corrupt payload) that callers must recover
/// from by falling back to the source of truth.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("cache backend unavailable: {0}")]
    Unavailable(String),
    #[error("cache payload corrupt for key {key}: {reason}")]
    Corrupt { key: String, reason: String },
}

pub type CacheResult<T> = Result<T, CacheError>;

/// Write options for one cache entry. `ttl = None` means "no expiry".
#[derive(Debug, Clone)]
pub struct CacheWrite {
    pub namespace: String,
    pub tenant_code: String,
    pub ttl: Option<Duration>,
}

/// External shared cache service, assumed to provide atomic get/set
/// primitives with optional namespacing and TTL.
#[async_trait]
pub trait CacheStore: Send + Sync {
    async fn get(&self, key: &str, namespace: &str, tenant_code: &str)
        -> CacheResult<Option<Value>>;

    async fn set(&self, key: &str, value: Value, write: CacheWrite) -> CacheResult<()>;
}
