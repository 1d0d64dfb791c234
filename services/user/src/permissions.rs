//! Cached role-permission resolution.
//!
//! # Purpose
//! Resolves the effective per-module permissions for a caller's role titles,
//! cache-aside over the role-permission mapping store.
//!
//! # Key invariants
//! - Never returns an error: a cache fault falls back to the database, a
//!   database fault fails open to an empty permission list ("no grants").
//! - Cache entries are written without expiry; permissions are treated as
//!   rarely changing and cross-tenant, so all entries live under the platform
//!   default tenant code.
//! - A list read from the cache is returned unchanged.
use crate::cache::{CacheStore, CacheWrite};
use crate::store::RolePermissionStore;
use mentorhub_authz::{merge_by_module, permissions_cache_key, ModulePermissions, PERMISSIONS_PREFIX};
use std::sync::Arc;

pub struct PermissionResolver {
    cache: Arc<dyn CacheStore>,
    store: Arc<dyn RolePermissionStore>,
    /// Tenant under which cross-tenant permission entries are cached.
    default_tenant_code: String,
    /// Service identifier stamped into each resolved entry.
    service_name: String,
}

impl PermissionResolver {
    pub fn new(
        cache: Arc<dyn CacheStore>,
        store: Arc<dyn RolePermissionStore>,
        default_tenant_code: impl Into<String>,
        service_name: impl Into<String>,
    ) -> Self {
        Self {
            cache,
            store,
            default_tenant_code: default_tenant_code.into(),
            service_name: service_name.into(),
        }
    }

    /// Resolve permissions for a set of role titles.
    ///
    /// Entries are never invalidated by this path; an administrative cache
    /// purge is the only way to drop them.
    pub async fn get_permissions(&self, role_titles: &[String]) -> Vec<ModulePermissions> {
        let key = permissions_cache_key(role_titles);

        match self
            .cache
            .get(&key, PERMISSIONS_PREFIX, &self.default_tenant_code)
            .await
        {
            Ok(Some(value)) => match serde_json::from_value::<Vec<ModulePermissions>>(value) {
                Ok(cached) => {
                    metrics::counter!("mentorhub_permission_cache_reads_total", "outcome" => "hit")
                        .increment(1);
                    return cached;
                }
                Err(error) => {
                    // A corrupt entry is a cache fault, not a miss: fall back
                    // to the database without re-caching over the bad entry.
                    tracing::warn!(key = %key, error = %error, "corrupt cached permission entry");
                    metrics::counter!("mentorhub_permission_cache_reads_total", "outcome" => "fault")
                        .increment(1);
                    return self.load_without_caching(role_titles).await;
                }
            },
            Ok(None) => {
                metrics::counter!("mentorhub_permission_cache_reads_total", "outcome" => "miss")
                    .increment(1);
            }
            Err(error) => {
                // Cache backend fault: serve from the database and skip the
                // write-back so repeated cache faults stay visible.
                tracing::warn!(key = %key, error = %error, "permission cache read failed");
                metrics::counter!("mentorhub_permission_cache_reads_total", "outcome" => "fault")
                    .increment(1);
                return self.load_without_caching(role_titles).await;
            }
        }

        let permissions = self.load_without_caching(role_titles).await;
        let value = match serde_json::to_value(&permissions) {
            Ok(value) => value,
            Err(error) => {
                tracing::error!(error = %error, "serialize resolved permissions");
                return permissions;
            }
        };
        if let Err(error) = self
            .cache
            .set(
                &key,
                value,
                CacheWrite {
                    namespace: PERMISSIONS_PREFIX.to_string(),
                    tenant_code: self.default_tenant_code.clone(),
                    ttl: None,
                },
            )
            .await
        {
            tracing::warn!(key = %key, error = %error, "permission cache write failed");
        }
        permissions
    }

    async fn load_without_caching(&self, role_titles: &[String]) -> Vec<ModulePermissions> {
        match self.store.find_by_role_titles(role_titles).await {
            Ok(rows) => merge_by_module(&rows, &self.service_name),
            Err(error) => {
                // Fail open to "no grants": permission checks treat an empty
                // list as denial, never as a fatal error.
                tracing::error!(error = %error, "role-permission lookup failed; returning no grants");
                metrics::counter!("mentorhub_permission_store_faults_total").increment(1);
                Vec::new()
            }
        }
    }
}
