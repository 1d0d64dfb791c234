//! Default-context resolution.
//!
//! # Purpose
//! Resolves the platform default organization code and tenant code, either
//! from configuration or, on miss, through a remote organization lookup.
//!
//! # Key invariants
//! - `resolve` never returns an error; every failure is logged and collapses
//!   to `None`, which callers must treat as "defaults not configured".
//! - A non-`None` resolution is memoized for the process lifetime; the
//!   default context cannot meaningfully change while the process runs.
use crate::config::ServiceConfig;
use crate::org::OrganizationReader;
use std::sync::Arc;
use tokio::sync::RwLock;

/// The platform-wide fallback org/tenant used when a request's own scope
/// yields no data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultContext {
    pub org_code: String,
    pub tenant_code: String,
}

pub struct DefaultContextResolver {
    default_org_code: Option<String>,
    default_org_lookup_code: Option<String>,
    default_tenant_code: Option<String>,
    org_client: Arc<dyn OrganizationReader>,
    // Memoized non-None resolution; None here means "not resolved yet".
    resolved: RwLock<Option<DefaultContext>>,
}

impl DefaultContextResolver {
    pub fn new(config: &ServiceConfig, org_client: Arc<dyn OrganizationReader>) -> Self {
        Self {
            default_org_code: config.default_org_code.clone(),
            default_org_lookup_code: config.default_org_lookup_code.clone(),
            default_tenant_code: config.default_tenant_code.clone(),
            org_client,
            resolved: RwLock::new(None),
        }
    }

    /// Resolve the default context.
    ///
    /// Configuration wins: when a default org code is configured it is paired
    /// with the configured tenant code without any remote call. Otherwise a
    /// single remote lookup fills in both codes. Failures resolve to `None`.
    pub async fn resolve(&self) -> Option<DefaultContext> {
        if let Some(context) = self.resolved.read().await.clone() {
            return Some(context);
        }

        let context = self.resolve_uncached().await?;
        let mut memo = self.resolved.write().await;
        // A concurrent resolve may have won the race; keep the first value.
        if memo.is_none() {
            *memo = Some(context.clone());
        }
        Some(context)
    }

    async fn resolve_uncached(&self) -> Option<DefaultContext> {
        if let Some(org_code) = &self.default_org_code {
            return Some(DefaultContext {
                org_code: org_code.clone(),
                tenant_code: self.default_tenant_code.clone().unwrap_or_default(),
            });
        }

        // No configured org code: ask the organization service using the
        // lookup code, itself read from two env names for back-compat.
        let Some(lookup_code) = self.default_org_lookup_code.as_deref() else {
            tracing::warn!("no default organization code or lookup code configured");
            return None;
        };
        match self.org_client.fetch_org_details(lookup_code).await {
            Ok(Some(details)) => Some(DefaultContext {
                org_code: details.code,
                tenant_code: details.tenant_code,
            }),
            Ok(None) => {
                tracing::warn!(code = lookup_code, "default organization lookup returned no result");
                None
            }
            Err(error) => {
                tracing::warn!(error = ?error, "default organization lookup failed");
                None
            }
        }
    }
}
