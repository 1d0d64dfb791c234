//! Tenant-aware entity-type lookup.
//!
//! # Purpose
//! Reads entity-type metadata per (tenant, org) pair, cache first, widening
//! the storage query to the platform default tenant on a total cache miss.
//!
//! # Key invariants
//! - A cache hit for any requested org short-circuits the storage query for
//!   the remaining orgs.
//! - Result ordering follows the input org-code order.
//! - Storage faults degrade to `Ok(None)`; only an unresolvable default
//!   context surfaces as a structured client error.
use crate::cache::CacheStore;
use crate::defaults::DefaultContextResolver;
use crate::model::{EntityType, EntityTypeAttribute};
use crate::store::EntityTypeStore;
use mentorhub_authz::{entity_types_cache_key, ENTITY_TYPES_PREFIX};
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;

pub const ENTITY_TYPES_NAMESPACE: &str = ENTITY_TYPES_PREFIX;

/// Configuration fault surfaced when the default context cannot be resolved.
/// These map to an HTTP 400 with a client-error classification; they are not
/// transient and must not be retried.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EntityTypeFailure {
    #[error("default organization code is not set")]
    DefaultOrgCodeNotSet,
    #[error("default tenant code is not set")]
    DefaultTenantCodeNotSet,
}

impl EntityTypeFailure {
    /// Stable machine-readable code for API layers.
    pub fn code(&self) -> &'static str {
        match self {
            Self::DefaultOrgCodeNotSet => "DEFAULT_ORG_CODE_NOT_SET",
            Self::DefaultTenantCodeNotSet => "DEFAULT_TENANT_CODE_NOT_SET",
        }
    }

    pub fn status_code(&self) -> u16 {
        400
    }

    pub fn classification(&self) -> &'static str {
        "CLIENT_ERROR"
    }
}

pub struct EntityTypeReader {
    cache: Arc<dyn CacheStore>,
    store: Arc<dyn EntityTypeStore>,
    defaults: Arc<DefaultContextResolver>,
}

impl EntityTypeReader {
    pub fn new(
        cache: Arc<dyn CacheStore>,
        store: Arc<dyn EntityTypeStore>,
        defaults: Arc<DefaultContextResolver>,
    ) -> Self {
        Self {
            cache,
            store,
            defaults,
        }
    }

    /// Find entity types for the given org codes under a tenant.
    ///
    /// Returns `Ok(Some(values))` with one projected JSON object per record,
    /// `Ok(None)` when nothing was found or the lookup failed (callers cannot
    /// distinguish the two at this boundary), and `Err(EntityTypeFailure)`
    /// only for an unresolvable default context.
    pub async fn find_all_entity_types(
        &self,
        org_codes: &[String],
        tenant_code: &str,
        attributes: &[EntityTypeAttribute],
    ) -> Result<Option<Vec<Value>>, EntityTypeFailure> {
        // Per-org cache reads, in input order for deterministic results.
        let mut hits: Vec<Value> = Vec::new();
        for org_code in org_codes {
            let key = entity_types_cache_key(tenant_code, org_code);
            match self
                .cache
                .get(&key, ENTITY_TYPES_NAMESPACE, tenant_code)
                .await
            {
                Ok(Some(Value::Array(values))) => hits.extend(values),
                Ok(Some(value)) => hits.push(value),
                Ok(None) => {}
                Err(error) => {
                    // A cache backend fault must never block the request
                    // path; treat this org as a miss.
                    tracing::warn!(key = %key, error = %error, "entity-type cache read failed");
                    metrics::counter!("mentorhub_entity_type_cache_faults_total").increment(1);
                }
            }
        }

        // Partial-hit short-circuit: a hit for org A does not trigger a
        // storage fetch for org B.
        if !hits.is_empty() {
            metrics::counter!("mentorhub_entity_type_reads_total", "source" => "cache")
                .increment(1);
            return Ok(Some(hits));
        }

        let Some(default_context) = self.defaults.resolve().await else {
            return Err(EntityTypeFailure::DefaultOrgCodeNotSet);
        };
        if default_context.org_code.is_empty() {
            return Err(EntityTypeFailure::DefaultOrgCodeNotSet);
        }
        if default_context.tenant_code.is_empty() {
            return Err(EntityTypeFailure::DefaultTenantCodeNotSet);
        }

        // Entity types may be defined at the default tenant and inherited by
        // any other tenant, so both tenants are tried.
        let mut tenant_codes = vec![default_context.tenant_code.clone()];
        if tenant_code != default_context.tenant_code {
            tenant_codes.push(tenant_code.to_string());
        }

        match self
            .store
            .find_by_orgs_and_tenants(org_codes, &tenant_codes)
            .await
        {
            Ok(records) if records.is_empty() => Ok(None),
            Ok(records) => {
                metrics::counter!("mentorhub_entity_type_reads_total", "source" => "store")
                    .increment(1);
                Ok(Some(Self::ordered_projection(
                    org_codes, &records, attributes,
                )))
            }
            Err(error) => {
                // Swallowed at this boundary: callers treat None as "no
                // entity types found".
                tracing::error!(error = %error, "entity-type lookup failed");
                metrics::counter!("mentorhub_entity_type_store_faults_total").increment(1);
                Ok(None)
            }
        }
    }

    // Order records by the input org-code order, then project attributes.
    fn ordered_projection(
        org_codes: &[String],
        records: &[EntityType],
        attributes: &[EntityTypeAttribute],
    ) -> Vec<Value> {
        let mut projected = Vec::with_capacity(records.len());
        for org_code in org_codes {
            for record in records {
                if &record.organization_code == org_code {
                    projected.push(record.project(attributes));
                }
            }
        }
        projected
    }
}
