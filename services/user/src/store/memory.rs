//! In-memory implementations of the storage seams.
//!
//! # Purpose
//! These stores implement the role-permission and entity-type read traits
//! entirely in memory using `HashMap`s guarded by `tokio::sync::RwLock`. They
//! exist for:
//! - local development and tests (no external dependencies)
//! - seeding fixtures in integration tests
//!
//! # Durability and consistency
//! - **Not durable**: all state is lost on process restart.
//! - **Single-process consistency**: write locks for mutations, read locks
//!   for reads.
//!
//! # Metrics
//! The stores update a small set of gauges to keep observability behavior
//! consistent with durable backends.
use super::{EntityTypeStore, RolePermissionStore, StoreResult};
use crate::model::EntityType;
use async_trait::async_trait;
use mentorhub_authz::RolePermissionRow;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory role-permission mapping store.
///
/// Rows are grouped by role title so lookups for a caller's role set scan
/// only the relevant buckets.
#[derive(Default)]
pub struct InMemoryRolePermissionStore {
    rows: Arc<RwLock<HashMap<String, Vec<RolePermissionRow>>>>,
}

impl InMemoryRolePermissionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, row: RolePermissionRow) {
        let mut rows = self.rows.write().await;
        rows.entry(row.role_title.clone()).or_default().push(row);
        metrics::gauge!("mentorhub_role_permissions_total")
            .set(rows.values().map(Vec::len).sum::<usize>() as f64);
    }
}

#[async_trait]
impl RolePermissionStore for InMemoryRolePermissionStore {
    async fn find_by_role_titles(
        &self,
        role_titles: &[String],
    ) -> StoreResult<Vec<RolePermissionRow>> {
        let rows = self.rows.read().await;
        let mut found = Vec::new();
        for title in role_titles {
            if let Some(bucket) = rows.get(title) {
                found.extend(bucket.iter().cloned());
            }
        }
        Ok(found)
    }
}

/// In-memory entity-type store keyed by `(organization_code, tenant_code)`.
#[derive(Default)]
pub struct InMemoryEntityTypeStore {
    rows: Arc<RwLock<Vec<EntityType>>>,
}

impl InMemoryEntityTypeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, entity_type: EntityType) {
        let mut rows = self.rows.write().await;
        rows.push(entity_type);
        metrics::gauge!("mentorhub_entity_types_total").set(rows.len() as f64);
    }
}

#[async_trait]
impl EntityTypeStore for InMemoryEntityTypeStore {
    async fn find_by_orgs_and_tenants(
        &self,
        org_codes: &[String],
        tenant_codes: &[String],
    ) -> StoreResult<Vec<EntityType>> {
        let rows = self.rows.read().await;
        Ok(rows
            .iter()
            .filter(|row| {
                org_codes.contains(&row.organization_code)
                    && tenant_codes.contains(&row.tenant_code)
            })
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity(value: &str, org: &str, tenant: &str) -> EntityType {
        EntityType {
            id: 1,
            value: value.to_string(),
            label: value.to_string(),
            organization_code: org.to_string(),
            tenant_code: tenant.to_string(),
            status: "ACTIVE".to_string(),
        }
    }

    #[tokio::test]
    async fn role_permission_lookup_scans_only_requested_titles() {
        let store = InMemoryRolePermissionStore::new();
        store
            .insert(RolePermissionRow {
                role_title: "mentor".to_string(),
                module: "sessions".to_string(),
                request_type: vec!["GET".to_string()],
            })
            .await;
        store
            .insert(RolePermissionRow {
                role_title: "admin".to_string(),
                module: "sessions".to_string(),
                request_type: vec!["DELETE".to_string()],
            })
            .await;

        let rows = store
            .find_by_role_titles(&["mentor".to_string()])
            .await
            .expect("rows");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].request_type, vec!["GET"]);
    }

    #[tokio::test]
    async fn entity_type_lookup_filters_by_org_and_tenant() {
        let store = InMemoryEntityTypeStore::new();
        store.insert(entity("designation", "org-1", "tenant-a")).await;
        store.insert(entity("location", "org-1", "tenant-b")).await;
        store.insert(entity("designation", "org-2", "tenant-a")).await;

        let rows = store
            .find_by_orgs_and_tenants(
                &["org-1".to_string()],
                &["tenant-a".to_string(), "default".to_string()],
            )
            .await
            .expect("rows");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].value, "designation");
        assert_eq!(rows[0].organization_code, "org-1");
    }

    #[tokio::test]
    async fn missing_titles_yield_empty_result() {
        let store = InMemoryRolePermissionStore::new();
        let rows = store
            .find_by_role_titles(&["missing".to_string()])
            .await
            .expect("rows");
        assert!(rows.is_empty());
    }
}
