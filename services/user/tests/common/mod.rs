//! Shared test fakes for the resolution subsystem.
#![allow(dead_code)]
use async_trait::async_trait;
use mentorhub_authz::RolePermissionRow;
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use userservice::cache::{CacheError, CacheResult, CacheStore, CacheWrite};
use userservice::model::EntityType;
use userservice::org::{OrgDetails, OrganizationReader};
use userservice::store::{EntityTypeStore, RolePermissionStore, StoreResult};

/// Cache whose reads and writes always fault, simulating an unreachable
/// backend.
pub struct FailingCache;

#[async_trait]
impl CacheStore for FailingCache {
    async fn get(&self, _key: &str, _namespace: &str, _tenant: &str) -> CacheResult<Option<Value>> {
        Err(CacheError::Unavailable("connection refused".to_string()))
    }

    async fn set(&self, _key: &str, _value: Value, _write: CacheWrite) -> CacheResult<()> {
        Err(CacheError::Unavailable("connection refused".to_string()))
    }
}

/// Role-permission store whose query always fails.
pub struct FailingRolePermissionStore;

#[async_trait]
impl RolePermissionStore for FailingRolePermissionStore {
    async fn find_by_role_titles(&self, _titles: &[String]) -> StoreResult<Vec<RolePermissionRow>> {
        Err(anyhow::anyhow!("database unavailable").into())
    }
}

/// Entity-type store whose query always fails.
pub struct FailingEntityTypeStore;

#[async_trait]
impl EntityTypeStore for FailingEntityTypeStore {
    async fn find_by_orgs_and_tenants(
        &self,
        _org_codes: &[String],
        _tenant_codes: &[String],
    ) -> StoreResult<Vec<EntityType>> {
        Err(anyhow::anyhow!("database unavailable").into())
    }
}

/// Entity-type store wrapper that counts queries, so tests can assert the
/// store was never consulted.
pub struct CountingEntityTypeStore<S> {
    pub inner: S,
    pub queries: Arc<AtomicUsize>,
}

#[async_trait]
impl<S: EntityTypeStore> EntityTypeStore for CountingEntityTypeStore<S> {
    async fn find_by_orgs_and_tenants(
        &self,
        org_codes: &[String],
        tenant_codes: &[String],
    ) -> StoreResult<Vec<EntityType>> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        self.inner
            .find_by_orgs_and_tenants(org_codes, tenant_codes)
            .await
    }
}

/// Organization client that counts remote calls and serves a fixed answer.
pub struct CountingOrgClient {
    pub calls: Arc<AtomicUsize>,
    pub response: Option<OrgDetails>,
}

#[async_trait]
impl OrganizationReader for CountingOrgClient {
    async fn fetch_org_details(&self, _code: &str) -> anyhow::Result<Option<OrgDetails>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.response.clone())
    }
}

pub fn row(role: &str, module: &str, verbs: &[&str]) -> RolePermissionRow {
    RolePermissionRow {
        role_title: role.to_string(),
        module: module.to_string(),
        request_type: verbs.iter().map(|verb| verb.to_string()).collect(),
    }
}

pub fn entity(value: &str, org: &str, tenant: &str) -> EntityType {
    EntityType {
        id: 1,
        value: value.to_string(),
        label: value.to_string(),
        organization_code: org.to_string(),
        tenant_code: tenant.to_string(),
        status: "ACTIVE".to_string(),
    }
}

pub fn config(
    default_org: Option<&str>,
    default_tenant: Option<&str>,
) -> userservice::ServiceConfig {
    userservice::ServiceConfig {
        metrics_bind: "127.0.0.1:0".parse().expect("addr"),
        service_name: "user".to_string(),
        default_org_code: default_org.map(str::to_string),
        default_org_lookup_code: None,
        default_tenant_code: default_tenant.map(str::to_string),
        org_service_url: "http://localhost:3001".to_string(),
    }
}
