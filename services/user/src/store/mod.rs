use crate::model::EntityType;
use async_trait::async_trait;
use mentorhub_authz::RolePermissionRow;
use thiserror::Error;

pub mod memory;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Read side of the role-permission mapping table. Rows are projected down to
/// `module` and `request_type`; the resolver never needs the full row.
#[async_trait]
pub trait RolePermissionStore: Send + Sync {
    async fn find_by_role_titles(&self, role_titles: &[String])
        -> StoreResult<Vec<RolePermissionRow>>;
}

/// Read side of the entity-type table.
///
/// `tenant_codes` carries both the requested tenant and the platform default
/// tenant so that default-tenant definitions are inherited.
#[async_trait]
pub trait EntityTypeStore: Send + Sync {
    async fn find_by_orgs_and_tenants(
        &self,
        org_codes: &[String],
        tenant_codes: &[String],
    ) -> StoreResult<Vec<EntityType>>;
}
