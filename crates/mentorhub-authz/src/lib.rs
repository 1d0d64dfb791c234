//! MentorHub authorization primitives shared by platform services.
//!
//! # Purpose
//! Centralizes the role-permission data model, the merge-by-module reduction
//! used when resolving a caller's effective permissions, and the cache-key
//! derivation used by the tenant-aware caching layer.
//!
//! # How it fits
//! Services load raw role-permission rows from storage, reduce them here into
//! one entry per module, and cache the reduced list under a deterministic key.
//!
//! # Key invariants
//! - Within one resolved permission list, `module` values are unique.
//! - `request_type` holds the union of all verbs granted across the caller's
//!   roles, without duplicates.
//! - Cache keys are stable under re-ordering of the input role titles.
//!
//! # Examples
//! ```rust
//! use mentorhub_authz::permissions_cache_key;
//!
//! let a = permissions_cache_key(&["mentor".into(), "org_admin".into()]);
//! let b = permissions_cache_key(&["org_admin".into(), "mentor".into()]);
//! assert_eq!(a, b);
//! ```

mod key;
mod permission;

pub use key::{
    entity_types_cache_key, permissions_cache_key, ENTITY_TYPES_PREFIX, PERMISSIONS_PREFIX,
};
pub use permission::{merge_by_module, ModulePermissions, RolePermissionRow};
