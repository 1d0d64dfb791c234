//! Cache-key derivation for the tenant-aware caching layer.
//!
//! # Purpose
//! Produces deterministic cache keys so that identically composed inputs
//! always land on the same cache entry.
//!
//! # Key invariants
//! - Role titles are sorted and de-duplicated before joining, so key
//!   derivation takes a *set* of titles, not a sequence.
//! - Entity-type keys scope one cached blob per (tenant, org) pair.

/// Key prefix for resolved permission lists.
pub const PERMISSIONS_PREFIX: &str = "permissions";

/// Key prefix for entity-type blobs.
pub const ENTITY_TYPES_PREFIX: &str = "entityTypes";

/// Derive the cache key for a set of role titles.
///
/// # What it does
/// Sorts and de-duplicates the titles, then joins them under the
/// `permissions:` prefix.
///
/// # Why it exists
/// Callers hand over role titles in token order; without normalization,
/// differently ordered but identical role sets would produce distinct cache
/// entries.
pub fn permissions_cache_key(role_titles: &[String]) -> String {
    let mut titles: Vec<&str> = role_titles.iter().map(String::as_str).collect();
    titles.sort_unstable();
    titles.dedup();
    format!("{}:{}", PERMISSIONS_PREFIX, titles.join(","))
}

/// Derive the cache key for one (tenant, org) entity-type blob.
pub fn entity_types_cache_key(tenant_code: &str, org_code: &str) -> String {
    format!("{}:{}:{}", ENTITY_TYPES_PREFIX, tenant_code, org_code)
}
