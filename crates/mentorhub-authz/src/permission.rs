//! Role-permission model and merge-by-module reduction.
//!
//! # Purpose
//! Defines the storage-row and resolved-entry shapes for permissions, and the
//! reduction that folds many (role, permission) rows into one entry per
//! module.
//!
//! # How it fits
//! The user service queries raw rows for a caller's role titles and reduces
//! them here before caching; downstream permission checks only ever see the
//! reduced form.
//!
//! # Key invariants
//! - The reduced list carries at most one entry per module.
//! - `request_type` is a verb union with first-seen verb order preserved.
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One (role, permission) pairing as stored in the role-permission mapping
/// table. `request_type` lists the HTTP verbs this role grants on `module`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RolePermissionRow {
    pub role_title: String,
    pub module: String,
    pub request_type: Vec<String>,
}

/// Resolved permissions for one module across all of a caller's roles.
///
/// # Invariants
/// - `module` is unique within a resolved list.
/// - `service` identifies the platform service that produced the entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModulePermissions {
    pub module: String,
    pub request_type: Vec<String>,
    pub service: String,
}

/// Reduce role-permission rows into one entry per module.
///
/// # What it does
/// Unions `request_type` verbs per module while preserving first-seen module
/// order, then stamps each entry with the owning service identifier.
///
/// # Why it exists
/// A caller holding several roles may be granted overlapping verbs on the
/// same module; permission checks want a single de-duplicated entry.
pub fn merge_by_module(rows: &[RolePermissionRow], service: &str) -> Vec<ModulePermissions> {
    let mut order: Vec<String> = Vec::new();
    let mut verbs: HashMap<String, Vec<String>> = HashMap::new();

    for row in rows {
        let entry = verbs.entry(row.module.clone()).or_insert_with(|| {
            order.push(row.module.clone());
            Vec::new()
        });
        for verb in &row.request_type {
            if !entry.iter().any(|existing| existing == verb) {
                entry.push(verb.clone());
            }
        }
    }

    order
        .into_iter()
        .map(|module| {
            let request_type = verbs.remove(&module).unwrap_or_default();
            ModulePermissions {
                module,
                request_type,
                service: service.to_string(),
            }
        })
        .collect()
}
