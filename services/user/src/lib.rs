//! User-service library crate.
//!
//! # Purpose
//! Exposes the tenant-aware resolution subsystem of the MentorHub backend:
//! configuration, observability, storage and cache seams, the default-context
//! resolver, the permission cache, and the entity-type cache.
//!
//! # Notes
//! Module boundaries mirror the external collaborators: relational storage
//! and the shared cache service are traits, so tests and local development
//! run entirely in memory.
pub mod cache;
pub mod config;
pub mod defaults;
pub mod entity_types;
pub mod model;
pub mod observability;
pub mod org;
pub mod permissions;
pub mod store;

pub use config::ServiceConfig;
pub use defaults::{DefaultContext, DefaultContextResolver};
pub use entity_types::{EntityTypeFailure, EntityTypeReader};
pub use permissions::PermissionResolver;
