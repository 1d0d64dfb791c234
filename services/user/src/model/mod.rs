pub mod entity_type;

pub use entity_type::{EntityType, EntityTypeAttribute};
