//! Entity-type model definitions.
//!
//! # Purpose
//! Defines the entity-type record served by the tenant-aware lookup path and
//! the attribute projection callers can request.
use serde::{Deserialize, Serialize};

/// One entity-type row. Entity types may be defined at the platform default
/// tenant and inherited by any other tenant.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct EntityType {
    pub id: i64,
    pub value: String,
    pub label: String,
    pub organization_code: String,
    pub tenant_code: String,
    pub status: String,
}

/// Attributes a caller can project when reading entity types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityTypeAttribute {
    Id,
    Value,
    Label,
    OrganizationCode,
    TenantCode,
    Status,
}

impl EntityType {
    /// Project this record down to the requested attributes as a JSON object.
    ///
    /// An empty attribute list means "all attributes".
    pub fn project(&self, attributes: &[EntityTypeAttribute]) -> serde_json::Value {
        if attributes.is_empty() {
            return serde_json::json!({
                "id": self.id,
                "value": self.value,
                "label": self.label,
                "organization_code": self.organization_code,
                "tenant_code": self.tenant_code,
                "status": self.status,
            });
        }
        let mut object = serde_json::Map::new();
        for attribute in attributes {
            match attribute {
                EntityTypeAttribute::Id => {
                    object.insert("id".into(), serde_json::json!(self.id));
                }
                EntityTypeAttribute::Value => {
                    object.insert("value".into(), serde_json::json!(self.value));
                }
                EntityTypeAttribute::Label => {
                    object.insert("label".into(), serde_json::json!(self.label));
                }
                EntityTypeAttribute::OrganizationCode => {
                    object.insert(
                        "organization_code".into(),
                        serde_json::json!(self.organization_code),
                    );
                }
                EntityTypeAttribute::TenantCode => {
                    object.insert("tenant_code".into(), serde_json::json!(self.tenant_code));
                }
                EntityTypeAttribute::Status => {
                    object.insert("status".into(), serde_json::json!(self.status));
                }
            }
        }
        serde_json::Value::Object(object)
    }
}
