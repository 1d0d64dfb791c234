use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::net::SocketAddr;

// User-service configuration sourced from environment variables.
//
// The remote-lookup org code has two accepted environment names: the current
// `MENTOR_DEFAULT_ORGANISATION_CODE` and the legacy `MENTOR_ORGANISATION_CODE`
// still set by older deployments.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub metrics_bind: SocketAddr,
    /// Identifier stamped into resolved permission entries.
    pub service_name: String,
    /// Platform default organization code, if configured. Presence here
    /// short-circuits the remote default lookup entirely.
    pub default_org_code: Option<String>,
    /// Organization code used for the remote default lookup when no default
    /// org code is configured directly.
    pub default_org_lookup_code: Option<String>,
    /// Platform default tenant code, if configured.
    pub default_tenant_code: Option<String>,
    /// Base URL of the remote organization service.
    pub org_service_url: String,
}

#[derive(Debug, Deserialize)]
struct ServiceConfigOverride {
    metrics_bind: Option<String>,
    service_name: Option<String>,
    default_org_code: Option<String>,
    default_org_lookup_code: Option<String>,
    default_tenant_code: Option<String>,
    org_service_url: Option<String>,
}

fn non_empty(value: std::result::Result<String, std::env::VarError>) -> Option<String> {
    value.ok().filter(|value| !value.trim().is_empty())
}

impl ServiceConfig {
    pub fn from_env() -> Result<Self> {
        let metrics_bind = std::env::var("MENTOR_USER_METRICS_BIND")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .with_context(|| "parse MENTOR_USER_METRICS_BIND")?;
        let service_name =
            std::env::var("MENTOR_SERVICE_NAME").unwrap_or_else(|_| "user".to_string());
        let default_org_code = non_empty(std::env::var("MENTOR_DEFAULT_ORG_CODE"));
        // Older deployments still set the organisation spelling.
        let default_org_lookup_code = non_empty(std::env::var("MENTOR_DEFAULT_ORGANISATION_CODE"))
            .or_else(|| non_empty(std::env::var("MENTOR_ORGANISATION_CODE")));
        let default_tenant_code = non_empty(std::env::var("MENTOR_DEFAULT_TENANT_CODE"));
        let org_service_url = std::env::var("MENTOR_ORG_SERVICE_URL")
            .unwrap_or_else(|_| "http://localhost:3001".to_string());
        Ok(Self {
            metrics_bind,
            service_name,
            default_org_code,
            default_org_lookup_code,
            default_tenant_code,
            org_service_url,
        })
    }

    pub fn from_env_or_yaml() -> Result<Self> {
        let mut config = Self::from_env()?;
        if let Ok(path) = std::env::var("MENTOR_USER_CONFIG") {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("read MENTOR_USER_CONFIG: {path}"))?;
            let override_cfg: ServiceConfigOverride = serde_yaml::from_str(&contents)
                .with_context(|| "parse user service config yaml")?;
            if let Some(value) = override_cfg.metrics_bind {
                config.metrics_bind = value.parse().with_context(|| "parse metrics_bind")?;
            }
            if let Some(value) = override_cfg.service_name {
                config.service_name = value;
            }
            if let Some(value) = override_cfg.default_org_code {
                config.default_org_code = Some(value);
            }
            if let Some(value) = override_cfg.default_org_lookup_code {
                config.default_org_lookup_code = Some(value);
            }
            if let Some(value) = override_cfg.default_tenant_code {
                config.default_tenant_code = Some(value);
            }
            if let Some(value) = override_cfg.org_service_url {
                config.org_service_url = value;
            }
        }
        Ok(config)
    }
}
