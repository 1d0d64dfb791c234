//! Remote organization-service client.
//!
//! # Purpose
//! Models the remote organization lookup used when the platform default
//! context is not supplied through the environment.
//!
//! # Notes
//! The remote API wraps results in a `{success, data: {result}}` envelope;
//! a successful response with no result is a legitimate "not found".
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

/// Organization details returned by the remote service.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct OrgDetails {
    pub id: i64,
    pub code: String,
    pub tenant_code: String,
}

#[derive(Debug, Deserialize)]
struct OrgDetailsEnvelope {
    success: bool,
    data: Option<OrgDetailsData>,
}

#[derive(Debug, Deserialize)]
struct OrgDetailsData {
    result: Option<OrgDetails>,
}

/// Read access to the remote organization service.
#[async_trait]
pub trait OrganizationReader: Send + Sync {
    /// Fetch organization details by organization code. `Ok(None)` means the
    /// service answered but knows no such organization.
    async fn fetch_org_details(&self, organization_code: &str)
        -> anyhow::Result<Option<OrgDetails>>;
}

/// HTTP client for the organization service.
pub struct HttpOrganizationClient {
    base_url: String,
    client: reqwest::Client,
}

impl HttpOrganizationClient {
    pub fn new(base_url: impl Into<String>) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(5))
            .build()?;
        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }
}

#[async_trait]
impl OrganizationReader for HttpOrganizationClient {
    async fn fetch_org_details(
        &self,
        organization_code: &str,
    ) -> anyhow::Result<Option<OrgDetails>> {
        let url = format!("{}/v1/organization/details", self.base_url);
        let envelope: OrgDetailsEnvelope = self
            .client
            .get(&url)
            .query(&[("organization_code", organization_code)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        if !envelope.success {
            anyhow::bail!("organization service reported failure");
        }
        Ok(envelope.data.and_then(|data| data.result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::Query;
    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::json;
    use std::collections::HashMap;
    use std::net::SocketAddr;

    #[test]
    fn envelope_parses_with_result() {
        let envelope: OrgDetailsEnvelope = serde_json::from_str(
            r#"{"success": true, "data": {"result": {"id": 3, "code": "org-1", "tenant_code": "tenant-a"}}}"#,
        )
        .expect("parse");
        assert!(envelope.success);
        let result = envelope.data.and_then(|data| data.result).expect("result");
        assert_eq!(result.code, "org-1");
        assert_eq!(result.tenant_code, "tenant-a");
    }

    #[test]
    fn envelope_parses_without_result() {
        let envelope: OrgDetailsEnvelope =
            serde_json::from_str(r#"{"success": true, "data": {"result": null}}"#).expect("parse");
        assert!(envelope.data.and_then(|data| data.result).is_none());
    }

    async fn spawn_org_service(app: Router) -> SocketAddr {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind listener");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move {
            axum::serve(listener, app.into_make_service())
                .await
                .expect("serve org fixture");
        });
        addr
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn client_round_trip_sends_query_and_parses_result() {
        let app = Router::new().route(
            "/v1/organization/details",
            get(|Query(params): Query<HashMap<String, String>>| async move {
                assert_eq!(
                    params.get("organization_code").map(String::as_str),
                    Some("org-1")
                );
                Json(json!({
                    "success": true,
                    "data": {"result": {"id": 3, "code": "org-1", "tenant_code": "tenant-a"}}
                }))
            }),
        );
        let addr = spawn_org_service(app).await;

        let client =
            HttpOrganizationClient::new(format!("http://{addr}")).expect("client");
        let details = client
            .fetch_org_details("org-1")
            .await
            .expect("fetch")
            .expect("result");
        assert_eq!(details.id, 3);
        assert_eq!(details.code, "org-1");
        assert_eq!(details.tenant_code, "tenant-a");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn client_treats_missing_result_as_not_found() {
        let app = Router::new().route(
            "/v1/organization/details",
            get(|| async { Json(json!({"success": true, "data": {"result": null}})) }),
        );
        let addr = spawn_org_service(app).await;

        let client =
            HttpOrganizationClient::new(format!("http://{addr}")).expect("client");
        let details = client.fetch_org_details("missing").await.expect("fetch");
        assert!(details.is_none());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn client_errors_on_http_failure_status() {
        let app = Router::new().route(
            "/v1/organization/details",
            get(|| async {
                (
                    axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                    "organization service down",
                )
            }),
        );
        let addr = spawn_org_service(app).await;

        let client =
            HttpOrganizationClient::new(format!("http://{addr}")).expect("client");
        let error = client
            .fetch_org_details("org-1")
            .await
            .expect_err("status error");
        assert!(error.to_string().contains("500"));
    }
}
