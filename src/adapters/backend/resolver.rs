//! Backend API adapter. Implements EntityResolver over `GET /api/resolve/{type}/{id}`.

use crate::domain::{DomainError, EntityReference, ResolvedLocation};
use crate::ports::EntityResolver;
use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;
use tracing::{debug, warn};

pub struct HttpEntityResolver {
    client: Client,
    base_url: String,
}

impl HttpEntityResolver {
    /// # Arguments
    /// * `base_url` - Backend API base (e.g. "https://api.example.com"); may carry a path prefix
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Entity ids are opaque, so they are pushed as encoded path segments.
    fn resolve_url(&self, reference: &EntityReference) -> Result<Url, DomainError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| DomainError::Config(format!("invalid API base url: {}", e)))?;
        url.path_segments_mut()
            .map_err(|_| DomainError::Config("API base url cannot be a base".into()))?
            .pop_if_empty()
            .extend([
                "api",
                "resolve",
                reference.entity_type.as_str(),
                reference.entity_id.as_str(),
            ]);
        Ok(url)
    }
}

/// Backend payload. Accepts both snake_case and camelCase field names.
#[derive(Deserialize)]
struct LocationResponse {
    #[serde(alias = "organizationId")]
    organization_id: String,
    #[serde(alias = "divisionId")]
    division_id: String,
    #[serde(alias = "workspacePath")]
    workspace_path: String,
}

#[async_trait::async_trait]
impl EntityResolver for HttpEntityResolver {
    async fn resolve(
        &self,
        reference: &EntityReference,
        access_token: Option<&str>,
    ) -> Result<ResolvedLocation, DomainError> {
        let url = self.resolve_url(reference)?;
        debug!(entity = %reference, url = %url, "resolving entity");

        let mut req = self.client.get(url);
        if let Some(token) = access_token {
            req = req.bearer_auth(token);
        }
        let res = req
            .send()
            .await
            .map_err(|e| DomainError::NetworkFailure(format!("resolve request: {}", e)))?;

        match res.status() {
            s if s.is_success() => {}
            StatusCode::NOT_FOUND => return Err(DomainError::EntityNotFound(reference.to_string())),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                return Err(DomainError::EntityForbidden(reference.to_string()));
            }
            status => {
                let text = res.text().await.unwrap_or_default();
                warn!(status = %status, entity = %reference, "resolver returned error");
                return Err(DomainError::Unexpected(format!(
                    "resolver error {}: {}",
                    status,
                    text.chars().take(200).collect::<String>()
                )));
            }
        }

        let body: LocationResponse = res
            .json()
            .await
            .map_err(|e| DomainError::Unexpected(format!("parse resolver response: {}", e)))?;

        Ok(ResolvedLocation {
            organization_id: body.organization_id,
            division_id: body.division_id,
            workspace_path: body.workspace_path,
        })
    }
}
