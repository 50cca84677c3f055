//! Backend API adapter. Implements UserDirectory over `GET /api/users/me`.
//!
//! Never fails to the caller: non-2xx, transport and decode errors are logged and map to `None`.

use crate::domain::WorkspaceUser;
use crate::ports::UserDirectory;
use reqwest::Client;
use serde::Deserialize;
use tracing::warn;

pub struct HttpUserDirectory {
    client: Client,
    base_url: String,
}

impl HttpUserDirectory {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

#[derive(Deserialize)]
struct MeResponse {
    #[serde(default)]
    user: Option<WorkspaceUser>,
}

#[async_trait::async_trait]
impl UserDirectory for HttpUserDirectory {
    async fn current_user(&self, access_token: &str) -> Option<WorkspaceUser> {
        let res = match self
            .client
            .get(format!("{}/api/users/me", self.base_url))
            .bearer_auth(access_token)
            .send()
            .await
        {
            Ok(r) => r,
            Err(e) => {
                warn!(error = %e, "users/me request failed");
                return None;
            }
        };

        if !res.status().is_success() {
            warn!(status = %res.status(), "users/me returned non-success");
            return None;
        }

        match res.json::<MeResponse>().await {
            Ok(body) => body.user,
            Err(e) => {
                warn!(error = %e, "users/me response could not be parsed");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_current_user_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/users/me"))
            .and(header("authorization", "Bearer tok"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "user": {
                    "id": "u1",
                    "email": "a@example.com",
                    "display_name": "Ada",
                    "organization_id": "org1"
                }
            })))
            .mount(&server)
            .await;

        let dir = HttpUserDirectory::new(format!("{}/", server.uri()));
        let user = dir.current_user("tok").await.unwrap();
        assert_eq!(user.id, "u1");
        assert_eq!(user.display_name.as_deref(), Some("Ada"));
        assert_eq!(user.organization_id.as_deref(), Some("org1"));
    }

    #[tokio::test]
    async fn test_null_user() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/users/me"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "user": null })),
            )
            .mount(&server)
            .await;

        let dir = HttpUserDirectory::new(server.uri());
        assert!(dir.current_user("tok").await.is_none());
    }

    #[tokio::test]
    async fn test_non_success_is_none() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/users/me"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let dir = HttpUserDirectory::new(server.uri());
        assert!(dir.current_user("tok").await.is_none());
    }
}
