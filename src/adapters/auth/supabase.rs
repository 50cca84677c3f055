//! Supabase Auth adapter. Implements AuthGatewayProvider and SessionGateway.
//!
//! The gateway is bound to one request's access token and validates it against
//! `GET {url}/auth/v1/user`. It never refreshes or mutates tokens.

use crate::domain::{DomainError, RequestCredentials, Session, SessionUser};
use crate::ports::{AuthGatewayProvider, SessionGateway};
use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::sync::Arc;
use tracing::debug;

/// Builds per-request gateways from the project URL and anon key.
pub struct SupabaseAuthProvider {
    client: Client,
    url: Option<String>,
    anon_key: Option<String>,
}

impl SupabaseAuthProvider {
    /// Both values are optional; when either is missing every `gateway()` call
    /// returns `AuthUnavailable`.
    pub fn new(url: Option<String>, anon_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.map(|u| u.trim_end_matches('/').to_string()),
            anon_key,
        }
    }
}

impl AuthGatewayProvider for SupabaseAuthProvider {
    fn gateway(
        &self,
        credentials: &RequestCredentials,
    ) -> Result<Arc<dyn SessionGateway>, DomainError> {
        let url = self
            .url
            .clone()
            .filter(|u| !u.is_empty())
            .ok_or_else(|| DomainError::AuthUnavailable("supabase url not set".into()))?;
        let anon_key = self
            .anon_key
            .clone()
            .filter(|k| !k.is_empty())
            .ok_or_else(|| DomainError::AuthUnavailable("supabase anon key not set".into()))?;

        Ok(Arc::new(SupabaseSessionGateway {
            client: self.client.clone(),
            url,
            anon_key,
            access_token: credentials.access_token.clone(),
        }))
    }

    fn is_configured(&self) -> bool {
        self.url.as_deref().is_some_and(|u| !u.is_empty())
            && self.anon_key.as_deref().is_some_and(|k| !k.is_empty())
    }
}

/// Session view for a single request.
pub struct SupabaseSessionGateway {
    client: Client,
    url: String,
    anon_key: String,
    access_token: Option<String>,
}

#[derive(Deserialize)]
struct TokenClaims {
    exp: i64,
}

/// `/auth/v1/user` response; only the fields we expose.
#[derive(Deserialize)]
struct UserResponse {
    id: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    role: Option<String>,
}

/// Read `exp` from a JWT payload without verifying the signature.
/// The provider verifies the token; this only avoids a round trip for expired ones.
fn token_expiry(token: &str) -> Option<i64> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.validate_aud = false;
    jsonwebtoken::decode::<TokenClaims>(token, &DecodingKey::from_secret(&[]), &validation)
        .ok()
        .map(|data| data.claims.exp)
}

#[async_trait::async_trait]
impl SessionGateway for SupabaseSessionGateway {
    async fn get_session(&self) -> Result<Option<Session>, DomainError> {
        let Some(token) = self.access_token.as_deref().filter(|t| !t.is_empty()) else {
            return Ok(None);
        };

        let Some(expires_at) = token_expiry(token) else {
            debug!("access token is not a readable JWT; treating as anonymous");
            return Ok(None);
        };
        if expires_at <= chrono::Utc::now().timestamp() {
            debug!(expires_at, "access token expired");
            return Ok(None);
        }

        let res = self
            .client
            .get(format!("{}/auth/v1/user", self.url))
            .header("apikey", &self.anon_key)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| DomainError::NetworkFailure(format!("auth user request: {}", e)))?;

        match res.status() {
            s if s.is_success() => {}
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                debug!(status = %res.status(), "identity provider rejected token");
                return Ok(None);
            }
            status => {
                let text = res.text().await.unwrap_or_default();
                return Err(DomainError::Unexpected(format!(
                    "auth API error {}: {}",
                    status,
                    text.chars().take(200).collect::<String>()
                )));
            }
        }

        let user: UserResponse = res
            .json()
            .await
            .map_err(|e| DomainError::Unexpected(format!("parse auth user: {}", e)))?;

        Ok(Some(Session {
            access_token: token.to_string(),
            user: SessionUser {
                id: user.id,
                email: user.email,
                role: user.role,
            },
            expires_at,
        }))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    /// JWT with the given `exp`, signed with a throwaway secret. Adapters only read claims.
    pub(crate) fn jwt_with_exp(exp: i64) -> String {
        let claims = serde_json::json!({ "sub": "u1", "aud": "authenticated", "exp": exp });
        jsonwebtoken::encode(
            &jsonwebtoken::Header::default(),
            &claims,
            &jsonwebtoken::EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap()
    }

    fn future_exp() -> i64 {
        chrono::Utc::now().timestamp() + 3600
    }

    #[test]
    fn test_unconfigured_provider_is_unavailable() {
        let creds = RequestCredentials::bearer("t");
        for provider in [
            SupabaseAuthProvider::new(None, Some("anon".into())),
            SupabaseAuthProvider::new(Some("https://x.supabase.co".into()), None),
            SupabaseAuthProvider::new(Some(String::new()), Some("anon".into())),
        ] {
            assert!(!provider.is_configured());
            let err = provider.gateway(&creds).err().unwrap();
            assert!(err.is_auth_unavailable());
        }
    }

    #[test]
    fn test_token_expiry() {
        assert_eq!(token_expiry(&jwt_with_exp(1_700_000_000)), Some(1_700_000_000));
        assert_eq!(token_expiry("not-a-jwt"), None);
        assert_eq!(token_expiry("a.%%%.c"), None);
        // Signature is not checked here; the identity provider does that.
        let token = jwt_with_exp(1_700_000_000);
        let (unsigned, _) = token.rsplit_once('.').unwrap();
        assert_eq!(
            token_expiry(&format!("{}.forged", unsigned)),
            Some(1_700_000_000)
        );
    }

    #[tokio::test]
    async fn test_no_token_is_anonymous_without_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(&server)
            .await;

        let provider = SupabaseAuthProvider::new(Some(server.uri()), Some("anon".into()));
        let gw = provider.gateway(&RequestCredentials::anonymous()).unwrap();
        assert_eq!(gw.get_session().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_expired_token_short_circuits() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let provider = SupabaseAuthProvider::new(Some(server.uri()), Some("anon".into()));
        let token = jwt_with_exp(chrono::Utc::now().timestamp() - 10);
        let gw = provider.gateway(&RequestCredentials::bearer(token)).unwrap();
        assert_eq!(gw.get_session().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_valid_token_returns_session() {
        let server = MockServer::start().await;
        let exp = future_exp();
        let token = jwt_with_exp(exp);
        Mock::given(method("GET"))
            .and(path("/auth/v1/user"))
            .and(header("apikey", "anon"))
            .and(header("authorization", format!("Bearer {}", token).as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "user-1",
                "email": "a@example.com",
                "role": "authenticated",
                "aud": "authenticated"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let provider = SupabaseAuthProvider::new(Some(server.uri()), Some("anon".into()));
        let gw = provider
            .gateway(&RequestCredentials::bearer(token.clone()))
            .unwrap();
        let session = gw.get_session().await.unwrap().unwrap();

        assert_eq!(session.access_token, token);
        assert_eq!(session.user.id, "user-1");
        assert_eq!(session.user.email.as_deref(), Some("a@example.com"));
        assert_eq!(session.expires_at, exp);
    }

    #[tokio::test]
    async fn test_rejected_token_is_anonymous() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/auth/v1/user"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let provider = SupabaseAuthProvider::new(Some(server.uri()), Some("anon".into()));
        let gw = provider
            .gateway(&RequestCredentials::bearer(jwt_with_exp(future_exp())))
            .unwrap();
        assert_eq!(gw.get_session().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_server_error_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/auth/v1/user"))
            .respond_with(ResponseTemplate::new(503).set_body_string("down"))
            .mount(&server)
            .await;

        let provider = SupabaseAuthProvider::new(Some(server.uri()), Some("anon".into()));
        let gw = provider
            .gateway(&RequestCredentials::bearer(jwt_with_exp(future_exp())))
            .unwrap();
        let err = gw.get_session().await.unwrap_err();
        assert!(matches!(err, DomainError::Unexpected(_)));
    }
}
