//! Domain entities. Pure data structures for the core business.
//!
//! No HTTP/provider types here; adapters map into these.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of entity a short link points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Channel,
    Project,
}

impl EntityType {
    pub fn as_str(self) -> &'static str {
        match self {
            EntityType::Channel => "channel",
            EntityType::Project => "project",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "channel" => Ok(EntityType::Channel),
            "project" => Ok(EntityType::Project),
            other => Err(format!("unknown entity type '{}'", other)),
        }
    }
}

/// Opaque, caller-supplied reference parsed from a short link.
/// The id format is not validated; the resolver decides what exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityReference {
    #[serde(rename = "type")]
    pub entity_type: EntityType,
    pub entity_id: String,
}

impl EntityReference {
    pub fn new(entity_type: EntityType, entity_id: impl Into<String>) -> Self {
        Self {
            entity_type,
            entity_id: entity_id.into(),
        }
    }

    pub fn channel(entity_id: impl Into<String>) -> Self {
        Self::new(EntityType::Channel, entity_id)
    }

    pub fn project(entity_id: impl Into<String>) -> Self {
        Self::new(EntityType::Project, entity_id)
    }
}

impl fmt::Display for EntityReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.entity_type, self.entity_id)
    }
}

/// Canonical location of an entity. Used once for a redirect, never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedLocation {
    pub organization_id: String,
    pub division_id: String,
    pub workspace_path: String,
}

impl ResolvedLocation {
    /// True if `workspace_path` is an absolute path on this origin.
    /// Anything else (scheme, `//host`, backslash tricks) must never become a redirect target.
    pub fn has_local_path(&self) -> bool {
        let p = self.workspace_path.as_str();
        p.starts_with('/')
            && !p.starts_with("//")
            && !p.contains('\\')
            && !p.contains("://")
            && !p.chars().any(|c| c.is_control() || c.is_whitespace())
    }
}

/// User as reported by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

/// Read-only, time-bounded view of the authenticated session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub user: SessionUser,
    /// Unix seconds, from the access token's `exp` claim.
    pub expires_at: i64,
}

impl Session {
    pub fn is_expired_at(&self, now_unix: i64) -> bool {
        self.expires_at <= now_unix
    }
}

/// Workspace profile returned by the backend `users/me` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub organization_id: Option<String>,
}

/// Credentials carried by an incoming request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestCredentials {
    pub access_token: Option<String>,
}

impl RequestCredentials {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn bearer(token: impl Into<String>) -> Self {
        Self {
            access_token: Some(token.into()),
        }
    }
}
