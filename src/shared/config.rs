//! Application configuration. Listen address, identity provider, backend API.

use serde::Deserialize;
use std::time::Duration;

/// Default bound on a single Entity Resolver call. Expiry maps to the `Error` state.
pub const DEFAULT_RESOLVE_TIMEOUT_MS: u64 = 5000;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Environment variables shared with the browser bundle; read without prefix.
pub const ENV_API_BASE_URL: &str = "NEXT_PUBLIC_API_BASE_URL";
pub const ENV_SUPABASE_URL: &str = "NEXT_PUBLIC_SUPABASE_URL";
pub const ENV_SUPABASE_ANON_KEY: &str = "NEXT_PUBLIC_SUPABASE_ANON_KEY";

#[derive(Debug, Deserialize, Default, Clone)]
pub struct AppConfig {
    /// Listen address. Read from WORKSPACE_LINKS_BIND_ADDR.
    #[serde(default)]
    pub bind_addr: Option<String>,

    /// Resolver timeout in ms. Read from WORKSPACE_LINKS_RESOLVE_TIMEOUT_MS.
    #[serde(default)]
    pub resolve_timeout_ms: Option<u64>,

    // ─────────────────────────────────────────────────────────────────────────
    // Backend API
    // ─────────────────────────────────────────────────────────────────────────
    /// Base URL for backend API calls. Read from NEXT_PUBLIC_API_BASE_URL.
    #[serde(default)]
    pub api_base_url: Option<String>,

    // ─────────────────────────────────────────────────────────────────────────
    // Identity provider (Supabase)
    // ─────────────────────────────────────────────────────────────────────────
    /// Read from NEXT_PUBLIC_SUPABASE_URL.
    #[serde(default)]
    pub supabase_url: Option<String>,

    /// Read from NEXT_PUBLIC_SUPABASE_ANON_KEY.
    #[serde(default)]
    pub supabase_anon_key: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("WORKSPACE_LINKS"));
        if let Ok(path) = std::env::var("WORKSPACE_LINKS_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        let mut cfg: Self = c.build()?.try_deserialize()?;
        // NEXT_PUBLIC_* are shared with the frontend build, so they carry no prefix
        if let Ok(s) = std::env::var(ENV_API_BASE_URL) {
            cfg.api_base_url = Some(s);
        }
        if let Ok(s) = std::env::var(ENV_SUPABASE_URL) {
            cfg.supabase_url = Some(s);
        }
        if let Ok(s) = std::env::var(ENV_SUPABASE_ANON_KEY) {
            cfg.supabase_anon_key = Some(s);
        }
        Ok(cfg)
    }

    pub fn bind_addr_or_default(&self) -> String {
        self.bind_addr
            .clone()
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
    }

    /// Returns resolver timeout. Defaults to DEFAULT_RESOLVE_TIMEOUT_MS; zero is treated as unset.
    pub fn resolve_timeout(&self) -> Duration {
        let ms = self
            .resolve_timeout_ms
            .filter(|ms| *ms > 0)
            .unwrap_or(DEFAULT_RESOLVE_TIMEOUT_MS);
        Duration::from_millis(ms)
    }

    /// Backend base URL without trailing slash.
    pub fn api_base_url_or_default(&self) -> String {
        non_blank(&self.api_base_url)
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_string()
    }

    pub fn supabase_url(&self) -> Option<String> {
        non_blank(&self.supabase_url).map(|s| s.trim_end_matches('/').to_string())
    }

    pub fn supabase_anon_key(&self) -> Option<String> {
        non_blank(&self.supabase_anon_key).map(str::to_string)
    }

    /// True if the identity provider credentials are both present.
    pub fn is_auth_configured(&self) -> bool {
        self.supabase_url().is_some() && self.supabase_anon_key().is_some()
    }

    /// Which environment-provided settings are present. Values are never included.
    pub fn env_report(&self) -> Vec<(&'static str, bool)> {
        vec![
            (ENV_API_BASE_URL, non_blank(&self.api_base_url).is_some()),
            (ENV_SUPABASE_URL, self.supabase_url().is_some()),
            (ENV_SUPABASE_ANON_KEY, self.supabase_anon_key().is_some()),
        ]
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}
