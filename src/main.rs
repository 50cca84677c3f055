//! Wiring & DI. Entry point: bootstrap adapters, inject into services, serve HTTP.
//! No business logic here.

use dotenv::dotenv;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use workspace_links::adapters::auth::SupabaseAuthProvider;
use workspace_links::adapters::backend::{HttpEntityResolver, HttpUserDirectory};
use workspace_links::adapters::http::{AppState, build_router};
use workspace_links::ports::{AuthGatewayProvider, EntityResolver, UserDirectory};
use workspace_links::shared::config::AppConfig;
use workspace_links::usecases::{CurrentUserService, SessionService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!(cwd = %cwd.display(), "no .env found (check CWD)"),
    }

    let cfg = AppConfig::load()?;
    for (name, present) in cfg.env_report() {
        if present {
            info!("{} is set", name);
        } else {
            info!("{} is not set", name);
        }
    }

    // --- Identity provider: unconfigured means every session is anonymous ---
    let auth: Arc<dyn AuthGatewayProvider> = Arc::new(SupabaseAuthProvider::new(
        cfg.supabase_url(),
        cfg.supabase_anon_key(),
    ));
    if !auth.is_configured() {
        warn!("Supabase URL / anon key missing; /api/auth/session will always return null");
    }

    // --- Backend API ---
    let api_base = cfg.api_base_url_or_default();
    info!(api_base = %api_base, "backend API");
    let resolver: Arc<dyn EntityResolver> = Arc::new(HttpEntityResolver::new(api_base.clone()));
    let directory: Arc<dyn UserDirectory> = Arc::new(HttpUserDirectory::new(api_base));

    // --- Services ---
    let sessions = Arc::new(SessionService::new(auth));
    let users = Arc::new(CurrentUserService::new(Arc::clone(&sessions), directory));

    let resolve_timeout = cfg.resolve_timeout();
    info!(
        timeout_ms = resolve_timeout.as_millis() as u64,
        "short-link resolve timeout"
    );

    let app = build_router(AppState {
        sessions,
        users,
        resolver,
        resolve_timeout,
    });

    let addr = cfg.bind_addr_or_default();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| anyhow::anyhow!("bind {}: {}", addr, e))?;
    info!(addr = %addr, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}
