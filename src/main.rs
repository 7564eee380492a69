use anyhow::{bail, Context, Result};
use mindwell::config::Config;
use mindwell::content::Catalog;
use mindwell::referral::{MemoryReferralStore, PgReferralStore, ReferralError, ReferralStore};
use mindwell::retry::{with_retry_if, RetryConfig};
use mindwell::server::{self, AppState};
use std::sync::Arc;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("mindwell=info".parse()?),
        )
        .init();

    info!("Starting mindwell");

    let config = Config::from_env()?;

    // Refuse to serve a catalog that breaks its invariants
    let catalog = Catalog::get();
    let report = catalog.validate();
    for warning in &report.warnings {
        warn!("Catalog: {}", warning);
    }
    if report.has_errors() {
        for problem in &report.errors {
            error!("Catalog: {}", problem);
        }
        bail!("Article catalog failed validation with {} errors", report.errors.len());
    }
    info!("Loaded {} articles", catalog.len());

    let store: Arc<dyn ReferralStore> = match &config.database_url {
        Some(url) => {
            let store = with_retry_if(
                &RetryConfig::database_connect(),
                "Database connection",
                || PgReferralStore::connect(url, config.referral_reward_points),
                ReferralError::is_transient,
            )
            .await
            .context("Failed to connect to database")?;
            Arc::new(store)
        }
        None => {
            warn!("DATABASE_URL not set, referral data is kept in memory and lost on restart");
            Arc::new(MemoryReferralStore::new(config.referral_reward_points))
        }
    };

    let app = server::create_app(AppState::new(store, catalog, config.default_locale));

    let address = config.listen_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;
    info!("✓ Listening on {}", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
