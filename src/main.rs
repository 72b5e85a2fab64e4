use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pushlead::config::Config;
use pushlead::crm_client::CrmClient;
use pushlead::handlers::{self, AppState};
use pushlead::notifier::TelegramNotifier;

/// Main entry point for the application.
///
/// This function initializes the application, including:
/// - Logging and tracing.
/// - Configuration loading.
/// - Outbound HTTP clients (CRM, Telegram).
/// - HTTP routes and middleware.
///
/// It then starts the Axum server.
///
/// # Returns
///
/// * `anyhow::Result<()>` - Ok if the server runs successfully, or an error if initialization fails.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pushlead=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;

    // Initialize outbound clients
    let crm = CrmClient::new(&config)?;
    tracing::info!("✓ CRM client initialized: {}", config.crm_url);

    let notifier = TelegramNotifier::new(&config)?;
    tracing::info!("✓ Telegram notifier initialized");

    // Build application state
    let app_state = Arc::new(AppState {
        config: config.clone(),
        crm,
        notifier,
    });

    let app = handlers::router(app_state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
