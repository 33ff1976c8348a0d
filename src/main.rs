//! Chat Gateway - Main entry point
//!
//! This binary creates and runs the HTTP server. Configuration is read
//! from environment variables once at startup; the completion client and
//! its connection pool are built here and shared across requests.

use anyhow::{Context, Result};
use chat_gateway::{router, AppConfig, AppState, CompletionClient};
use chrono::Local;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Custom time formatter that uses local timezone (respects TZ environment variable)
struct LocalTime;

impl tracing_subscriber::fmt::time::FormatTime for LocalTime {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        let now = Local::now();
        write!(w, "{}", now.format("%Y-%m-%d %H:%M:%S"))
    }
}

/// Initialize tracing with an env-driven filter.
///
/// Noisy HTTP library logs are suppressed even when RUST_LOG widens the
/// base filter to debug or trace.
fn init_tracing() {
    let no_color = std::env::var("NO_COLOR").is_ok();

    let base_filter =
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info,chat_gateway=debug".to_string());
    let filter_str = format!("{},hyper=warn,h2=warn,reqwest=warn", base_filter);
    let filter = tracing_subscriber::EnvFilter::new(filter_str);

    if no_color {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_timer(LocalTime)
                    .with_ansi(false),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_timer(LocalTime))
            .init();
    }
}

/// Create HTTP client with connection pooling.
fn create_http_client(config: &AppConfig) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(config.request_timeout_secs))
        .pool_max_idle_per_host(20)
        .pool_idle_timeout(std::time::Duration::from_secs(90))
        .tcp_keepalive(std::time::Duration::from_secs(60))
        .build()
        .context("Failed to build HTTP client")
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (before reading any environment variables)
    dotenvy::dotenv().ok();

    init_tracing();

    let config = AppConfig::from_env()?;

    if config.anthropic.api_key.is_none() {
        tracing::warn!(
            "ANTHROPIC_API_KEY is not set; /chat requests will fail until it is configured"
        );
    }

    let http_client = create_http_client(&config)?;
    let completion = CompletionClient::new(&config, http_client);
    let state = Arc::new(AppState { completion });

    let app = router(state);

    let host: IpAddr = config
        .server
        .host
        .parse()
        .with_context(|| format!("Invalid HOST value: {}", config.server.host))?;
    let addr = SocketAddr::from((host, config.server.port));

    tracing::info!("Starting chat gateway on {}", addr);
    tracing::info!("Chat API: POST /chat");
    tracing::info!("Health check: GET /health");
    tracing::info!("Swagger UI: /swagger-ui");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
