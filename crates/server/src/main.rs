//! # forecast-server
//!
//! REST API server for the forecast engine.

use anyhow::{Context, Result};
use axum::{
    routing::{get, post},
    Json, Router,
};
use forecast_facade::{ForecastConfig, ForecastEngine, Locale};
use std::env;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod routes;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    engine: Arc<ForecastEngine>,
}

impl AppState {
    pub fn new(engine: ForecastEngine) -> Self {
        Self {
            engine: Arc::new(engine),
        }
    }
}

/// Liveness probe - is the server running?
async fn liveness() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "alive",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health/live", get(liveness))
        .route("/health", get(liveness))
        .route("/api/v1/forecast", post(routes::forecast))
        .route("/api/v1/forecast/scenario", post(routes::scenario))
        .route("/api/v1/forecast/scenarios", get(routes::scenarios))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

fn engine_from_env() -> Result<ForecastEngine> {
    let locale = match env::var("FORECAST_LOCALE") {
        Ok(code) => code
            .parse::<Locale>()
            .with_context(|| format!("invalid FORECAST_LOCALE {:?}", code))?,
        Err(_) => Locale::default(),
    };
    let config = ForecastConfig::builder().locale(locale).build()?;
    Ok(ForecastEngine::new(config)?)
}

fn bind_address() -> Result<SocketAddr> {
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .unwrap_or_else(|_| "8080".to_string())
        .parse()
        .context("PORT must be a valid number")?;
    format!("{}:{}", host, port)
        .parse()
        .with_context(|| format!("invalid HOST:PORT configuration {}:{}", host, port))
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (optional - won't fail if missing)
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "forecast_server=info,forecast_core=info,tower_http=info".into()),
        )
        .init();

    let engine = engine_from_env()?;
    let locale = engine.config().locale;
    let addr = bind_address()?;

    tracing::info!(
        %locale,
        "forecast-server v{} listening on {}",
        env!("CARGO_PKG_VERSION"),
        addr
    );

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    axum::serve(listener, app(AppState::new(engine)))
        .await
        .context("server error")?;
    Ok(())
}
