use std::path::PathBuf;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::AppState;
use cardio_core::constants::DEFAULT_MODEL_PATH;
use cardio_core::{InferenceService, ServiceConfig, load_model};

/// Main entry point for the cardiovascular risk service
///
/// Performs the one-time classifier artifact load and starts the REST server.
/// A missing or corrupt artifact is not fatal: the process starts in a degraded
/// state where `/` responds normally and `/predict` reports the model as
/// unavailable until an operator replaces the artifact and restarts.
///
/// # Environment Variables
/// - `CARDIO_REST_ADDR`: REST server address (default: "0.0.0.0:8000")
/// - `CARDIO_MODEL_PATH`: classifier artifact location (default: "cardio_model.json")
///
/// # Returns
/// * `Ok(())` - If the server starts and runs successfully
/// * `Err(anyhow::Error)` - If server startup or runtime fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("cardio_run=info".parse()?)
                .add_directive("cardio_core=info".parse()?)
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rest_addr = std::env::var("CARDIO_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".into());
    let model_path = std::env::var("CARDIO_MODEL_PATH").unwrap_or_else(|_| DEFAULT_MODEL_PATH.into());
    let config = ServiceConfig::new(PathBuf::from(model_path), rest_addr)?;

    tracing::info!("++ Starting cardio REST on {}", config.rest_addr());

    let model = Arc::new(load_model(config.model_path()));
    let inference = InferenceService::new(model);

    let app = api_rest::router(AppState::new(inference));

    let listener = tokio::net::TcpListener::bind(config.rest_addr()).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
