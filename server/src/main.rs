use anyhow::Context;
use pantry_core::create_provider_from_env;
use pantry_server::config::ServerConfig;
use pantry_server::{api, build_router, telemetry, AppState};
use std::env;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Check for --openapi flag to dump the document and exit
    if env::args().any(|arg| arg == "--openapi") {
        let spec = api::openapi()
            .to_pretty_json()
            .context("failed to serialize OpenAPI document")?;
        println!("{}", spec);
        return Ok(());
    }

    telemetry::init_telemetry()?;

    let config = ServerConfig::from_env()?;
    let provider: AppState = Arc::from(create_provider_from_env()?);

    tracing::info!(
        provider = provider.provider_name(),
        model = provider.model_name(),
        "generation provider ready"
    );

    let app = build_router(provider);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    let local_addr = listener.local_addr()?;

    tracing::info!("Server listening on {}", local_addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", local_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
