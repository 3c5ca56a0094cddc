use pathway_service::config::PathwayConfig;
use pathway_service::services::metrics::init_metrics;
use pathway_service::startup::Application;
use service_core::observability::init_tracing;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let config = PathwayConfig::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::io::Error::other(format!("Configuration error: {}", e))
    })?;

    init_tracing(
        "pathway-service",
        "info",
        config.telemetry.otlp_endpoint.as_deref(),
    );

    init_metrics().map_err(|e| {
        tracing::error!("Failed to initialize metrics: {}", e);
        std::io::Error::other(format!("Metrics error: {}", e))
    })?;

    let app = Application::build(config).await.map_err(|e| {
        tracing::error!("Failed to build application: {}", e);
        std::io::Error::other(format!("Startup error: {}", e))
    })?;

    tracing::info!(
        "Learning Pathway Creator server is running on port {}",
        app.port()
    );
    tracing::info!("Health check: http://localhost:{}/api/health", app.port());

    app.run_until_stopped().await
}
