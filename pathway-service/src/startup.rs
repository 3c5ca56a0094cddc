//! Application startup and lifecycle management.
//!
//! Builds the HTTP router for the pathway API and runs it until a shutdown
//! signal arrives.

use crate::config::PathwayConfig;
use crate::handlers::{
    api_health, generate_course_titles, generate_module_titles, generate_segment_content,
    generate_segment_overview, health_check, metrics, refine_course_titles, refine_module_titles,
    refine_segment_content, refine_segment_overview, route_not_found,
};
use crate::services::{CurriculumGenerator, LatencyProfile, MockCurriculumGenerator};
use axum::{
    extract::DefaultBodyLimit,
    middleware::from_fn,
    routing::{get, get_service, post, MethodRouter},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::{
    metrics::metrics_middleware,
    panic::panic_response,
    tracing::{make_request_span, request_id_middleware},
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: PathwayConfig,
    pub generator: Arc<dyn CurriculumGenerator>,
}

impl AppState {
    /// State backed by the template generator, with latency from `config`.
    pub fn with_mock_generator(config: PathwayConfig) -> Self {
        let latency = LatencyProfile::from(&config.latency);
        tracing::info!(?latency, "Initialized mock curriculum generator");

        Self {
            config,
            generator: Arc::new(MockCurriculumGenerator::new(latency)),
        }
    }
}

/// Build the router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/api/health", get(api_health).fallback(route_not_found))
        .route(
            "/generateCourseTitles",
            post(generate_course_titles).fallback(route_not_found),
        )
        .route(
            "/refineCourseTitles",
            post(refine_course_titles).fallback(route_not_found),
        )
        .route(
            "/generateModuleTitles",
            post(generate_module_titles).fallback(route_not_found),
        )
        .route(
            "/refineModuleTitles",
            post(refine_module_titles).fallback(route_not_found),
        )
        .route(
            "/generateSegmentOverview",
            post(generate_segment_overview).fallback(route_not_found),
        )
        .route(
            "/refineSegmentOverview",
            post(refine_segment_overview).fallback(route_not_found),
        )
        .route(
            "/generateSegmentContent",
            post(generate_segment_content).fallback(route_not_found),
        )
        .route(
            "/refineSegmentContent",
            post(refine_segment_content).fallback(route_not_found),
        )
        .route("/health", get(health_check).fallback(route_not_found))
        .route("/metrics", get(metrics).fallback(route_not_found));

    let api = match &state.config.client.bundle_dir {
        Some(dir) => {
            tracing::info!(dir = %dir.display(), "Serving client bundle");
            // Unknown files fall back to index.html for client-side routes.
            // Other methods keep the JSON 404.
            let bundle = ServeDir::new(dir).fallback(ServeFile::new(dir.join("index.html")));
            let bundle: MethodRouter = get_service(bundle).fallback(route_not_found);
            api.fallback_service(bundle)
        }
        None => api.fallback(route_not_found),
    };

    let max_body_bytes = state.config.limits.max_body_bytes;

    api.layer(DefaultBodyLimit::max(max_body_bytes))
        .with_state(state)
        .layer(CatchPanicLayer::custom(panic_response))
        // Add metrics middleware
        .layer(from_fn(metrics_middleware))
        // Add tracing layer
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        // Add tracing middleware for request_id
        .layer(from_fn(request_id_middleware))
        .layer(CorsLayer::permissive())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application with the template generator.
    pub async fn build(config: PathwayConfig) -> Result<Self, AppError> {
        let state = AppState::with_mock_generator(config);
        Self::build_with_state(state).await
    }

    /// Build the application around an existing state, e.g. a different
    /// generator.
    pub async fn build_with_state(state: AppState) -> Result<Self, AppError> {
        // Bind HTTP listener (port 0 = random port for testing)
        let addr = SocketAddr::from(([0, 0, 0, 0], state.config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind HTTP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Pathway service: HTTP on port {}", port);

        Ok(Self {
            port,
            listener,
            router: build_router(state),
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until stopped.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| {
                tracing::error!("HTTP server error: {}", e);
                std::io::Error::other(format!("HTTP server error: {}", e))
            })
    }
}
