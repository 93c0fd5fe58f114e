pub mod api;
pub mod app_state;
pub mod config;
pub mod video;

use axum::Router;
use axum::extract::Extension;
use axum::http::HeaderValue;
use axum::routing::{get, post};
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tracing::info;

//
// Re-export
//
pub use api::{
    HealthResponse, RootResponse, VideoRequest, VideoResponse, health_check, log_request_errors,
    process_video, root,
};
pub use app_state::AppState;
pub use config::Config;
pub use video::{MOCK_CHUNK_COUNT, ProcessError, ProcessedVideo, VideoProcessor};

pub async fn run(config: Config) {
    // Ensure we're in a proper async context by yielding once
    tokio::task::yield_now().await;

    let state = AppState::new();

    // CORS layer. Credentialed requests cannot use wildcards, so origins are
    // an explicit list and methods/headers are mirrored from the request.
    let origins = config
        .allowed_origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .expect("Invalid allowed origin")
        })
        .collect::<Vec<_>>();
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    let app = Router::new()
        .route("/", get(root))
        .route("/api/health", get(health_check))
        .route("/api/process-video", post(process_video))
        .layer(axum::middleware::from_fn(api::log_request_errors))
        .layer(cors)
        .layer(Extension(state));

    let addr = config.listen_addr();
    info!("API listening on {addr}");
    axum::serve(
        TcpListener::bind(&addr).await.expect("Failed to bind API"),
        app,
    )
    .await
    .expect("API server error");
}
