pub mod middleware;
pub mod routes;

// Re-export public types and functions
pub use middleware::log_request_errors;
pub use routes::{HealthResponse, RootResponse, VideoRequest, VideoResponse};
pub use routes::{health_check, process_video, root};
