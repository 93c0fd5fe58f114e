use crate::AppState;
use crate::video::{ProcessError, ProcessedVideo};
use axum::extract::Extension;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

#[derive(Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
}

#[derive(Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

#[derive(Serialize, Deserialize)]
pub struct VideoRequest {
    pub youtube_url: String,
}

/// Wire shape of a processing result. `error` is serialized even when absent
/// so success responses carry an explicit `"error": null`.
#[derive(Serialize, Deserialize)]
pub struct VideoResponse {
    pub success: bool,
    pub message: String,
    #[serde(default)]
    pub chunk_count: u32,
    #[serde(default)]
    pub error: Option<String>,
}

impl VideoResponse {
    fn processed(video: ProcessedVideo) -> Self {
        Self {
            success: true,
            message: format!("Successfully processed video: {}", video.youtube_url),
            chunk_count: video.chunk_count,
            error: None,
        }
    }

    fn failed(error: ProcessError) -> Self {
        match error {
            ProcessError::InvalidUrl => Self {
                success: false,
                message: "Invalid YouTube URL".into(),
                chunk_count: 0,
                error: Some("Please provide a valid YouTube URL".into()),
            },
            ProcessError::Internal(error) => Self {
                success: false,
                message: "Error processing video".into(),
                chunk_count: 0,
                error: Some(error.to_string()),
            },
        }
    }
}

pub async fn root() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(RootResponse {
            message: "TubeTalk API is running".into(),
        }),
    )
}

pub async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "ok".into(),
            message: "API is healthy".into(),
        }),
    )
}

/// Always answers 200; failures are reported in the body so clients only
/// branch on `success`.
#[axum::debug_handler]
pub async fn process_video(
    Extension(state): Extension<AppState>,
    Json(request): Json<VideoRequest>,
) -> impl IntoResponse {
    let response = match state.processor.process(&request.youtube_url).await {
        Ok(processed) => VideoResponse::processed(processed),
        Err(error) => {
            match &error {
                ProcessError::InvalidUrl => {
                    warn!(youtube_url = %request.youtube_url, "Rejected video URL")
                }
                ProcessError::Internal(error) => error!(?error, "Video processing failed"),
            }
            VideoResponse::failed(error)
        }
    };

    (StatusCode::OK, Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_processed_response_shape() {
        let response = VideoResponse::processed(ProcessedVideo {
            youtube_url: "https://www.youtube.com/watch?v=abc123".into(),
            chunk_count: 42,
        });

        assert!(response.success);
        assert_eq!(
            response.message,
            "Successfully processed video: https://www.youtube.com/watch?v=abc123"
        );
        assert_eq!(response.chunk_count, 42);
        assert!(response.error.is_none());
    }

    #[test]
    fn test_invalid_url_response_shape() {
        let response = VideoResponse::failed(ProcessError::InvalidUrl);

        assert!(!response.success);
        assert_eq!(response.message, "Invalid YouTube URL");
        assert_eq!(response.chunk_count, 0);
        assert_eq!(
            response.error.as_deref(),
            Some("Please provide a valid YouTube URL")
        );
    }

    #[test]
    fn test_internal_fault_response_shape() {
        let response = VideoResponse::failed(ProcessError::Internal(anyhow::anyhow!("boom")));

        assert!(!response.success);
        assert_eq!(response.message, "Error processing video");
        assert_eq!(response.chunk_count, 0);
        assert_eq!(response.error.as_deref(), Some("boom"));
    }

    #[test]
    fn test_success_serializes_null_error() {
        let response = VideoResponse::processed(ProcessedVideo {
            youtube_url: "https://youtu.be/abc123".into(),
            chunk_count: 42,
        });

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["chunk_count"], 42);
        assert!(json["error"].is_null());
        assert!(json.as_object().unwrap().contains_key("error"));
    }

    #[test]
    fn test_response_defaults_on_deserialize() {
        let response: VideoResponse =
            serde_json::from_str(r#"{"success": false, "message": "Invalid YouTube URL"}"#)
                .unwrap();

        assert_eq!(response.chunk_count, 0);
        assert!(response.error.is_none());
    }
}
