use std::time::Duration;

use thiserror::Error;
use tracing::info;

/// Number of transcript chunks reported while the real pipeline is stubbed out.
pub const MOCK_CHUNK_COUNT: u32 = 42;

/// Simulated processing time on the success path.
pub const PROCESSING_DELAY: Duration = Duration::from_secs(1);

/// Outcome of a successful processing run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedVideo {
    pub youtube_url: String,
    pub chunk_count: u32,
}

#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("Please provide a valid YouTube URL")]
    InvalidUrl,

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

/// Accepts anything containing a YouTube host fragment. Substring check, not
/// a URL parse, so "fakeyoutube.com/x" passes too.
pub fn is_youtube_url(url: &str) -> bool {
    !url.is_empty() && (url.contains("youtube.com") || url.contains("youtu.be"))
}

/// Stand-in for the transcript pipeline: validates the URL shape, waits the
/// simulated processing time, reports a fixed chunk count.
#[derive(Debug, Clone)]
pub struct VideoProcessor {
    delay: Duration,
}

impl Default for VideoProcessor {
    fn default() -> Self {
        Self::new(PROCESSING_DELAY)
    }
}

impl VideoProcessor {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub async fn process(&self, youtube_url: &str) -> Result<ProcessedVideo, ProcessError> {
        if !is_youtube_url(youtube_url) {
            return Err(ProcessError::InvalidUrl);
        }

        info!(%youtube_url, "Processing YouTube video");

        // TODO: fetch the transcript and chunk it here once the pipeline lands
        tokio::time::sleep(self.delay).await;

        Ok(ProcessedVideo {
            youtube_url: youtube_url.to_string(),
            chunk_count: MOCK_CHUNK_COUNT,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_youtube_url() {
        assert!(is_youtube_url("https://www.youtube.com/watch?v=abc123"));
        assert!(is_youtube_url("https://youtu.be/abc123"));
        assert!(is_youtube_url("youtube.com"));

        // Substring check only, no host parsing
        assert!(is_youtube_url("https://fakeyoutube.com/watch?v=abc123"));
        assert!(is_youtube_url("notyoutu.be/x"));

        // Invalid cases
        assert!(!is_youtube_url(""));
        assert!(!is_youtube_url("https://vimeo.com/12345"));
        assert!(!is_youtube_url("youtube"));
    }

    #[tokio::test]
    async fn test_process_valid_url() {
        let processor = VideoProcessor::new(Duration::ZERO);
        let processed = processor
            .process("https://www.youtube.com/watch?v=abc123")
            .await
            .unwrap();

        assert_eq!(processed.youtube_url, "https://www.youtube.com/watch?v=abc123");
        assert_eq!(processed.chunk_count, MOCK_CHUNK_COUNT);
    }

    #[tokio::test]
    async fn test_process_invalid_url() {
        let processor = VideoProcessor::new(Duration::ZERO);

        let error = processor.process("").await.unwrap_err();
        assert!(matches!(error, ProcessError::InvalidUrl));

        let error = processor.process("https://vimeo.com/12345").await.unwrap_err();
        assert!(matches!(error, ProcessError::InvalidUrl));
        assert_eq!(error.to_string(), "Please provide a valid YouTube URL");
    }

    #[tokio::test]
    async fn test_process_waits_for_delay() {
        let processor = VideoProcessor::new(Duration::from_millis(50));
        let start = std::time::Instant::now();

        processor.process("https://youtu.be/abc123").await.unwrap();

        assert!(start.elapsed() >= Duration::from_millis(50));
    }
}
