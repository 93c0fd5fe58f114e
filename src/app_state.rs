use crate::video::VideoProcessor;

/// Per-process shared state, injected into handlers via `Extension`.
#[derive(Clone, Default)]
pub struct AppState {
    pub processor: VideoProcessor,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            processor: VideoProcessor::default(),
        }
    }
}
