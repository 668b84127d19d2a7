use std::sync::Arc;

use crate::{cloud::CloudRenderer, yt::VideoSource, Summarizer, VideoAnalyzer};

/// Shared application state for HTTP handlers
pub struct AppState<V, S, R>
where
    V: VideoSource + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
    R: CloudRenderer + Send + Sync + 'static,
{
    pub analyzer: Arc<VideoAnalyzer<V, S, R>>,
}

impl<V, S, R> AppState<V, S, R>
where
    V: VideoSource + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
    R: CloudRenderer + Send + Sync + 'static,
{
    pub fn new(analyzer: VideoAnalyzer<V, S, R>) -> Self {
        Self {
            analyzer: Arc::new(analyzer),
        }
    }
}

impl<V, S, R> Clone for AppState<V, S, R>
where
    V: VideoSource + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
    R: CloudRenderer + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            analyzer: Arc::clone(&self.analyzer),
        }
    }
}
