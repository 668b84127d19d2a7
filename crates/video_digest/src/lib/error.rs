use crate::types::{AvailableTranscript, VideoInfo};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Parse error: {0}")]
    ParseError(&'static str),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failures that end an analysis request.
///
/// Collaborator failures (summarizer, renderer) never show up here; they
/// degrade the response instead.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("Invalid YouTube URL: {url}")]
    InvalidUrl { url: String },

    #[error("Invalid YouTube video id: {video_id}")]
    InvalidVideoId { video_id: String },

    #[error("No transcript or description available for video {video_id}")]
    ContentUnavailable {
        video_id: String,
        video_info: Option<VideoInfo>,
        available_transcripts: Vec<AvailableTranscript>,
    },

    #[error("Transcript not available for video {video_id}")]
    TranscriptNotFound {
        video_id: String,
        available_transcripts: Vec<AvailableTranscript>,
    },
}
