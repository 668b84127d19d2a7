use std::any::Any;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::state::AppState;
use crate::{cloud::CloudRenderer, yt::VideoSource, AnalysisError, Summarizer};

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub youtube_url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct Success<T> {
    pub status: &'static str,
    #[serde(flatten)]
    pub data: T,
}

impl<T: Serialize> Success<T> {
    fn new(data: T) -> Json<Self> {
        Json(Success {
            status: "success",
            data,
        })
    }
}

const EXAMPLE_URL: &str = "https://www.youtube.com/watch?v=VIDEO_ID";

impl IntoResponse for AnalysisError {
    fn into_response(self) -> Response {
        match self {
            AnalysisError::InvalidUrl { url } => (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "status": "error",
                    "error": "Invalid YouTube URL",
                    "received_url": url,
                })),
            )
                .into_response(),
            AnalysisError::InvalidVideoId { video_id } => (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "status": "error",
                    "error": "Invalid YouTube video id",
                    "video_id": video_id,
                })),
            )
                .into_response(),
            AnalysisError::ContentUnavailable {
                video_id,
                video_info,
                available_transcripts,
            } => (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "status": "error",
                    "error": "Could not obtain a transcript or description for the video",
                    "video_id": video_id,
                    "video_info": video_info,
                    "available_transcripts": available_transcripts,
                    "message": "This video may not have captions available",
                })),
            )
                .into_response(),
            AnalysisError::TranscriptNotFound {
                video_id,
                available_transcripts,
            } => (
                StatusCode::NOT_FOUND,
                Json(json!({
                    "status": "error",
                    "error": "Transcript not available for this video",
                    "video_id": video_id,
                    "available_transcripts": available_transcripts,
                })),
            )
                .into_response(),
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /
pub async fn home() -> impl IntoResponse {
    Json(json!({
        "message": "YouTube video analysis API",
        "version": env!("CARGO_PKG_VERSION"),
        "transcript_method": "YouTube captions",
        "endpoints": {
            "/analyze-youtube": {
                "method": "POST",
                "description": "Analyze a YouTube video",
                "body": { "youtube_url": "YouTube video URL" }
            },
            "/transcript-only/:video_id": {
                "method": "GET",
                "description": "Fetch only the transcript of a video",
                "example": "/transcript-only/dQw4w9WgXcQ"
            },
            "/health": {
                "method": "GET",
                "description": "API health check"
            }
        }
    }))
}

/// GET /health
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "message": "YouTube video analysis API is running",
        "transcript_method": "YouTube captions",
        "endpoints": {
            "/": "GET - API information",
            "/analyze-youtube": "POST - Analyze a YouTube video",
            "/transcript-only/:video_id": "GET - Fetch only the transcript",
            "/health": "GET - API status"
        }
    }))
}

/// GET /analyze-youtube
pub async fn analyze_usage() -> impl IntoResponse {
    Json(json!({
        "message": "Endpoint for analyzing YouTube videos",
        "method": "POST",
        "content_type": "application/json",
        "example_body": { "youtube_url": EXAMPLE_URL },
        "usage": "Send a POST request with the YouTube URL in the JSON body",
        "transcript_source": "YouTube captions"
    }))
}

/// POST /analyze-youtube
pub async fn analyze_youtube<V, S, R>(State(state): State<AppState<V, S, R>>, body: Bytes) -> Response
where
    V: VideoSource + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
    R: CloudRenderer + Send + Sync + 'static,
{
    let youtube_url = serde_json::from_slice::<AnalyzeRequest>(&body)
        .ok()
        .and_then(|req| req.youtube_url)
        .filter(|url| !url.trim().is_empty());

    let Some(youtube_url) = youtube_url else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "status": "error",
                "error": "A YouTube URL is required",
                "example": { "youtube_url": EXAMPLE_URL },
            })),
        )
            .into_response();
    };

    match state.analyzer.analyze(youtube_url.trim()).await {
        Ok(analysis) => Success::new(analysis).into_response(),
        Err(e) => {
            tracing::info!(error = %e, "Analysis request failed");
            e.into_response()
        }
    }
}

/// GET /transcript-only/:video_id
pub async fn transcript_only<V, S, R>(
    State(state): State<AppState<V, S, R>>,
    Path(video_id): Path<String>,
) -> Response
where
    V: VideoSource + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
    R: CloudRenderer + Send + Sync + 'static,
{
    match state.analyzer.transcript(&video_id).await {
        Ok(report) => Success::new(report).into_response(),
        Err(e) => {
            tracing::info!(error = %e, "Transcript request failed");
            e.into_response()
        }
    }
}

pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "status": "error",
            "error": "Endpoint not found",
            "available_endpoints": ["/", "/analyze-youtube", "/transcript-only/:video_id", "/health"],
        })),
    )
}

pub async fn method_not_allowed() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({
            "status": "error",
            "error": "Method not allowed",
            "message": "Check the HTTP method and endpoint",
            "endpoints": {
                "/": ["GET"],
                "/analyze-youtube": ["GET", "POST"],
                "/transcript-only/:video_id": ["GET"],
                "/health": ["GET"]
            }
        })),
    )
}

pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .cloned()
        .or_else(|| err.downcast_ref::<&str>().map(|s| s.to_string()))
        .unwrap_or_else(|| "unknown panic".to_string());

    tracing::error!(%detail, "Request handler panicked");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({
            "status": "error",
            "error": format!("Internal error: {detail}"),
        })),
    )
        .into_response()
}
