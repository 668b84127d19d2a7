//! HTTP API
//!
//! - GET  / - API description
//! - GET  /analyze-youtube - usage of the analysis endpoint
//! - POST /analyze-youtube - analyze a video: `{ "youtube_url": "..." }`
//! - GET  /transcript-only/:video_id - transcript only
//! - GET  /health - health check

mod handlers;
mod routes;
mod state;

pub use routes::create_router;
pub use state::AppState;
