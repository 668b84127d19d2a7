mod analyzer;
mod cloud;
mod error;
pub mod http;
mod llm;
pub mod parser;
pub mod tracing;
pub mod types;
pub mod yt;

pub use analyzer::{
    builder::VideoAnalyzerBuilder, AnalyzerConfig, SpeakerAnalysis, TranscriptReport,
    TranscriptSource, VideoAnalysis, VideoAnalyzer,
};
pub use cloud::{svg::SvgCloudRenderer, CloudRenderer, ColorScheme, RenderedCloud};
pub use error::{AnalysisError, Error};
pub use llm::gemini;
pub use llm::summarizer::{compose_prompt, Summarizer, SummaryResponse};
