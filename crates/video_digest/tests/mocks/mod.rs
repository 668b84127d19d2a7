pub mod renderer;
pub mod summarizer;
pub mod video_source;
