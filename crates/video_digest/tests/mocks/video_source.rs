use std::sync::{Arc, Mutex};
use video_digest::{
    parser::YtHtmlDocument,
    types::{CaptionTrack, Transcript},
    yt::VideoSource,
};

#[derive(Clone)]
pub struct MockVideoSource {
    pub html: String,
    pub transcript: String,
    pub page_fail_with: Option<String>,
    pub transcript_fail_with: Option<String>,
    pub page_calls: Arc<Mutex<Vec<String>>>,
    pub transcript_calls: Arc<Mutex<Vec<CaptionTrack>>>,
}

impl MockVideoSource {
    pub fn new(html: String, transcript: &str) -> Self {
        Self {
            html,
            transcript: transcript.to_string(),
            page_fail_with: None,
            transcript_fail_with: None,
            page_calls: Arc::new(Mutex::new(Vec::new())),
            transcript_calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn from_fixture(transcript: &str) -> Self {
        Self::new(include_str!("../fixtures/watch.html").to_string(), transcript)
    }

    pub fn failing_page(msg: &str) -> Self {
        Self {
            page_fail_with: Some(msg.to_string()),
            ..Self::new(String::new(), "")
        }
    }

    pub fn failing_transcript(msg: &str) -> Self {
        Self {
            transcript_fail_with: Some(msg.to_string()),
            ..Self::from_fixture("")
        }
    }
}

impl VideoSource for MockVideoSource {
    const WATCH_URL: &'static str = "https://youtube.com/mock";
    type Error = anyhow::Error;

    async fn scrape_watch_page(&self, video_id: &str) -> anyhow::Result<YtHtmlDocument> {
        self.page_calls.lock().unwrap().push(video_id.to_string());
        if let Some(ref msg) = self.page_fail_with {
            return Err(anyhow::anyhow!("{}", msg));
        }
        Ok(YtHtmlDocument::new(self.html.clone()))
    }

    async fn fetch_transcript(&self, track: &CaptionTrack) -> anyhow::Result<Transcript> {
        self.transcript_calls.lock().unwrap().push(track.clone());
        if let Some(ref msg) = self.transcript_fail_with {
            return Err(anyhow::anyhow!("{}", msg));
        }
        Ok(Transcript {
            language_code: track.language_code.clone(),
            text: self.transcript.clone(),
        })
    }
}
