use std::sync::{Arc, Mutex};
use video_digest::{Summarizer, SummaryResponse};

/// Records every prompt and the speakers it asks an analysis for.
#[derive(Clone)]
pub struct MockSummarizer {
    pub summary: String,
    pub prompts: Arc<Mutex<Vec<String>>>,
    pub requested_speakers: Arc<Mutex<Vec<Vec<String>>>>,
    pub fail_with: Option<String>,
}

impl MockSummarizer {
    pub fn new(summary: &str) -> Self {
        Self {
            summary: summary.to_string(),
            prompts: Arc::new(Mutex::new(Vec::new())),
            requested_speakers: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            fail_with: Some(msg.to_string()),
            ..Self::new("")
        }
    }

    /// Speaker names of the "falas de <name>" items of the prompt.
    fn speaker_items(prompt: &str) -> Vec<String> {
        prompt
            .lines()
            .filter_map(|line| line.split_once("das falas de "))
            .map(|(_, name)| name.trim().to_string())
            .collect()
    }
}

impl Summarizer for MockSummarizer {
    const CONTEXT_WINDOW_LIMIT: usize = 2_000;
    const SUMMARIZER_MODEL: &'static str = "mock-gemini";
    type Error = anyhow::Error;

    async fn summarize(&self, content: &str) -> Result<SummaryResponse, Self::Error> {
        self.prompts.lock().unwrap().push(content.to_string());
        self.requested_speakers
            .lock()
            .unwrap()
            .push(Self::speaker_items(content));

        if let Some(ref msg) = self.fail_with {
            return Err(anyhow::anyhow!("{}", msg));
        }
        Ok(SummaryResponse {
            summary: self.summary.clone(),
        })
    }
}
