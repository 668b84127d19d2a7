pub mod builder;

use chrono::{DateTime, Utc};
use serde::Serialize;
use transcript_text::{
    top_frequencies, MatchStrategy, Normalizer, SpeakerSplitter, StopWordLanguage, StopWords,
    WordFrequencies, DEFAULT_SPEAKERS, DEFAULT_TOP_WORDS,
};

use crate::{
    cloud::{render_or_none, CloudRenderer, ColorScheme, RenderedCloud},
    error::AnalysisError,
    llm::summarizer::compose_prompt,
    parser::{extract_video_id, is_valid_video_id, parse_watch_page, select_caption_track},
    types::{AvailableTranscript, PlayerResponse, Transcript, VideoInfo, WatchPage},
    yt::VideoSource,
    Summarizer,
};

/// Knobs of the analysis, passed in rather than baked into the text helpers
/// so one process can serve several languages or casts.
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Caption languages in order of preference
    pub languages: Vec<String>,
    pub speakers: Vec<String>,
    pub stop_word_language: StopWordLanguage,
    pub extra_stop_words: Vec<String>,
    pub top_words: usize,
    pub color_scheme: ColorScheme,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            languages: vec!["pt".into(), "pt-BR".into()],
            speakers: DEFAULT_SPEAKERS.iter().map(|s| s.to_string()).collect(),
            stop_word_language: StopWordLanguage::Portuguese,
            extra_stop_words: Vec::new(),
            top_words: DEFAULT_TOP_WORDS,
            color_scheme: ColorScheme::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TranscriptSource {
    #[serde(rename = "youtube_captions")]
    Captions,
    #[serde(rename = "youtube_description")]
    Description,
}

#[derive(Debug, Clone, Serialize)]
pub struct SpeakerAnalysis {
    pub speaker: String,
    pub matched_by: Option<MatchStrategy>,
    pub text_length: usize,
    pub word_frequencies: WordFrequencies,
    pub word_cloud: Option<RenderedCloud>,
}

#[derive(Debug, Clone, Serialize)]
pub struct VideoAnalysis {
    pub video_id: String,
    pub video_info: Option<VideoInfo>,
    pub transcript_source: TranscriptSource,
    pub transcript_language: Option<String>,
    pub available_transcripts: Vec<AvailableTranscript>,
    /// In characters
    pub transcript_length: usize,
    pub summary: Option<String>,
    pub summary_error: Option<String>,
    pub word_frequencies: WordFrequencies,
    pub word_cloud: Option<RenderedCloud>,
    pub speakers: Vec<SpeakerAnalysis>,
    pub analyzed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TranscriptReport {
    pub video_id: String,
    pub language_code: String,
    pub transcript: String,
    pub transcript_length: usize,
    pub available_transcripts: Vec<AvailableTranscript>,
}

// The YouTube video analysis pipeline
#[derive(Debug)]
pub struct VideoAnalyzer<V, S, R>
where
    V: VideoSource + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
    R: CloudRenderer + Send + Sync + 'static,
{
    source: V,
    summarizer: S,
    renderer: R,
    config: AnalyzerConfig,
    normalizer: Normalizer,
    splitter: SpeakerSplitter,
}

impl<V, S, R> VideoAnalyzer<V, S, R>
where
    V: VideoSource + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
    R: CloudRenderer + Send + Sync + 'static,
{
    pub fn new(source: V, summarizer: S, renderer: R, config: AnalyzerConfig) -> Self {
        let stop_words = StopWords::for_language(config.stop_word_language)
            .with_words(&config.extra_stop_words);

        VideoAnalyzer {
            normalizer: Normalizer::new(stop_words),
            splitter: SpeakerSplitter::new(config.speakers.iter().cloned()),
            source,
            summarizer,
            renderer,
            config,
        }
    }

    /// Loads and parses the watch page. Any failure is logged and treated as
    /// a page without metadata or captions.
    #[tracing::instrument(skip(self))]
    async fn load_watch_page(&self, video_id: &str) -> WatchPage {
        let doc = match self.source.scrape_watch_page(video_id).await {
            Ok(doc) => doc,
            Err(e) => {
                tracing::warn!(error = ?e, "Failed to scrape watch page");
                return WatchPage::default();
            }
        };

        match doc.to_json::<PlayerResponse>() {
            Ok(player_response) => parse_watch_page(player_response),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to parse watch page");
                WatchPage::default()
            }
        }
    }

    /// Tracks in one of the preferred languages
    fn available_transcripts(&self, page: &WatchPage) -> Vec<AvailableTranscript> {
        page.caption_tracks
            .iter()
            .filter(|t| {
                self.config
                    .languages
                    .iter()
                    .any(|l| l.eq_ignore_ascii_case(&t.language_code))
            })
            .map(AvailableTranscript::from)
            .collect()
    }

    #[tracing::instrument(skip_all)]
    async fn fetch_transcript(&self, page: &WatchPage) -> Option<Transcript> {
        let Some(track) = select_caption_track(&page.caption_tracks, &self.config.languages) else {
            tracing::info!(languages = ?self.config.languages, "No caption track in preferred languages");
            return None;
        };

        self.source
            .fetch_transcript(track)
            .await
            .inspect_err(|e| tracing::warn!(error = ?e, "Failed to fetch transcript"))
            .ok()
            .filter(|t| !t.text.trim().is_empty())
    }

    #[tracing::instrument(skip_all)]
    async fn summarize(
        &self,
        transcript: &str,
        video_info: Option<&VideoInfo>,
    ) -> Result<String, String> {
        let prompt = compose_prompt(
            transcript,
            video_info,
            self.splitter.speakers(),
            self.config.top_words,
            S::CONTEXT_WINDOW_LIMIT,
        );

        self.summarizer
            .summarize(&prompt)
            .await
            .map(|resp| resp.summary)
            .map_err(|e| {
                tracing::error!(error = ?e, model = S::SUMMARIZER_MODEL, "Failed to summarize transcript");
                format!("{e:?}")
            })
    }

    /// Word frequencies and clouds for the whole text and for each speaker.
    #[tracing::instrument(skip_all, fields(text_len = text.len()))]
    fn analyze_text(
        &self,
        text: &str,
    ) -> (WordFrequencies, Option<RenderedCloud>, Vec<SpeakerAnalysis>) {
        let top_words = self.config.top_words;

        let word_frequencies = top_frequencies(&self.normalizer.normalize(text), top_words);
        let word_cloud = render_or_none(&self.renderer, &word_frequencies, self.config.color_scheme);

        let speakers = self
            .splitter
            .split(text)
            .into_iter()
            .enumerate()
            .map(|(idx, segment)| {
                let word_frequencies =
                    top_frequencies(&self.normalizer.normalize(&segment.text), top_words);
                let word_cloud = render_or_none(
                    &self.renderer,
                    &word_frequencies,
                    ColorScheme::for_speaker(idx),
                );

                SpeakerAnalysis {
                    text_length: segment.text.chars().count(),
                    speaker: segment.speaker,
                    matched_by: segment.matched_by,
                    word_frequencies,
                    word_cloud,
                }
            })
            .collect();

        (word_frequencies, word_cloud, speakers)
    }

    /// Runs the full pipeline for a YouTube URL.
    #[tracing::instrument(skip(self))]
    pub async fn analyze(&self, youtube_url: &str) -> Result<VideoAnalysis, AnalysisError> {
        let video_id = extract_video_id(youtube_url).ok_or_else(|| AnalysisError::InvalidUrl {
            url: youtube_url.to_string(),
        })?;

        let page = self.load_watch_page(&video_id).await;
        let available_transcripts = self.available_transcripts(&page);

        let description = page
            .video_info
            .as_ref()
            .map(|info| info.description.trim().to_string())
            .filter(|d| !d.is_empty());

        let (text, transcript_source, transcript_language) =
            match (self.fetch_transcript(&page).await, description) {
                (Some(transcript), _) => (
                    transcript.text,
                    TranscriptSource::Captions,
                    Some(transcript.language_code),
                ),
                (None, Some(description)) => {
                    tracing::info!("Falling back to video description");
                    (description, TranscriptSource::Description, None)
                }
                (None, None) => {
                    return Err(AnalysisError::ContentUnavailable {
                        video_id,
                        video_info: page.video_info,
                        available_transcripts,
                    });
                }
            };

        tracing::info!(
            %video_id,
            ?transcript_source,
            len = text.len(),
            "Analyzing video content"
        );

        let (summary, summary_error) =
            match self.summarize(&text, page.video_info.as_ref()).await {
                Ok(summary) => (Some(summary), None),
                Err(e) => (None, Some(e)),
            };

        let (word_frequencies, word_cloud, speakers) = self.analyze_text(&text);

        Ok(VideoAnalysis {
            video_id,
            video_info: page.video_info,
            transcript_source,
            transcript_language,
            available_transcripts,
            transcript_length: text.chars().count(),
            summary,
            summary_error,
            word_frequencies,
            word_cloud,
            speakers,
            analyzed_at: Utc::now(),
        })
    }

    /// Fetches only the transcript of `video_id`.
    #[tracing::instrument(skip(self))]
    pub async fn transcript(&self, video_id: &str) -> Result<TranscriptReport, AnalysisError> {
        if !is_valid_video_id(video_id) {
            return Err(AnalysisError::InvalidVideoId {
                video_id: video_id.to_string(),
            });
        }

        let page = self.load_watch_page(video_id).await;
        let available_transcripts = self.available_transcripts(&page);

        let Some(transcript) = self.fetch_transcript(&page).await else {
            return Err(AnalysisError::TranscriptNotFound {
                video_id: video_id.to_string(),
                available_transcripts,
            });
        };

        Ok(TranscriptReport {
            video_id: video_id.to_string(),
            transcript_length: transcript.text.chars().count(),
            language_code: transcript.language_code,
            transcript: transcript.text,
            available_transcripts,
        })
    }
}
