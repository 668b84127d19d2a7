use serde::{Deserialize, Serialize};

// ─── ytInitialPlayerResponse ────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerResponse {
    pub video_details: Option<VideoDetails>,
    pub captions: Option<Captions>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoDetails {
    pub video_id: String,
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub short_description: String,
    pub length_seconds: Option<String>,
    pub view_count: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Captions {
    pub player_captions_tracklist_renderer: Option<CaptionTracklistRenderer>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptionTracklistRenderer {
    #[serde(default)]
    pub caption_tracks: Vec<CaptionTrackRenderer>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptionTrackRenderer {
    pub base_url: String,
    pub name: Option<YtText>,
    pub language_code: String,
    /// `"asr"` for auto-generated tracks
    pub kind: Option<String>,
    #[serde(default)]
    pub is_translatable: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YtText {
    pub simple_text: Option<String>,
    #[serde(default)]
    pub runs: Vec<TextRun>,
}

impl YtText {
    pub fn text(&self) -> String {
        match &self.simple_text {
            Some(text) => text.clone(),
            None => self.runs.iter().map(|r| r.text.as_str()).collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct TextRun {
    pub text: String,
}

// ─── timedtext json3 ────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct Json3Captions {
    #[serde(default)]
    pub events: Vec<Json3Event>,
}

#[derive(Debug, Deserialize)]
pub struct Json3Event {
    #[serde(default)]
    pub segs: Vec<Json3Segment>,
}

#[derive(Debug, Deserialize)]
pub struct Json3Segment {
    #[serde(default)]
    pub utf8: String,
}

// ─── Domain ─────────────────────────────────────────────────────────────────

/// Page metadata of a single video.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoInfo {
    pub title: String,
    pub author: String,
    pub description: String,
    /// Duration in seconds
    pub length: Option<u64>,
    pub views: Option<u64>,
}

/// A caption track as advertised on the watch page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptionTrack {
    pub base_url: String,
    pub language: String,
    pub language_code: String,
    pub is_generated: bool,
    pub is_translatable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AvailableTranscript {
    pub language: String,
    pub language_code: String,
    pub is_generated: bool,
    pub is_translatable: bool,
}

impl From<&CaptionTrack> for AvailableTranscript {
    fn from(track: &CaptionTrack) -> Self {
        AvailableTranscript {
            language: track.language.clone(),
            language_code: track.language_code.clone(),
            is_generated: track.is_generated,
            is_translatable: track.is_translatable,
        }
    }
}

/// Everything the watch page tells us about a video.
#[derive(Debug, Clone, Default)]
pub struct WatchPage {
    pub video_info: Option<VideoInfo>,
    pub caption_tracks: Vec<CaptionTrack>,
}

/// Concatenated caption text of one track; timestamps are dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transcript {
    pub language_code: String,
    pub text: String,
}
