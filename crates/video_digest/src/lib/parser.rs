//! # Yt Parser
//!
//! This module provides functionality to parse a YouTube watch page: the video
//! id from a user supplied URL, the `ytInitialPlayerResponse` embedded in the
//! page's script tags, and the `json3` caption payloads served for a track.

use std::{ops::Deref, sync::LazyLock};

use itertools::Itertools;
use regex::Regex;
use serde::de::DeserializeOwned;

use crate::{
    error::Error,
    types::{CaptionTrack, Json3Captions, PlayerResponse, VideoDetails, VideoInfo, WatchPage},
};

static YT_PLAYER_RESPONSE_RE: LazyLock<Regex> = LazyLock::new(|| {
    regex::Regex::new(
        r"(?s)var\s+ytInitialPlayerResponse\s*=\s*(\{.*?\});\s*(?:var\s+meta\b|</script>)",
    )
    .unwrap()
});

static VIDEO_ID_RES: LazyLock<[Regex; 2]> = LazyLock::new(|| {
    [
        Regex::new(r"(?:youtube\.com/watch\?v=|youtu\.be/|youtube\.com/embed/)([^&\n?#]+)")
            .unwrap(),
        Regex::new(r"youtube\.com/watch\?.*v=([^&\n?#]+)").unwrap(),
    ]
});

static VALID_VIDEO_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").unwrap());

/// Extracts the video id from the common YouTube URL shapes.
///
/// # Returns
/// * `Some(id)` for `watch?v=`, `youtu.be/`, `embed/` and `watch?...&v=` URLs.
/// * `None` if the URL is not recognised or the id has characters outside
///   `[A-Za-z0-9_-]`.
pub fn extract_video_id(youtube_url: &str) -> Option<String> {
    VIDEO_ID_RES
        .iter()
        .find_map(|re| re.captures(youtube_url))
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str())
        .filter(|id| is_valid_video_id(id))
        .map(str::to_string)
}

pub fn is_valid_video_id(video_id: &str) -> bool {
    VALID_VIDEO_ID_RE.is_match(video_id)
}

/// Splits a player response into page metadata and caption tracks.
#[tracing::instrument(skip_all)]
pub fn parse_watch_page(player_response: PlayerResponse) -> WatchPage {
    let caption_tracks = player_response
        .captions
        .and_then(|c| c.player_captions_tracklist_renderer)
        .map(|r| r.caption_tracks)
        .unwrap_or_default()
        .into_iter()
        .map(|track| CaptionTrack {
            language: track
                .name
                .map(|n| n.text())
                .unwrap_or_else(|| track.language_code.clone()),
            is_generated: track.kind.as_deref() == Some("asr"),
            is_translatable: track.is_translatable,
            language_code: track.language_code,
            base_url: track.base_url,
        })
        .collect::<Vec<_>>();

    tracing::debug!(tracks = caption_tracks.len(), "Parsed caption tracks");

    WatchPage {
        video_info: player_response.video_details.map(VideoInfo::from),
        caption_tracks,
    }
}

/// Picks the track to transcribe: languages are tried in preference order,
/// manually created tracks before auto-generated ones.
pub fn select_caption_track<'a, S: AsRef<str>>(
    tracks: &'a [CaptionTrack],
    languages: &[S],
) -> Option<&'a CaptionTrack> {
    languages.iter().find_map(|lang| {
        let matching = |t: &&CaptionTrack| t.language_code.eq_ignore_ascii_case(lang.as_ref());
        tracks
            .iter()
            .filter(matching)
            .find(|t| !t.is_generated)
            .or_else(|| tracks.iter().find(matching))
    })
}

/// Joins every caption segment of a `json3` payload into a single line.
pub fn parse_json3_captions(body: &str) -> Result<String, Error> {
    let captions = serde_json::from_str::<Json3Captions>(body)?;

    let text = captions
        .events
        .iter()
        .flat_map(|event| event.segs.iter())
        .map(|seg| seg.utf8.trim())
        .filter(|s| !s.is_empty())
        .join(" ");

    Ok(text)
}

impl From<VideoDetails> for VideoInfo {
    fn from(
        VideoDetails {
            title,
            author,
            short_description,
            length_seconds,
            view_count,
            ..
        }: VideoDetails,
    ) -> Self {
        VideoInfo {
            title,
            author,
            description: short_description,
            length: length_seconds.and_then(|s| s.parse().ok()),
            views: view_count.and_then(|s| s.parse().ok()),
        }
    }
}

pub struct YtHtmlDocument(String);

impl Deref for YtHtmlDocument {
    type Target = String;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl YtHtmlDocument {
    pub fn new(doc: String) -> Self {
        YtHtmlDocument(doc)
    }

    pub fn to_json<T>(&self) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        YT_PLAYER_RESPONSE_RE
            .captures(self)
            .and_then(|cap| cap.get(1))
            .and_then(|m| serde_json::from_str(m.as_str()).ok())
            .ok_or(Error::ParseError(
                "Failed to extract ytInitialPlayerResponse from the page's script tag",
            ))
    }
}

impl From<String> for YtHtmlDocument {
    fn from(value: String) -> Self {
        YtHtmlDocument(value)
    }
}
