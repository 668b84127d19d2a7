mod strategy;

use serde::Serialize;

pub use strategy::MatchStrategy;

/// Participants of the show whose transcripts this was first written for.
pub const DEFAULT_SPEAKERS: [&str; 2] = ["Adriana", "Lodovico"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpeakerSegment {
    pub speaker: String,
    pub text: String,
    /// Strategy that produced `text`, `None` when nothing matched.
    pub matched_by: Option<MatchStrategy>,
}

/// One segment per requested speaker, in request order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SpeakerSegments(Vec<SpeakerSegment>);

impl SpeakerSegments {
    /// Text attributed to `speaker`, or `None` if the speaker was not requested.
    pub fn get(&self, speaker: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|s| s.speaker == speaker)
            .map(|s| s.text.as_str())
    }

    pub fn speakers(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|s| s.speaker.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SpeakerSegment> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl IntoIterator for SpeakerSegments {
    type Item = SpeakerSegment;
    type IntoIter = std::vec::IntoIter<SpeakerSegment>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Heuristically attributes parts of a flat transcript to named speakers.
///
/// For each speaker the configured strategies are tried in order and the
/// first one producing non-empty text wins. Overlapping or out-of-order
/// mentions can mis-attribute text; treat the result as best effort.
#[derive(Debug, Clone)]
pub struct SpeakerSplitter {
    speakers: Vec<String>,
    strategies: Vec<MatchStrategy>,
}

impl Default for SpeakerSplitter {
    fn default() -> Self {
        Self::new(DEFAULT_SPEAKERS)
    }
}

impl SpeakerSplitter {
    /// Names are kept as given and only exact repeats are dropped. Matching
    /// uses the trimmed name; a blank name always yields empty text.
    pub fn new<I, S>(speakers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for speaker in speakers {
            let speaker = speaker.into();
            if !unique.contains(&speaker) {
                unique.push(speaker);
            }
        }

        Self {
            speakers: unique,
            strategies: MatchStrategy::ALL.to_vec(),
        }
    }

    pub fn with_strategies(mut self, strategies: impl Into<Vec<MatchStrategy>>) -> Self {
        self.strategies = strategies.into();
        self
    }

    pub fn speakers(&self) -> &[String] {
        &self.speakers
    }

    #[tracing::instrument(skip_all, fields(transcript_len = transcript.len()))]
    pub fn split(&self, transcript: &str) -> SpeakerSegments {
        let boundary = strategy::boundary_regex(&self.speakers);

        let segments = self
            .speakers
            .iter()
            .map(|speaker| {
                let name = speaker.trim();
                let found = boundary
                    .as_ref()
                    .filter(|_| !name.is_empty())
                    .and_then(|boundary| {
                        self.strategies.iter().find_map(|strategy| {
                            strategy
                                .extract(transcript, name, boundary)
                                .map(|text| (*strategy, text))
                        })
                    });

                match found {
                    Some((strategy, text)) => {
                        tracing::debug!(%speaker, ?strategy, len = text.len(), "Matched speaker");
                        SpeakerSegment {
                            speaker: speaker.clone(),
                            text,
                            matched_by: Some(strategy),
                        }
                    }
                    None => {
                        tracing::debug!(%speaker, "No text found for speaker");
                        SpeakerSegment {
                            speaker: speaker.clone(),
                            text: String::new(),
                            matched_by: None,
                        }
                    }
                }
            })
            .collect();

        SpeakerSegments(segments)
    }
}
