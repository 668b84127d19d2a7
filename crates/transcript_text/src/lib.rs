//! # Transcript Text
//!
//! This module provides the text analysis used on video transcripts before
//! they are turned into word clouds: normalization against a stop-word set,
//! word frequency counting and a heuristic per-speaker split of a flat
//! transcript.
//!
//! Every operation here is a pure function over `&str`; "nothing found" is
//! represented as an empty value rather than an error.

mod frequency;
mod normalizer;
mod speaker;
mod stopwords;

pub use frequency::{top_frequencies, WordCount, WordFrequencies, DEFAULT_TOP_WORDS};
pub use normalizer::{Normalizer, MIN_TOKEN_CHARS};
pub use speaker::{
    MatchStrategy, SpeakerSegment, SpeakerSegments, SpeakerSplitter, DEFAULT_SPEAKERS,
};
pub use stopwords::{StopWordLanguage, StopWords};
