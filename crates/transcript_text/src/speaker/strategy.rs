use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

static BLANK_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n[ \t\r]*\n").expect("valid blank line regex"));

/// One way of locating a speaker's text inside a flat transcript.
///
/// The anchored variants look for the speaker's name and take everything
/// from there up to the next mention of any known speaker (or the end of the
/// transcript). `ParagraphScan` is the loose fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStrategy {
    /// `Name:` followed by text
    AnchorColon,
    /// `Name ` followed by text
    AnchorSpace,
    /// `Name` immediately followed by text
    AnchorBare,
    /// Text after the name in every blank-line separated paragraph that
    /// mentions it
    ParagraphScan,
}

impl MatchStrategy {
    pub const ALL: [MatchStrategy; 4] = [
        MatchStrategy::AnchorColon,
        MatchStrategy::AnchorSpace,
        MatchStrategy::AnchorBare,
        MatchStrategy::ParagraphScan,
    ];

    /// Extracts the text attributed to `speaker`.
    ///
    /// `boundary` must match any known speaker name; it ends an anchored
    /// segment. Returns `None` when nothing non-empty was found.
    pub fn extract(&self, transcript: &str, speaker: &str, boundary: &Regex) -> Option<String> {
        let pieces = match self {
            Self::ParagraphScan => paragraph_scan(transcript, speaker),
            anchored => {
                let anchor = anchored.anchor(speaker)?;
                anchored_segments(transcript, &anchor, boundary)
            }
        };

        let joined = pieces.join(" ");
        (!joined.is_empty()).then_some(joined)
    }

    fn anchor(&self, speaker: &str) -> Option<Regex> {
        let name = regex::escape(speaker);
        let pattern = match self {
            Self::AnchorColon => format!("{name}:"),
            Self::AnchorSpace => format!(r"{name}\s"),
            Self::AnchorBare => name,
            Self::ParagraphScan => return None,
        };

        case_insensitive(&pattern)
    }
}

/// Builds the regex matching any of the `speakers` names.
pub(crate) fn boundary_regex(speakers: &[String]) -> Option<Regex> {
    let alternatives = speakers
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(regex::escape)
        .collect::<Vec<_>>();

    if alternatives.is_empty() {
        return None;
    }

    case_insensitive(&format!("(?:{})", alternatives.join("|")))
}

fn case_insensitive(pattern: &str) -> Option<Regex> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .dot_matches_new_line(true)
        .build()
        .inspect_err(|e| tracing::warn!(error = %e, pattern, "Failed to build speaker regex"))
        .ok()
}

fn anchored_segments(transcript: &str, anchor: &Regex, boundary: &Regex) -> Vec<String> {
    anchor
        .find_iter(transcript)
        .filter_map(|m| {
            let end = boundary
                .find_at(transcript, m.end())
                .map_or(transcript.len(), |next| next.start());
            let segment = transcript[m.end()..end].trim();
            (!segment.is_empty()).then(|| segment.to_string())
        })
        .collect()
}

fn paragraph_scan(transcript: &str, speaker: &str) -> Vec<String> {
    let Some(name) = case_insensitive(&regex::escape(speaker)) else {
        return Vec::new();
    };

    BLANK_LINE_RE
        .split(transcript)
        .filter_map(|paragraph| {
            let m = name.find(paragraph)?;
            let rest = paragraph[m.end()..].trim();
            (!rest.is_empty()).then(|| rest.to_string())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boundary() -> Regex {
        boundary_regex(&["Adriana".to_string(), "Lodovico".to_string()]).unwrap()
    }

    #[test]
    fn test_colon_anchor_stops_at_next_speaker() {
        let text = "Adriana: Hello world. Lodovico: Hi there.";
        assert_eq!(
            MatchStrategy::AnchorColon.extract(text, "Adriana", &boundary()),
            Some("Hello world.".to_string())
        );
        assert_eq!(
            MatchStrategy::AnchorColon.extract(text, "Lodovico", &boundary()),
            Some("Hi there.".to_string())
        );
    }

    #[test]
    fn test_colon_anchor_collects_every_turn() {
        let text = "ADRIANA: primeira fala\nLodovico: resposta\nadriana: segunda fala";
        assert_eq!(
            MatchStrategy::AnchorColon.extract(text, "Adriana", &boundary()),
            Some("primeira fala segunda fala".to_string())
        );
    }

    #[test]
    fn test_colon_anchor_requires_colon() {
        let text = "Adriana disse algo";
        assert_eq!(
            MatchStrategy::AnchorColon.extract(text, "Adriana", &boundary()),
            None
        );
    }

    #[test]
    fn test_space_anchor() {
        let text = "Adriana comentou a pauta\nLodovico discordou";
        assert_eq!(
            MatchStrategy::AnchorSpace.extract(text, "Adriana", &boundary()),
            Some("comentou a pauta".to_string())
        );
        assert_eq!(
            MatchStrategy::AnchorSpace.extract(text, "Lodovico", &boundary()),
            Some("discordou".to_string())
        );
    }

    #[test]
    fn test_space_anchor_spans_newlines() {
        let text = "Adriana\nfalou de economia\ne de saúde. Lodovico respondeu.";
        assert_eq!(
            MatchStrategy::AnchorSpace.extract(text, "Adriana", &boundary()),
            Some("falou de economia\ne de saúde.".to_string())
        );
    }

    #[test]
    fn test_bare_anchor() {
        let text = "Adriana,bom dia.Lodovico,boa tarde.";
        assert_eq!(
            MatchStrategy::AnchorBare.extract(text, "Adriana", &boundary()),
            Some(",bom dia.".to_string())
        );
    }

    #[test]
    fn test_anchor_with_nothing_after_name_is_none() {
        let text = "Lodovico: tchau Adriana";
        for strategy in [
            MatchStrategy::AnchorColon,
            MatchStrategy::AnchorSpace,
            MatchStrategy::AnchorBare,
        ] {
            assert_eq!(strategy.extract(text, "Adriana", &boundary()), None);
        }
    }

    #[test]
    fn test_paragraph_scan() {
        let text = "Abertura do programa.\n\nCom a palavra, Adriana fala sobre educação.\n  \nEncerramento com adriana agradecendo.";
        assert_eq!(
            MatchStrategy::ParagraphScan.extract(text, "Adriana", &boundary()),
            Some("fala sobre educação. agradecendo.".to_string())
        );
    }

    #[test]
    fn test_paragraph_scan_without_mention() {
        let text = "Primeiro parágrafo.\n\nSegundo parágrafo.";
        assert_eq!(
            MatchStrategy::ParagraphScan.extract(text, "Lodovico", &boundary()),
            None
        );
    }

    #[test]
    fn test_names_are_escaped() {
        let speakers = vec!["Dr. Who".to_string(), "C++".to_string()];
        let boundary = boundary_regex(&speakers).unwrap();
        let text = "Dr. Who: olá. C++: oi.";
        assert_eq!(
            MatchStrategy::AnchorColon.extract(text, "Dr. Who", &boundary),
            Some("olá.".to_string())
        );
        assert_eq!(
            MatchStrategy::AnchorColon.extract(text, "C++", &boundary),
            Some("oi.".to_string())
        );
    }

    #[test]
    fn test_boundary_requires_a_name() {
        assert!(boundary_regex(&[]).is_none());
        assert!(boundary_regex(&[String::new()]).is_none());
        assert!(boundary_regex(&["  ".to_string()]).is_none());
    }
}
