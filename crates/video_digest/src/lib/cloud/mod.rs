pub mod svg;

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use transcript_text::WordFrequencies;

/// Turns word frequencies into an encoded image.
pub trait CloudRenderer {
    type Error: Display;

    fn render(
        &self,
        words: &WordFrequencies,
        scheme: ColorScheme,
    ) -> Result<RenderedCloud, Self::Error>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedCloud {
    pub mime_type: String,
    /// base64 encoded image
    pub data: String,
    pub color_scheme: ColorScheme,
    /// Words that made it into the image
    pub word_count: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Viridis,
    Blues,
    Reds,
    Greens,
    Purples,
    Oranges,
}

impl ColorScheme {
    const SPEAKER_SCHEMES: [ColorScheme; 5] = [
        ColorScheme::Blues,
        ColorScheme::Reds,
        ColorScheme::Greens,
        ColorScheme::Purples,
        ColorScheme::Oranges,
    ];

    /// Scheme for the `index`-th speaker.
    pub fn for_speaker(index: usize) -> Self {
        Self::SPEAKER_SCHEMES[index % Self::SPEAKER_SCHEMES.len()]
    }

    /// Colors from darkest to lightest, all readable on a white background.
    pub fn palette(&self) -> &'static [&'static str] {
        match self {
            Self::Viridis => &[
                "#440154", "#482878", "#3e4989", "#31688e", "#26828e", "#1f9e89", "#35b779",
                "#6ece58",
            ],
            Self::Blues => &["#08306b", "#08519c", "#2171b5", "#4292c6", "#6baed6"],
            Self::Reds => &["#67000d", "#a50f15", "#cb181d", "#ef3b2c", "#fb6a4a"],
            Self::Greens => &["#00441b", "#006d2c", "#238b45", "#41ab5d", "#74c476"],
            Self::Purples => &["#3f007d", "#54278f", "#6a51a3", "#807dba", "#9e9ac8"],
            Self::Oranges => &["#7f2704", "#a63603", "#d94801", "#f16913", "#fd8d3c"],
        }
    }
}

impl std::str::FromStr for ColorScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_value(serde_json::Value::String(s.trim().to_lowercase()))
            .map_err(|_| format!("Unknown color scheme: {s}"))
    }
}

/// Renders a cloud, reporting any failure as "no image produced".
pub(crate) fn render_or_none<R: CloudRenderer>(
    renderer: &R,
    words: &WordFrequencies,
    scheme: ColorScheme,
) -> Option<RenderedCloud> {
    if words.is_empty() {
        return None;
    }

    renderer
        .render(words, scheme)
        .inspect_err(|e| tracing::warn!(error = %e, ?scheme, "Failed to render word cloud"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speaker_schemes_cycle() {
        assert_eq!(ColorScheme::for_speaker(0), ColorScheme::Blues);
        assert_eq!(ColorScheme::for_speaker(1), ColorScheme::Reds);
        assert_eq!(ColorScheme::for_speaker(5), ColorScheme::Blues);
    }

    #[test]
    fn test_parse_scheme() {
        assert_eq!("Reds".parse::<ColorScheme>().unwrap(), ColorScheme::Reds);
        assert!("rainbow".parse::<ColorScheme>().is_err());
    }
}
