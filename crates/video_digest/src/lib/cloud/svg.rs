use base64::{engine::general_purpose::STANDARD, Engine as _};
use transcript_text::WordFrequencies;

use crate::cloud::{CloudRenderer, ColorScheme, RenderedCloud};

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("No words to render")]
    Empty,
    #[error("Canvas {width}x{height} is too small for any word")]
    DoesNotFit { width: u32, height: u32 },
}

/// Lays words out in centred rows, largest first, with font size scaled
/// linearly between `min_font` and `max_font` by count.
#[derive(Debug, Clone)]
pub struct SvgCloudRenderer {
    pub width: u32,
    pub height: u32,
    pub min_font: f32,
    pub max_font: f32,
    pub background: String,
}

impl Default for SvgCloudRenderer {
    fn default() -> Self {
        Self {
            width: 800,
            height: 400,
            min_font: 14.0,
            max_font: 72.0,
            background: "white".into(),
        }
    }
}

const MARGIN: f32 = 10.0;
const GAP: f32 = 8.0;
// average glyph advance relative to font size
const GLYPH_WIDTH: f32 = 0.6;
const LINE_SPACING: f32 = 1.15;

struct Placed<'a> {
    word: &'a str,
    size: f32,
    width: f32,
}

impl SvgCloudRenderer {
    fn font_size(&self, count: usize, min: usize, max: usize) -> f32 {
        if max == min {
            return self.max_font;
        }
        let t = (count - min) as f32 / (max - min) as f32;
        self.min_font + t * (self.max_font - self.min_font)
    }

    fn layout<'a>(&self, words: &'a WordFrequencies) -> Vec<Vec<Placed<'a>>> {
        let (Some(max), Some(min)) = (words.max_count(), words.min_count()) else {
            return Vec::new();
        };

        let usable_width = self.width as f32 - 2.0 * MARGIN;
        let usable_height = self.height as f32 - 2.0 * MARGIN;

        let mut lines: Vec<Vec<Placed<'a>>> = Vec::new();
        let mut line: Vec<Placed<'a>> = Vec::new();
        let mut line_width = 0.0_f32;
        let mut used_height = 0.0_f32;

        for (word, count) in words.iter() {
            let size = self.font_size(count, min, max);
            let width = word.chars().count() as f32 * size * GLYPH_WIDTH;
            if width > usable_width {
                continue;
            }

            if !line.is_empty() && line_width + GAP + width > usable_width {
                used_height += line_height(&line);
                lines.push(std::mem::take(&mut line));
                line_width = 0.0;
            }

            // stop once the next row cannot fit vertically
            let row_height = line_height(&line).max(size * LINE_SPACING);
            if used_height + row_height > usable_height {
                break;
            }

            if !line.is_empty() {
                line_width += GAP;
            }
            line_width += width;
            line.push(Placed { word, size, width });
        }

        if !line.is_empty() {
            lines.push(line);
        }

        lines
    }
}

fn line_height(line: &[Placed<'_>]) -> f32 {
    line.iter().map(|p| p.size * LINE_SPACING).fold(0.0, f32::max)
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

impl CloudRenderer for SvgCloudRenderer {
    type Error = RenderError;

    #[tracing::instrument(skip(self, words), fields(words = words.len()))]
    fn render(
        &self,
        words: &WordFrequencies,
        scheme: ColorScheme,
    ) -> Result<RenderedCloud, Self::Error> {
        if words.is_empty() {
            return Err(RenderError::Empty);
        }

        let lines = self.layout(words);
        let word_count = lines.iter().map(Vec::len).sum::<usize>();
        if word_count == 0 {
            return Err(RenderError::DoesNotFit {
                width: self.width,
                height: self.height,
            });
        }

        let palette = scheme.palette();
        let total_height = lines.iter().map(|l| line_height(l)).sum::<f32>();
        let mut y = (self.height as f32 - total_height) / 2.0;
        let mut texts = Vec::with_capacity(word_count);

        for line in &lines {
            let height = line_height(line);
            let width = line.iter().map(|p| p.width).sum::<f32>()
                + GAP * line.len().saturating_sub(1) as f32;
            let mut x = (self.width as f32 - width) / 2.0;
            let baseline = y + height * 0.8;

            for placed in line {
                texts.push(format!(
                    r#"<text x="{:.1}" y="{:.1}" font-family="sans-serif" font-size="{:.1}" fill="{}">{}</text>"#,
                    x,
                    baseline,
                    placed.size,
                    palette[texts.len() % palette.len()],
                    escape_xml(placed.word),
                ));
                x += placed.width + GAP;
            }
            y += height;
        }

        let svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}"><rect width="100%" height="100%" fill="{background}"/>{texts}</svg>"#,
            w = self.width,
            h = self.height,
            background = escape_xml(&self.background),
            texts = texts.concat(),
        );

        tracing::debug!(word_count, bytes = svg.len(), "Rendered word cloud");

        Ok(RenderedCloud {
            mime_type: "image/svg+xml".into(),
            data: STANDARD.encode(svg),
            color_scheme: scheme,
            word_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use transcript_text::top_frequencies;

    fn decode(cloud: &RenderedCloud) -> String {
        String::from_utf8(STANDARD.decode(&cloud.data).unwrap()).unwrap()
    }

    #[test]
    fn test_renders_every_word_that_fits() {
        let words = top_frequencies("educação educação educação saúde saúde economia", 50);
        let cloud = SvgCloudRenderer::default()
            .render(&words, ColorScheme::Blues)
            .unwrap();

        assert_eq!(cloud.mime_type, "image/svg+xml");
        assert_eq!(cloud.word_count, 3);
        assert_eq!(cloud.color_scheme, ColorScheme::Blues);

        let svg = decode(&cloud);
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        for word in ["educação", "saúde", "economia"] {
            assert!(svg.contains(&format!(">{word}</text>")), "missing {word}");
        }
        assert!(svg.contains(ColorScheme::Blues.palette()[0]));
    }

    #[test]
    fn test_most_frequent_word_gets_largest_font() {
        let renderer = SvgCloudRenderer::default();
        let words = top_frequencies("rua rua rua casa", 50);
        let svg = decode(&renderer.render(&words, ColorScheme::Reds).unwrap());
        assert!(svg.contains(r##"font-size="72.0" fill="#67000d">rua<"##));
        assert!(svg.contains(r#"font-size="14.0""#));
    }

    #[test]
    fn test_empty_frequencies() {
        let words = top_frequencies("", 50);
        assert!(matches!(
            SvgCloudRenderer::default().render(&words, ColorScheme::Viridis),
            Err(RenderError::Empty)
        ));
    }

    #[test]
    fn test_canvas_too_small() {
        let renderer = SvgCloudRenderer {
            width: 30,
            height: 30,
            ..Default::default()
        };
        let words = top_frequencies("extraordinariamente", 50);
        assert!(matches!(
            renderer.render(&words, ColorScheme::Viridis),
            Err(RenderError::DoesNotFit { .. })
        ));
    }

    #[test]
    fn test_overflowing_words_are_dropped() {
        let text = (0..200)
            .map(|i| format!("palavra{}", "x".repeat(i % 7)))
            .collect::<Vec<_>>()
            .join(" ");
        let words = top_frequencies(&text, 50);
        let renderer = SvgCloudRenderer {
            width: 300,
            height: 120,
            ..Default::default()
        };
        let cloud = renderer.render(&words, ColorScheme::Greens).unwrap();
        assert!(cloud.word_count > 0);
        assert!(cloud.word_count < words.len());
    }

    #[test]
    fn test_escapes_markup() {
        assert_eq!(escape_xml(r#"<a & "b">"#), "&lt;a &amp; &quot;b&quot;&gt;");
    }
}
