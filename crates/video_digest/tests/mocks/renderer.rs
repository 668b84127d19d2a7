use std::sync::{Arc, Mutex};
use transcript_text::WordFrequencies;
use video_digest::{CloudRenderer, ColorScheme, RenderedCloud};

#[derive(Clone, Default)]
pub struct MockRenderer {
    pub calls: Arc<Mutex<Vec<(Vec<String>, ColorScheme)>>>,
    pub fail_with: Option<String>,
}

impl MockRenderer {
    pub fn failing(msg: &str) -> Self {
        Self {
            fail_with: Some(msg.to_string()),
            ..Default::default()
        }
    }
}

impl CloudRenderer for MockRenderer {
    type Error = String;

    fn render(
        &self,
        words: &WordFrequencies,
        scheme: ColorScheme,
    ) -> Result<RenderedCloud, Self::Error> {
        let list = words.iter().map(|(w, _)| w.to_string()).collect::<Vec<_>>();
        self.calls.lock().unwrap().push((list, scheme));
        if let Some(ref msg) = self.fail_with {
            return Err(msg.clone());
        }
        Ok(RenderedCloud {
            mime_type: "image/png".into(),
            data: "bW9jaw==".into(),
            color_scheme: scheme,
            word_count: words.len(),
        })
    }
}
