use std::{fmt::Debug, future::Future, iter};

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::types::VideoInfo;

pub trait Summarizer {
    /// Prompt budget in tokens
    const CONTEXT_WINDOW_LIMIT: usize = 128_000 - 18_000;
    const SUMMARIZER_MODEL: &'static str;

    type Error: Debug + Send;

    fn summarize(
        &self,
        content: &str,
    ) -> impl Future<Output = Result<SummaryResponse, Self::Error>> + Send;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub summary: String,
}

// Rough upper bound of characters per token for the truncation below.
const CHARS_PER_TOKEN: usize = 3;

/// Builds the analysis request sent to the model.
///
/// Metadata lines are only included when the page could be scraped. The
/// transcript is cut to fit `context_window_limit` tokens.
pub fn compose_prompt(
    transcript: &str,
    video_info: Option<&VideoInfo>,
    speakers: &[String],
    top_words: usize,
    context_window_limit: usize,
) -> String {
    let metadata = video_info
        .map(|info| {
            format!(
                "Título: {}\nAutor: {}\nDescrição: {}\n\n",
                info.title, info.author, info.description
            )
        })
        .unwrap_or_default();

    let max_chars = context_window_limit.saturating_mul(CHARS_PER_TOKEN);
    let transcript = match transcript.char_indices().nth(max_chars) {
        Some((cut, _)) => {
            tracing::warn!(max_chars, "Transcript exceeds context window, truncating");
            &transcript[..cut]
        }
        None => transcript,
    };

    let speaker_items = speakers
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|speaker| format!("Uma análise crítica dos pontos positivos das falas de {speaker}"));

    let requests = iter::once("Um resumo conciso do que foi discutido".to_string())
        .chain(speaker_items)
        .chain(iter::once(format!(
            "As {top_words} palavras mais utilizadas e sua frequência, para a geração de uma nuvem de palavras"
        )))
        .enumerate()
        .map(|(idx, item)| format!("{}. {item}", idx + 1))
        .join("\n");

    format!(
        "Analise o seguinte conteúdo de vídeo do YouTube e forneça uma análise detalhada:\n\n\
         {metadata}Transcrição/Conteúdo:\n{transcript}\n\n\
         Por favor, forneça:\n{requests}\n\n\
         Responda em português de forma estruturada e detalhada."
    )
}
