use std::sync::LazyLock;

use itertools::Itertools;
use regex::Regex;

use crate::stopwords::{StopWordLanguage, StopWords};

/// Tokens shorter than this (in characters) are dropped.
pub const MIN_TOKEN_CHARS: usize = 3;

// Anything that is not a letter, a combining mark or whitespace: punctuation,
// digits, symbols and emoji all go.
static NON_WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{L}\p{M}\s]+").expect("valid non-word regex"));

/// Cleans transcript text ahead of frequency analysis.
///
/// The transform is lower-casing, punctuation and digit removal, whitespace
/// tokenization, then dropping short tokens and stop words. Output tokens are
/// joined by a single space, so normalizing an already normalized string
/// returns it unchanged.
///
/// ```
/// use transcript_text::{Normalizer, StopWords};
///
/// let normalizer = Normalizer::new(StopWords::portuguese());
/// assert_eq!(
///     normalizer.normalize("O gato e o cachorro correram."),
///     "gato cachorro correram"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Normalizer {
    stop_words: StopWords,
    min_token_chars: usize,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::for_language(StopWordLanguage::default())
    }
}

impl Normalizer {
    pub fn new(stop_words: StopWords) -> Self {
        Self {
            stop_words,
            min_token_chars: MIN_TOKEN_CHARS,
        }
    }

    pub fn for_language(language: StopWordLanguage) -> Self {
        Self::new(StopWords::for_language(language))
    }

    pub fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }

    pub fn normalize(&self, text: &str) -> String {
        if text.trim().is_empty() {
            return String::new();
        }

        let lowered = text.to_lowercase();
        let stripped = NON_WORD_RE.replace_all(&lowered, "");

        stripped
            .split_whitespace()
            .filter(|token| self.keeps(token))
            .join(" ")
    }

    fn keeps(&self, token: &str) -> bool {
        token.chars().count() >= self.min_token_chars && !self.stop_words.contains(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt() -> Normalizer {
        Normalizer::new(StopWords::portuguese())
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(pt().normalize(""), "");
        assert_eq!(pt().normalize("   \n\t "), "");
    }

    #[test]
    fn test_portuguese_sentence() {
        assert_eq!(
            pt().normalize("O gato e o cachorro correram."),
            "gato cachorro correram"
        );
    }

    #[test]
    fn test_strips_digits_and_punctuation() {
        let normalized = pt().normalize("Em 2024, o orçamento (R$ 3.000!) subiu 15%...");
        assert_eq!(normalized, "orçamento subiu");
    }

    #[test]
    fn test_punctuation_inside_words_is_removed_not_split() {
        assert_eq!(
            Normalizer::new(StopWords::empty()).normalize("guarda-chuva e-mail"),
            "guardachuva email"
        );
    }

    #[test]
    fn test_short_tokens_are_dropped() {
        let normalizer = Normalizer::new(StopWords::empty());
        assert_eq!(normalizer.normalize("ab abc a abcd"), "abc abcd");
        // length is counted in characters, not bytes
        assert_eq!(normalizer.normalize("pé pão"), "pão");
    }

    #[test]
    fn test_entirely_filtered_input_is_empty() {
        assert_eq!(pt().normalize("o a e de que, 123!"), "");
    }

    #[test]
    fn test_uppercase_stop_words_are_removed() {
        assert_eq!(pt().normalize("ENTÃO Você FALOU"), "falou");
    }

    #[test]
    fn test_collapses_whitespace_and_newlines() {
        assert_eq!(
            pt().normalize("política\n\n  economia\teducação"),
            "política economia educação"
        );
    }

    #[test]
    fn test_english_list() {
        let normalizer = Normalizer::for_language(StopWordLanguage::English);
        assert_eq!(
            normalizer.normalize("The cat doesn't like the rain."),
            "cat rain"
        );
    }

    #[test]
    fn test_idempotent() {
        let normalizer = pt();
        let inputs = [
            "",
            "O gato e o cachorro correram.",
            "Adriana: Olá, tudo bem? Lodovico: Tudo ótimo!!! 42",
            "ÇÃO ção   É é  ÁRVORE... árvore\nÁrvore",
            "emoji 🎉 no meio-termo, çé 1a2b3c",
        ];
        for input in inputs {
            let once = normalizer.normalize(input);
            assert_eq!(normalizer.normalize(&once), once, "input: {input:?}");
        }
    }

    #[test]
    fn test_output_tokens_respect_filters() {
        let normalizer = pt();
        let text = "Hoje nós vamos falar sobre a economia do Brasil, e também sobre o futuro da educação no país em 2030.";
        let normalized = normalizer.normalize(text);
        assert!(!normalized.is_empty());
        for token in normalized.split(' ') {
            assert!(token.chars().count() > 2, "short token {token:?}");
            assert!(
                !normalizer.stop_words().contains(token),
                "stop word {token:?}"
            );
        }
    }
}
