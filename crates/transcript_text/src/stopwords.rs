use std::{collections::HashSet, fmt, str::FromStr};

const PORTUGUESE: &[&str] = &[
    "a", "à", "ao", "aos", "aquela", "aquelas", "aquele", "aqueles", "aquilo", "as", "às", "até",
    "com", "como", "da", "das", "de", "dela", "delas", "dele", "deles", "depois", "do", "dos", "e",
    "é", "ela", "elas", "ele", "eles", "em", "entre", "era", "eram", "éramos", "essa", "essas",
    "esse", "esses", "esta", "está", "estamos", "estão", "estar", "estas", "estava", "estavam",
    "estávamos", "este", "esteja", "estejam", "estejamos", "estes", "esteve", "estive",
    "estivemos", "estiver", "estivera", "estiveram", "estivéramos", "estiverem", "estivermos",
    "estivesse", "estivessem", "estivéssemos", "estou", "eu", "foi", "fomos", "for", "fora",
    "foram", "fôramos", "forem", "formos", "fosse", "fossem", "fôssemos", "fui", "há", "haja",
    "hajam", "hajamos", "hão", "havemos", "haver", "hei", "houve", "houvemos", "houver",
    "houvera", "houverá", "houveram", "houvéramos", "houverão", "houverei", "houverem",
    "houveremos", "houveria", "houveriam", "houveríamos", "houvermos", "houvesse", "houvessem",
    "houvéssemos", "isso", "isto", "já", "lhe", "lhes", "mais", "mas", "me", "mesmo", "meu",
    "meus", "minha", "minhas", "muito", "na", "não", "nas", "nem", "no", "nos", "nós", "nossa",
    "nossas", "nosso", "nossos", "num", "numa", "o", "os", "ou", "para", "pela", "pelas", "pelo",
    "pelos", "por", "qual", "quando", "que", "quem", "são", "se", "seja", "sejam", "sejamos",
    "sem", "ser", "será", "serão", "serei", "seremos", "seria", "seriam", "seríamos", "seu",
    "seus", "só", "somos", "sou", "sua", "suas", "também", "te", "tem", "tém", "temos", "tenha",
    "tenham", "tenhamos", "tenho", "terá", "terão", "terei", "teremos", "teria", "teriam",
    "teríamos", "teu", "teus", "teve", "tinha", "tinham", "tínhamos", "tive", "tivemos", "tiver",
    "tivera", "tiveram", "tivéramos", "tiverem", "tivermos", "tivesse", "tivessem",
    "tivéssemos", "tu", "tua", "tuas", "um", "uma", "você", "vocês", "vos", "aí", "aqui", "então",
    "assim", "porque", "pra", "pro", "gente", "coisa", "tá", "né", "vai", "vamos", "bem", "ainda",
    "sobre", "cada", "onde", "agora", "todo", "toda", "todos", "todas", "outro", "outra",
    "outros", "outras", "ali", "lá", "sim", "tão", "tanto", "pois", "daí", "dessa", "desse",
    "disso", "nessa", "nesse", "nisso", "desta", "deste", "nesta", "neste",
];

const ENGLISH: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "arent", "as", "at", "be", "because", "been", "before", "being", "below", "between", "both",
    "but", "by", "can", "could", "did", "didnt", "do", "does", "doesnt", "doing", "dont",
    "down", "during", "each", "few", "for", "from", "further", "had", "has", "have", "having",
    "he", "her", "here", "hers", "herself", "him", "himself", "his", "how", "i", "if", "in",
    "into", "is", "isnt", "it", "its", "its", "itself", "just", "me", "more", "most", "my",
    "myself", "no", "nor", "not", "now", "of", "off", "on", "once", "only", "or", "other", "our",
    "ours", "ourselves", "out", "over", "own", "same", "she", "should", "so", "some", "such",
    "than", "that", "the", "their", "theirs", "them", "themselves", "then", "there", "these",
    "they", "this", "those", "through", "to", "too", "under", "until", "up", "very", "was",
    "wasnt", "we", "were", "werent", "what", "when", "where", "which", "while", "who", "whom",
    "why", "will", "with", "wont", "would", "you", "your", "yours", "yourself", "yourselves",
    "yeah", "okay", "like", "really", "going", "know", "think", "thing", "things", "get", "got",
    "also", "well", "one", "say", "said",
];

/// Language of a built-in stop-word list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StopWordLanguage {
    #[default]
    Portuguese,
    English,
}

#[derive(Debug, thiserror::Error)]
#[error("Unsupported stop-word language: {0}")]
pub struct UnsupportedLanguage(String);

impl FromStr for StopWordLanguage {
    type Err = UnsupportedLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pt" | "pt-br" | "portuguese" => Ok(Self::Portuguese),
            "en" | "english" => Ok(Self::English),
            other => Err(UnsupportedLanguage(other.to_string())),
        }
    }
}

impl fmt::Display for StopWordLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Portuguese => f.write_str("pt"),
            Self::English => f.write_str("en"),
        }
    }
}

/// A closed set of words excluded from frequency analysis.
///
/// Words are stored lower-cased, so lookups must be made with already
/// lower-cased tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWords(HashSet<String>);

impl StopWords {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn for_language(language: StopWordLanguage) -> Self {
        match language {
            StopWordLanguage::Portuguese => Self::portuguese(),
            StopWordLanguage::English => Self::english(),
        }
    }

    pub fn portuguese() -> Self {
        PORTUGUESE.iter().copied().collect()
    }

    pub fn english() -> Self {
        ENGLISH.iter().copied().collect()
    }

    /// Adds more words to the set, e.g. channel-specific filler.
    pub fn with_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extend(words);
        self
    }

    pub fn contains(&self, word: &str) -> bool {
        self.0.contains(word)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: AsRef<str>> Extend<S> for StopWords {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.0
            .extend(iter.into_iter().map(|w| w.as_ref().trim().to_lowercase()));
    }
}

impl<S: AsRef<str>> FromIterator<S> for StopWords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut words = StopWords::empty();
        words.extend(iter);
        words
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_portuguese_contains_articles_and_conjunctions() {
        let words = StopWords::portuguese();
        for w in ["o", "a", "e", "de", "não", "você"] {
            assert!(words.contains(w), "expected '{w}' to be a stop word");
        }
        assert!(!words.contains("gato"));
    }

    #[test]
    fn test_custom_words_are_lowercased() {
        let words: StopWords = ["Canal", " INSCREVA "].into_iter().collect();
        assert!(words.contains("canal"));
        assert!(words.contains("inscreva"));
        assert_eq!(words.len(), 2);
    }

    #[test]
    fn test_with_words_extends_builtin_list() {
        let base = StopWords::english();
        let extended = base.clone().with_words(["podcast"]);
        assert_eq!(extended.len(), base.len() + 1);
        assert!(extended.contains("podcast"));
    }

    #[test]
    fn test_language_parsing() {
        assert_eq!(
            "pt-BR".parse::<StopWordLanguage>().unwrap(),
            StopWordLanguage::Portuguese
        );
        assert_eq!(
            "English".parse::<StopWordLanguage>().unwrap(),
            StopWordLanguage::English
        );
        assert!("klingon".parse::<StopWordLanguage>().is_err());
    }
}
