use std::collections::HashMap;

use serde::Serialize;

/// Number of words kept for a word cloud unless configured otherwise.
pub const DEFAULT_TOP_WORDS: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// Word counts sorted by descending count.
///
/// Serializes as a plain JSON list of `{ "word", "count" }` objects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct WordFrequencies(Vec<WordCount>);

impl WordFrequencies {
    pub fn entries(&self) -> &[WordCount] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.0.iter().map(|wc| wc.count).sum()
    }

    pub fn max_count(&self) -> Option<usize> {
        self.0.first().map(|wc| wc.count)
    }

    pub fn min_count(&self) -> Option<usize> {
        self.0.last().map(|wc| wc.count)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.0.iter().map(|wc| (wc.word.as_str(), wc.count))
    }
}

impl IntoIterator for WordFrequencies {
    type Item = WordCount;
    type IntoIter = std::vec::IntoIter<WordCount>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Counts whitespace separated words and returns the `limit` most frequent.
///
/// Words with equal counts keep the order in which they were first seen.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn top_frequencies(text: &str, limit: usize) -> WordFrequencies {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(&str, usize)> = Vec::new();

    for word in text.split_whitespace() {
        match index.get(word) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(word, counts.len());
                counts.push((word, 1));
            }
        }
    }

    // stable sort keeps first-seen order among ties
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    let entries = counts
        .into_iter()
        .take(limit)
        .map(|(word, count)| WordCount {
            word: word.to_string(),
            count,
        })
        .collect::<Vec<_>>();

    tracing::debug!(distinct = index.len(), kept = entries.len(), "Counted words");

    WordFrequencies(entries)
}
