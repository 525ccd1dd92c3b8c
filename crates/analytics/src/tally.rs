//! Insertion-ordered token counter shared by the indexer and the analyzer.

use indexmap::IndexMap;

/// Counts token occurrences and remembers the order tokens were first seen.
///
/// `most_common` relies on that order to break count ties, so two tokens
/// with the same count are listed in the order they first appeared.
#[derive(Debug, Clone, Default)]
pub struct Tally {
    counts: IndexMap<String, usize>,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `token`
    pub fn add(&mut self, token: &str) {
        match self.counts.get_mut(token) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(token.to_string(), 1);
            }
        }
    }

    /// Count every token from an iterator
    pub fn add_all<'a>(&mut self, tokens: impl IntoIterator<Item = &'a str>) {
        for token in tokens {
            self.add(token);
        }
    }

    /// Occurrences of `token` (0 if never seen)
    pub fn count(&self, token: &str) -> usize {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Number of distinct tokens
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Top `n` tokens by count, descending; ties keep first-seen order.
    pub fn most_common(&self, n: usize) -> Vec<(String, usize)> {
        let mut ranked: Vec<(&String, &usize)> = self.counts.iter().collect();
        // sort_by is stable, so equal counts stay in insertion order
        ranked.sort_by(|a, b| b.1.cmp(a.1));
        ranked
            .into_iter()
            .take(n)
            .map(|(token, &count)| (token.clone(), count))
            .collect()
    }

    /// Tokens seen strictly more than `threshold` times, sorted lexicographically
    pub fn tokens_above(&self, threshold: usize) -> Vec<String> {
        let mut tokens: Vec<String> = self
            .counts
            .iter()
            .filter(|(_, count)| **count > threshold)
            .map(|(token, _)| token.clone())
            .collect();
        tokens.sort();
        tokens
    }
}
