use indexmap::IndexMap;

/// Word frequencies in order of first appearance.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WordCount {
    counts: IndexMap<String, usize>,
}

impl WordCount {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokenizes on whitespace and counts every token.
    pub fn from_sentence(sentence: &str) -> Self {
        let mut count = Self::new();
        for word in sentence.split_whitespace() {
            count.increment(word);
        }
        count
    }

    pub fn get_or_zero(&self, word: &str) -> usize {
        self.counts.get(word).copied().unwrap_or(0)
    }

    pub fn increment(&mut self, word: &str) {
        let next = self.get_or_zero(word) + 1;
        self.counts.insert(word.to_string(), next);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(word, &n)| (word.as_str(), n))
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
