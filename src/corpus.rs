//! Word corpus loading for spelling and letter-counting tasks.
//!
//! Reads a newline-delimited list of lowercase alphabetic words (for example
//! `words_alpha.txt`) that has already been fetched to local storage.

#![allow(clippy::missing_const_for_fn)]

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during corpus loading
#[derive(Error, Debug)]
pub enum CorpusError {
    #[error("Corpus file not found: {0}")]
    NotFound(String),

    #[error("No words found in corpus")]
    Empty,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Ordered, read-only collection of candidate words
#[derive(Debug, Clone)]
pub struct WordCorpus {
    words: Vec<String>,
}

impl WordCorpus {
    /// Load corpus from a newline-delimited word file
    ///
    /// Blank lines are ignored. Lines that are not purely lowercase ASCII
    /// letters are skipped and reported once through `tracing`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file doesn't exist, can't be read, or contains no words.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CorpusError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(CorpusError::NotFound(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)?;
        let corpus = Self::from_lines(content.lines())?;

        tracing::info!(
            path = %path.display(),
            words = corpus.len(),
            "Loaded word corpus"
        );

        Ok(corpus)
    }

    /// Build a corpus from in-memory words, keeping their order
    ///
    /// # Errors
    ///
    /// Returns `CorpusError::Empty` if no valid word remains.
    pub fn from_lines<I, S>(lines: I) -> Result<Self, CorpusError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words = Vec::new();
        let mut skipped = 0usize;

        for line in lines {
            let word = line.as_ref().trim();
            if word.is_empty() {
                continue;
            }
            if is_valid_word(word) {
                words.push(word.to_string());
            } else {
                skipped += 1;
            }
        }

        if skipped > 0 {
            tracing::warn!(
                skipped = skipped,
                "Skipped corpus lines that are not lowercase alphabetic words"
            );
        }

        if words.is_empty() {
            return Err(CorpusError::Empty);
        }

        Ok(Self { words })
    }

    /// Return a copy with the word order permuted by a fixed seed
    #[must_use]
    pub fn shuffled(&self, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut words = self.words.clone();
        words.shuffle(&mut rng);
        Self { words }
    }

    /// Pick a word uniformly at random from the stream
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        // `words` is non-empty by construction
        let idx = rng.gen_range(0..self.words.len());
        &self.words[idx]
    }

    /// Get total number of words
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if corpus is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Get iterator over words
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Compute statistics about the corpus
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn stats(&self) -> CorpusStats {
        let lengths = self.words.iter().map(|w| w.chars().count());
        let total_chars: usize = lengths.clone().sum();

        CorpusStats {
            total_words: self.words.len(),
            min_length: lengths.clone().min().unwrap_or(0),
            max_length: lengths.max().unwrap_or(0),
            mean_length: total_chars as f64 / self.words.len().max(1) as f64,
            short_words: self.words.iter().filter(|w| w.chars().count() < 3).count(),
        }
    }
}

fn is_valid_word(word: &str) -> bool {
    word.chars().all(|c| c.is_ascii_lowercase())
}

/// Statistics about the corpus
#[derive(Debug, Clone)]
pub struct CorpusStats {
    /// Total number of words
    pub total_words: usize,
    /// Shortest word length
    pub min_length: usize,
    /// Longest word length
    pub max_length: usize,
    /// Mean word length
    pub mean_length: f64,
    /// Words too short to misspell (fewer than 3 letters)
    pub short_words: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn create_test_corpus() -> (TempDir, PathBuf) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("words_alpha.txt");
        std::fs::write(&path, "a\naa\ncat\nstrawberry\n\nbanana\n").unwrap();
        (dir, path)
    }

    #[test]
    fn test_corpus_load() {
        let (_dir, path) = create_test_corpus();
        let corpus = WordCorpus::load(&path).unwrap();

        assert_eq!(corpus.len(), 5);
        assert!(!corpus.is_empty());
    }

    #[test]
    fn test_corpus_keeps_order() {
        let (_dir, path) = create_test_corpus();
        let corpus = WordCorpus::load(&path).unwrap();

        let words: Vec<_> = corpus.iter().collect();
        assert_eq!(words, vec!["a", "aa", "cat", "strawberry", "banana"]);
    }

    #[test]
    fn test_corpus_not_found() {
        let result = WordCorpus::load("/nonexistent/words_alpha.txt");
        assert!(matches!(result, Err(CorpusError::NotFound(_))));
    }

    #[test]
    fn test_corpus_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.txt");
        std::fs::write(&path, "\n\n").unwrap();

        let result = WordCorpus::load(&path);
        assert!(matches!(result, Err(CorpusError::Empty)));
    }

    #[test]
    fn test_corpus_skips_invalid_lines() {
        let corpus = WordCorpus::from_lines(["apple", "Apple", "don't", "  pear  ", "x1"]).unwrap();

        let words: Vec<_> = corpus.iter().collect();
        assert_eq!(words, vec!["apple", "pear"]);
    }

    #[test]
    fn test_corpus_handles_crlf() {
        let corpus = WordCorpus::from_lines("cat\r\ndog\r\n".lines()).unwrap();
        assert_eq!(corpus.iter().collect::<Vec<_>>(), vec!["cat", "dog"]);
    }

    #[test]
    fn test_corpus_stats() {
        let (_dir, path) = create_test_corpus();
        let stats = WordCorpus::load(&path).unwrap().stats();

        assert_eq!(stats.total_words, 5);
        assert_eq!(stats.min_length, 1);
        assert_eq!(stats.max_length, 10);
        assert_eq!(stats.short_words, 2);
        assert!((stats.mean_length - 22.0 / 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_corpus_shuffled_is_deterministic_permutation() {
        let corpus =
            WordCorpus::from_lines(["one", "two", "three", "four", "five", "six"]).unwrap();

        let a = corpus.shuffled(42);
        let b = corpus.shuffled(42);
        assert_eq!(a.iter().collect::<Vec<_>>(), b.iter().collect::<Vec<_>>());

        let mut sorted_original: Vec<_> = corpus.iter().collect();
        let mut sorted_shuffled: Vec<_> = a.iter().collect();
        sorted_original.sort_unstable();
        sorted_shuffled.sort_unstable();
        assert_eq!(sorted_original, sorted_shuffled);
    }

    #[test]
    fn test_corpus_choose_is_member() {
        let corpus = WordCorpus::from_lines(["cat", "dog"]).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        for _ in 0..20 {
            let word = corpus.choose(&mut rng);
            assert!(word == "cat" || word == "dog");
        }
    }
}
