//! Spelling-only task: "Spell the word: cat" -> "cat:c,a,t".
//!
//! A condensed version of the hard part of letter counting, mapping a word
//! to its individual characters.

use crate::answer::{last_assistant_content, EvalError};
use crate::config::TaskConfig;
use crate::conversation::{Content, Conversation};
use crate::corpus::WordCorpus;
use crate::narrate::spell_out;
use crate::selector::{example_rng, Split};
use crate::task::{check_index, Task, TaskError};
use std::sync::Arc;

/// Seed for the one-time corpus shuffle
pub const SHUFFLE_SEED: u64 = 42;

/// Render `word:w,o,r,d`
#[must_use]
pub fn spelling_of(word: &str) -> String {
    format!("{word}:{}", spell_out(word.chars()))
}

/// Word-spelling conversation generator
#[derive(Debug, Clone)]
pub struct SimpleSpelling {
    name: String,
    corpus: Arc<WordCorpus>,
    split: Split,
    size: usize,
}

impl SimpleSpelling {
    /// Create a task; the corpus is reordered so word choice differs from the counting task
    #[must_use]
    pub fn new(corpus: &WordCorpus, split: Split, size: usize) -> Self {
        Self {
            name: "simple-spelling".to_string(),
            corpus: Arc::new(corpus.shuffled(SHUFFLE_SEED)),
            split,
            size,
        }
    }

    /// Build from a task configuration, loading the corpus it names
    ///
    /// # Errors
    ///
    /// Returns an error if the corpus cannot be loaded.
    pub fn from_config(config: &TaskConfig) -> Result<Self, TaskError> {
        let corpus = WordCorpus::load(&config.corpus.path)?;
        Self::from_config_with_corpus(config, &corpus)
    }

    /// Build from a task configuration with an already loaded corpus
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation.
    pub fn from_config_with_corpus(
        config: &TaskConfig,
        corpus: &WordCorpus,
    ) -> Result<Self, TaskError> {
        config.validate()?;
        let mut task = Self::new(corpus, config.dataset.split, config.dataset.size);
        task.name.clone_from(&config.task.id);
        Ok(task)
    }

    /// Word chosen for `index`
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of range or has no seed.
    pub fn word(&self, index: usize) -> Result<&str, TaskError> {
        check_index(index, self.size)?;
        let mut rng = example_rng(self.split, index as u64)?;
        Ok(self.corpus.choose(&mut rng))
    }
}

impl Task for SimpleSpelling {
    fn name(&self) -> &str {
        &self.name
    }

    fn num_examples(&self) -> usize {
        self.size
    }

    fn get_example(&self, index: usize) -> Result<Conversation, TaskError> {
        let word = self.word(index)?;
        Ok(Conversation::new(
            format!("Spell the word: {word}"),
            Content::Text(spelling_of(word)),
        ))
    }

    /// Exact match of the trimmed candidate against the reference spelling
    fn evaluate(&self, conversation: &Conversation, candidate: &str) -> Result<u8, EvalError> {
        match last_assistant_content(conversation)? {
            Content::Text(reference) => Ok(u8::from(candidate.trim() == reference.trim())),
            Content::Parts(_) => Err(EvalError::ExpectedText),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> WordCorpus {
        WordCorpus::from_lines(["cat", "dog", "zebra", "apple", "kiwi"]).unwrap()
    }

    #[test]
    fn test_spelling_of() {
        assert_eq!(spelling_of("cat"), "cat:c,a,t");
        assert_eq!(spelling_of("a"), "a:a");
    }

    #[test]
    fn test_example_shape() {
        let task = SimpleSpelling::new(&corpus(), Split::Train, 10);
        let conversation = task.get_example(3).unwrap();
        let word = task.word(3).unwrap();

        assert_eq!(conversation.messages.len(), 2);
        assert_eq!(conversation.user_text(), Some(format!("Spell the word: {word}").as_str()));
        assert_eq!(conversation.messages[1].content, Content::Text(spelling_of(word)));
    }

    #[test]
    fn test_deterministic() {
        let task = SimpleSpelling::new(&corpus(), Split::Test, 10);
        let again = SimpleSpelling::new(&corpus(), Split::Test, 10);
        for index in 0..10 {
            assert_eq!(task.get_example(index).unwrap(), again.get_example(index).unwrap());
        }
    }

    #[test]
    fn test_index_bounds() {
        let task = SimpleSpelling::new(&corpus(), Split::Test, 10);
        assert!(matches!(task.word(10), Err(TaskError::IndexOutOfRange { .. })));

        let huge = SimpleSpelling::new(&corpus(), Split::Test, usize::MAX);
        assert!(matches!(huge.get_example(usize::MAX - 1), Err(TaskError::Selector(_))));
    }

    #[test]
    fn test_evaluate() {
        let task = SimpleSpelling::new(&corpus(), Split::Train, 10);
        let conversation = task.get_example(0).unwrap();
        let expected = spelling_of(task.word(0).unwrap());

        assert_eq!(task.evaluate(&conversation, &format!("  {expected}\n")).unwrap(), 1);
        assert_eq!(task.evaluate(&conversation, "nope:n,o").unwrap(), 0);
        assert!((task.reward(&conversation, &expected).unwrap() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_evaluate_rejects_parts() {
        let task = SimpleSpelling::new(&corpus(), Split::Train, 10);
        let conversation = Conversation::new("q".to_string(), Content::Parts(Vec::new()));
        assert_eq!(task.evaluate(&conversation, "x"), Err(EvalError::ExpectedText));
    }
}
