//! Letter-counting task: "How many r are in strawberry?" -> 3.
//!
//! The assistant first counts by hand, then confirms with a simulated tool
//! call. On the train split it can optionally make a counting mistake on a
//! misspelled word and recover from it.

use crate::answer::{self, EvalError};
use crate::config::{check_probability, ConfigError, TaskConfig, TaskKind};
use crate::conversation::{Content, Conversation};
use crate::corpus::WordCorpus;
use crate::mistake::{build_assistant_turn, MistakePlan};
use crate::selector::{example_rng, select, Selection, Split};
use crate::style::render_user_message;
use crate::task::{check_index, Task, TaskError};
use std::sync::Arc;

/// Default mistake probability when mistakes are enabled
pub const DEFAULT_MISTAKE_PROBABILITY: f64 = 0.3;

/// A generated example with the draws that produced it
#[derive(Debug, Clone, PartialEq)]
pub struct SpellingBeeExample {
    pub selection: Selection,
    pub conversation: Conversation,
    /// True letter count, also the marker value
    pub count: usize,
    /// Whether a mistake narrative was kept
    pub corrected: bool,
}

/// Assemble the conversation for a selection and mistake plan
#[must_use]
pub fn assemble(selection: &Selection, plan: &MistakePlan) -> SpellingBeeExample {
    let user = render_user_message(
        &selection.template,
        selection.letter,
        &selection.word,
        &selection.styling,
    );
    let turn = build_assistant_turn(&selection.word, selection.letter, plan);

    SpellingBeeExample {
        selection: selection.clone(),
        conversation: Conversation::new(user, Content::Parts(turn.parts)),
        count: turn.count,
        corrected: turn.corrected,
    }
}

/// Letter-counting conversation generator
#[derive(Debug, Clone)]
pub struct SpellingBee {
    name: String,
    corpus: Arc<WordCorpus>,
    split: Split,
    size: usize,
    mistake_probability: Option<f64>,
}

impl SpellingBee {
    /// Create a task over `corpus`
    ///
    /// `use_mistakes` only takes effect on the train split.
    #[must_use]
    pub fn new(corpus: Arc<WordCorpus>, split: Split, size: usize, use_mistakes: bool) -> Self {
        let mistake_probability =
            (use_mistakes && split == Split::Train).then_some(DEFAULT_MISTAKE_PROBABILITY);
        Self {
            name: "spelling-bee".to_string(),
            corpus,
            split,
            size,
            mistake_probability,
        }
    }

    /// Override the mistake probability (ignored when mistakes are off)
    ///
    /// # Errors
    ///
    /// Returns `InvalidProbability` if `probability` is outside `[0, 1]`.
    pub fn with_mistake_probability(mut self, probability: f64) -> Result<Self, ConfigError> {
        check_probability(probability)?;
        if self.mistake_probability.is_some() {
            self.mistake_probability = Some(probability);
        }
        Ok(self)
    }

    /// Build from a task configuration, loading the corpus it names
    ///
    /// # Errors
    ///
    /// Returns an error if the corpus cannot be loaded.
    pub fn from_config(config: &TaskConfig) -> Result<Self, TaskError> {
        let corpus = Arc::new(WordCorpus::load(&config.corpus.path)?);
        Self::from_config_with_corpus(config, corpus)
    }

    /// Build from a task configuration with an already loaded corpus
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation.
    pub fn from_config_with_corpus(
        config: &TaskConfig,
        corpus: Arc<WordCorpus>,
    ) -> Result<Self, TaskError> {
        debug_assert_eq!(config.task.kind, TaskKind::SpellingBee);
        config.validate()?;
        Ok(Self {
            name: config.task.id.clone(),
            corpus,
            split: config.dataset.split,
            size: config.dataset.size,
            mistake_probability: config.effective_mistake_probability(),
        })
    }

    /// Mistake probability in effect, if any
    #[must_use]
    pub const fn mistake_probability(&self) -> Option<f64> {
        self.mistake_probability
    }

    /// Generate the example at `index` together with its draws
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of range or has no seed.
    pub fn generate(&self, index: usize) -> Result<SpellingBeeExample, TaskError> {
        check_index(index, self.size)?;
        let mut rng = example_rng(self.split, index as u64)?;
        let selection = select(&mut rng, &self.corpus, self.mistake_probability);

        let plan = MistakePlan::draw(selection.mistake_requested, &selection.word, &mut rng)
            .unwrap_or_else(|e| {
                tracing::debug!(index, error = %e, "Word cannot be misspelled, using no mistake");
                MistakePlan::None
            });

        Ok(assemble(&selection, &plan))
    }
}

impl Task for SpellingBee {
    fn name(&self) -> &str {
        &self.name
    }

    fn num_examples(&self) -> usize {
        self.size
    }

    fn get_example(&self, index: usize) -> Result<Conversation, TaskError> {
        self.generate(index).map(|example| example.conversation)
    }

    fn evaluate(&self, conversation: &Conversation, candidate: &str) -> Result<u8, EvalError> {
        answer::evaluate(conversation, candidate)
    }
}
