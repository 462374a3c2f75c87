//! Common surface shared by every conversation-generating task.

use crate::answer::EvalError;
use crate::config::ConfigError;
use crate::conversation::Conversation;
use crate::corpus::CorpusError;
use crate::selector::SelectorError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while constructing a task
#[derive(Error, Debug)]
pub enum TaskError {
    #[error("Corpus error: {0}")]
    Corpus(#[from] CorpusError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Example index {index} out of range for {size} examples")]
    IndexOutOfRange { index: usize, size: usize },

    #[error(transparent)]
    Selector(#[from] SelectorError),
}

/// How a task's examples are scored
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EvalType {
    /// Free-form completion checked against the reference
    Generative,
}

/// A deterministic source of conversations with a scoring rule
pub trait Task: Send + Sync {
    /// Stable task identifier
    fn name(&self) -> &str;

    /// How examples are scored
    fn eval_type(&self) -> EvalType {
        EvalType::Generative
    }

    /// Number of examples in this split
    fn num_examples(&self) -> usize;

    /// Build the example at `index`; identical for identical indices
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` unless `index < num_examples()`.
    fn get_example(&self, index: usize) -> Result<Conversation, TaskError>;

    /// Score a candidate completion against a reference conversation (0 or 1)
    ///
    /// # Errors
    ///
    /// Returns an `EvalError` if the reference conversation is malformed.
    fn evaluate(&self, conversation: &Conversation, candidate: &str) -> Result<u8, EvalError>;

    /// Numeric reward derived from [`Task::evaluate`]
    ///
    /// # Errors
    ///
    /// Returns an `EvalError` if the reference conversation is malformed.
    fn reward(&self, conversation: &Conversation, candidate: &str) -> Result<f64, EvalError> {
        self.evaluate(conversation, candidate).map(f64::from)
    }

    /// Iterate over all examples in order
    fn examples(&self) -> Box<dyn Iterator<Item = Result<Conversation, TaskError>> + '_> {
        Box::new((0..self.num_examples()).map(move |i| self.get_example(i)))
    }
}

/// Reject indices past the end of a task
///
/// # Errors
///
/// Returns `IndexOutOfRange` when `index >= size`.
pub(crate) fn check_index(index: usize, size: usize) -> Result<(), TaskError> {
    if index < size {
        Ok(())
    } else {
        Err(TaskError::IndexOutOfRange { index, size })
    }
}
