//! Deterministic per-example random draws.
//!
//! Each `(split, index)` gets its own `ChaCha8Rng` stream. The draw order in
//! [`select`] is fixed; changing it changes every generated example.

use crate::corpus::WordCorpus;
use crate::misspell::random_letter;
use crate::style::{QuoteStyle, Styling};
use crate::templates::{Template, TEMPLATES};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Added to the index for the test split; larger than any corpus we use
pub const TEST_SEED_OFFSET: u64 = 10_000_000;

/// Probability that the letter is taken from the word itself
pub const LETTER_FROM_WORD_PROBABILITY: f64 = 0.9;

/// Probability that the template is lowercased
pub const LOWERCASE_PROBABILITY: f64 = 0.3;

/// Probability of a trailing question mark
pub const QUESTION_MARK_PROBABILITY: f64 = 0.5;

/// Dataset split
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum Split {
    #[default]
    Train,
    Test,
}

impl std::fmt::Display for Split {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Train => f.write_str("train"),
            Self::Test => f.write_str("test"),
        }
    }
}

impl Split {
    /// Seed for the example at `index`, or `None` if the test offset overflows
    #[must_use]
    pub const fn seed(self, index: u64) -> Option<u64> {
        match self {
            Self::Train => Some(index),
            Self::Test => index.checked_add(TEST_SEED_OFFSET),
        }
    }
}

/// Errors deriving a per-example stream
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectorError {
    #[error("Index {index} has no seed on the {split} split")]
    SeedOverflow { split: Split, index: u64 },
}

/// Private random stream for one example
///
/// # Errors
///
/// Returns `SeedOverflow` when the test split offset would wrap the seed.
pub fn example_rng(split: Split, index: u64) -> Result<ChaCha8Rng, SelectorError> {
    split
        .seed(index)
        .map(ChaCha8Rng::seed_from_u64)
        .ok_or(SelectorError::SeedOverflow { split, index })
}

/// Everything drawn for one example before narration
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub word: String,
    pub letter: char,
    pub mistake_requested: bool,
    pub template: Template,
    pub styling: Styling,
}

/// Draw word, letter, mistake flag, template and styling, in that order
///
/// `mistake_probability` is `None` when mistakes are disabled; in that case
/// no draw is consumed for the flag.
pub fn select<R: Rng + ?Sized>(
    rng: &mut R,
    corpus: &WordCorpus,
    mistake_probability: Option<f64>,
) -> Selection {
    let word = corpus.choose(rng).to_string();

    let letter = if rng.gen_bool(LETTER_FROM_WORD_PROBABILITY) {
        let chars: Vec<char> = word.chars().collect();
        match chars.choose(rng) {
            Some(&c) => c,
            None => random_letter(rng),
        }
    } else {
        random_letter(rng)
    };

    let mistake_requested = mistake_probability.is_some_and(|p| rng.gen_bool(p));

    let template = *TEMPLATES.choose(rng).unwrap_or(&TEMPLATES[0]);

    let lowercase = rng.gen_bool(LOWERCASE_PROBABILITY);
    let letter_quote = pick_quote(rng);
    let word_quote = pick_quote(rng);
    let question_mark = rng.gen_bool(QUESTION_MARK_PROBABILITY);

    Selection {
        word,
        letter,
        mistake_requested,
        template,
        styling: Styling {
            lowercase,
            letter_quote,
            word_quote,
            question_mark,
        },
    }
}

fn pick_quote<R: Rng + ?Sized>(rng: &mut R) -> QuoteStyle {
    *QuoteStyle::ALL.choose(rng).unwrap_or(&QuoteStyle::None)
}
