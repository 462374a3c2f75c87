//! Assistant turn construction with optional mistake-then-correction.
//!
//! ```text
//! InitialPass -> ToolConfirm -> MistakeCheck -> Done
//!                                            \-> CorrectionPass -> ToolReconfirm -> Done
//! ```
//!
//! Whether the correction branch runs is decided before anything is emitted:
//! a misspelling only survives if it changes the letter count.

use crate::answer::format_marker;
use crate::conversation::{AssistantPart, AssistantTurnBuilder};
use crate::misspell::{misspell, MisspellError};
use crate::narrate::narrate;
use crate::tool::{count_letter, push_tool_pass, simulate};
use rand::Rng;

const CORRECTION_TEXT: &str = "Oops: the manual and Python counts disagree. \
    I must have made a mistake. Let me spell the word out again:\n";

/// What the first manual pass spells out
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MistakePlan {
    /// Spell the word correctly
    None,
    /// Spell this wrong variant first, then correct it
    Misspelled(String),
}

impl MistakePlan {
    /// Draw a misspelling from the stream if a mistake was requested
    ///
    /// # Errors
    ///
    /// Propagates `MisspellError::WordTooShort` when `word` cannot be misspelled.
    pub fn draw<R: Rng + ?Sized>(
        requested: bool,
        word: &str,
        rng: &mut R,
    ) -> Result<Self, MisspellError> {
        if requested {
            misspell(word, rng).map(Self::Misspelled)
        } else {
            Ok(Self::None)
        }
    }
}

/// Finished assistant turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistantTurn {
    /// Ordered parts, ending in the final-answer marker
    pub parts: Vec<AssistantPart>,
    /// True count of the letter in the word
    pub count: usize,
    /// Whether the correction branch was taken
    pub corrected: bool,
}

/// Build the assistant turn for counting `letter` in `word`
#[must_use]
pub fn build_assistant_turn(word: &str, letter: char, plan: &MistakePlan) -> AssistantTurn {
    let true_letters: Vec<char> = word.chars().collect();
    let true_count = count_letter(word, letter);

    // MistakeCheck: a misspelling that keeps the count is no mistake at all
    let first_letters = match plan {
        MistakePlan::Misspelled(wrong) if count_letter(wrong, letter) != true_count => {
            Some(wrong.chars().collect::<Vec<_>>())
        }
        MistakePlan::Misspelled(wrong) => {
            tracing::debug!(
                word,
                misspelled = %wrong,
                %letter,
                "Dropping mistake that preserves the count"
            );
            None
        }
        MistakePlan::None => None,
    };
    let corrected = first_letters.is_some();

    let mut builder = AssistantTurnBuilder::new();
    builder.text(format!(
        "We are asked to find the number '{letter}' in the word '{word}'. \
         Let me try a manual approach first."
    ));

    // InitialPass
    let initial = narrate(word, first_letters.as_deref().unwrap_or(&true_letters), letter);
    builder.text(initial.text);

    // ToolConfirm: the tool always sees the real word
    let tool = simulate(word, letter);
    push_tool_pass(&mut builder, &tool);

    if corrected {
        // CorrectionPass
        builder.text(CORRECTION_TEXT);
        let recount = narrate(word, &true_letters, letter);
        debug_assert_eq!(recount.count, true_count);
        builder.text(recount.text);

        // ToolReconfirm
        push_tool_pass(&mut builder, &tool);

        builder.text(format!(
            "\n\nAfter spelling it out again, the manual count matches Python: \
             there are {true_count} '{letter}' in '{word}'."
        ));
    }

    // Done
    builder.text(format!("\n\nMy final answer is:\n\n{}", format_marker(true_count)));

    AssistantTurn {
        parts: builder.finish(),
        count: true_count,
        corrected,
    }
}
