//! Surface variation of the user message.

use crate::templates::{self, Template};
use serde::{Deserialize, Serialize};

/// How a letter or word is wrapped in the user message
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum QuoteStyle {
    #[default]
    None,
    Single,
    Double,
}

impl QuoteStyle {
    /// All styles, in sampling order
    pub const ALL: [Self; 3] = [Self::None, Self::Single, Self::Double];

    /// The quote character(s) written on each side
    #[must_use]
    pub const fn mark(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Single => "'",
            Self::Double => "\"",
        }
    }

    /// Wrap text in this quote style
    #[must_use]
    pub fn wrap(self, text: &str) -> String {
        let mark = self.mark();
        format!("{mark}{text}{mark}")
    }
}

/// Independent styling choices applied on top of a template
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Styling {
    /// Lowercase the whole phrase
    pub lowercase: bool,
    /// Quoting of the target letter
    pub letter_quote: QuoteStyle,
    /// Quoting of the word
    pub word_quote: QuoteStyle,
    /// Append a trailing question mark
    pub question_mark: bool,
}

/// Render the user message for a template, letter and word
///
/// Words and letters are already lowercase, so lowercasing the template
/// before substitution is the same as case-folding the final string.
#[must_use]
pub fn render_user_message(
    template: &Template,
    letter: char,
    word: &str,
    styling: &Styling,
) -> String {
    let letter_wrapped = styling.letter_quote.wrap(&letter.to_string());
    let word_wrapped = styling.word_quote.wrap(word);

    let mut message = if styling.lowercase {
        templates::fill(&template.text.to_lowercase(), &letter_wrapped, &word_wrapped)
    } else {
        template.fill(&letter_wrapped, &word_wrapped)
    };

    if styling.question_mark {
        message.push('?');
    }
    message
}
