//! Final-answer extraction and scoring.
//!
//! Both the reference turn and candidate completions end with a
//! `#### <number>` line; scoring compares the two extracted numbers as
//! strings after dropping thousands separators.

use crate::conversation::{Content, Conversation, Role};
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

#[allow(clippy::unwrap_used)]
static ANSWER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"#### (\-?[0-9\.\,]+)").unwrap());

/// Structural problems in a reference conversation
///
/// These indicate a generation bug, not a wrong candidate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    #[error("Conversation has no messages")]
    EmptyConversation,

    #[error("Last message must be from the assistant, found {0}")]
    NotAssistant(Role),

    #[error("Assistant content is a plain string, expected a list of parts")]
    ExpectedParts,

    #[error("Assistant content is a list of parts, expected a plain string")]
    ExpectedText,

    #[error("Assistant content has no parts")]
    EmptyParts,

    #[error("Reference answer has no #### marker: {0:?}")]
    MissingReferenceMarker(String),
}

/// Render the marker line for a count
#[must_use]
pub fn format_marker(value: usize) -> String {
    format!("#### {value}")
}

/// Extract the number following the first `####` marker
///
/// Commas are removed, so `#### 1,234` yields `"1234"`.
#[must_use]
pub fn extract_answer(text: &str) -> Option<String> {
    ANSWER_RE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().replace(',', ""))
}

/// Content of the closing assistant message
///
/// # Errors
///
/// Returns an `EvalError` if the conversation is empty or ends with a user message.
pub fn last_assistant_content(conversation: &Conversation) -> Result<&Content, EvalError> {
    let last = conversation.messages.last().ok_or(EvalError::EmptyConversation)?;
    if last.role != Role::Assistant {
        return Err(EvalError::NotAssistant(last.role));
    }
    Ok(&last.content)
}

/// Text of the final part of the last assistant message
///
/// # Errors
///
/// Returns an `EvalError` if the conversation does not end in an assistant
/// message made of at least one part.
pub fn final_assistant_part(conversation: &Conversation) -> Result<&str, EvalError> {
    match last_assistant_content(conversation)? {
        Content::Parts(parts) => parts.last().map(|p| p.text()).ok_or(EvalError::EmptyParts),
        Content::Text(_) => Err(EvalError::ExpectedParts),
    }
}

/// Reference answer stored in a generated conversation
///
/// # Errors
///
/// Returns an `EvalError` if the conversation is malformed or the final part
/// carries no marker.
pub fn reference_answer(conversation: &Conversation) -> Result<String, EvalError> {
    let last_part = final_assistant_part(conversation)?;
    extract_answer(last_part)
        .ok_or_else(|| EvalError::MissingReferenceMarker(last_part.to_string()))
}

/// Score a candidate completion: 1 if its marker matches the reference, else 0
///
/// A candidate without a marker scores 0.
///
/// # Errors
///
/// Returns an `EvalError` if the reference conversation is malformed.
pub fn evaluate(conversation: &Conversation, candidate: &str) -> Result<u8, EvalError> {
    let reference = reference_answer(conversation)?;
    let predicted = extract_answer(candidate);
    Ok(u8::from(predicted.as_deref() == Some(reference.as_str())))
}
