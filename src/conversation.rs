//! Conversation records and the assistant-turn builder.
//!
//! Serialized shape:
//!
//! ```text
//! {"messages": [
//!   {"role": "user", "content": "How many r are in strawberry?"},
//!   {"role": "assistant", "content": [
//!     {"type": "text", "text": "..."},
//!     {"type": "tool_call", "text": "'strawberry'.count('r')"},
//!     {"type": "tool_output", "text": "3"},
//!     ...
//!   ]}
//! ]}
//! ```

use serde::{Deserialize, Serialize};
use std::fmt::Write as FmtWrite;

/// Speaker of a message
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Assistant,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::User => f.write_str("user"),
            Self::Assistant => f.write_str("assistant"),
        }
    }
}

/// One segment of an assistant turn
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "text", rename_all = "snake_case")]
pub enum AssistantPart {
    /// Prose
    Text(String),
    /// Tool expression to evaluate
    ToolCall(String),
    /// Precomputed result of the preceding tool call
    ToolOutput(String),
}

impl AssistantPart {
    /// Payload regardless of variant
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Text(s) | Self::ToolCall(s) | Self::ToolOutput(s) => s,
        }
    }
}

/// Message body: a plain string or ordered parts
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Content {
    Text(String),
    Parts(Vec<AssistantPart>),
}

/// A single chat message
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Message {
    pub role: Role,
    pub content: Content,
}

/// A user/assistant exchange
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Conversation {
    pub messages: Vec<Message>,
}

impl Conversation {
    /// Pair a user prompt with an assistant reply
    #[must_use]
    pub fn new(user: String, assistant: Content) -> Self {
        Self {
            messages: vec![
                Message {
                    role: Role::User,
                    content: Content::Text(user),
                },
                Message {
                    role: Role::Assistant,
                    content: assistant,
                },
            ],
        }
    }

    /// Text of the first user message
    #[must_use]
    pub fn user_text(&self) -> Option<&str> {
        self.messages.iter().find(|m| m.role == Role::User).and_then(|m| match &m.content {
            Content::Text(s) => Some(s.as_str()),
            Content::Parts(_) => None,
        })
    }

    /// Human-readable rendering; tool calls appear as `<<expr=output>>`
    #[must_use]
    pub fn render_preview(&self) -> String {
        let mut out = String::new();
        for message in &self.messages {
            writeln!(out, "[{}]", message.role).ok();
            match &message.content {
                Content::Text(s) => out.push_str(s),
                Content::Parts(parts) => {
                    for part in parts {
                        match part {
                            AssistantPart::Text(s) => out.push_str(s),
                            AssistantPart::ToolCall(s) => {
                                write!(out, "<<{s}=").ok();
                            }
                            AssistantPart::ToolOutput(s) => {
                                write!(out, "{s}>>").ok();
                            }
                        }
                    }
                }
            }
            out.push('\n');
        }
        out
    }
}

/// Accumulates assistant parts in order
#[derive(Debug, Default)]
pub struct AssistantTurnBuilder {
    parts: Vec<AssistantPart>,
}

impl AssistantTurnBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&mut self, text: impl Into<String>) -> &mut Self {
        self.parts.push(AssistantPart::Text(text.into()));
        self
    }

    pub fn tool_call(&mut self, expression: impl Into<String>) -> &mut Self {
        self.parts.push(AssistantPart::ToolCall(expression.into()));
        self
    }

    pub fn tool_output(&mut self, output: impl Into<String>) -> &mut Self {
        self.parts.push(AssistantPart::ToolOutput(output.into()));
        self
    }

    /// Consume the builder and return the finished parts
    #[must_use]
    pub fn finish(self) -> Vec<AssistantPart> {
        self.parts
    }
}
