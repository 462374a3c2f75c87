//! Simulated tool recount.
//!
//! The rendered expression is never executed; the count is computed here
//! and emitted as the tool output.

use crate::conversation::AssistantTurnBuilder;

/// A simulated tool invocation and its result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCount {
    /// Expression shown as the tool call
    pub expression: String,
    /// Ground-truth occurrence count
    pub count: usize,
}

impl ToolCount {
    /// Rendered tool output
    #[must_use]
    pub fn output(&self) -> String {
        self.count.to_string()
    }
}

/// Count occurrences of `letter` in `word`
#[must_use]
pub fn count_letter(word: &str, letter: char) -> usize {
    word.chars().filter(|&c| c == letter).count()
}

/// Build the tool expression and compute its result
#[must_use]
pub fn simulate(word: &str, letter: char) -> ToolCount {
    ToolCount {
        expression: format!("'{word}'.count('{letter}')"),
        count: count_letter(word, letter),
    }
}

/// Append a full tool pass (lead-in, call, output, summary) to `builder`
pub fn push_tool_pass(builder: &mut AssistantTurnBuilder, tool: &ToolCount) {
    builder
        .text("\n\nLet me check this using Python:\n\n")
        .tool_call(tool.expression.clone())
        .tool_output(tool.output())
        .text(format!("\n\nPython gives us {}.\n", tool.count));
}
