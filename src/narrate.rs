//! Letter-by-letter counting trace.
//!
//! Lines are written as `3:r hit! count=1` with no space between the index,
//! the colon and the character: ` r` and `r` tokenize differently, and the
//! trace has to line up with the bare-letter tokens of the spelled-out word.

use std::fmt::Write as FmtWrite;

/// Join letters as `s,t,r,a,w`
#[must_use]
pub fn spell_out<I: IntoIterator<Item = char>>(letters: I) -> String {
    let mut out = String::new();
    for (i, c) in letters.into_iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Result of a manual counting pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManualCount {
    /// Rendered trace
    pub text: String,
    /// Number of hits in `letters`
    pub count: usize,
}

/// Narrate counting `target` over `letters`
///
/// `word` is the word being asked about and is only used in the header;
/// `letters` is what actually gets enumerated, which may be a misspelling.
#[must_use]
pub fn narrate(word: &str, letters: &[char], target: char) -> ManualCount {
    let mut text = format!(
        "\nFirst spell the word out:\n\n{word}:{}.\n\nThen count the occurrences of '{target}':\n",
        spell_out(letters.iter().copied())
    );

    let mut count = 0;
    for (i, &c) in letters.iter().enumerate() {
        let position = i + 1;
        if c == target {
            count += 1;
            writeln!(text, "{position}:{c} hit! count={count}").ok();
        } else {
            writeln!(text, "{position}:{c}").ok();
        }
    }

    write!(text, "\nThis gives us {count}.\n").ok();
    ManualCount { text, count }
}
