//! # Spelling Bee
//!
//! Deterministic synthesis of training conversations that teach a language
//! model to count letters in words.
//!
//! ## Approach
//!
//! Every example asks how many times a letter occurs in a word and answers
//! it twice:
//! - a manual, letter-by-letter enumeration with a running tally
//! - a simulated tool call that recomputes the count
//!
//! On the train split an example can first count over a misspelled word,
//! notice that the tool disagrees, and correct itself.
//!
//! ## Architecture
//!
//! ```text
//! (split, index) -> ChaCha8 stream
//!        ↓
//! Selection (word, letter, mistake flag, template, styling)
//!        ↓
//! User message (template + quoting + casing + '?')
//!        ↓
//! Assistant turn (manual pass, tool pass, optional correction, #### marker)
//!        ↓
//! Conversation record (JSON)
//! ```
//!
//! Scoring extracts the `#### <n>` marker from the reference and the
//! candidate and compares them.

pub mod answer;
pub mod config;
pub mod conversation;
pub mod corpus;
pub mod dataset;
pub mod misspell;
pub mod mistake;
pub mod narrate;
pub mod selector;
pub mod simple_spelling;
pub mod spelling_bee;
pub mod style;
pub mod task;
pub mod templates;
pub mod tool;

pub use answer::{evaluate, extract_answer, EvalError};
pub use config::{ConfigError, TaskConfig, TaskKind, TaskLoader};
pub use conversation::{AssistantPart, AssistantTurnBuilder, Content, Conversation, Message, Role};
pub use corpus::{CorpusError, CorpusStats, WordCorpus};
pub use dataset::{build_task, write_jsonl, ExportError, ExportStats};
pub use misspell::{misspell, MisspellError};
pub use mistake::{build_assistant_turn, AssistantTurn, MistakePlan};
pub use narrate::{narrate, ManualCount};
pub use selector::{example_rng, select, Selection, SelectorError, Split, TEST_SEED_OFFSET};
pub use simple_spelling::SimpleSpelling;
pub use spelling_bee::{SpellingBee, SpellingBeeExample};
pub use style::{render_user_message, QuoteStyle, Styling};
pub use task::{EvalType, Task, TaskError};
pub use templates::{Locale, Template, TEMPLATES};
pub use tool::{simulate, ToolCount};
