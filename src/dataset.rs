//! Building tasks from configuration and exporting examples as JSON lines.

use crate::config::{TaskConfig, TaskKind};
use crate::simple_spelling::SimpleSpelling;
use crate::spelling_bee::SpellingBee;
use crate::task::{Task, TaskError};
use std::io::Write;
use thiserror::Error;

/// Errors that can occur during export
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to generate example: {0}")]
    Task(#[from] TaskError),

    #[error("Failed to serialize example: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Instantiate the task a configuration describes
///
/// # Errors
///
/// Returns an error if the corpus cannot be loaded or the configuration is invalid.
pub fn build_task(config: &TaskConfig) -> Result<Box<dyn Task>, TaskError> {
    let task: Box<dyn Task> = match config.task.kind {
        TaskKind::SpellingBee => Box::new(SpellingBee::from_config(config)?),
        TaskKind::SimpleSpelling => Box::new(SimpleSpelling::from_config(config)?),
    };
    tracing::debug!(task = task.name(), eval_type = ?task.eval_type(), "Built task");
    Ok(task)
}

/// Summary of an export run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportStats {
    /// Records written
    pub written: usize,
}

/// Write examples `0..limit` (or the whole task) as one JSON object per line
///
/// # Errors
///
/// Returns an error if generation, serialization or writing fails.
pub fn write_jsonl<W: Write>(
    task: &dyn Task,
    writer: &mut W,
    limit: Option<usize>,
) -> Result<ExportStats, ExportError> {
    let count = limit.map_or(task.num_examples(), |l| l.min(task.num_examples()));
    let mut stats = ExportStats::default();

    for index in 0..count {
        let conversation = task.get_example(index)?;
        serde_json::to_writer(&mut *writer, &conversation)?;
        writer.write_all(b"\n")?;
        stats.written += 1;
    }
    writer.flush()?;

    tracing::info!(task = task.name(), written = stats.written, "Exported examples");
    Ok(stats)
}
