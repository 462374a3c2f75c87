//! Configuration module for generation tasks.
//!
//! Handles YAML task configuration loading with validation of split and
//! sampling settings.

use crate::selector::Split;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse YAML configuration: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Invalid glob pattern: {0}")]
    InvalidPattern(String),

    #[error("Mistake probability must be within [0, 1], got {0}")]
    InvalidProbability(f64),

    #[error("Dataset size must be positive")]
    EmptyDataset,
}

/// Which generator a task file describes
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TaskKind {
    /// Count a letter in a word with manual and tool reasoning
    SpellingBee,
    /// Spell a word letter by letter
    SimpleSpelling,
}

/// Task configuration loaded from YAML
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaskConfig {
    /// Task definition
    pub task: TaskDefinition,
    /// Split and size
    #[serde(default)]
    pub dataset: DatasetSettings,
    /// Word list location
    pub corpus: CorpusConfig,
    /// Mistake injection (spelling bee only)
    #[serde(default)]
    pub mistakes: MistakeSettings,
}

/// Task definition section
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaskDefinition {
    /// Task identifier
    pub id: String,
    /// Generator to use
    pub kind: TaskKind,
    /// Task description
    #[serde(default)]
    pub description: String,
}

/// Split and number of examples
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DatasetSettings {
    #[serde(default)]
    pub split: Split,
    #[serde(default = "default_size")]
    pub size: usize,
}

const fn default_size() -> usize {
    1000
}

impl Default for DatasetSettings {
    fn default() -> Self {
        Self {
            split: Split::default(),
            size: default_size(),
        }
    }
}

/// Word list location
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CorpusConfig {
    /// Newline-delimited word file, already downloaded
    pub path: PathBuf,
}

/// Mistake injection settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MistakeSettings {
    /// Inject mistakes (train split only)
    #[serde(default)]
    pub enabled: bool,
    /// Chance that an example requests a mistake
    #[serde(default = "default_mistake_probability")]
    pub probability: f64,
}

const fn default_mistake_probability() -> f64 {
    0.3
}

impl Default for MistakeSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            probability: default_mistake_probability(),
        }
    }
}

/// Reject probabilities outside `[0, 1]` (including NaN)
///
/// # Errors
///
/// Returns `InvalidProbability` when `p` is out of range.
pub fn check_probability(p: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&p) {
        Ok(())
    } else {
        Err(ConfigError::InvalidProbability(p))
    }
}

impl TaskConfig {
    /// Load task configuration from YAML file
    ///
    /// A relative corpus path is resolved against the file's directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or fails validation.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::from_yaml(&content)?;

        if config.corpus.path.is_relative() {
            if let Some(parent) = path.parent() {
                config.corpus.path = parent.join(&config.corpus.path);
            }
        }

        Ok(config)
    }

    /// Load task configuration from YAML string
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML cannot be parsed or fails validation.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges
    ///
    /// # Errors
    ///
    /// Returns `InvalidProbability` or `EmptyDataset` on out-of-range values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_probability(self.mistakes.probability)?;
        if self.dataset.size == 0 {
            return Err(ConfigError::EmptyDataset);
        }
        Ok(())
    }

    /// Mistake probability in effect, or `None` when mistakes are off
    ///
    /// Mistakes are never injected into the test split.
    #[must_use]
    pub fn effective_mistake_probability(&self) -> Option<f64> {
        (self.mistakes.enabled && self.dataset.split == Split::Train)
            .then_some(self.mistakes.probability)
    }
}

/// Task loader for loading multiple task configurations from glob patterns
pub struct TaskLoader {
    tasks: Vec<TaskConfig>,
}

impl TaskLoader {
    /// Create a new empty task loader
    #[must_use]
    pub const fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Load tasks from a glob pattern (e.g., "tasks/*.yaml")
    ///
    /// # Errors
    ///
    /// Returns an error if the glob pattern is invalid or files cannot be loaded.
    pub fn load_glob(pattern: &str) -> Result<Self, ConfigError> {
        let mut loader = Self::new();

        let paths = glob::glob(pattern).map_err(|e| ConfigError::InvalidPattern(e.to_string()))?;

        for entry in paths {
            let path = entry.map_err(|e| {
                ConfigError::IoError(std::io::Error::other(format!("Glob error: {e}")))
            })?;

            let config = TaskConfig::load(&path)?;
            tracing::debug!(path = %path.display(), task = %config.task.id, "Loaded task config");
            loader.tasks.push(config);
        }

        Ok(loader)
    }

    /// Get the number of loaded tasks
    #[must_use]
    pub const fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Check if no tasks are loaded
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Iterate over loaded tasks
    pub fn iter(&self) -> impl Iterator<Item = &TaskConfig> {
        self.tasks.iter()
    }
}

impl Default for TaskLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl IntoIterator for TaskLoader {
    type Item = TaskConfig;
    type IntoIter = std::vec::IntoIter<TaskConfig>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.into_iter()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const FULL_YAML: &str = r#"
task:
  id: spelling-bee-train
  kind: spelling_bee
  description: "Count letters in words"

dataset:
  split: train
  size: 500

corpus:
  path: data/words_alpha.txt

mistakes:
  enabled: true
  probability: 0.25
"#;

    #[test]
    fn test_task_config_from_yaml() {
        let config = TaskConfig::from_yaml(FULL_YAML).expect("parse yaml");
        assert_eq!(config.task.id, "spelling-bee-train");
        assert_eq!(config.task.kind, TaskKind::SpellingBee);
        assert_eq!(config.dataset.split, Split::Train);
        assert_eq!(config.dataset.size, 500);
        assert_eq!(config.corpus.path, PathBuf::from("data/words_alpha.txt"));
        assert!(config.mistakes.enabled);
        assert!((config.mistakes.probability - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn test_task_config_minimal() {
        let yaml = r"
task:
  id: minimal
  kind: simple_spelling

corpus:
  path: words.txt
";
        let config = TaskConfig::from_yaml(yaml).expect("parse yaml");
        assert_eq!(config.dataset.size, 1000); // default
        assert_eq!(config.dataset.split, Split::Train); // default
        assert!(!config.mistakes.enabled);
        assert!((config.mistakes.probability - 0.3).abs() < f64::EPSILON);
        assert!(config.task.description.is_empty());
    }

    #[test]
    fn test_invalid_probability() {
        let yaml = FULL_YAML.replace("probability: 0.25", "probability: 1.5");
        let result = TaskConfig::from_yaml(&yaml);
        assert!(matches!(result, Err(ConfigError::InvalidProbability(_))));
    }

    #[test]
    fn test_empty_dataset() {
        let yaml = FULL_YAML.replace("size: 500", "size: 0");
        assert!(matches!(TaskConfig::from_yaml(&yaml), Err(ConfigError::EmptyDataset)));
    }

    #[test]
    fn test_invalid_split() {
        let yaml = FULL_YAML.replace("split: train", "split: validation");
        assert!(matches!(TaskConfig::from_yaml(&yaml), Err(ConfigError::YamlError(_))));
    }

    #[test]
    fn test_effective_mistake_probability() {
        let config = TaskConfig::from_yaml(FULL_YAML).unwrap();
        assert_eq!(config.effective_mistake_probability(), Some(0.25));

        let test_split =
            TaskConfig::from_yaml(&FULL_YAML.replace("split: train", "split: test")).unwrap();
        assert_eq!(test_split.effective_mistake_probability(), None);

        let disabled =
            TaskConfig::from_yaml(&FULL_YAML.replace("enabled: true", "enabled: false")).unwrap();
        assert_eq!(disabled.effective_mistake_probability(), None);
    }

    #[test]
    fn test_unknown_task_kind() {
        let yaml = FULL_YAML.replace("kind: spelling_bee", "kind: gsm8k");
        assert!(matches!(TaskConfig::from_yaml(&yaml), Err(ConfigError::YamlError(_))));
    }

    #[test]
    fn test_check_probability_bounds() {
        assert!(check_probability(0.0).is_ok());
        assert!(check_probability(1.0).is_ok());
        assert!(matches!(check_probability(-0.1), Err(ConfigError::InvalidProbability(_))));
        assert!(matches!(check_probability(1.5), Err(ConfigError::InvalidProbability(_))));
        assert!(check_probability(f64::NAN).is_err());
    }

    #[test]
    fn test_load_resolves_relative_corpus_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bee.yaml");
        std::fs::write(&path, FULL_YAML).unwrap();

        let config = TaskConfig::load(&path).unwrap();
        assert_eq!(config.corpus.path, dir.path().join("data/words_alpha.txt"));
    }

    #[test]
    fn test_config_roundtrip() {
        let config = TaskConfig::from_yaml(FULL_YAML).unwrap();
        let yaml = serde_yaml::to_string(&config).expect("serialize");
        let parsed = TaskConfig::from_yaml(&yaml).expect("deserialize");
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_task_loader_new() {
        let loader = TaskLoader::new();
        assert!(loader.is_empty());
        assert_eq!(loader.len(), 0);
    }

    #[test]
    fn test_task_loader_default() {
        assert!(TaskLoader::default().is_empty());
    }

    #[test]
    fn test_task_loader_load_glob() {
        let loader = TaskLoader::load_glob("tasks/*.yaml").unwrap();
        assert!(loader.len() >= 2);
        for task in loader.iter() {
            assert!(!task.task.id.is_empty());
        }
    }

    #[test]
    fn test_task_loader_load_glob_no_matches() {
        let loader = TaskLoader::load_glob("nonexistent/*.yaml").unwrap();
        assert!(loader.is_empty());
    }

    #[test]
    fn test_task_loader_invalid_pattern() {
        let result = TaskLoader::load_glob("tasks/[*.yaml");
        assert!(matches!(result, Err(ConfigError::InvalidPattern(_))));
    }

    #[test]
    fn test_task_loader_single_file_pattern() {
        let loader = TaskLoader::load_glob("tasks/spelling-bee.yaml").unwrap();
        assert_eq!(loader.len(), 1);
        assert_eq!(loader.iter().next().unwrap().task.id, "spelling-bee");
    }

    #[test]
    fn test_task_loader_into_iter() {
        let loader = TaskLoader::load_glob("tasks/*.yaml").unwrap();
        assert!(loader.into_iter().next().is_some());
    }
}
