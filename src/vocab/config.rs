use crate::error::{Result, VocabError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_WORDS_PER_ROW: usize = 4;
const DEFAULT_COLUMN_WIDTH: usize = 20;

pub const KEY_REGISTRY_FILE: &str = "registry-file";
pub const KEY_WORDS_PER_ROW: &str = "words-per-row";
pub const KEY_COLUMN_WIDTH: &str = "column-width";

/// Configuration for vocab, stored in `<home>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VocabConfig {
    /// Registry file used when no `--file` or `VOCAB_FILE` is given
    #[serde(default)]
    pub registry_file: Option<PathBuf>,

    /// Number of words per row when browsing a topic
    #[serde(default = "default_words_per_row")]
    pub words_per_row: usize,

    /// Width of each word cell when browsing a topic
    #[serde(default = "default_column_width")]
    pub column_width: usize,
}

fn default_words_per_row() -> usize {
    DEFAULT_WORDS_PER_ROW
}

fn default_column_width() -> usize {
    DEFAULT_COLUMN_WIDTH
}

impl Default for VocabConfig {
    fn default() -> Self {
        Self {
            registry_file: None,
            words_per_row: DEFAULT_WORDS_PER_ROW,
            column_width: DEFAULT_COLUMN_WIDTH,
        }
    }
}

impl VocabConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(VocabError::Io)?;
        let config: VocabConfig =
            serde_json::from_str(&content).map_err(VocabError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(VocabError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(VocabError::Serialization)?;
        fs::write(config_path, content).map_err(VocabError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            KEY_REGISTRY_FILE => Some(
                self.registry_file
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default(),
            ),
            KEY_WORDS_PER_ROW => Some(self.words_per_row.to_string()),
            KEY_COLUMN_WIDTH => Some(self.column_width.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            KEY_REGISTRY_FILE => {
                let trimmed = value.trim();
                self.registry_file = if trimmed.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(trimmed))
                };
            }
            KEY_WORDS_PER_ROW => self.words_per_row = parse_positive(key, value)?,
            KEY_COLUMN_WIDTH => self.column_width = parse_positive(key, value)?,
            _ => return Err(VocabError::Config(format!("Unknown config key: {}", key))),
        }
        Ok(())
    }

    pub fn list_all(&self) -> Vec<(&'static str, String)> {
        [KEY_REGISTRY_FILE, KEY_WORDS_PER_ROW, KEY_COLUMN_WIDTH]
            .into_iter()
            .map(|k| (k, self.get(k).unwrap_or_default()))
            .collect()
    }
}

fn parse_positive(key: &str, value: &str) -> Result<usize> {
    match value.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(VocabError::Config(format!(
            "{} must be a positive number, got '{}'",
            key, value
        ))),
    }
}
