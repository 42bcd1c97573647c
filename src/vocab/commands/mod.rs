use crate::config::VocabConfig;
use crate::index::DisplayTopic;
use std::path::PathBuf;

pub mod browse;
pub mod config;
pub mod helpers;
pub mod init;
pub mod insert;
pub mod list;
pub mod load;
pub mod remove;
pub mod rename;
pub mod save;
pub mod search;
pub mod starting;
pub mod words;

#[derive(Debug, Clone)]
pub struct VocabPaths {
    /// Directory holding `config.json` and, by default, the registry file.
    pub home: PathBuf,
    /// The registry file the store reads and writes.
    pub registry: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_topics: Vec<DisplayTopic>,
    pub listed_words: Vec<String>,
    pub config: Option<VocabConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_topics(mut self, topics: Vec<DisplayTopic>) -> Self {
        self.listed_topics = topics;
        self
    }

    pub fn with_listed_words(mut self, words: Vec<String>) -> Self {
        self.listed_words = words;
        self
    }

    pub fn with_config(mut self, config: VocabConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// True when any message was reported at error level.
    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }
}
