use thiserror::Error;

#[derive(Error, Debug)]
pub enum VocabError {
    #[error("Invalid index: {index} (registry has {len} topics)")]
    InvalidPosition { index: usize, len: usize },

    #[error("Word index {index} is out of bounds (topic has {len} words)")]
    WordIndexOutOfRange { index: usize, len: usize },

    #[error("Topic not found: {0}")]
    TopicNotFound(String),

    #[error("Format error on line {line}: {message}")]
    Format { line: usize, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, VocabError>;
