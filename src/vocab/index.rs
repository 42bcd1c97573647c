//! # Display Indexes
//!
//! Internally topics are addressed by 0-based positions that shift with
//! every insertion and deletion. Users see and type 1-based numbers that
//! match the listing they just looked at:
//!
//! ```text
//!  1  Animals      <- DisplayIndex(1), position 0
//!  2  Colors       <- DisplayIndex(2), position 1
//! ```
//!
//! A [`TopicSelector`] is whatever the user typed to pick a topic: either a
//! number or a (case-insensitive) topic name. Numbers are NOT bounds-checked
//! here; the structural operation that receives the position is the one
//! that accepts or rejects it.

use crate::error::{Result, VocabError};
use crate::model::Topic;
use crate::topic_list::TopicList;
use std::str::FromStr;

/// A user-facing, 1-based topic number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DisplayIndex(usize);

impl DisplayIndex {
    /// Builds a display index from a 1-based number. Zero is not a topic.
    pub fn new(n: usize) -> Option<Self> {
        if n == 0 {
            None
        } else {
            Some(Self(n))
        }
    }

    pub fn from_position(position: usize) -> Self {
        Self(position + 1)
    }

    /// The 0-based position this number refers to.
    pub fn position(&self) -> usize {
        self.0 - 1
    }

    pub fn get(&self) -> usize {
        self.0
    }
}

impl std::fmt::Display for DisplayIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DisplayIndex {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let n: usize = s
            .trim()
            .parse()
            .map_err(|_| format!("Invalid topic number: {}", s))?;
        DisplayIndex::new(n).ok_or_else(|| "Topic numbers start at 1".to_string())
    }
}

/// A user input to select a topic, either by its number or by its name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TopicSelector {
    Index(DisplayIndex),
    Name(String),
}

impl std::fmt::Display for TopicSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TopicSelector::Index(idx) => write!(f, "{}", idx),
            TopicSelector::Name(name) => write!(f, "\"{}\"", name),
        }
    }
}

impl FromStr for TopicSelector {
    type Err = String;

    /// All-digit input is a number (and must be at least 1); anything else
    /// is a name.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err("Topic selector cannot be empty".to_string());
        }
        if trimmed.chars().all(|c| c.is_ascii_digit()) {
            return DisplayIndex::from_str(trimmed).map(TopicSelector::Index);
        }
        Ok(TopicSelector::Name(trimmed.to_string()))
    }
}

impl TopicSelector {
    /// Resolves the selector to a 0-based position.
    ///
    /// Names must match an existing topic. Numbers are translated as-is, so
    /// the result may be out of range for the current registry.
    pub fn position(&self, topics: &TopicList) -> Result<usize> {
        match self {
            TopicSelector::Index(idx) => Ok(idx.position()),
            TopicSelector::Name(name) => topics
                .position_of(name)
                .ok_or_else(|| VocabError::TopicNotFound(name.clone())),
        }
    }
}

/// A topic paired with the number it is displayed under.
#[derive(Debug, Clone)]
pub struct DisplayTopic {
    pub index: DisplayIndex,
    pub topic: Topic,
}

/// Numbers every topic in registry order.
pub fn index_topics(topics: &TopicList) -> Vec<DisplayTopic> {
    topics
        .iter()
        .enumerate()
        .map(|(position, topic)| DisplayTopic {
            index: DisplayIndex::from_position(position),
            topic: topic.clone(),
        })
        .collect()
}
