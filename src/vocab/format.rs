//! # Registry Text Format
//!
//! The registry is persisted as flat, line-oriented text:
//!
//! ```text
//! #Animals
//! cat
//! dog
//!
//! #Colors
//! red
//! ```
//!
//! - A line starting with `#` opens a topic; the rest of the line, trimmed,
//!   is its name.
//! - Every other non-blank line is a word of the most recent topic. Words go
//!   through [`WordList::add`](crate::word_list::WordList::add), so they are
//!   folded and sorted regardless of their order in the file.
//! - Blank lines are ignored.
//!
//! Rendering emits `#<name>` followed by the words in sorted order, one per
//! line, for each topic in registry order.

use crate::error::{Result, VocabError};
use crate::topic_list::TopicList;

pub const TOPIC_MARKER: char = '#';

/// Parses registry text into a fresh [`TopicList`].
pub fn parse(text: &str) -> Result<TopicList> {
    let mut topics = TopicList::new();

    for (i, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(name) = line.strip_prefix(TOPIC_MARKER) {
            let name = name.trim();
            if name.is_empty() {
                return Err(VocabError::Format {
                    line: i + 1,
                    message: "topic header has no name".to_string(),
                });
            }
            topics.add(name);
            continue;
        }

        match topics.last_mut() {
            Some(topic) => topic.words_mut().add(line),
            None => {
                return Err(VocabError::Format {
                    line: i + 1,
                    message: format!("word '{}' appears before any topic header", line),
                })
            }
        }
    }

    Ok(topics)
}

/// Renders a [`TopicList`] in the registry text format.
pub fn render(topics: &TopicList) -> String {
    let mut out = String::new();
    for topic in topics {
        out.push(TOPIC_MARKER);
        out.push_str(topic.name());
        out.push('\n');
        for word in topic.words().iter() {
            out.push_str(word);
            out.push('\n');
        }
    }
    out
}
