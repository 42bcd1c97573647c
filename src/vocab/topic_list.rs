//! # Topic Lists
//!
//! [`TopicList`] is the registry itself: an ordered sequence of [`Topic`]s.
//! Order is meaningful, it is both the display order and the save order.
//!
//! Positions are 0-based and volatile. Any insertion or deletion at or
//! before a position shifts everything after it, so a position obtained
//! before a structural change must not be reused after it.
//!
//! ## Outcomes
//!
//! There are three kinds of outcome:
//!
//! - Inserting or deleting at an invalid position returns
//!   [`VocabError::InvalidPosition`] and leaves the list untouched. The
//!   command layer reports it to the user and carries on.
//! - Looking up a position returns `None` when it is out of range. This is
//!   an expected outcome, not an error.
//! - Strict failures are reserved for [`WordList::word_at`](crate::word_list::WordList::word_at).
//!
//! Name uniqueness is not enforced here; callers consult
//! [`TopicList::contains_topic`] before inserting.

use crate::error::{Result, VocabError};
use crate::model::Topic;
use log::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopicList {
    topics: Vec<Topic>,
}

impl TopicList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    /// Appends a new, empty topic.
    pub fn add(&mut self, name: impl Into<String>) {
        self.topics.push(Topic::new(name));
    }

    /// Inserts a new, empty topic so that it ends up at `index`.
    ///
    /// `index == len()` appends. Anything past that is rejected.
    pub fn add_at_index(&mut self, index: usize, name: impl Into<String>) -> Result<()> {
        let len = self.topics.len();
        if index > len {
            debug!("event=topic_insert_rejected index={} len={}", index, len);
            return Err(VocabError::InvalidPosition { index, len });
        }
        self.topics.insert(index, Topic::new(name));
        Ok(())
    }

    /// Removes and returns the topic at `index`.
    pub fn delete_at_index(&mut self, index: usize) -> Result<Topic> {
        let len = self.topics.len();
        if index >= len {
            debug!("event=topic_delete_rejected index={} len={}", index, len);
            return Err(VocabError::InvalidPosition { index, len });
        }
        Ok(self.topics.remove(index))
    }

    pub fn get(&self, index: usize) -> Option<&Topic> {
        self.topics.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Topic> {
        self.topics.get_mut(index)
    }

    pub fn contains_topic(&self, name: &str) -> bool {
        self.position_of(name).is_some()
    }

    /// Position of the first topic whose name matches `name`, ignoring case.
    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.topics.iter().position(|t| t.is_named(name))
    }

    pub fn last_mut(&mut self) -> Option<&mut Topic> {
        self.topics.last_mut()
    }

    pub fn clear(&mut self) {
        self.topics.clear();
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Topic> {
        self.topics.iter()
    }
}

impl<'a> IntoIterator for &'a TopicList {
    type Item = &'a Topic;
    type IntoIter = std::slice::Iter<'a, Topic>;

    fn into_iter(self) -> Self::IntoIter {
        self.topics.iter()
    }
}
