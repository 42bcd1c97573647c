use super::RegistryStore;
use crate::error::Result;
use crate::topic_list::TopicList;
use std::path::PathBuf;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    topics: TopicList,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_topics(topics: TopicList) -> Self {
        Self { topics, saves: 0 }
    }

    /// How many times the registry has been written.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl RegistryStore for InMemoryStore {
    fn load(&self) -> Result<TopicList> {
        Ok(self.topics.clone())
    }

    fn save(&mut self, topics: &TopicList) -> Result<()> {
        self.topics = topics.clone();
        self.saves += 1;
        Ok(())
    }

    fn location(&self) -> Option<PathBuf> {
        None
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    /// Builds an [`InMemoryStore`] from `(topic, words)` pairs.
    pub fn store_with(entries: &[(&str, &[&str])]) -> InMemoryStore {
        let mut topics = TopicList::new();
        for (name, words) in entries {
            topics.add(*name);
            if let Some(topic) = topics.last_mut() {
                for word in *words {
                    topic.words_mut().add(word);
                }
            }
        }
        InMemoryStore::with_topics(topics)
    }
}
