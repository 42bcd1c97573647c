//! # Storage Layer
//!
//! The [`RegistryStore`] trait lets commands load and save the whole
//! registry without knowing where it lives.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage. The registry is a single text
//!   file in the format described in [`crate::format`]. A missing file reads
//!   as an empty registry.
//! - [`memory::InMemoryStore`]: keeps the registry in memory, for tests.
//!
//! The registry is small, so every operation loads it whole, mutates it and
//! writes it back whole. There is no partial update.

use crate::error::Result;
use crate::topic_list::TopicList;
use std::path::PathBuf;

pub mod fs;
pub mod memory;

/// Abstract interface for registry storage.
pub trait RegistryStore {
    /// Load the full registry. An absent registry is an empty one.
    fn load(&self) -> Result<TopicList>;

    /// Replace the stored registry with `topics`.
    fn save(&mut self, topics: &TopicList) -> Result<()>;

    /// Where the registry lives, for stores that have a location.
    fn location(&self) -> Option<PathBuf>;
}
