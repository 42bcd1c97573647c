//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every vocab operation, whatever the UI.
//!
//! It:
//! - **Parses** user-facing topic selectors (`"2"`, `"Animals"`)
//! - **Dispatches** to the matching `commands::*` function
//! - **Returns** structured `CmdResult` values
//!
//! It does no business logic, no terminal I/O and no formatting.
//!
//! `VocabApi<S: RegistryStore>` is generic over the storage backend:
//! `FileStore` in production, `InMemoryStore` in tests.

use crate::commands;
use crate::error::{Result, VocabError};
use crate::index::TopicSelector;
use crate::store::RegistryStore;
use std::path::Path;

/// The main API facade for vocab operations.
pub struct VocabApi<S: RegistryStore> {
    store: S,
    paths: commands::VocabPaths,
}

impl<S: RegistryStore> VocabApi<S> {
    pub fn new(store: S, paths: commands::VocabPaths) -> Self {
        Self { store, paths }
    }

    pub fn list_topics(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn browse_topic(&self, topic: &str) -> Result<commands::CmdResult> {
        let selector = parse_selector(topic)?;
        commands::browse::run(&self.store, &selector)
    }

    pub fn add_topic<W: AsRef<str>>(
        &mut self,
        name: &str,
        words: &[W],
    ) -> Result<commands::CmdResult> {
        commands::insert::run(&mut self.store, name, &Placement::End, words)
    }

    pub fn insert_topic_before<W: AsRef<str>>(
        &mut self,
        anchor: &str,
        name: &str,
        words: &[W],
    ) -> Result<commands::CmdResult> {
        let placement = Placement::Before(parse_selector(anchor)?);
        commands::insert::run(&mut self.store, name, &placement, words)
    }

    pub fn insert_topic_after<W: AsRef<str>>(
        &mut self,
        anchor: &str,
        name: &str,
        words: &[W],
    ) -> Result<commands::CmdResult> {
        let placement = Placement::After(parse_selector(anchor)?);
        commands::insert::run(&mut self.store, name, &placement, words)
    }

    pub fn remove_topic(&mut self, topic: &str) -> Result<commands::CmdResult> {
        let selector = parse_selector(topic)?;
        commands::remove::run(&mut self.store, &selector)
    }

    pub fn rename_topic(&mut self, topic: &str, new_name: &str) -> Result<commands::CmdResult> {
        let selector = parse_selector(topic)?;
        commands::rename::run(&mut self.store, &selector, new_name)
    }

    pub fn add_words<W: AsRef<str>>(
        &mut self,
        topic: &str,
        words: &[W],
    ) -> Result<commands::CmdResult> {
        let selector = parse_selector(topic)?;
        commands::words::add(&mut self.store, &selector, words)
    }

    pub fn remove_word(&mut self, topic: &str, word: &str) -> Result<commands::CmdResult> {
        let selector = parse_selector(topic)?;
        commands::words::remove(&mut self.store, &selector, word)
    }

    pub fn change_word(
        &mut self,
        topic: &str,
        old_word: &str,
        new_word: &str,
    ) -> Result<commands::CmdResult> {
        let selector = parse_selector(topic)?;
        commands::words::change(&mut self.store, &selector, old_word, new_word)
    }

    pub fn search_word(&self, word: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.store, word)
    }

    pub fn words_starting_with(&self, letter: &str) -> Result<commands::CmdResult> {
        commands::starting::run(&self.store, letter)
    }

    pub fn load_file(&mut self, path: &Path, mode: LoadMode) -> Result<commands::CmdResult> {
        commands::load::run(&mut self.store, path, mode)
    }

    pub fn save_file(&self, path: &Path, overwrite: bool) -> Result<commands::CmdResult> {
        commands::save::run(&self.store, path, overwrite)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn init(&mut self) -> Result<commands::CmdResult> {
        commands::init::run(&mut self.store)
    }

    pub fn paths(&self) -> &commands::VocabPaths {
        &self.paths
    }
}

fn parse_selector(input: &str) -> Result<TopicSelector> {
    input.parse().map_err(VocabError::Api)
}

pub use crate::commands::config::ConfigAction;
pub use commands::insert::Placement;
pub use commands::load::LoadMode;
pub use commands::{CmdMessage, CmdResult, MessageLevel, VocabPaths};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::store_with;
    use crate::store::memory::InMemoryStore;
    use std::path::PathBuf;

    fn api(store: InMemoryStore) -> VocabApi<InMemoryStore> {
        let paths = VocabPaths {
            home: PathBuf::from("/nonexistent"),
            registry: PathBuf::from("/nonexistent/registry.txt"),
        };
        VocabApi::new(store, paths)
    }

    const NO_WORDS: &[&str] = &[];

    #[test]
    fn insert_before_dispatches_with_parsed_anchor() {
        let mut api = api(store_with(&[("A", &[]), ("B", &[])]));
        api.insert_topic_before("b", "X", NO_WORDS).unwrap();

        let listed = api.list_topics().unwrap().listed_topics;
        let names: Vec<_> = listed.iter().map(|dt| dt.topic.name()).collect();
        assert_eq!(names, vec!["A", "X", "B"]);
    }

    #[test]
    fn insert_after_dispatches_with_parsed_anchor() {
        let mut api = api(store_with(&[("A", &[]), ("B", &[])]));
        api.insert_topic_after("2", "X", &["xylophone"]).unwrap();

        let browsed = api.browse_topic("3").unwrap();
        assert_eq!(browsed.listed_topics[0].topic.name(), "X");
        assert!(browsed.listed_topics[0].topic.words().contains("xylophone"));
    }

    #[test]
    fn word_operations_route_to_selected_topic() {
        let mut api = api(store_with(&[("Animals", &["cat"])]));
        api.add_words("animals", &["Dog"]).unwrap();
        api.change_word("1", "cat", "cow").unwrap();
        api.remove_word("Animals", "dog").unwrap();

        let shown = api.browse_topic("1").unwrap();
        let words: Vec<_> = shown.listed_topics[0].topic.words().iter().collect();
        assert_eq!(words, vec!["cow"]);
    }

    #[test]
    fn queries_return_listings() {
        let api = api(store_with(&[("Animals", &["cat"]), ("Colors", &["cyan"])]));
        assert_eq!(api.search_word("CAT").unwrap().listed_topics.len(), 1);
        assert_eq!(
            api.words_starting_with("c").unwrap().listed_words,
            vec!["cat", "cyan"]
        );
    }

    #[test]
    fn invalid_selector_is_an_api_error() {
        let mut api = api(InMemoryStore::new());
        assert!(matches!(api.remove_topic("0"), Err(VocabError::Api(_))));
        assert!(matches!(api.browse_topic(""), Err(VocabError::Api(_))));
    }
}
