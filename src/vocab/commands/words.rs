//! Word edits within a single topic: add, remove and change.
//!
//! Words typed by the user are folded before they are compared against the
//! topic, so `Cat` and `cat` are the same word here even though
//! [`WordList::contains`](crate::word_list::WordList::contains) itself is
//! exact. A command either applies completely or leaves the registry as it
//! was.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::TopicSelector;
use crate::store::RegistryStore;
use log::info;

use super::helpers::{add_distinct_words, clean_word, topic_mut};

pub fn add<S: RegistryStore, W: AsRef<str>>(
    store: &mut S,
    selector: &TopicSelector,
    words: &[W],
) -> Result<CmdResult> {
    let mut topics = store.load()?;
    let mut result = CmdResult::default();
    let topic = topic_mut(&mut topics, selector)?;
    let topic_name = topic.name().to_string();

    let added = add_distinct_words(topic, words, &mut result);
    if added > 0 {
        store.save(&topics)?;
        info!("event=words_added topic={} count={}", topic_name, added);
        result.add_message(CmdMessage::success(format!(
            "Added {} word(s) under topic {}.",
            added, topic_name
        )));
    }
    Ok(result)
}

pub fn remove<S: RegistryStore>(
    store: &mut S,
    selector: &TopicSelector,
    word: &str,
) -> Result<CmdResult> {
    let folded = clean_word(word)?;
    let mut topics = store.load()?;
    let mut result = CmdResult::default();
    let topic = topic_mut(&mut topics, selector)?;
    let topic_name = topic.name().to_string();

    if !topic.words_mut().delete(&folded) {
        result.add_message(CmdMessage::warning(format!(
            "The word '{}' does not exist under topic {}.",
            folded, topic_name
        )));
        return Ok(result);
    }

    store.save(&topics)?;
    info!("event=word_deleted topic={} word={}", topic_name, folded);
    result.add_message(CmdMessage::success(format!(
        "The word '{}' was deleted from topic {}.",
        folded, topic_name
    )));
    Ok(result)
}

pub fn change<S: RegistryStore>(
    store: &mut S,
    selector: &TopicSelector,
    old_word: &str,
    new_word: &str,
) -> Result<CmdResult> {
    let old_folded = clean_word(old_word)?;
    let new_folded = clean_word(new_word)?;
    let mut topics = store.load()?;
    let mut result = CmdResult::default();
    let topic = topic_mut(&mut topics, selector)?;
    let topic_name = topic.name().to_string();

    if !topic.words().contains(&old_folded) {
        result.add_message(CmdMessage::warning(format!(
            "The word '{}' does not exist under topic {}.",
            old_folded, topic_name
        )));
        return Ok(result);
    }
    if old_folded == new_folded {
        result.add_message(CmdMessage::info("Nothing to change."));
        return Ok(result);
    }
    if topic.words().contains(&new_folded) {
        result.add_message(CmdMessage::warning(format!(
            "The word '{}' already exists under topic {}.",
            new_folded, topic_name
        )));
        return Ok(result);
    }

    topic.words_mut().delete(&old_folded);
    topic.words_mut().add(&new_folded);
    store.save(&topics)?;
    info!(
        "event=word_changed topic={} from={} to={}",
        topic_name, old_folded, new_folded
    );
    result.add_message(CmdMessage::success(format!(
        "The word '{}' was changed to '{}'.",
        old_folded, new_folded
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::VocabError;
    use crate::commands::MessageLevel;
    use crate::store::memory::fixtures::store_with;

    fn words_of<S: RegistryStore>(store: &S, position: usize) -> Vec<String> {
        store
            .load()
            .unwrap()
            .get(position)
            .unwrap()
            .words()
            .iter()
            .map(String::from)
            .collect()
    }

    fn first() -> TopicSelector {
        "1".parse().unwrap()
    }

    #[test]
    fn add_inserts_sorted_words() {
        let mut store = store_with(&[("Animals", &["dog"])]);
        add(&mut store, &first(), &["Zebra", "ant"]).unwrap();
        assert_eq!(words_of(&store, 0), vec!["ant", "dog", "zebra"]);
    }

    #[test]
    fn add_refuses_existing_word_regardless_of_case() {
        let mut store = store_with(&[("Animals", &["dog"])]);
        let result = add(&mut store, &first(), &["DOG"]).unwrap();

        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert_eq!(words_of(&store, 0), vec!["dog"]);
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn remove_folds_input() {
        let mut store = store_with(&[("Animals", &["cat", "dog"])]);
        remove(&mut store, &first(), "Cat").unwrap();
        assert_eq!(words_of(&store, 0), vec!["dog"]);
    }

    #[test]
    fn remove_missing_word_warns() {
        let mut store = store_with(&[("Animals", &["cat"])]);
        let result = remove(&mut store, &first(), "owl").unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert_eq!(words_of(&store, 0), vec!["cat"]);
    }

    #[test]
    fn remove_last_word_of_the_list() {
        let mut store = store_with(&[("Letters", &["a", "b", "c"])]);
        remove(&mut store, &first(), "c").unwrap();
        remove(&mut store, &first(), "b").unwrap();
        assert_eq!(words_of(&store, 0), vec!["a"]);
    }

    #[test]
    fn change_replaces_and_resorts() {
        let mut store = store_with(&[("Animals", &["ant", "cat", "dog"])]);
        change(&mut store, &first(), "ant", "Zebra").unwrap();
        assert_eq!(words_of(&store, 0), vec!["cat", "dog", "zebra"]);
    }

    #[test]
    fn change_to_existing_word_leaves_topic_intact() {
        let mut store = store_with(&[("Animals", &["cat", "dog"])]);
        let result = change(&mut store, &first(), "cat", "dog").unwrap();

        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert_eq!(words_of(&store, 0), vec!["cat", "dog"]);
    }

    #[test]
    fn change_missing_word_warns() {
        let mut store = store_with(&[("Animals", &["cat"])]);
        let result = change(&mut store, &first(), "owl", "bat").unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn blank_word_is_rejected() {
        let mut store = store_with(&[("Animals", &["cat"])]);
        assert!(matches!(
            remove(&mut store, &first(), "  "),
            Err(VocabError::Api(_))
        ));
    }

    #[test]
    fn words_target_the_selected_topic_only() {
        let mut store = store_with(&[("Animals", &[]), ("Colors", &[])]);
        add(&mut store, &"colors".parse().unwrap(), &["red"]).unwrap();
        assert!(words_of(&store, 0).is_empty());
        assert_eq!(words_of(&store, 1), vec!["red"]);
    }

    #[test]
    fn change_to_marker_word_is_refused() {
        let mut store = store_with(&[("Animals", &["cat"])]);
        assert!(matches!(
            change(&mut store, &first(), "cat", "#tag"),
            Err(VocabError::Api(_))
        ));
        assert!(matches!(
            change(&mut store, &first(), "cat", "c\nat"),
            Err(VocabError::Api(_))
        ));
        assert_eq!(words_of(&store, 0), vec!["cat"]);
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn add_skips_words_that_would_break_the_file() {
        let mut store = store_with(&[("Symbols", &[])]);
        let result = add(&mut store, &first(), &["#hashtag", "plain"]).unwrap();

        assert_eq!(words_of(&store, 0), vec!["plain"]);
        assert!(result
            .messages
            .iter()
            .any(|m| m.level == MessageLevel::Warning && m.content.contains("#hashtag")));
    }
}
