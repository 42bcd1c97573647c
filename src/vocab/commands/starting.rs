use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, VocabError};
use crate::store::RegistryStore;

/// Collects every word, across all topics, whose first letter matches
/// `letter` (ignoring case). Only the first character of `letter` counts.
///
/// Words present in several topics are listed once per topic.
pub fn run<S: RegistryStore>(store: &S, letter: &str) -> Result<CmdResult> {
    let wanted = letter
        .trim()
        .chars()
        .next()
        .ok_or_else(|| VocabError::Api("A letter is required".into()))?;
    let wanted: Vec<char> = wanted.to_lowercase().collect();
    let topics = store.load()?;

    let mut found = Vec::new();
    for topic in &topics {
        let words = topic.words();
        for i in 0..words.len() {
            let word = words.word_at(i)?;
            let first: Option<Vec<char>> =
                word.chars().next().map(|c| c.to_lowercase().collect());
            if first.as_deref() == Some(wanted.as_slice()) {
                found.push(word.to_string());
            }
        }
    }
    found.sort();

    let shown: String = wanted.iter().collect();
    let mut result = CmdResult::default();
    if found.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "Words starting with the letter '{}' were not found in any topics.",
            shown
        )));
    }
    Ok(result.with_listed_words(found))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::store_with;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn collects_and_sorts_across_topics() {
        let store = store_with(&[
            ("Animals", &["cat", "cow", "dog"]),
            ("Colors", &["cyan", "red"]),
            ("Food", &["cake"]),
        ]);

        let result = run(&store, "C").unwrap();
        assert_eq!(result.listed_words, vec!["cake", "cat", "cow", "cyan"]);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn keeps_words_shared_by_topics() {
        let store = store_with(&[("Fruit", &["orange"]), ("Colors", &["orange"])]);
        let result = run(&store, "o").unwrap();
        assert_eq!(result.listed_words, vec!["orange", "orange"]);
    }

    #[test]
    fn only_first_character_is_used() {
        let store = store_with(&[("Animals", &["dog", "cat"])]);
        let result = run(&store, " dx ").unwrap();
        assert_eq!(result.listed_words, vec!["dog"]);
    }

    #[test]
    fn reports_when_nothing_starts_with_letter() {
        let store = store_with(&[("Animals", &["dog"])]);
        let result = run(&store, "q").unwrap();
        assert!(result.listed_words.is_empty());
        assert_eq!(result.messages.len(), 1);
    }

    #[test]
    fn empty_letter_is_rejected() {
        let store = InMemoryStore::new();
        assert!(matches!(run(&store, " "), Err(VocabError::Api(_))));
    }
}
