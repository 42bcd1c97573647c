//! # Word Lists
//!
//! A [`WordList`] holds the words of a single topic, folded to lowercase and
//! kept in ascending order at all times.
//!
//! Ordering is plain byte-wise `str` comparison of the folded value. There is
//! no locale awareness.
//!
//! The list does **not** reject duplicates on its own: `add` always succeeds.
//! Callers that need distinct words check [`WordList::contains`] with the
//! folded form first (see `commands::words`).
//!
//! Note that `contains` and `delete` compare the input exactly as given,
//! without folding. A caller holding `"Apple"` will not find a stored
//! `"apple"`; use [`fold_word`] before asking.

use crate::error::{Result, VocabError};

/// Normalizes a word to its stored form.
pub fn fold_word(word: &str) -> String {
    word.to_lowercase()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Exact match against the stored (already folded) form.
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    /// Folds `word` and inserts it at its sorted position.
    ///
    /// The insertion point is the first entry that is not less than the
    /// folded word, so an equal value ends up immediately before the
    /// existing one.
    pub fn add(&mut self, word: &str) {
        let folded = fold_word(word);
        let at = self.words.partition_point(|w| w.as_str() < folded.as_str());
        self.words.insert(at, folded);
    }

    /// Removes the first entry equal to `word`. Returns `false` when there
    /// was nothing to remove.
    pub fn delete(&mut self, word: &str) -> bool {
        match self.words.iter().position(|w| w == word) {
            Some(at) => {
                self.words.remove(at);
                true
            }
            None => false,
        }
    }

    /// Returns the word at `index`.
    ///
    /// Unlike topic lookup this is strict: callers are expected to check
    /// [`len`](Self::len) first, and an out-of-range index is an error.
    pub fn word_at(&self, index: usize) -> Result<&str> {
        self.words
            .get(index)
            .map(String::as_str)
            .ok_or(VocabError::WordIndexOutOfRange {
                index,
                len: self.words.len(),
            })
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(list: &WordList) -> Vec<&str> {
        list.iter().collect()
    }

    fn assert_sorted(list: &WordList) {
        let words = collect(list);
        for pair in words.windows(2) {
            assert!(pair[0] <= pair[1], "{:?} out of order", pair);
        }
    }

    #[test]
    fn new_list_is_empty() {
        let list = WordList::new();
        assert_eq!(list.len(), 0);
        assert!(list.is_empty());
    }

    #[test]
    fn add_keeps_words_sorted_and_folded() {
        let mut list = WordList::new();
        for w in ["Pear", "apple", "ZEBRA", "mango", "banana"] {
            list.add(w);
            assert_sorted(&list);
        }
        assert_eq!(collect(&list), vec!["apple", "banana", "mango", "pear", "zebra"]);
    }

    #[test]
    fn add_into_empty_list_creates_sole_element() {
        let mut list = WordList::new();
        list.add("Solo");
        assert_eq!(collect(&list), vec!["solo"]);
    }

    #[test]
    fn add_does_not_reject_duplicates() {
        let mut list = WordList::new();
        list.add("Apple");
        list.add("apple");

        assert_eq!(collect(&list), vec!["apple", "apple"]);
        assert!(list.contains("apple"));
        assert!(!list.contains("Apple"));
    }

    #[test]
    fn contains_does_not_fold_input() {
        let mut list = WordList::new();
        list.add("Dog");
        assert!(list.contains("dog"));
        assert!(!list.contains("Dog"));
        assert!(list.contains(&fold_word("Dog")));
    }

    #[test]
    fn delete_removes_matching_word_anywhere() {
        let mut list = WordList::new();
        for w in ["a", "b", "c", "d", "e"] {
            list.add(w);
        }

        assert!(list.delete("d"));
        assert_eq!(collect(&list), vec!["a", "b", "c", "e"]);
        assert!(list.delete("a"));
        assert!(list.delete("e"));
        assert_eq!(collect(&list), vec!["b", "c"]);
        assert_sorted(&list);
    }

    #[test]
    fn delete_missing_word_is_noop() {
        let mut list = WordList::new();
        list.add("cat");
        assert!(!list.delete("dog"));
        assert!(!list.delete("Cat"));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn delete_sole_element_empties_list() {
        let mut list = WordList::new();
        list.add("cat");
        assert!(list.delete("cat"));
        assert!(list.is_empty());

        list.add("dog");
        assert_eq!(collect(&list), vec!["dog"]);
    }

    #[test]
    fn delete_only_removes_first_duplicate() {
        let mut list = WordList::new();
        list.add("echo");
        list.add("echo");
        assert!(list.delete("echo"));
        assert_eq!(collect(&list), vec!["echo"]);
    }

    #[test]
    fn word_at_returns_sorted_position() {
        let mut list = WordList::new();
        list.add("red");
        list.add("blue");
        assert_eq!(list.word_at(0).unwrap(), "blue");
        assert_eq!(list.word_at(1).unwrap(), "red");
    }

    #[test]
    fn word_at_on_empty_list_is_range_error() {
        let list = WordList::new();
        for index in [0, 1, 42] {
            assert!(matches!(
                list.word_at(index),
                Err(VocabError::WordIndexOutOfRange { len: 0, .. })
            ));
        }
    }

    #[test]
    fn word_at_past_end_is_range_error() {
        let mut list = WordList::new();
        list.add("one");
        let err = list.word_at(1).unwrap_err();
        assert!(matches!(
            err,
            VocabError::WordIndexOutOfRange { index: 1, len: 1 }
        ));
    }

    #[test]
    fn ordering_is_bytewise_not_locale_aware() {
        let mut list = WordList::new();
        list.add("éclair");
        list.add("zebra");
        list.add("apple");
        assert_eq!(collect(&list), vec!["apple", "zebra", "éclair"]);
    }

    #[test]
    fn mixed_add_delete_sequence_stays_sorted() {
        let mut list = WordList::new();
        let script = [
            ("add", "m"),
            ("add", "C"),
            ("add", "x"),
            ("del", "m"),
            ("add", "a"),
            ("add", "M"),
            ("del", "zzz"),
            ("add", "b"),
            ("del", "a"),
        ];
        for (op, w) in script {
            match op {
                "add" => list.add(w),
                _ => {
                    list.delete(w);
                }
            }
            assert_sorted(&list);
        }
        assert_eq!(collect(&list), vec!["b", "c", "m", "x"]);
    }
}
