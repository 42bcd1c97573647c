use crate::word_list::WordList;

/// A named group of words. The topic owns its word list outright.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic {
    name: String,
    words: WordList,
}

impl Topic {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            words: WordList::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Case-insensitive name comparison, used for existence checks.
    pub fn is_named(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    pub fn words(&self) -> &WordList {
        &self.words
    }

    pub fn words_mut(&mut self) -> &mut WordList {
        &mut self.words
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_topic_has_empty_word_list() {
        let topic = Topic::new("Animals");
        assert_eq!(topic.name(), "Animals");
        assert!(topic.words().is_empty());
    }

    #[test]
    fn is_named_ignores_case() {
        let topic = Topic::new("Animals");
        assert!(topic.is_named("ANIMALS"));
        assert!(topic.is_named("animals"));
        assert!(!topic.is_named("Animal"));
    }

    #[test]
    fn set_name_replaces_whole_name() {
        let mut topic = Topic::new("Colours");
        topic.words_mut().add("red");
        topic.set_name("Colors");
        assert_eq!(topic.name(), "Colors");
        assert_eq!(topic.words().len(), 1);
    }
}
