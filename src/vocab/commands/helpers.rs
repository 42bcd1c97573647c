use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, VocabError};
use crate::format::TOPIC_MARKER;
use crate::index::TopicSelector;
use crate::model::Topic;
use crate::topic_list::TopicList;
use crate::word_list::fold_word;

/// Resolves a selector to the topic it names, failing when there is none.
pub fn topic_mut<'a>(
    topics: &'a mut TopicList,
    selector: &TopicSelector,
) -> Result<&'a mut Topic> {
    let position = selector.position(topics)?;
    topics
        .get_mut(position)
        .ok_or_else(|| VocabError::TopicNotFound(selector.to_string()))
}

pub fn topic_ref<'a>(topics: &'a TopicList, selector: &TopicSelector) -> Result<&'a Topic> {
    let position = selector.position(topics)?;
    topics
        .get(position)
        .ok_or_else(|| VocabError::TopicNotFound(selector.to_string()))
}

/// Trims a topic name and rejects names the registry file cannot hold:
/// empty ones and ones containing line breaks or other control characters.
pub fn clean_topic_name(name: &str) -> Result<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(VocabError::Api("Topic name cannot be empty".into()));
    }
    if trimmed.starts_with(TOPIC_MARKER) {
        return Err(VocabError::Api(format!(
            "Topic name cannot start with '{}'",
            TOPIC_MARKER
        )));
    }
    if trimmed.chars().any(char::is_control) {
        return Err(VocabError::Api(
            "Topic name cannot contain line breaks or control characters".into(),
        ));
    }
    Ok(trimmed.to_string())
}

/// Trims and folds a word, rejecting the ones that would not read back as
/// the same word: blanks, a leading topic marker, and control characters.
pub fn clean_word(word: &str) -> Result<String> {
    let trimmed = word.trim();
    if trimmed.is_empty() {
        return Err(VocabError::Api("Word cannot be empty".into()));
    }
    if trimmed.starts_with(TOPIC_MARKER) {
        return Err(VocabError::Api(format!(
            "The word '{}' cannot start with '{}'",
            trimmed, TOPIC_MARKER
        )));
    }
    if trimmed.chars().any(char::is_control) {
        return Err(VocabError::Api(
            "A word cannot contain line breaks or control characters".into(),
        ));
    }
    Ok(fold_word(trimmed))
}

/// Adds each word to the topic unless its folded form is already present.
///
/// Blank entries are skipped. Returns how many words were added; skipped
/// duplicates and words rejected by [`clean_word`] are reported on `result`.
pub fn add_distinct_words<W: AsRef<str>>(
    topic: &mut Topic,
    words: &[W],
    result: &mut CmdResult,
) -> usize {
    let mut added = 0;
    for raw in words {
        if raw.as_ref().trim().is_empty() {
            continue;
        }
        let folded = match clean_word(raw.as_ref()) {
            Ok(folded) => folded,
            Err(VocabError::Api(msg)) => {
                result.add_message(CmdMessage::warning(format!("{}, skipped.", msg)));
                continue;
            }
            Err(e) => {
                result.add_message(CmdMessage::warning(e.to_string()));
                continue;
            }
        };
        if topic.words().contains(&folded) {
            result.add_message(CmdMessage::warning(format!(
                "The word '{}' already exists under topic {}.",
                folded,
                topic.name()
            )));
            continue;
        }
        topic.words_mut().add(&folded);
        added += 1;
    }
    added
}
