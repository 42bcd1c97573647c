use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, VocabError};
use crate::index::index_topics;
use crate::store::RegistryStore;
use crate::word_list::fold_word;

/// Finds every topic whose word list holds `word`.
pub fn run<S: RegistryStore>(store: &S, word: &str) -> Result<CmdResult> {
    let trimmed = word.trim();
    if trimmed.is_empty() {
        return Err(VocabError::Api("Search word cannot be empty".into()));
    }
    let folded = fold_word(trimmed);
    let topics = store.load()?;

    let matches: Vec<_> = index_topics(&topics)
        .into_iter()
        .filter(|dt| dt.topic.words().contains(&folded))
        .collect();

    let mut result = CmdResult::default();
    if matches.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "Word '{}' not found in any topic.",
            folded
        )));
    }
    Ok(result.with_listed_topics(matches))
}
