use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, VocabError};
use crate::format;
use crate::store::RegistryStore;
use crate::topic_list::TopicList;
use log::info;
use std::fs;
use std::path::Path;

use super::helpers::add_distinct_words;

/// What happens to the current registry when a file is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadMode {
    /// Keep existing topics; topics from the file are appended, or merged
    /// into an existing topic of the same name.
    #[default]
    Append,
    /// Drop existing topics first.
    Replace,
}

pub fn run<S: RegistryStore>(store: &mut S, path: &Path, mode: LoadMode) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if !path.is_file() {
        result.add_message(CmdMessage::error(format!(
            "I/O error : File not found : {}",
            path.display()
        )));
        return Ok(result);
    }

    let content = fs::read_to_string(path).map_err(VocabError::Io)?;
    let incoming = format::parse(&content)?;

    let mut topics = store.load()?;
    if mode == LoadMode::Replace {
        topics.clear();
    }
    let (new_topics, new_words) = merge(&mut topics, &incoming, &mut result);

    store.save(&topics)?;
    info!(
        "event=registry_loaded_from path={} mode={:?} topics={} words={}",
        path.display(),
        mode,
        new_topics,
        new_words
    );
    result.add_message(CmdMessage::success(format!(
        "Done loading: {} new topic(s), {} word(s) from {}.",
        new_topics,
        new_words,
        path.display()
    )));
    Ok(result)
}

/// Appends `incoming` onto `topics`. A topic whose name already exists has
/// its words merged into the existing one instead of being duplicated.
fn merge(topics: &mut TopicList, incoming: &TopicList, result: &mut CmdResult) -> (usize, usize) {
    let mut new_topics = 0;
    let mut new_words = 0;

    for topic in incoming {
        let words: Vec<&str> = topic.words().iter().collect();
        let target = match topics.position_of(topic.name()) {
            Some(position) => {
                result.add_message(CmdMessage::info(format!(
                    "Merged words into existing topic {}.",
                    topic.name()
                )));
                topics.get_mut(position)
            }
            None => {
                topics.add(topic.name());
                new_topics += 1;
                topics.last_mut()
            }
        };
        if let Some(target) = target {
            new_words += add_distinct_words(target, &words, result);
        }
    }

    (new_topics, new_words)
}
