use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, VocabError};
use crate::index::{DisplayIndex, TopicSelector};
use crate::store::RegistryStore;
use log::info;

use super::helpers::{add_distinct_words, clean_topic_name};

/// Where a new topic goes, relative to the existing ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placement {
    Before(TopicSelector),
    After(TopicSelector),
    End,
}

pub fn run<S: RegistryStore, W: AsRef<str>>(
    store: &mut S,
    name: &str,
    placement: &Placement,
    words: &[W],
) -> Result<CmdResult> {
    let name = clean_topic_name(name)?;
    let mut topics = store.load()?;
    let mut result = CmdResult::default();

    if topics.contains_topic(&name) {
        result.add_message(CmdMessage::error(format!(
            "The topic {} already exists.",
            name
        )));
        return Ok(result);
    }

    // With no topics yet, any placement creates the first one.
    let position = if topics.is_empty() {
        0
    } else {
        match placement {
            Placement::Before(sel) => sel.position(&topics)?,
            Placement::After(sel) => sel.position(&topics)? + 1,
            Placement::End => topics.len(),
        }
    };

    match topics.add_at_index(position, name.as_str()) {
        Ok(()) => {}
        Err(VocabError::InvalidPosition { .. }) => {
            result.add_message(CmdMessage::error(format!(
                "Invalid index. There are {} topics.",
                topics.len()
            )));
            return Ok(result);
        }
        Err(e) => return Err(e),
    }

    let added = match topics.get_mut(position) {
        Some(topic) => add_distinct_words(topic, words, &mut result),
        None => 0,
    };

    store.save(&topics)?;
    info!(
        "event=topic_inserted position={} name={} words={}",
        position, name, added
    );
    result.add_message(CmdMessage::success(format!(
        "Topic {} added at {} with {} word(s).",
        name,
        DisplayIndex::from_position(position),
        added
    )));
    Ok(result)
}
