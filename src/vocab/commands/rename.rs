use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::TopicSelector;
use crate::store::RegistryStore;

use super::helpers::{clean_topic_name, topic_mut};

/// Replaces a topic's name. Its words are left untouched.
pub fn run<S: RegistryStore>(
    store: &mut S,
    selector: &TopicSelector,
    new_name: &str,
) -> Result<CmdResult> {
    let new_name = clean_topic_name(new_name)?;
    let mut topics = store.load()?;
    let position = selector.position(&topics)?;
    let mut result = CmdResult::default();

    // Changing only the case of a topic's own name is allowed.
    if let Some(existing) = topics.position_of(&new_name) {
        if existing != position {
            result.add_message(CmdMessage::error(format!(
                "The topic {} already exists.",
                new_name
            )));
            return Ok(result);
        }
    }

    let topic = topic_mut(&mut topics, selector)?;
    let old_name = topic.name().to_string();
    topic.set_name(new_name.as_str());
    store.save(&topics)?;

    result.add_message(CmdMessage::success(format!(
        "Topic {} renamed to {}.",
        old_name, new_name
    )));
    Ok(result)
}
