use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, VocabError};
use crate::index::TopicSelector;
use crate::store::RegistryStore;
use log::info;

pub fn run<S: RegistryStore>(store: &mut S, selector: &TopicSelector) -> Result<CmdResult> {
    let mut topics = store.load()?;
    let position = selector.position(&topics)?;
    let mut result = CmdResult::default();

    match topics.delete_at_index(position) {
        Ok(topic) => {
            store.save(&topics)?;
            info!(
                "event=topic_deleted position={} name={}",
                position,
                topic.name()
            );
            result.add_message(CmdMessage::success(format!(
                "Topic deleted ({}): {}",
                selector,
                topic.name()
            )));
        }
        Err(VocabError::InvalidPosition { len, .. }) => {
            result.add_message(CmdMessage::error(format!(
                "Invalid index. There are {} topics.",
                len
            )));
        }
        Err(e) => return Err(e),
    }

    Ok(result)
}
