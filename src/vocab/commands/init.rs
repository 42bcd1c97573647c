use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::RegistryStore;
use crate::topic_list::TopicList;

/// Creates an empty registry unless one already exists.
pub fn run<S: RegistryStore>(store: &mut S) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let location = store.location();

    if let Some(path) = location.as_ref().filter(|p| p.exists()) {
        result.add_message(CmdMessage::info(format!(
            "Registry already exists at {}",
            path.display()
        )));
        return Ok(result);
    }

    store.save(&TopicList::new())?;
    let shown = location
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "memory".to_string());
    result.add_message(CmdMessage::success(format!(
        "Initialized vocab registry at {}",
        shown
    )));
    Ok(result)
}
