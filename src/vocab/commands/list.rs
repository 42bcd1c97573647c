use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::index_topics;
use crate::store::RegistryStore;

pub fn run<S: RegistryStore>(store: &S) -> Result<CmdResult> {
    let topics = store.load()?;
    Ok(CmdResult::default().with_listed_topics(index_topics(&topics)))
}
