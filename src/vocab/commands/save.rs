use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, VocabError};
use crate::format;
use crate::store::RegistryStore;
use log::info;
use std::fs;
use std::path::Path;

/// Writes the registry to `path` in the text format.
///
/// An existing file is only replaced when `overwrite` is set; asking the
/// user is the caller's job.
pub fn run<S: RegistryStore>(store: &S, path: &Path, overwrite: bool) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if path.exists() && !overwrite {
        result.add_message(CmdMessage::warning(format!(
            "The file {} already exists, please retry with another name or --force.",
            path.display()
        )));
        return Ok(result);
    }

    let topics = store.load()?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(VocabError::Io)?;
        }
    }
    fs::write(path, format::render(&topics)).map_err(VocabError::Io)?;

    info!(
        "event=registry_saved_to path={} topics={}",
        path.display(),
        topics.len()
    );
    result.add_message(CmdMessage::success(format!(
        "Saved to the file: {}",
        path.display()
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::store_with;
    use tempfile::TempDir;

    #[test]
    fn writes_registry_text() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.txt");
        let store = store_with(&[("Animals", &["dog", "cat"]), ("Colors", &["red"])]);

        run(&store, &path, false).unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "#Animals\ncat\ndog\n#Colors\nred\n"
        );
    }

    #[test]
    fn refuses_to_overwrite_without_permission() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.txt");
        fs::write(&path, "keep me").unwrap();
        let store = store_with(&[("Animals", &[])]);

        let result = run(&store, &path, false).unwrap();
        assert_eq!(result.messages.len(), 1);
        assert_eq!(fs::read_to_string(&path).unwrap(), "keep me");

        run(&store, &path, true).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "#Animals\n");
    }
}
