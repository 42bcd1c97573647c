use super::RegistryStore;
use crate::error::{Result, VocabError};
use crate::format;
use crate::topic_list::TopicList;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Stores the registry as a single text file.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(VocabError::Io)?;
            }
        }
        Ok(())
    }
}

impl RegistryStore for FileStore {
    fn load(&self) -> Result<TopicList> {
        if !self.path.exists() {
            debug!("event=registry_missing path={}", self.path.display());
            return Ok(TopicList::new());
        }
        let content = fs::read_to_string(&self.path).map_err(VocabError::Io)?;
        let topics = format::parse(&content)?;
        debug!(
            "event=registry_loaded path={} topics={}",
            self.path.display(),
            topics.len()
        );
        Ok(topics)
    }

    fn save(&mut self, topics: &TopicList) -> Result<()> {
        self.ensure_parent()?;
        fs::write(&self.path, format::render(topics)).map_err(VocabError::Io)?;
        debug!(
            "event=registry_saved path={} topics={}",
            self.path.display(),
            topics.len()
        );
        Ok(())
    }

    fn location(&self) -> Option<PathBuf> {
        Some(self.path.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_loads_as_empty_registry() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path().join("registry.txt"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn save_creates_parent_directories() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("dir").join("registry.txt");
        let mut store = FileStore::new(&path);

        let mut topics = TopicList::new();
        topics.add("Animals");
        store.save(&topics).unwrap();

        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "#Animals\n");
    }

    #[test]
    fn save_then_load_round_trips() {
        let temp = TempDir::new().unwrap();
        let mut store = FileStore::new(temp.path().join("registry.txt"));

        let mut topics = TopicList::new();
        topics.add("Colors");
        topics.get_mut(0).unwrap().words_mut().add("Red");
        store.save(&topics).unwrap();

        assert_eq!(store.load().unwrap(), topics);
    }

    #[test]
    fn malformed_file_surfaces_format_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("registry.txt");
        fs::write(&path, "stray\n").unwrap();

        let store = FileStore::new(&path);
        assert!(matches!(store.load(), Err(VocabError::Format { .. })));
    }
}
