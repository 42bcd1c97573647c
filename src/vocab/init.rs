use crate::api::{VocabApi, VocabPaths};
use crate::config::VocabConfig;
use crate::error::{Result, VocabError};
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use log::{debug, warn};
use std::path::{Path, PathBuf};

pub const HOME_ENV: &str = "VOCAB_HOME";
pub const FILE_ENV: &str = "VOCAB_FILE";
const REGISTRY_FILENAME: &str = "registry.txt";

pub struct VocabContext {
    pub api: VocabApi<FileStore>,
    pub config: VocabConfig,
}

/// Directory holding the config file and the default registry.
///
/// `VOCAB_HOME` wins; otherwise the platform data directory is used.
pub fn resolve_home() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "vocab", "vocab")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| VocabError::Config("Could not determine data directory".to_string()))
}

/// Picks the registry file: explicit override, then `VOCAB_FILE`, then the
/// configured file, then `<home>/registry.txt`.
///
/// Relative paths from the config are taken relative to `home`.
pub fn resolve_registry(
    home: &Path,
    config: &VocabConfig,
    file_override: Option<&Path>,
) -> PathBuf {
    if let Some(path) = file_override {
        return path.to_path_buf();
    }
    if let Some(path) = std::env::var_os(FILE_ENV).filter(|v| !v.is_empty()) {
        return PathBuf::from(path);
    }
    match &config.registry_file {
        Some(path) if path.is_absolute() => path.clone(),
        Some(path) => home.join(path),
        None => home.join(REGISTRY_FILENAME),
    }
}

pub fn initialize(file_override: Option<&Path>) -> Result<VocabContext> {
    let home = resolve_home()?;
    let config = VocabConfig::load(&home).unwrap_or_else(|e| {
        warn!("event=config_load_failed home={} error={}", home.display(), e);
        VocabConfig::default()
    });
    let registry = resolve_registry(&home, &config, file_override);
    debug!(
        "event=context_ready home={} registry={}",
        home.display(),
        registry.display()
    );

    let store = FileStore::new(&registry);
    let paths = VocabPaths { home, registry };
    let api = VocabApi::new(store, paths);

    Ok(VocabContext { api, config })
}
