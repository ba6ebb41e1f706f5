//! Shared store and config constructors for all platforms.
//!
//! Returns an [`AppStore`] backed by the appropriate [`store::TableStore`]:
//! - **Default**: filesystem via [`store::FileStore`] under the app data dir
//! - **`storage.in_memory = true`**: [`store::MemoryStore`], nothing is written

use std::path::PathBuf;

use store::{AppConfig, FileStore, MemoryStore, StoreResult, TableStore, Tables};

const APP_DIR: &str = "pigeonhole";

/// The table store the app runs on, picked from config at startup.
#[derive(Clone, Debug)]
pub enum AppStore {
    File(FileStore),
    Memory(MemoryStore),
}

impl TableStore for AppStore {
    fn read<R>(&self, f: impl FnOnce(&Tables) -> R) -> StoreResult<R> {
        match self {
            AppStore::File(s) => s.read(f),
            AppStore::Memory(s) => s.read(f),
        }
    }

    fn write<R>(&self, f: impl FnOnce(&mut Tables) -> StoreResult<R>) -> StoreResult<R> {
        match self {
            AppStore::File(s) => s.write(f),
            AppStore::Memory(s) => s.write(f),
        }
    }
}

/// Platform data directory for the app: `<data_dir>/pigeonhole/`.
///
/// Falls back to the working directory where the platform reports none.
pub fn data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

/// Create the store selected by `config`.
pub fn make_store(config: &AppConfig) -> AppStore {
    if config.storage.in_memory {
        tracing::info!("using in-memory store");
        AppStore::Memory(MemoryStore::new())
    } else {
        let base = data_dir();
        tracing::info!(path = %base.display(), "using file store");
        AppStore::File(FileStore::new(base))
    }
}

/// Read `pigeonhole.toml` from the data directory.
///
/// A missing file yields the defaults; an unreadable or invalid one is logged
/// and also yields the defaults.
pub fn load_config() -> AppConfig {
    load_config_from(&data_dir().join(AppConfig::filename()))
}

fn load_config_from(path: &std::path::Path) -> AppConfig {
    match std::fs::read_to_string(path) {
        Ok(text) => match AppConfig::from_toml(&text) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), "invalid config, using defaults: {}", e);
                AppConfig::default()
            }
        },
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => AppConfig::default(),
        Err(e) => {
            tracing::warn!(path = %path.display(), "unreadable config, using defaults: {}", e);
            AppConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::CrudService;

    #[test]
    fn test_missing_config_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_from(&dir.path().join("pigeonhole.toml"));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_invalid_config_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pigeonhole.toml");
        std::fs::write(&path, "[layout\nbroken").unwrap();
        assert_eq!(load_config_from(&path), AppConfig::default());
    }

    #[test]
    fn test_config_file_is_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pigeonhole.toml");
        std::fs::write(&path, "[storage]\nin_memory = true\n").unwrap();
        assert!(load_config_from(&path).storage.in_memory);
    }

    #[tokio::test]
    async fn test_in_memory_store_from_config() {
        let mut config = AppConfig::default();
        config.storage.in_memory = true;
        let store = make_store(&config);
        assert!(matches!(store, AppStore::Memory(_)));

        store.directories().create(&(), "Inbox").await.unwrap();
        assert_eq!(store.directories().get_all(&()).await.unwrap().len(), 1);
    }
}
