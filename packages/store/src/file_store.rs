//! # Filesystem-backed table store
//!
//! [`FileStore`] is a [`TableStore`] that persists the whole record set as one
//! JSON snapshot. It is used on mobile and desktop to retain directories and
//! messages across app restarts.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! └── store.json        # serialized Tables
//! ```
//!
//! Every read loads the snapshot; every successful write replaces it through a
//! temporary file and a rename, so a crash mid-write leaves the previous
//! snapshot intact. A missing file is an empty store.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::StoreResult;
use crate::tables::{TableStore, Tables};

const SNAPSHOT: &str = "store.json";

/// Filesystem-backed TableStore for mobile and desktop persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    fn snapshot_path(&self) -> PathBuf {
        self.base.join(SNAPSHOT)
    }

    fn load(&self) -> StoreResult<Tables> {
        match std::fs::read(self.snapshot_path()) {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(Tables::default()),
            Err(err) => Err(err.into()),
        }
    }

    fn save(&self, tables: &Tables) -> StoreResult<()> {
        std::fs::create_dir_all(&self.base)?;
        let bytes = serde_json::to_vec_pretty(tables)?;
        let tmp = self.base.join(format!("{SNAPSHOT}.tmp"));
        std::fs::write(&tmp, bytes)?;
        std::fs::rename(&tmp, self.snapshot_path())?;
        Ok(())
    }
}

impl TableStore for FileStore {
    fn read<R>(&self, f: impl FnOnce(&Tables) -> R) -> StoreResult<R> {
        let tables = self.load()?;
        Ok(f(&tables))
    }

    fn write<R>(&self, f: impl FnOnce(&mut Tables) -> StoreResult<R>) -> StoreResult<R> {
        let mut tables = self.load()?;
        let out = f(&mut tables)?;
        self.save(&tables)?;
        Ok(out)
    }
}
