use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Storage key namespace. One value per key.
pub mod keys {
    /// Current task collection format
    pub const TASKS: &str = "tasks-v2";
    /// Pre-v2 task collection, read once at startup for migration
    pub const TASKS_LEGACY: &str = "tasks";
    pub const TITLE: &str = "title";
    pub const SOUND: &str = "sound";
    pub const DENSITY: &str = "density";
    pub const THEME: &str = "theme";
    /// Ephemeral UI state (undo slot)
    pub const STATE: &str = "state";
}

/// Minimal key-value persistence contract. The engine only ever needs
/// get/set of strings; everything above it (formats, fallbacks, migration)
/// lives in `persist`.
pub trait KvStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> io::Result<()>;
}

/// File-backed store: one file per key under a data directory. Writes go
/// through a temp file and rename so a crash never leaves a torn value.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open (creating if needed) a store rooted at `dir`.
    pub fn open(dir: &Path) -> io::Result<FileStore> {
        fs::create_dir_all(dir)?;
        Ok(FileStore { dir: dir.to_path_buf() })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.key_path(key)).ok()
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        let tmp = tempfile::NamedTempFile::new_in(&self.dir)?;
        fs::write(tmp.path(), value)?;
        tmp.persist(self.key_path(key))?;
        Ok(())
    }
}

/// In-memory store for tests.
#[derive(Debug, Default, Clone)]
pub struct MemStore {
    values: HashMap<String, String>,
}

impl MemStore {
    pub fn new() -> MemStore {
        MemStore::default()
    }
}

impl KvStore for MemStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
