use super::files::{atomic_write, read_file};
use anyhow::Result;
use std::path::PathBuf;

/// Key-value slot storage with string values
pub trait Storage {
    /// Read the value under `key`, None if nothing has been stored yet
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value under `key`
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Stores each key as `<key>.json` in a directory
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Path of the file backing `key`
    pub fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        read_file(self.slot_path(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        atomic_write(self.slot_path(key), value)
    }
}

/// In-memory storage, used by tests
#[cfg(test)]
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    slots: std::collections::HashMap<String, String>,
    /// Makes every `set` fail, to exercise write errors
    pub fail_writes: bool,
}

#[cfg(test)]
impl MemoryStorage {
    pub fn with_slot(key: &str, value: &str) -> Self {
        let mut storage = Self::default();
        storage.slots.insert(key.to_string(), value.to_string());
        storage
    }
}

#[cfg(test)]
impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.slots.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if self.fail_writes {
            anyhow::bail!("quota exceeded");
        }
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Shared handle so tests can inspect what a store wrote
#[cfg(test)]
#[derive(Debug, Default, Clone)]
pub struct SharedMemory(pub std::rc::Rc<std::cell::RefCell<MemoryStorage>>);

#[cfg(test)]
impl Storage for SharedMemory {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.0.borrow().get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.0.borrow_mut().set(key, value)
    }
}
