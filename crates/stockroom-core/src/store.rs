//! Persistence of the inventory.
//!
//! The data file is a single pretty-printed JSON array of items. Saves go to a
//! sibling temporary file first and are then renamed over the real one, so an
//! interrupted write leaves the previous contents intact.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::catalog::Item;
use crate::error::{StockError, StockResult};

/// Default data file location, relative to the installation directory.
pub const DEFAULT_DATA_FILE: &str = "data/sample-data.json";

/// Backing storage for the inventory.
pub trait ItemStore {
    /// Load every item. A store that has never been written yields an empty list.
    fn load(&self) -> StockResult<Vec<Item>>;

    /// Replace the stored items with `items`.
    fn save(&mut self, items: &[Item]) -> StockResult<()>;

    /// Human-readable location, for messages.
    fn location(&self) -> String;
}

impl<T: ItemStore + ?Sized> ItemStore for Box<T> {
    fn load(&self) -> StockResult<Vec<Item>> {
        (**self).load()
    }

    fn save(&mut self, items: &[Item]) -> StockResult<()> {
        (**self).save(items)
    }

    fn location(&self) -> String {
        (**self).location()
    }
}

/// Store backed by a JSON file on disk.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl ItemStore for JsonFileStore {
    fn load(&self) -> StockResult<Vec<Item>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "data file missing, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(StockError::io(&self.path, e)),
        };

        let items: Vec<Item> = serde_json::from_slice(&bytes)?;
        tracing::debug!(path = %self.path.display(), count = items.len(), "loaded inventory");
        Ok(items)
    }

    fn save(&mut self, items: &[Item]) -> StockResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| StockError::io(parent, e))?;
        }

        let json = serde_json::to_string_pretty(items)?;
        let temp = self.temp_path();
        if let Err(e) = fs::write(&temp, json) {
            let _ = fs::remove_file(&temp);
            return Err(StockError::io(&temp, e));
        }

        if let Err(e) = fs::rename(&temp, &self.path) {
            let _ = fs::remove_file(&temp);
            return Err(StockError::io(&self.path, e));
        }

        tracing::info!(path = %self.path.display(), count = items.len(), "saved inventory");
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

/// Store that keeps items in memory only.
///
/// Used for `--ephemeral` sessions and in tests. A failing store can be made
/// with [`MemoryStore::failing`] to exercise save-error paths.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: Vec<Item>,
    save_count: usize,
    fail_saves: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `items` already stored.
    pub fn with_items(items: Vec<Item>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    /// Every save returns an I/O error.
    pub fn failing(items: Vec<Item>) -> Self {
        Self {
            items,
            fail_saves: true,
            ..Self::default()
        }
    }

    /// Items as of the last successful save.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Number of successful saves.
    pub fn save_count(&self) -> usize {
        self.save_count
    }
}

impl ItemStore for MemoryStore {
    fn load(&self) -> StockResult<Vec<Item>> {
        Ok(self.items.clone())
    }

    fn save(&mut self, items: &[Item]) -> StockResult<()> {
        if self.fail_saves {
            return Err(StockError::io(
                self.location(),
                std::io::Error::new(ErrorKind::Other, "memory store is read-only"),
            ));
        }
        self.items = items.to_vec();
        self.save_count += 1;
        Ok(())
    }

    fn location(&self) -> String {
        "<memory>".to_string()
    }
}
