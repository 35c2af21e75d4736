//! Durable key-value storage for the selected language
//!
//! ## Backends
//!
//! - [`MemoryStorage`]: process-local map, for tests and server-side use
//! - [`FileStorage`]: a JSON object file, rewritten on every write

use crate::error::{StorageError, StorageResult};
use parking_lot::RwLock;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// String key-value storage that outlives a single language store.
pub trait KeyValueStorage: Send + Sync {
	/// Read the value stored under `key`
	fn get(&self, key: &str) -> StorageResult<Option<String>>;

	/// Store `value` under `key`, replacing any previous value
	fn set(&self, key: &str, value: &str) -> StorageResult<()>;
}

/// In-memory storage
///
/// # Example
/// ```
/// use lingua_i18n::{KeyValueStorage, MemoryStorage};
///
/// let storage = MemoryStorage::new();
/// storage.set("currentLanguage", "fr").unwrap();
/// assert_eq!(storage.get("currentLanguage").unwrap().as_deref(), Some("fr"));
/// assert_eq!(storage.get("theme").unwrap(), None);
/// ```
#[derive(Debug, Default)]
pub struct MemoryStorage {
	data: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
	pub fn new() -> Self {
		Self::default()
	}

	/// Create storage pre-populated with `entries`
	pub fn with_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
	where
		K: Into<String>,
		V: Into<String>,
	{
		let data = entries
			.into_iter()
			.map(|(key, value)| (key.into(), value.into()))
			.collect();
		Self {
			data: RwLock::new(data),
		}
	}

	pub fn len(&self) -> usize {
		self.data.read().len()
	}

	pub fn is_empty(&self) -> bool {
		self.data.read().is_empty()
	}
}

impl KeyValueStorage for MemoryStorage {
	fn get(&self, key: &str) -> StorageResult<Option<String>> {
		Ok(self.data.read().get(key).cloned())
	}

	fn set(&self, key: &str, value: &str) -> StorageResult<()> {
		self.data.write().insert(key.to_string(), value.to_string());
		Ok(())
	}
}

/// Storage backed by a JSON object file.
///
/// A missing file reads as empty. Writes hold the lock for the whole
/// read-modify-write so concurrent writers in one process do not lose
/// updates.
#[derive(Debug)]
pub struct FileStorage {
	path: PathBuf,
	lock: RwLock<()>,
}

impl FileStorage {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self {
			path: path.into(),
			lock: RwLock::new(()),
		}
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	fn load(&self) -> StorageResult<Map<String, Value>> {
		if !self.path.exists() {
			return Ok(Map::new());
		}

		let content = fs::read_to_string(&self.path)?;
		if content.trim().is_empty() {
			return Ok(Map::new());
		}

		match serde_json::from_str(&content)? {
			Value::Object(map) => Ok(map),
			_ => Err(StorageError::InvalidFormat(format!(
				"{} does not contain a JSON object",
				self.path.display()
			))),
		}
	}
}

impl KeyValueStorage for FileStorage {
	fn get(&self, key: &str) -> StorageResult<Option<String>> {
		let _guard = self.lock.read();
		match self.load()?.get(key) {
			None => Ok(None),
			Some(Value::String(value)) => Ok(Some(value.clone())),
			Some(_) => Err(StorageError::InvalidFormat(format!(
				"value for '{key}' is not a string"
			))),
		}
	}

	fn set(&self, key: &str, value: &str) -> StorageResult<()> {
		let _guard = self.lock.write();
		let mut map = self.load()?;
		map.insert(key.to_string(), Value::String(value.to_string()));

		let content = serde_json::to_string_pretty(&Value::Object(map))?;
		fs::write(&self.path, content)?;
		tracing::trace!(path = %self.path.display(), key, "storage written");
		Ok(())
	}
}
