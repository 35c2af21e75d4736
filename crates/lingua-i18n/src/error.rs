//! Error types for translation and language state.

use thiserror::Error;

/// Errors raised by [`KeyValueStorage`](crate::KeyValueStorage) backends.
#[derive(Debug, Error)]
pub enum StorageError {
	/// I/O operation failed.
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	/// Stored data could not be read or written as JSON.
	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),

	/// The storage file does not hold a JSON object of strings.
	#[error("Invalid storage format: {0}")]
	InvalidFormat(String),
}

/// Errors raised by a [`LanguageStore`](crate::LanguageStore).
#[derive(Debug, Error)]
pub enum StoreError {
	/// The store has no mutation with this name.
	#[error("Unknown mutation: {0}")]
	UnknownMutation(String),

	/// Persisting the language failed.
	#[error("Storage error: {0}")]
	Storage(#[from] StorageError),
}

/// Errors raised while loading translations.
#[derive(Debug, Error)]
pub enum TranslationError {
	/// A translation entry is neither a nested object nor a language map.
	#[error("Invalid translation entry at '{0}'")]
	InvalidEntry(String),

	/// JSON parsing failed.
	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),

	/// I/O operation failed.
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),
}

/// Result type alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;
