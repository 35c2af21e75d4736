//! Application language state

use crate::error::StoreError;
use crate::storage::KeyValueStorage;
use lingua_conf::LocalizeConfig;
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;

/// Mutation that changes the application language.
pub const SET_APP_LANGUAGE: &str = "SET_APP_LANGUAGE";

/// Storage key under which the selected language is persisted.
pub const CURRENT_LANGUAGE_KEY: &str = "currentLanguage";

/// Holder of the current application language.
///
/// Changes go through named mutations so that a store backing other
/// application state can expose the language next to its own mutations.
pub trait LanguageStore: Send + Sync {
	/// The language the application is currently displayed in
	fn current_language(&self) -> String;

	/// Apply `mutation` with `lang` as payload.
	///
	/// With `persist` set, the new language is written to durable storage
	/// first; a failed write leaves the current language unchanged.
	fn commit(&self, mutation: &str, lang: &str, persist: bool) -> Result<(), StoreError>;

	/// The language last persisted to durable storage, if any.
	///
	/// An empty stored value reads as `None`.
	fn stored_language(&self) -> Result<Option<String>, StoreError>;
}

/// [`LanguageStore`] over a [`KeyValueStorage`].
///
/// # Example
/// ```
/// use lingua_conf::{LanguageConfig, LocalizeConfig};
/// use lingua_i18n::{KeyValueStorage, LanguageState, LanguageStore, MemoryStorage, SET_APP_LANGUAGE};
/// use std::sync::Arc;
///
/// let config = LocalizeConfig::new("en")
/// 	.with_language("en", LanguageConfig::enabled())
/// 	.with_language("fr", LanguageConfig::enabled());
/// let storage = Arc::new(MemoryStorage::new());
/// let state = LanguageState::new(&config, storage.clone());
/// assert_eq!(state.current_language(), "en");
///
/// state.commit(SET_APP_LANGUAGE, "fr", true).unwrap();
/// assert_eq!(state.current_language(), "fr");
/// assert_eq!(storage.get("currentLanguage").unwrap().as_deref(), Some("fr"));
/// ```
pub struct LanguageState {
	current: RwLock<String>,
	storage: Arc<dyn KeyValueStorage>,
}

impl LanguageState {
	/// Create the state, restoring a previously persisted language.
	///
	/// A stored language that is not enabled in `config`, or a storage
	/// read failure, leaves the default language selected.
	pub fn new(config: &LocalizeConfig, storage: Arc<dyn KeyValueStorage>) -> Self {
		let initial = match storage.get(CURRENT_LANGUAGE_KEY) {
			Ok(Some(stored)) if config.is_enabled(&stored) => stored,
			Ok(Some(stored)) => {
				tracing::warn!(
					stored = %stored,
					default = %config.default_language,
					"ignoring stored language that is not enabled"
				);
				config.default_language.clone()
			}
			Ok(None) => config.default_language.clone(),
			Err(error) => {
				tracing::warn!(%error, "failed to read stored language");
				config.default_language.clone()
			}
		};

		tracing::debug!(language = %initial, "language state initialized");
		Self {
			current: RwLock::new(initial),
			storage,
		}
	}
}

impl fmt::Debug for LanguageState {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("LanguageState")
			.field("current", &*self.current.read())
			.finish_non_exhaustive()
	}
}

impl LanguageStore for LanguageState {
	fn current_language(&self) -> String {
		self.current.read().clone()
	}

	fn commit(&self, mutation: &str, lang: &str, persist: bool) -> Result<(), StoreError> {
		if mutation != SET_APP_LANGUAGE {
			return Err(StoreError::UnknownMutation(mutation.to_string()));
		}

		if persist {
			self.storage.set(CURRENT_LANGUAGE_KEY, lang)?;
		}
		*self.current.write() = lang.to_string();
		tracing::debug!(language = lang, persist, "application language set");
		Ok(())
	}

	fn stored_language(&self) -> Result<Option<String>, StoreError> {
		let stored = self.storage.get(CURRENT_LANGUAGE_KEY)?;
		Ok(stored.filter(|lang| !lang.is_empty()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::{StorageError, StorageResult};
	use crate::storage::MemoryStorage;
	use lingua_conf::LanguageConfig;
	use rstest::{fixture, rstest};

	struct ReadOnlyStorage;

	impl KeyValueStorage for ReadOnlyStorage {
		fn get(&self, _key: &str) -> StorageResult<Option<String>> {
			Ok(None)
		}

		fn set(&self, key: &str, _value: &str) -> StorageResult<()> {
			Err(StorageError::InvalidFormat(format!("'{key}' is read-only")))
		}
	}

	#[fixture]
	fn config() -> LocalizeConfig {
		LocalizeConfig::new("en")
			.with_language("en", LanguageConfig::enabled())
			.with_language("ru", LanguageConfig::enabled())
			.with_language("de", LanguageConfig::disabled())
	}

	#[rstest]
	#[case(None, "en")]
	#[case(Some("ru"), "ru")]
	#[case(Some("de"), "en")]
	#[case(Some("xx"), "en")]
	fn test_initial_language(
		config: LocalizeConfig,
		#[case] stored: Option<&str>,
		#[case] expected: &str,
	) {
		// Arrange
		let storage = MemoryStorage::new();
		if let Some(stored) = stored {
			storage.set(CURRENT_LANGUAGE_KEY, stored).unwrap();
		}

		// Act
		let state = LanguageState::new(&config, Arc::new(storage));

		// Assert
		assert_eq!(state.current_language(), expected);
	}

	#[rstest]
	fn test_commit_without_persist(config: LocalizeConfig) {
		// Arrange
		let storage = Arc::new(MemoryStorage::new());
		let state = LanguageState::new(&config, storage.clone());

		// Act
		state.commit(SET_APP_LANGUAGE, "ru", false).unwrap();

		// Assert
		assert_eq!(state.current_language(), "ru");
		assert!(storage.is_empty());
	}

	#[rstest]
	fn test_unknown_mutation(config: LocalizeConfig) {
		// Arrange
		let state = LanguageState::new(&config, Arc::new(MemoryStorage::new()));

		// Act
		let result = state.commit("SET_THEME", "dark", true);

		// Assert
		assert!(matches!(result, Err(StoreError::UnknownMutation(name)) if name == "SET_THEME"));
		assert_eq!(state.current_language(), "en");
	}

	#[rstest]
	fn test_failed_persist_keeps_current_language(config: LocalizeConfig) {
		// Arrange
		let state = LanguageState::new(&config, Arc::new(ReadOnlyStorage));

		// Act
		let result = state.commit(SET_APP_LANGUAGE, "ru", true);

		// Assert
		assert!(matches!(result, Err(StoreError::Storage(_))));
		assert_eq!(state.current_language(), "en");
	}

	#[rstest]
	#[case(None, None)]
	#[case(Some(""), None)]
	#[case(Some("ru"), Some("ru"))]
	fn test_stored_language(
		config: LocalizeConfig,
		#[case] stored: Option<&str>,
		#[case] expected: Option<&str>,
	) {
		// Arrange
		let storage = MemoryStorage::new();
		if let Some(stored) = stored {
			storage.set(CURRENT_LANGUAGE_KEY, stored).unwrap();
		}
		let state = LanguageState::new(&config, Arc::new(storage));

		// Act
		let language = state.stored_language().unwrap();

		// Assert
		assert_eq!(language.as_deref(), expected);
	}
}
