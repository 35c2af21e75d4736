//! Translations and application language state.
//!
//! - [`Translator`] resolves dotted message keys per language, with an
//!   optional fallback language and `{name}` parameters.
//! - [`LanguageState`] tracks the current application language and
//!   persists it through a [`KeyValueStorage`] backend.
//!
//! ## Example
//!
//! ```
//! use lingua_conf::{LanguageConfig, LocalizeConfig};
//! use lingua_i18n::{LanguageState, LanguageStore, MemoryStorage, Translator, SET_APP_LANGUAGE};
//! use serde_json::json;
//! use std::sync::Arc;
//!
//! let config = LocalizeConfig::new("en")
//! 	.with_language("en", LanguageConfig::enabled())
//! 	.with_language("de", LanguageConfig::enabled());
//! let state = LanguageState::new(&config, Arc::new(MemoryStorage::new()));
//! let translator = Translator::from_json(&json!({
//! 	"nav": { "home": { "en": "Home", "de": "Startseite" } }
//! }))
//! .unwrap();
//!
//! state.commit(SET_APP_LANGUAGE, "de", false).unwrap();
//! assert_eq!(translator.translate("nav.home", &[], &state.current_language()), "Startseite");
//! ```

mod catalog;
mod error;
mod storage;
mod store;
mod translator;

pub use catalog::{MessageCatalog, interpolate};
pub use error::{StorageError, StorageResult, StoreError, TranslationError};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};
pub use store::{CURRENT_LANGUAGE_KEY, LanguageState, LanguageStore, SET_APP_LANGUAGE};
pub use translator::Translator;
