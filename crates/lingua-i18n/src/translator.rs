//! Message translation
//!
//! Translations are written as a nested JSON tree whose leaves map language
//! codes to text:
//!
//! ```json
//! {
//!   "header": {
//!     "nav": {
//!       "home": { "en": "Home", "fr": "Accueil" }
//!     }
//!   }
//! }
//! ```
//!
//! The tree is flattened into one [`MessageCatalog`] per language with
//! dotted keys (`header.nav.home`).

use crate::catalog::{MessageCatalog, interpolate};
use crate::error::TranslationError;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Looks up messages by key and language, with an optional fallback
/// language.
///
/// # Examples
///
/// ```
/// use lingua_i18n::Translator;
/// use serde_json::json;
///
/// let translator = Translator::from_json(&json!({
/// 	"greeting": { "en": "Hello, {name}!", "fr": "Bonjour, {name} !" },
/// 	"farewell": { "en": "Goodbye" }
/// }))
/// .unwrap()
/// .with_fallback_language("en");
///
/// assert_eq!(translator.translate("greeting", &[("name", "Ana")], "fr"), "Bonjour, Ana !");
/// assert_eq!(translator.translate("farewell", &[], "fr"), "Goodbye");
/// assert_eq!(translator.translate("missing.key", &[], "fr"), "missing.key");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Translator {
	catalogs: HashMap<String, MessageCatalog>,
	fallback_language: Option<String>,
}

impl Translator {
	/// Create a translator without any messages
	pub fn new() -> Self {
		Self::default()
	}

	/// Build a translator from a nested translation tree
	pub fn from_json(tree: &Value) -> Result<Self, TranslationError> {
		let root = tree
			.as_object()
			.ok_or_else(|| TranslationError::InvalidEntry(String::new()))?;

		let mut translator = Self::new();
		translator.load_object("", root)?;
		Ok(translator)
	}

	/// Parse a nested translation tree from JSON text
	pub fn from_json_str(content: &str) -> Result<Self, TranslationError> {
		let tree: Value = serde_json::from_str(content)?;
		Self::from_json(&tree)
	}

	/// Load a nested translation tree from a JSON file
	pub fn from_file(path: impl AsRef<Path>) -> Result<Self, TranslationError> {
		let path = path.as_ref();
		let content = fs::read_to_string(path)?;
		let translator = Self::from_json_str(&content)?;
		tracing::debug!(
			path = %path.display(),
			languages = translator.catalogs.len(),
			"loaded translations"
		);
		Ok(translator)
	}

	/// Language used when a message has no text in the requested language
	pub fn with_fallback_language(mut self, lang: impl Into<String>) -> Self {
		self.fallback_language = Some(lang.into());
		self
	}

	pub fn fallback_language(&self) -> Option<&str> {
		self.fallback_language.as_deref()
	}

	/// Add a catalog, merging it into an existing one for the same locale
	pub fn add_catalog(&mut self, catalog: MessageCatalog) {
		match self.catalogs.get_mut(catalog.locale()) {
			Some(existing) => {
				for (key, text) in catalog.messages() {
					existing.add(key, text);
				}
			}
			None => {
				self.catalogs.insert(catalog.locale().to_string(), catalog);
			}
		}
	}

	/// Add a single message
	pub fn add_message(&mut self, lang: &str, key: impl Into<String>, text: impl Into<String>) {
		self.catalogs
			.entry(lang.to_string())
			.or_insert_with(|| MessageCatalog::new(lang))
			.add(key, text);
	}

	/// Catalog for a language
	pub fn catalog(&self, lang: &str) -> Option<&MessageCatalog> {
		self.catalogs.get(lang)
	}

	/// Returns `true` if `key` has text in `lang`, ignoring the fallback.
	pub fn has_translation(&self, key: &str, lang: &str) -> bool {
		self.catalog(lang)
			.map(|catalog| catalog.contains(key))
			.unwrap_or(false)
	}

	/// Translate `key` into `lang`.
	///
	/// Falls back to the fallback language, then to the key itself.
	pub fn translate(&self, key: &str, params: &[(&str, &str)], lang: &str) -> String {
		if let Some(text) = self.lookup(key, lang) {
			return interpolate(text, params);
		}

		if let Some(fallback) = self.fallback_language.as_deref()
			&& fallback != lang
			&& let Some(text) = self.lookup(key, fallback)
		{
			tracing::debug!(key, lang, fallback, "using fallback translation");
			return interpolate(text, params);
		}

		tracing::warn!(key, lang, "no translation found");
		key.to_string()
	}

	fn lookup(&self, key: &str, lang: &str) -> Option<&str> {
		self.catalogs.get(lang).and_then(|catalog| catalog.get(key))
	}

	fn load_object(&mut self, prefix: &str, object: &Map<String, Value>) -> Result<(), TranslationError> {
		for (segment, value) in object {
			let key = if prefix.is_empty() {
				segment.clone()
			} else {
				format!("{prefix}.{segment}")
			};

			let Some(child) = value.as_object() else {
				return Err(TranslationError::InvalidEntry(key));
			};

			if is_language_map(child) {
				for (lang, text) in child {
					if let Some(text) = text.as_str() {
						self.add_message(lang, key.as_str(), text);
					}
				}
			} else {
				self.load_object(&key, child)?;
			}
		}
		Ok(())
	}
}

/// A leaf of the translation tree: a non-empty object of strings.
fn is_language_map(object: &Map<String, Value>) -> bool {
	!object.is_empty() && object.values().all(Value::is_string)
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::{fixture, rstest};
	use serde_json::json;

	#[fixture]
	fn translator() -> Translator {
		Translator::from_json(&json!({
			"header": {
				"nav": {
					"home": { "en": "Home", "ru": "Главная" },
					"about": { "en": "About" }
				}
			},
			"footer": { "copyright": { "en": "© {year}", "ru": "© {year}" } }
		}))
		.unwrap()
	}

	#[rstest]
	fn test_nested_keys_are_flattened(translator: Translator) {
		// Act
		let home = translator.translate("header.nav.home", &[], "ru");

		// Assert
		assert_eq!(home, "Главная");
		assert!(translator.has_translation("header.nav.about", "en"));
		assert!(!translator.has_translation("header.nav.about", "ru"));
		assert_eq!(translator.catalog("en").map(MessageCatalog::len), Some(3));
	}

	#[rstest]
	fn test_missing_without_fallback_returns_key(translator: Translator) {
		assert_eq!(
			translator.translate("header.nav.about", &[], "ru"),
			"header.nav.about"
		);
	}

	#[rstest]
	fn test_fallback_language(translator: Translator) {
		// Arrange
		let translator = translator.with_fallback_language("en");

		// Act
		let about = translator.translate("header.nav.about", &[], "ru");

		// Assert
		assert_eq!(about, "About");
	}

	#[rstest]
	fn test_params_are_interpolated(translator: Translator) {
		assert_eq!(
			translator.translate("footer.copyright", &[("year", "2024")], "ru"),
			"© 2024"
		);
	}

	#[rstest]
	#[case(json!([]))]
	#[case(json!({ "title": "Home" }))]
	#[case(json!({ "header": { "title": 5 } }))]
	fn test_invalid_trees_are_rejected(#[case] tree: Value) {
		assert!(matches!(
			Translator::from_json(&tree),
			Err(TranslationError::InvalidEntry(_))
		));
	}

	#[rstest]
	fn test_add_catalog_merges() {
		// Arrange
		let mut translator = Translator::new();
		translator.add_message("fr", "a", "A");
		let mut catalog = MessageCatalog::new("fr");
		catalog.add("b", "B");

		// Act
		translator.add_catalog(catalog);

		// Assert
		assert_eq!(translator.translate("a", &[], "fr"), "A");
		assert_eq!(translator.translate("b", &[], "fr"), "B");
	}
}
