//! Typed language configuration

use crate::validation::{self, ValidationError};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

fn default_true() -> bool {
	true
}

/// Per-language settings, keyed by language code in [`LocalizeConfig::languages`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageConfig {
	/// Disabled languages are configured but get no routes.
	#[serde(default = "default_true")]
	pub enabled: bool,
	/// Human-readable label, e.g. for a language switcher.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
}

impl Default for LanguageConfig {
	fn default() -> Self {
		Self {
			enabled: true,
			name: None,
		}
	}
}

impl LanguageConfig {
	/// An enabled language without a label.
	pub fn enabled() -> Self {
		Self::default()
	}

	/// A configured but disabled language.
	pub fn disabled() -> Self {
		Self {
			enabled: false,
			name: None,
		}
	}

	/// Set the human-readable label
	pub fn with_name(mut self, name: impl Into<String>) -> Self {
		self.name = Some(name.into());
		self
	}
}

/// Localization settings consumed by route expansion, the language store
/// and the translator.
///
/// The declaration order of [`languages`](Self::languages) is significant:
/// localized copies of a route are emitted in that order.
///
/// # Examples
///
/// ```
/// use lingua_conf::{LanguageConfig, LocalizeConfig};
///
/// let config = LocalizeConfig::new("en")
/// 	.with_language("en", LanguageConfig::enabled())
/// 	.with_language("ru", LanguageConfig::enabled().with_name("Русский"))
/// 	.with_default_language_route(false);
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.path_prefix("en"), "");
/// assert_eq!(config.path_prefix("ru"), "ru");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizeConfig {
	/// Language used when nothing else is known.
	pub default_language: String,
	/// Whether the default language keeps its `/<lang>` path prefix.
	#[serde(default = "default_true")]
	pub default_language_route: bool,
	/// Whether entering a localized route persists its language.
	#[serde(default)]
	pub resave_on_localized_routes: bool,
	/// Language the translator falls back to when a message is missing.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub fallback_language: Option<String>,
	/// Configured languages in declaration order.
	#[serde(default)]
	pub languages: IndexMap<String, LanguageConfig>,
}

impl LocalizeConfig {
	/// Create a configuration with the given default language and no
	/// languages declared yet.
	pub fn new(default_language: impl Into<String>) -> Self {
		Self {
			default_language: default_language.into(),
			default_language_route: true,
			resave_on_localized_routes: false,
			fallback_language: None,
			languages: IndexMap::new(),
		}
	}

	/// Declare a language. Re-declaring keeps the original position.
	pub fn with_language(mut self, code: impl Into<String>, language: LanguageConfig) -> Self {
		self.languages.insert(code.into(), language);
		self
	}

	pub fn with_default_language_route(mut self, enabled: bool) -> Self {
		self.default_language_route = enabled;
		self
	}

	pub fn with_resave_on_localized_routes(mut self, enabled: bool) -> Self {
		self.resave_on_localized_routes = enabled;
		self
	}

	pub fn with_fallback_language(mut self, code: impl Into<String>) -> Self {
		self.fallback_language = Some(code.into());
		self
	}

	/// Enabled language codes, in declaration order.
	pub fn enabled_languages(&self) -> impl Iterator<Item = &str> {
		self.languages
			.iter()
			.filter(|(_, language)| language.enabled)
			.map(|(code, _)| code.as_str())
	}

	/// Returns `true` if `code` is declared and enabled.
	pub fn is_enabled(&self, code: &str) -> bool {
		self.languages
			.get(code)
			.map(|language| language.enabled)
			.unwrap_or(false)
	}

	/// Returns `true` if `code` is the default language.
	pub fn is_default_language(&self, code: &str) -> bool {
		self.default_language == code
	}

	/// Path prefix used for routes in `code`.
	///
	/// Empty for the default language when
	/// [`default_language_route`](Self::default_language_route) is off,
	/// otherwise the language code itself.
	pub fn path_prefix<'a>(&self, code: &'a str) -> &'a str {
		if !self.default_language_route && self.is_default_language(code) {
			""
		} else {
			code
		}
	}

	/// Check the configuration before it is used for route expansion.
	pub fn validate(&self) -> Result<(), ValidationError> {
		validation::validate(self)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn config() -> LocalizeConfig {
		LocalizeConfig::new("en")
			.with_language("en", LanguageConfig::enabled())
			.with_language("fr", LanguageConfig::enabled())
			.with_language("de", LanguageConfig::disabled())
			.with_language("ru", LanguageConfig::enabled())
	}

	#[rstest]
	fn test_enabled_languages_keep_declaration_order() {
		// Arrange
		let config = config();

		// Act
		let enabled: Vec<&str> = config.enabled_languages().collect();

		// Assert
		assert_eq!(enabled, vec!["en", "fr", "ru"]);
	}

	#[rstest]
	#[case("en", true)]
	#[case("de", false)]
	#[case("es", false)]
	fn test_is_enabled(#[case] code: &str, #[case] expected: bool) {
		assert_eq!(config().is_enabled(code), expected);
	}

	#[rstest]
	#[case(true, "en", "en")]
	#[case(true, "fr", "fr")]
	#[case(false, "en", "")]
	#[case(false, "fr", "fr")]
	fn test_path_prefix(#[case] default_route: bool, #[case] code: &str, #[case] expected: &str) {
		// Arrange
		let config = config().with_default_language_route(default_route);

		// Act
		let prefix = config.path_prefix(code);

		// Assert
		assert_eq!(prefix, expected);
	}

	#[rstest]
	fn test_redeclared_language_keeps_position() {
		// Arrange
		let config = config().with_language("en", LanguageConfig::disabled());

		// Act
		let codes: Vec<&str> = config.languages.keys().map(String::as_str).collect();

		// Assert
		assert_eq!(codes, vec!["en", "fr", "de", "ru"]);
		assert!(!config.is_enabled("en"));
	}
}
