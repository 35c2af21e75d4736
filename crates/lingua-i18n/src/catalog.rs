//! Message catalog for storing translations

use std::collections::HashMap;

/// Messages for a single language, keyed by dotted message key.
///
/// # Example
/// ```
/// use lingua_i18n::MessageCatalog;
///
/// let mut catalog = MessageCatalog::new("fr");
/// catalog.add("header.nav.home", "Accueil");
///
/// assert_eq!(catalog.locale(), "fr");
/// assert_eq!(catalog.get("header.nav.home"), Some("Accueil"));
/// assert_eq!(catalog.get("header.nav.about"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageCatalog {
	locale: String,
	messages: HashMap<String, String>,
}

impl MessageCatalog {
	/// Create an empty catalog for the given locale
	pub fn new(locale: impl Into<String>) -> Self {
		Self {
			locale: locale.into(),
			messages: HashMap::new(),
		}
	}

	/// Get the locale for this catalog
	pub fn locale(&self) -> &str {
		&self.locale
	}

	/// Add or replace a message
	pub fn add(&mut self, key: impl Into<String>, text: impl Into<String>) {
		self.messages.insert(key.into(), text.into());
	}

	/// Get a message
	pub fn get(&self, key: &str) -> Option<&str> {
		self.messages.get(key).map(String::as_str)
	}

	/// Iterate over `(key, text)` pairs in no particular order
	pub fn messages(&self) -> impl Iterator<Item = (&str, &str)> {
		self.messages
			.iter()
			.map(|(key, text)| (key.as_str(), text.as_str()))
	}

	pub fn contains(&self, key: &str) -> bool {
		self.messages.contains_key(key)
	}

	pub fn len(&self) -> usize {
		self.messages.len()
	}

	pub fn is_empty(&self) -> bool {
		self.messages.is_empty()
	}
}

/// Replace `{name}` placeholders with parameter values.
///
/// Placeholders without a matching parameter are left as they are.
///
/// ```
/// use lingua_i18n::interpolate;
///
/// let text = interpolate("Hello, {name}! You have {count} messages.", &[
/// 	("name", "Ana"),
/// 	("count", "3"),
/// ]);
/// assert_eq!(text, "Hello, Ana! You have 3 messages.");
/// assert_eq!(interpolate("Hi {who}", &[]), "Hi {who}");
/// ```
pub fn interpolate(template: &str, params: &[(&str, &str)]) -> String {
	let mut result = template.to_owned();
	for (key, value) in params {
		let placeholder = format!("{{{key}}}");
		result = result.replace(&placeholder, value);
	}
	result
}
