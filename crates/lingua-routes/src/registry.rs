//! Route registry
//!
//! Two lookup tables built while the route tree is expanded:
//!
//! - `initial`: original route name → original path
//! - `localized`: localized route name (`<lang>_<name>`) → language and
//!   original name
//!
//! The registry only grows during expansion and is read-only afterwards.

use crate::error::{LocalizeError, LocalizeResult};
use std::collections::HashMap;

/// Registry entry for a localized route name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizedName {
	/// Language the route belongs to.
	pub lang: String,
	/// Name the route had before localization.
	pub original: String,
}

/// Lookup tables between original and localized route names
///
/// # Examples
///
/// ```
/// use lingua_routes::RouteRegistry;
///
/// let mut registry = RouteRegistry::new();
/// registry.record_original("home", "/").unwrap();
/// registry.record_localized("de_home", "de", "home");
///
/// assert!(registry.has_original("home"));
/// assert!(registry.has_localized("de_home"));
/// assert_eq!(registry.language_of("de_home"), Some("de"));
/// assert_eq!(registry.original_of("de_home"), Some("home"));
///
/// // Re-recording the same pair is fine, a different path is not.
/// assert!(registry.record_original("home", "/").is_ok());
/// assert!(registry.record_original("home", "/start").is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteRegistry {
	initial: HashMap<String, String>,
	localized: HashMap<String, LocalizedName>,
}

impl RouteRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Record an original route name and its path.
	///
	/// Every localizable route is recorded once per enabled language, so
	/// recording an identical pair again succeeds. A different path under
	/// an existing name means two routes share the name.
	pub fn record_original(
		&mut self,
		name: impl Into<String>,
		path: impl Into<String>,
	) -> LocalizeResult<()> {
		let name = name.into();
		let path = path.into();

		if let Some(existing_path) = self.initial.get(&name) {
			if *existing_path != path {
				return Err(LocalizeError::DuplicateRouteName {
					name,
					existing_path: existing_path.clone(),
					path,
				});
			}
			return Ok(());
		}

		self.initial.insert(name, path);
		Ok(())
	}

	/// Record a localized route name.
	pub fn record_localized(
		&mut self,
		localized_name: impl Into<String>,
		lang: impl Into<String>,
		original: impl Into<String>,
	) {
		self.localized.insert(
			localized_name.into(),
			LocalizedName {
				lang: lang.into(),
				original: original.into(),
			},
		);
	}

	pub fn has_original(&self, name: &str) -> bool {
		self.initial.contains_key(name)
	}

	pub fn has_localized(&self, name: &str) -> bool {
		self.localized.contains_key(name)
	}

	/// Path the original route was declared with
	pub fn original_path(&self, name: &str) -> Option<&str> {
		self.initial.get(name).map(String::as_str)
	}

	pub fn localized(&self, name: &str) -> Option<&LocalizedName> {
		self.localized.get(name)
	}

	/// Language of a localized route name
	pub fn language_of(&self, name: &str) -> Option<&str> {
		self.localized.get(name).map(|entry| entry.lang.as_str())
	}

	/// Original name behind a localized route name
	pub fn original_of(&self, name: &str) -> Option<&str> {
		self.localized.get(name).map(|entry| entry.original.as_str())
	}

	/// Number of distinct original names
	pub fn original_len(&self) -> usize {
		self.initial.len()
	}

	/// Number of distinct localized names
	pub fn localized_len(&self) -> usize {
		self.localized.len()
	}

	pub fn is_empty(&self) -> bool {
		self.initial.is_empty() && self.localized.is_empty()
	}
}
