//! Localized name and path lookup
//!
//! Lookups that miss the registry are not errors: the name or path is
//! handed back unchanged so templates and links keep working for routes
//! that were never localized.

use crate::localizer::localized_name;
use crate::location::RouteLocation;
use crate::path::{prefixed_path, strip_prefix};
use crate::registry::RouteRegistry;
use lingua_conf::LocalizeConfig;

/// Localized route name for `name` in `lang`.
///
/// Returns `<lang>_<name>` when `name` is a known original route name and
/// `name` unchanged otherwise.
///
/// # Examples
///
/// ```
/// use lingua_routes::{RouteRegistry, localize_route_name};
///
/// let mut registry = RouteRegistry::new();
/// registry.record_original("home", "/").unwrap();
///
/// assert_eq!(localize_route_name(&registry, "home", "fr"), "fr_home");
/// assert_eq!(localize_route_name(&registry, "nonexistent", "fr"), "nonexistent");
/// ```
pub fn localize_route_name(registry: &RouteRegistry, name: &str, lang: &str) -> String {
	if registry.has_original(name) {
		localized_name(lang, name)
	} else {
		tracing::trace!(name, "route name is not localizable");
		name.to_string()
	}
}

/// Path of `route` after switching it to `new_lang`.
///
/// - Unnamed routes and routes unknown to the registry keep their path.
/// - For a localized route, the prefix of its current language is removed
///   from the concrete path and the prefix of `new_lang` applied, following
///   `default_language_route`.
/// - For a route addressed by its original name the path is taken to be
///   unprefixed.
///
/// Returns `None` when `new_lang` is not an enabled language: there is no
/// route to switch to.
///
/// # Examples
///
/// ```
/// use lingua_conf::{LanguageConfig, LocalizeConfig};
/// use lingua_routes::{RouteLocation, RouteRegistry, localize_route_path};
///
/// let config = LocalizeConfig::new("en")
/// 	.with_language("en", LanguageConfig::enabled())
/// 	.with_language("fr", LanguageConfig::enabled())
/// 	.with_default_language_route(false);
///
/// let mut registry = RouteRegistry::new();
/// registry.record_original("user", "users/{id}").unwrap();
/// registry.record_localized("en_user", "en", "user");
///
/// let route = RouteLocation::new("/users/42").named("en_user");
/// assert_eq!(
/// 	localize_route_path(&registry, &config, &route, "fr").as_deref(),
/// 	Some("/fr/users/42")
/// );
///
/// let unknown = RouteLocation::new("/x").named("nonexistent");
/// assert_eq!(
/// 	localize_route_path(&registry, &config, &unknown, "fr").as_deref(),
/// 	Some("/x")
/// );
/// ```
pub fn localize_route_path(
	registry: &RouteRegistry,
	config: &LocalizeConfig,
	route: &RouteLocation,
	new_lang: &str,
) -> Option<String> {
	let Some(name) = route.name.as_deref() else {
		return Some(route.path.clone());
	};

	let current_prefix = match registry.language_of(name) {
		Some(lang) => config.path_prefix(lang),
		None if registry.has_original(name) => "",
		None => {
			tracing::trace!(name, "route name unknown to the registry, keeping path");
			return Some(route.path.clone());
		}
	};

	if !config.is_enabled(new_lang) {
		tracing::debug!(name, new_lang, "cannot switch route to a disabled language");
		return None;
	}

	let unprefixed = strip_prefix(&route.path, current_prefix);
	Some(prefixed_path(config.path_prefix(new_lang), unprefixed))
}
