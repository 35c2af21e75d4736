//! Route tree expansion tests
//!
//! Covers the observable guarantees of expansion: copy counts, path
//! construction, name rewriting, component sharing and pass-through of
//! routes that are not localizable.

use lingua_conf::{LanguageConfig, LocalizeConfig};
use lingua_routes::{Route, RouteLocation, Transition, expand, find_route, localize_route_path};
use rstest::{fixture, rstest};
use std::sync::Arc;

#[derive(Debug, PartialEq)]
struct Page(&'static str);

#[fixture]
fn config() -> LocalizeConfig {
	LocalizeConfig::new("en")
		.with_language("en", LanguageConfig::enabled().with_name("English"))
		.with_language("fr", LanguageConfig::enabled())
		.with_language("de", LanguageConfig::disabled())
		.with_language("ru", LanguageConfig::enabled())
}

/// An app shell with a localized section, a nested account area and a
/// non-localized admin area.
fn site(layout: &Arc<Page>, profile: &Arc<Page>) -> Vec<Route<Page>> {
	vec![
		Route::new("/admin")
			.named("admin")
			.component(Page("Admin"))
			.child(Route::new("users").named("admin-users")),
		Route::new("/")
			.with_component(Arc::clone(layout))
			.localized()
			.with_meta("layout", "main")
			.child(Route::new("").named("home").component(Page("Home")))
			.child(Route::new("about").named("about").component(Page("About")))
			.child(
				Route::new("account")
					.named("account")
					.child(
						Route::new("profile")
							.named("profile")
							.with_component(Arc::clone(profile)),
					)
					.child(Route::new("empty").named("empty").with_children(Vec::new())),
			),
		Route::new("*").named("not-found").component(Page("NotFound")),
	]
}

#[rstest]
fn test_one_copy_per_enabled_language(config: LocalizeConfig) {
	// Arrange
	let layout = Arc::new(Page("Layout"));
	let profile = Arc::new(Page("Profile"));

	// Act
	let expansion = expand(&config, site(&layout, &profile)).unwrap();

	// Assert
	let paths: Vec<&str> = expansion.routes.iter().map(|r| r.path.as_str()).collect();
	assert_eq!(paths, vec!["/admin", "/en", "/fr", "/ru", "*"]);
	assert!(find_route(&expansion.routes, "de_home").is_none());
	assert_eq!(expansion.registry.localized_len(), 3 * 5);
	assert_eq!(expansion.registry.original_len(), 5);
}

#[rstest]
#[case(true, "en", "/about", "/en/about")]
#[case(true, "fr", "/about", "/fr/about")]
#[case(false, "en", "/about", "/about")]
#[case(false, "fr", "about", "/fr/about")]
#[case(true, "fr", "/", "/fr")]
#[case(false, "en", "/", "/")]
fn test_path_construction(
	config: LocalizeConfig,
	#[case] default_language_route: bool,
	#[case] lang: &str,
	#[case] path: &str,
	#[case] expected: &str,
) {
	// Arrange
	let config = config.with_default_language_route(default_language_route);
	let routes: Vec<Route<Page>> = vec![Route::new(path).named("page").localized()];

	// Act
	let expansion = expand(&config, routes).unwrap();

	// Assert
	let route = find_route(&expansion.routes, &format!("{lang}_page")).unwrap();
	assert_eq!(route.path, expected);
}

#[rstest]
fn test_names_rewritten_at_every_depth(config: LocalizeConfig) {
	// Arrange
	let layout = Arc::new(Page("Layout"));
	let profile = Arc::new(Page("Profile"));

	// Act
	let expansion = expand(&config, site(&layout, &profile)).unwrap();

	// Assert
	let ru_profile = find_route(&expansion.routes, "ru_profile").unwrap();
	assert_eq!(ru_profile.original_name.as_deref(), Some("profile"));
	assert_eq!(ru_profile.path, "profile");
	assert!(ru_profile.meta.localized);
	assert_eq!(ru_profile.meta.lang.as_deref(), Some("ru"));
	assert!(expansion.registry.has_original("profile"));
	assert!(expansion.registry.has_localized("ru_profile"));
	assert_eq!(expansion.registry.original_path("profile"), Some("profile"));
	assert!(find_route(&expansion.routes, "profile").is_none());

	let fr_empty = find_route(&expansion.routes, "fr_empty").unwrap();
	assert!(fr_empty.children.is_empty());
}

#[rstest]
fn test_every_descendant_is_tagged(config: LocalizeConfig) {
	// Arrange
	let layout = Arc::new(Page("Layout"));
	let profile = Arc::new(Page("Profile"));

	fn check(route: &Route<Page>, lang: &str) {
		assert!(route.meta.localized, "{} not localized", route.path);
		assert_eq!(route.meta.lang.as_deref(), Some(lang));
		for child in &route.children {
			check(child, lang);
		}
	}

	// Act
	let expansion = expand(&config, site(&layout, &profile)).unwrap();

	// Assert
	for (route, lang) in expansion.routes[1..4].iter().zip(["en", "fr", "ru"]) {
		check(route, lang);
		assert_eq!(route.meta.get("layout"), Some(&serde_json::json!("main")));
	}
}

#[rstest]
fn test_components_shared_not_cloned(config: LocalizeConfig) {
	// Arrange
	let layout = Arc::new(Page("Layout"));
	let profile = Arc::new(Page("Profile"));

	// Act
	let expansion = expand(&config, site(&layout, &profile)).unwrap();

	// Assert
	for lang in ["en", "fr", "ru"] {
		let copy = find_route(&expansion.routes, &format!("{lang}_profile")).unwrap();
		assert!(Arc::ptr_eq(copy.component.as_ref().unwrap(), &profile));
	}
	for route in &expansion.routes[1..4] {
		assert!(Arc::ptr_eq(route.component.as_ref().unwrap(), &layout));
	}
	// Fixture handles plus one per copy.
	assert_eq!(Arc::strong_count(&profile), 1 + 3);
	assert!(find_route(&expansion.routes, "fr_account").unwrap().component.is_none());
}

#[rstest]
fn test_non_localizable_routes_pass_through_once(config: LocalizeConfig) {
	// Arrange
	let layout = Arc::new(Page("Layout"));
	let profile = Arc::new(Page("Profile"));
	let routes = site(&layout, &profile);
	let admin = routes[0].clone();
	let not_found = routes[2].clone();

	// Act
	let expansion = expand(&config, routes).unwrap();

	// Assert
	assert_eq!(expansion.routes[0], admin);
	assert_eq!(expansion.routes[4], not_found);
	assert_eq!(
		expansion
			.routes
			.iter()
			.filter(|r| r.name.as_deref() == Some("admin"))
			.count(),
		1
	);
	assert!(!expansion.registry.has_original("admin-users"));
}

#[rstest]
fn test_language_switch_between_expanded_routes(config: LocalizeConfig) {
	// Arrange
	let config = config.with_default_language_route(false);
	let layout = Arc::new(Page("Layout"));
	let profile = Arc::new(Page("Profile"));
	let expansion = expand(&config, site(&layout, &profile)).unwrap();
	let en = find_route(&expansion.routes, "en_about").unwrap();
	let fr = find_route(&expansion.routes, "fr_about").unwrap();
	// Children keep relative paths; the router reports the concrete one.
	let current = RouteLocation {
		path: "/about".to_string(),
		..RouteLocation::from(en)
	};

	// Act
	let switch = Transition::new(RouteLocation::from(en), RouteLocation::from(fr));
	let path = localize_route_path(&expansion.registry, &config, &current, "fr");

	// Assert
	assert!(switch.is_language_switch_only());
	assert_eq!(path.as_deref(), Some("/fr/about"));
}

#[rstest]
fn test_expansions_are_independent(config: LocalizeConfig) {
	// Arrange
	let first: Vec<Route<Page>> = vec![Route::new("/a").named("a").localized()];
	let second: Vec<Route<Page>> = vec![Route::new("/b").named("b").localized()];

	// Act
	let a = expand(&config, first).unwrap();
	let b = expand(&config, second).unwrap();

	// Assert
	assert!(a.registry.has_original("a"));
	assert!(!a.registry.has_original("b"));
	assert!(b.registry.has_original("b"));
	assert!(!b.registry.has_original("a"));
}
