//! # Lingua
//!
//! Localized route trees for client-side routers.
//!
//! Lingua takes the route definitions of an application, expands every
//! top-level route marked as localized into one copy per enabled language,
//! and hands the result to the host router together with a navigation hook
//! that keeps the application language in step with the route being
//! visited.
//!
//! ## Crates
//!
//! - [`conf`]: language configuration, loaded from TOML or JSON
//! - [`routes`]: route model, per-language expansion, name and path lookup
//! - [`i18n`]: translations, language state and its persistence
//!
//! ## Quick Example
//!
//! ```
//! use lingua::navigation::{NavigationHook, NavigationHost, Next};
//! use lingua::prelude::*;
//!
//! #[derive(Default)]
//! struct Router {
//! 	routes: Vec<Route<&'static str>>,
//! 	hooks: Vec<NavigationHook>,
//! }
//!
//! impl NavigationHost<&'static str> for Router {
//! 	fn add_routes(&mut self, routes: Vec<Route<&'static str>>) {
//! 		self.routes.extend(routes);
//! 	}
//!
//! 	fn before_each(&mut self, hook: NavigationHook) {
//! 		self.hooks.push(hook);
//! 	}
//! }
//!
//! let config = LocalizeConfig::new("en")
//! 	.with_language("en", LanguageConfig::enabled())
//! 	.with_language("fr", LanguageConfig::enabled())
//! 	.with_default_language_route(false);
//!
//! let routes = vec![
//! 	Route::new("/")
//! 		.localized()
//! 		.child(Route::new("").named("home").component("Home"))
//! 		.child(Route::new("about").named("about").component("About")),
//! ];
//!
//! let mut router = Router::default();
//! let localize = Localize::builder(config)
//! 	.routes(routes)
//! 	.install(&mut router)
//! 	.unwrap();
//!
//! let paths: Vec<&str> = router.routes.iter().map(|r| r.path.as_str()).collect();
//! assert_eq!(paths, vec!["/", "/fr"]);
//!
//! // Entering a French route switches the application language.
//! let fr_about = find_route(&router.routes, "fr_about").unwrap();
//! let transition = Transition::new(RouteLocation::new("/"), RouteLocation::from(fr_about));
//! (router.hooks[0])(&transition, Next::new(|| {}));
//! assert_eq!(localize.current_language(), "fr");
//! assert_eq!(localize.localize_route_name("home", None), "fr_home");
//! ```

mod install;
pub mod navigation;

pub use install::{InstallError, Localize, LocalizeBuilder};
pub use navigation::{NavigationHook, NavigationHost, Next};

pub use lingua_conf as conf;
pub use lingua_i18n as i18n;
pub use lingua_routes as routes;

/// Common imports for applications embedding lingua.
pub mod prelude {
	pub use crate::{InstallError, Localize, LocalizeBuilder, NavigationHook, NavigationHost, Next};

	pub use lingua_conf::{LanguageConfig, LocalizeConfig};
	pub use lingua_i18n::{LanguageState, LanguageStore, Translator};
	pub use lingua_routes::{Route, RouteLocation, Transition, find_route};
}
