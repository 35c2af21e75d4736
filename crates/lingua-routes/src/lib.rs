//! Per-language expansion of nested route trees.
//!
//! Given route definitions where some top-level routes are marked
//! localizable, this crate produces a route list in which each of those
//! routes is replaced by one copy per enabled language:
//!
//! - paths gain a language prefix (`/about` → `/fr/about`);
//! - route names are namespaced by language (`about` → `fr_about`), with
//!   the original name kept in `original_name`;
//! - hierarchy, metadata and components are preserved, and components are
//!   shared between all copies instead of being cloned.
//!
//! The names seen along the way are recorded in a [`RouteRegistry`], which
//! backs [`localize_route_name`] and [`localize_route_path`] once the
//! router is running.
//!
//! ## Example
//!
//! ```
//! use lingua_conf::{LanguageConfig, LocalizeConfig};
//! use lingua_routes::{Route, expand, find_route};
//!
//! let config = LocalizeConfig::new("en")
//! 	.with_language("en", LanguageConfig::enabled())
//! 	.with_language("de", LanguageConfig::enabled());
//!
//! let routes: Vec<Route<&str>> = vec![
//! 	Route::new("/").localized().child(Route::new("").named("home").component("HomePage")),
//! ];
//!
//! let expansion = expand(&config, routes).unwrap();
//! assert_eq!(expansion.routes.len(), 2);
//! assert_eq!(expansion.routes[1].path, "/de");
//!
//! let home = find_route(&expansion.routes, "de_home").unwrap();
//! assert_eq!(home.original_name.as_deref(), Some("home"));
//! assert_eq!(home.meta.lang.as_deref(), Some("de"));
//! ```

mod components;
mod error;
mod expander;
mod localizer;
mod location;
pub mod path;
mod registry;
mod reverse;
mod route;

pub use error::{LocalizeError, LocalizeResult};
pub use expander::{Expansion, RouteExpander, expand};
pub use localizer::localized_name;
pub use location::{RouteLocation, Transition};
pub use registry::{LocalizedName, RouteRegistry};
pub use reverse::{localize_route_name, localize_route_path};
pub use route::{Route, RouteMeta, find_route};
