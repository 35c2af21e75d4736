//! Route tree expansion
//!
//! Replaces every localizable top-level route with one copy per enabled
//! language:
//!
//! - the path gets the language prefix (`/about` becomes `/fr/about`, or
//!   stays `/about` for the default language when
//!   `default_language_route` is off);
//! - the route and all of its descendants are renamed `<lang>_<name>` and
//!   recorded in the [`RouteRegistry`];
//! - every produced route is tagged `meta.localized = true` with
//!   `meta.lang` set to the language code;
//! - components are shared, never copied.
//!
//! Routes that are not localizable pass through unchanged and in place.
//!
//! # Examples
//!
//! ```
//! use lingua_conf::{LanguageConfig, LocalizeConfig};
//! use lingua_routes::{Route, expand};
//! use std::sync::Arc;
//!
//! let config = LocalizeConfig::new("en")
//! 	.with_language("en", LanguageConfig::enabled())
//! 	.with_language("fr", LanguageConfig::enabled())
//! 	.with_default_language_route(false);
//!
//! let about = Arc::new("AboutPage");
//! let routes = vec![
//! 	Route::new("/admin").named("admin"),
//! 	Route::new("/about").named("about").with_component(Arc::clone(&about)).localized(),
//! ];
//!
//! let expansion = expand(&config, routes).unwrap();
//! let paths: Vec<&str> = expansion.routes.iter().map(|r| r.path.as_str()).collect();
//! assert_eq!(paths, vec!["/admin", "/about", "/fr/about"]);
//!
//! let fr = &expansion.routes[2];
//! assert_eq!(fr.name.as_deref(), Some("fr_about"));
//! assert_eq!(fr.original_name.as_deref(), Some("about"));
//! assert!(Arc::ptr_eq(fr.component.as_ref().unwrap(), &about));
//! assert!(expansion.registry.has_localized("fr_about"));
//! ```

use crate::components::ComponentTable;
use crate::error::{LocalizeError, LocalizeResult};
use crate::localizer::SubtreeLocalizer;
use crate::path::prefixed_path;
use crate::registry::RouteRegistry;
use crate::route::{Route, RouteNode};
use lingua_conf::LocalizeConfig;
use std::collections::HashMap;

/// Result of expanding a route tree
#[derive(Debug)]
pub struct Expansion<C> {
	/// The new top-level route list.
	pub routes: Vec<Route<C>>,
	/// Names recorded while localizing.
	pub registry: RouteRegistry,
}

/// Expand a route tree for every enabled language in `config`.
///
/// Fails without producing any routes if two routes share a name, or if a
/// generated localized name collides with a route that was passed through.
pub fn expand<C>(config: &LocalizeConfig, routes: Vec<Route<C>>) -> LocalizeResult<Expansion<C>> {
	RouteExpander::new(config).expand(routes)
}

/// Drives a single expansion pass.
///
/// Owns the registry for the duration of the pass; nothing is shared with
/// other expansions.
pub struct RouteExpander<'a> {
	config: &'a LocalizeConfig,
	registry: RouteRegistry,
}

impl<'a> RouteExpander<'a> {
	pub fn new(config: &'a LocalizeConfig) -> Self {
		Self {
			config,
			registry: RouteRegistry::new(),
		}
	}

	pub fn expand<C>(mut self, routes: Vec<Route<C>>) -> LocalizeResult<Expansion<C>> {
		ensure_unique_names(&routes)?;

		let (nodes, components) = ComponentTable::detach(routes);
		tracing::debug!(identities = components.len(), "detached route components");

		let config = self.config;
		let mut expanded = Vec::with_capacity(nodes.len());
		for node in nodes {
			if !node.meta.localized {
				expanded.push(node);
				continue;
			}

			for lang in config.enabled_languages() {
				let copy = self.localize_top_level(&node, lang)?;
				tracing::debug!(
					name = copy.name.as_deref(),
					path = %copy.path,
					lang,
					"expanded localized route"
				);
				expanded.push(copy);
			}
		}

		ensure_unique_output_names(&expanded)?;

		let routes = components.reattach(expanded)?;
		Ok(Expansion {
			routes,
			registry: self.registry,
		})
	}

	fn localize_top_level(&mut self, template: &RouteNode, lang: &str) -> LocalizeResult<RouteNode> {
		let mut localizer = SubtreeLocalizer::new(&mut self.registry);

		let mut node = localizer.localize_node(template, lang)?;
		node.path = prefixed_path(self.config.path_prefix(lang), &template.path);
		node.children = localizer.localize_children(&template.children, lang)?;

		Ok(node)
	}
}

fn collect_names<'r, C>(
	routes: &'r [Route<C>],
	seen: &mut HashMap<&'r str, &'r str>,
) -> LocalizeResult<()> {
	for route in routes {
		if let Some(name) = route.name.as_deref() {
			if let Some(existing_path) = seen.insert(name, route.path.as_str()) {
				return Err(LocalizeError::DuplicateRouteName {
					name: name.to_string(),
					existing_path: existing_path.to_string(),
					path: route.path.clone(),
				});
			}
		}
		collect_names(&route.children, seen)?;
	}
	Ok(())
}

fn ensure_unique_names<C>(routes: &[Route<C>]) -> LocalizeResult<()> {
	collect_names(routes, &mut HashMap::new())
}

fn collect_output_names<'r>(
	nodes: &'r [RouteNode],
	seen: &mut HashMap<&'r str, &'r str>,
) -> LocalizeResult<()> {
	for node in nodes {
		if let Some(name) = node.name.as_deref() {
			if let Some(existing_path) = seen.insert(name, node.path.as_str()) {
				return Err(LocalizeError::DuplicateRouteName {
					name: name.to_string(),
					existing_path: existing_path.to_string(),
					path: node.path.clone(),
				});
			}
		}
		collect_output_names(&node.children, seen)?;
	}
	Ok(())
}

fn ensure_unique_output_names(nodes: &[RouteNode]) -> LocalizeResult<()> {
	collect_output_names(nodes, &mut HashMap::new())
}
