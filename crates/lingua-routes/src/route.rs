//! Route definitions
//!
//! [`Route`] is the shape handed in by the application and handed back to
//! the router after expansion. [`RouteNode`] is the detached form used
//! while the tree is being duplicated: it has no component field at all,
//! so cloning it can never clone or alias a view component.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::sync::Arc;

/// Route metadata
///
/// `localized` and `lang` are the fields route expansion reads and writes.
/// Anything else the application attaches lives in [`extra`](Self::extra)
/// and is carried through expansion untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteMeta {
	/// Marks a top-level route for per-language expansion. After expansion
	/// every route produced from a localizable template has it set.
	#[serde(default)]
	pub localized: bool,
	/// Language code of a localized route.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub lang: Option<String>,
	/// Application-defined metadata.
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

impl RouteMeta {
	/// Look up an application-defined metadata value
	pub fn get(&self, key: &str) -> Option<&Value> {
		self.extra.get(key)
	}
}

/// A route definition
///
/// The component is held by `Arc` and treated as an opaque identity: route
/// expansion never clones the component itself, and every localized copy
/// of a route points at the same allocation as the original.
///
/// # Examples
///
/// ```
/// use lingua_routes::Route;
///
/// struct Page(&'static str);
///
/// let route = Route::new("/about")
/// 	.named("about")
/// 	.component(Page("about"))
/// 	.localized()
/// 	.child(Route::new("team").named("team"));
///
/// assert_eq!(route.name.as_deref(), Some("about"));
/// assert!(route.meta.localized);
/// assert_eq!(route.children.len(), 1);
/// ```
pub struct Route<C> {
	pub path: String,
	pub name: Option<String>,
	pub component: Option<Arc<C>>,
	pub meta: RouteMeta,
	pub children: Vec<Route<C>>,
	/// Name before localization; only set on localized copies.
	pub original_name: Option<String>,
}

impl<C> Clone for Route<C> {
	fn clone(&self) -> Self {
		Self {
			path: self.path.clone(),
			name: self.name.clone(),
			component: self.component.clone(),
			meta: self.meta.clone(),
			children: self.children.clone(),
			original_name: self.original_name.clone(),
		}
	}
}

impl<C> fmt::Debug for Route<C> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Route")
			.field("path", &self.path)
			.field("name", &self.name)
			.field("has_component", &self.component.is_some())
			.field("meta", &self.meta)
			.field("children", &self.children)
			.field("original_name", &self.original_name)
			.finish()
	}
}

/// Structural equality; components compare by identity.
impl<C> PartialEq for Route<C> {
	fn eq(&self, other: &Self) -> bool {
		let same_component = match (&self.component, &other.component) {
			(Some(a), Some(b)) => Arc::ptr_eq(a, b),
			(None, None) => true,
			_ => false,
		};

		same_component
			&& self.path == other.path
			&& self.name == other.name
			&& self.meta == other.meta
			&& self.children == other.children
			&& self.original_name == other.original_name
	}
}

impl<C> Route<C> {
	/// Create an unnamed route without a component
	pub fn new(path: impl Into<String>) -> Self {
		Self {
			path: path.into(),
			name: None,
			component: None,
			meta: RouteMeta::default(),
			children: Vec::new(),
			original_name: None,
		}
	}

	/// Set the route name
	pub fn named(mut self, name: impl Into<String>) -> Self {
		self.name = Some(name.into());
		self
	}

	/// Attach a component the caller already shares
	pub fn with_component(mut self, component: Arc<C>) -> Self {
		self.component = Some(component);
		self
	}

	/// Attach a component
	pub fn component(self, component: C) -> Self {
		self.with_component(Arc::new(component))
	}

	/// Mark the route for per-language expansion
	pub fn localized(mut self) -> Self {
		self.meta.localized = true;
		self
	}

	/// Attach application-defined metadata
	pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
		self.meta.extra.insert(key.into(), value.into());
		self
	}

	/// Replace the child routes
	pub fn with_children(mut self, children: Vec<Route<C>>) -> Self {
		self.children = children;
		self
	}

	/// Append a child route
	pub fn child(mut self, child: Route<C>) -> Self {
		self.children.push(child);
		self
	}

	pub fn is_localized(&self) -> bool {
		self.meta.localized
	}

	/// Depth-first search for a route by name, starting at this route.
	pub fn find(&self, name: &str) -> Option<&Route<C>> {
		if self.name.as_deref() == Some(name) {
			return Some(self);
		}
		self.children.iter().find_map(|child| child.find(name))
	}

	/// Number of routes in this subtree, including this one.
	pub fn subtree_len(&self) -> usize {
		1 + self.children.iter().map(Route::subtree_len).sum::<usize>()
	}
}

/// Depth-first search for a route by name across a route list.
pub fn find_route<'a, C>(routes: &'a [Route<C>], name: &str) -> Option<&'a Route<C>> {
	routes.iter().find_map(|route| route.find(name))
}

/// Identity assigned to each route node before duplication.
///
/// Doubles as the slot index into the component table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) struct LocalizeId(usize);

impl LocalizeId {
	pub(crate) fn new(index: usize) -> Self {
		Self(index)
	}

	pub(crate) fn index(self) -> usize {
		self.0
	}
}

/// A route with its component detached.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RouteNode {
	pub(crate) path: String,
	pub(crate) name: Option<String>,
	pub(crate) meta: RouteMeta,
	pub(crate) children: Vec<RouteNode>,
	pub(crate) original_name: Option<String>,
	pub(crate) localize_id: LocalizeId,
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	fn test_clone_shares_component() {
		// Arrange
		let route: Route<String> = Route::new("/").component("home".to_string());

		// Act
		let copy = route.clone();

		// Assert
		assert!(Arc::ptr_eq(
			route.component.as_ref().unwrap(),
			copy.component.as_ref().unwrap()
		));
		assert_eq!(route, copy);
	}

	#[rstest]
	fn test_equality_compares_component_identity() {
		// Arrange
		let a: Route<String> = Route::new("/").component("home".to_string());
		let b: Route<String> = Route::new("/").component("home".to_string());

		// Act / Assert
		assert_ne!(a, b);
	}

	#[rstest]
	fn test_find_and_subtree_len() {
		// Arrange
		let route: Route<()> = Route::new("/account")
			.named("account")
			.child(Route::new("profile").named("profile"))
			.child(
				Route::new("settings")
					.named("settings")
					.child(Route::new("security").named("security")),
			);

		// Act
		let found = route.find("security");

		// Assert
		assert_eq!(found.map(|r| r.path.as_str()), Some("security"));
		assert!(route.find("missing").is_none());
		assert_eq!(route.subtree_len(), 4);
	}

	#[rstest]
	fn test_meta_roundtrips_extra_fields() {
		// Arrange
		let value = json!({ "localized": true, "requiresAuth": true, "title": "Home" });

		// Act
		let meta: RouteMeta = serde_json::from_value(value).unwrap();

		// Assert
		assert!(meta.localized);
		assert_eq!(meta.lang, None);
		assert_eq!(meta.get("requiresAuth"), Some(&json!(true)));
		assert_eq!(meta.get("title"), Some(&json!("Home")));
		assert_eq!(meta.get("localized"), None);
	}
}
