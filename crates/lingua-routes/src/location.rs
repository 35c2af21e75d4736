//! Navigation-time route descriptors

use crate::route::{Route, RouteMeta};

/// The part of a matched route a navigation hook gets to see
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteLocation {
	/// Concrete path, with parameters filled in.
	pub path: String,
	pub name: Option<String>,
	pub original_name: Option<String>,
	pub meta: RouteMeta,
}

impl RouteLocation {
	pub fn new(path: impl Into<String>) -> Self {
		Self {
			path: path.into(),
			..Self::default()
		}
	}

	pub fn named(mut self, name: impl Into<String>) -> Self {
		self.name = Some(name.into());
		self
	}

	pub fn with_original_name(mut self, name: impl Into<String>) -> Self {
		self.original_name = Some(name.into());
		self
	}

	pub fn with_meta(mut self, meta: RouteMeta) -> Self {
		self.meta = meta;
		self
	}
}

impl<C> From<&Route<C>> for RouteLocation {
	fn from(route: &Route<C>) -> Self {
		Self {
			path: route.path.clone(),
			name: route.name.clone(),
			original_name: route.original_name.clone(),
			meta: route.meta.clone(),
		}
	}
}

/// A navigation from one route to another
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Transition {
	pub to: RouteLocation,
	pub from: RouteLocation,
}

impl Transition {
	pub fn new(from: RouteLocation, to: RouteLocation) -> Self {
		Self { to, from }
	}

	/// Returns `true` when both ends share the same original route name,
	/// i.e. only the language changes.
	///
	/// Routes that are not localized copies have no original name, so a
	/// transition between two of them also compares equal.
	///
	/// ```
	/// use lingua_routes::{RouteLocation, Transition};
	///
	/// let from = RouteLocation::new("/en").named("en_home").with_original_name("home");
	/// let to = RouteLocation::new("/fr").named("fr_home").with_original_name("home");
	/// assert!(Transition::new(from, to).is_language_switch_only());
	///
	/// let plain = Transition::new(RouteLocation::new("/a"), RouteLocation::new("/b"));
	/// assert!(plain.is_language_switch_only());
	/// ```
	pub fn is_language_switch_only(&self) -> bool {
		self.from.original_name == self.to.original_name
	}
}
