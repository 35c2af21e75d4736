//! Subtree localization
//!
//! Produces one language's copy of a child-route sequence. The template is
//! only borrowed: every call builds fresh nodes, so the same template can
//! be localized once per language without one language's rewrite leaking
//! into another's.

use crate::error::LocalizeResult;
use crate::registry::RouteRegistry;
use crate::route::RouteNode;

/// Localized route name for `name` in `lang`.
///
/// ```
/// assert_eq!(lingua_routes::localized_name("de", "home"), "de_home");
/// ```
pub fn localized_name(lang: &str, name: &str) -> String {
	format!("{lang}_{name}")
}

/// Rewrites route subtrees for one language at a time, recording every
/// renamed route in the registry.
pub(crate) struct SubtreeLocalizer<'a> {
	registry: &'a mut RouteRegistry,
}

impl<'a> SubtreeLocalizer<'a> {
	pub(crate) fn new(registry: &'a mut RouteRegistry) -> Self {
		Self { registry }
	}

	/// Localize a single node without touching its children.
	///
	/// A named node is recorded under its original name, keeps that name in
	/// `original_name` and is renamed `<lang>_<name>`. Every node is tagged
	/// as localized in `lang`.
	pub(crate) fn localize_node(&mut self, template: &RouteNode, lang: &str) -> LocalizeResult<RouteNode> {
		let mut node = RouteNode {
			path: template.path.clone(),
			name: template.name.clone(),
			meta: template.meta.clone(),
			children: Vec::new(),
			original_name: template.original_name.clone(),
			localize_id: template.localize_id,
		};

		if let Some(name) = &template.name {
			self.registry.record_original(name.as_str(), template.path.as_str())?;

			let localized = localized_name(lang, name);
			self.registry
				.record_localized(localized.as_str(), lang, name.as_str());

			node.original_name = Some(name.clone());
			node.name = Some(localized);
		}

		node.meta.localized = true;
		node.meta.lang = Some(lang.to_string());

		Ok(node)
	}

	/// Localize a child sequence and everything below it, preserving
	/// sibling order.
	pub(crate) fn localize_children(
		&mut self,
		template: &[RouteNode],
		lang: &str,
	) -> LocalizeResult<Vec<RouteNode>> {
		template
			.iter()
			.map(|child| {
				let mut node = self.localize_node(child, lang)?;
				node.children = self.localize_children(&child.children, lang)?;
				tracing::trace!(
					name = node.name.as_deref(),
					path = %node.path,
					lang,
					"localized child route"
				);
				Ok(node)
			})
			.collect()
	}
}
