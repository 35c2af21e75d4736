//! Component side table
//!
//! Route expansion duplicates subtrees once per language, but components
//! must never be duplicated. Before expansion every route gets an identity
//! and its component moves into a slot indexed by that identity; the tree
//! that gets duplicated is made of [`RouteNode`]s, which have no component
//! field. Once the final tree exists, each node picks its component back up
//! from the slot matching its identity.
//!
//! Identities are assigned in depth-first pre-order over the whole input,
//! localizable or not, and are never reassigned, so every copy of a node
//! keeps the identity of the node it was copied from.

use crate::error::{LocalizeError, LocalizeResult};
use crate::route::{LocalizeId, Route, RouteNode};
use std::sync::Arc;

/// Components indexed by route identity
pub(crate) struct ComponentTable<C> {
	slots: Vec<Option<Arc<C>>>,
}

impl<C> ComponentTable<C> {
	/// Assign identities, collect components and strip them from the tree
	/// in a single walk.
	pub(crate) fn detach(routes: Vec<Route<C>>) -> (Vec<RouteNode>, Self) {
		let mut table = Self { slots: Vec::new() };
		let nodes = routes
			.into_iter()
			.map(|route| table.detach_route(route))
			.collect();
		(nodes, table)
	}

	fn detach_route(&mut self, route: Route<C>) -> RouteNode {
		let localize_id = LocalizeId::new(self.slots.len());
		self.slots.push(route.component);

		let children = route
			.children
			.into_iter()
			.map(|child| self.detach_route(child))
			.collect();

		RouteNode {
			path: route.path,
			name: route.name,
			meta: route.meta,
			children,
			original_name: route.original_name,
			localize_id,
		}
	}

	/// Rebuild routes from detached nodes, sharing each recorded component
	/// with every node that carries its identity.
	pub(crate) fn reattach(&self, nodes: Vec<RouteNode>) -> LocalizeResult<Vec<Route<C>>> {
		nodes
			.into_iter()
			.map(|node| self.reattach_node(node))
			.collect()
	}

	fn reattach_node(&self, node: RouteNode) -> LocalizeResult<Route<C>> {
		let component = self
			.slots
			.get(node.localize_id.index())
			.ok_or(LocalizeError::MissingComponent {
				id: node.localize_id.index(),
			})?
			.clone();

		Ok(Route {
			path: node.path,
			name: node.name,
			component,
			meta: node.meta,
			children: self.reattach(node.children)?,
			original_name: node.original_name,
		})
	}

	/// Number of identities handed out
	pub(crate) fn len(&self) -> usize {
		self.slots.len()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn ids(nodes: &[RouteNode], out: &mut Vec<usize>) {
		for node in nodes {
			out.push(node.localize_id.index());
			ids(&node.children, out);
		}
	}

	fn tree() -> Vec<Route<&'static str>> {
		vec![
			Route::new("/").named("home").component("Home"),
			Route::new("/account")
				.localized()
				.component("Account")
				.child(Route::new("profile").named("profile").component("Profile"))
				.child(
					Route::new("settings")
						.named("settings")
						.child(Route::new("security").component("Security")),
				),
		]
	}

	#[rstest]
	fn test_identities_are_preorder_and_cover_every_node() {
		// Arrange
		let routes = tree();

		// Act
		let (nodes, table) = ComponentTable::detach(routes);

		// Assert
		let mut seen = Vec::new();
		ids(&nodes, &mut seen);
		assert_eq!(seen, vec![0, 1, 2, 3, 4]);
		assert_eq!(table.len(), 5);
	}

	#[rstest]
	fn test_reattach_shares_components_between_copies() {
		// Arrange
		let routes = tree();
		let account = Arc::clone(routes[1].component.as_ref().unwrap());
		let (nodes, table) = ComponentTable::detach(routes);
		let duplicated = vec![nodes[1].clone(), nodes[1].clone()];

		// Act
		let rebuilt = table.reattach(duplicated).unwrap();

		// Assert
		for route in &rebuilt {
			assert!(Arc::ptr_eq(route.component.as_ref().unwrap(), &account));
		}
		assert!(rebuilt[0].children[1].component.is_none());
		assert_eq!(
			rebuilt[0].children[1].children[0].component.as_deref(),
			Some(&"Security")
		);
	}

	#[rstest]
	fn test_reattach_rejects_unknown_identity() {
		// Arrange
		let (_, table) = ComponentTable::<&str>::detach(Vec::new());
		let orphan = RouteNode {
			path: "/".to_string(),
			name: None,
			meta: Default::default(),
			children: Vec::new(),
			original_name: None,
			localize_id: LocalizeId::new(3),
		};

		// Act
		let result = table.reattach(vec![orphan]);

		// Assert
		assert_eq!(result, Err(LocalizeError::MissingComponent { id: 3 }));
	}
}
