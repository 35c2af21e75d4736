//! Error types for route expansion.

use thiserror::Error;

/// Structural errors that abort route expansion.
///
/// There is no partial-success mode: a route tree that fails any of these
/// checks is never handed to the router.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocalizeError {
	/// Two route nodes share a name.
	#[error("Duplicate route name '{name}': '{existing_path}' and '{path}'")]
	DuplicateRouteName {
		/// The shared name.
		name: String,
		/// Path of the route that claimed the name first.
		existing_path: String,
		/// Path of the conflicting route.
		path: String,
	},

	/// A node carries an identity the component table never recorded.
	#[error("No component recorded for route identity {id}")]
	MissingComponent {
		/// The orphaned identity.
		id: usize,
	},
}

/// Result type alias for route expansion.
pub type LocalizeResult<T> = Result<T, LocalizeError>;

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_error_display() {
		assert_eq!(
			LocalizeError::DuplicateRouteName {
				name: "home".to_string(),
				existing_path: "/".to_string(),
				path: "/home".to_string(),
			}
			.to_string(),
			"Duplicate route name 'home': '/' and '/home'"
		);
		assert_eq!(
			LocalizeError::MissingComponent { id: 7 }.to_string(),
			"No component recorded for route identity 7"
		);
	}
}
