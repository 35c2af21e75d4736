//! Language-prefixed path construction
//!
//! ```
//! use lingua_routes::path::{prefixed_path, strip_prefix};
//!
//! assert_eq!(prefixed_path("fr", "/about"), "/fr/about");
//! assert_eq!(prefixed_path("", "about"), "/about");
//! assert_eq!(prefixed_path("fr", "/"), "/fr");
//! assert_eq!(prefixed_path("", "/"), "/");
//!
//! assert_eq!(strip_prefix("/fr/about", "fr"), "/about");
//! assert_eq!(strip_prefix("/fr", "fr"), "/");
//! assert_eq!(strip_prefix("/french", "fr"), "/french");
//! ```

/// Path segment appended after the language prefix.
///
/// The root path contributes nothing, absolute paths are used as-is and
/// relative paths get a leading slash.
pub fn path_suffix(path: &str) -> String {
	if path == "/" {
		String::new()
	} else if path.starts_with('/') {
		path.to_string()
	} else {
		format!("/{path}")
	}
}

/// Collapse runs of `/` into a single `/`.
pub fn normalize_slashes(path: &str) -> String {
	let mut normalized = String::with_capacity(path.len());
	let mut previous_slash = false;

	for ch in path.chars() {
		if ch == '/' {
			if !previous_slash {
				normalized.push(ch);
			}
			previous_slash = true;
		} else {
			normalized.push(ch);
			previous_slash = false;
		}
	}

	normalized
}

/// Build `/<prefix><suffix>` for a route path.
///
/// An empty prefix yields the unprefixed path.
pub fn prefixed_path(prefix: &str, path: &str) -> String {
	normalize_slashes(&format!("/{}{}", prefix, path_suffix(path)))
}

/// Remove a leading `/<prefix>` segment from a concrete path.
///
/// Only whole segments are stripped; a path that does not start with the
/// prefix segment is returned unchanged.
pub fn strip_prefix<'a>(path: &'a str, prefix: &str) -> &'a str {
	if prefix.is_empty() {
		return path;
	}

	match path
		.strip_prefix('/')
		.and_then(|rest| rest.strip_prefix(prefix))
	{
		Some("") => "/",
		Some(rest) if rest.starts_with('/') => rest,
		_ => path,
	}
}
