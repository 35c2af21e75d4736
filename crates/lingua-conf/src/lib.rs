//! Language configuration for localized route trees.
//!
//! This crate holds the typed configuration that drives route expansion:
//! which languages exist, which of them are enabled, which one is the
//! default, and whether the default language keeps a path prefix.
//!
//! ## Example
//!
//! ```
//! use lingua_conf::LocalizeConfig;
//!
//! let config = LocalizeConfig::from_toml_str(
//! 	r#"
//! default_language = "en"
//! default_language_route = false
//!
//! [languages.en]
//! name = "English"
//!
//! [languages.fr]
//! enabled = true
//!
//! [languages.de]
//! enabled = false
//! "#,
//! )
//! .unwrap();
//!
//! let enabled: Vec<&str> = config.enabled_languages().collect();
//! assert_eq!(enabled, vec!["en", "fr"]);
//! assert_eq!(config.path_prefix("en"), "");
//! assert_eq!(config.path_prefix("fr"), "fr");
//! ```

mod config;
pub mod sources;
pub mod validation;

pub use config::{LanguageConfig, LocalizeConfig};
pub use sources::{ConfigError, ConfigFormat};
pub use validation::ValidationError;

/// Result type alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
