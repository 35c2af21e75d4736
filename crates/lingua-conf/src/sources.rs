//! Configuration sources
//!
//! Loads a [`LocalizeConfig`] from TOML or JSON, either from a string or
//! from a file whose format is picked by extension. Every loader validates
//! the parsed configuration before returning it.

use crate::config::LocalizeConfig;
use crate::validation::ValidationError;
use std::fs;
use std::path::Path;

/// Error type for configuration loading
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	#[error("TOML error: {0}")]
	Toml(#[from] toml::de::Error),

	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),

	#[error("Unsupported config file extension: {0}")]
	UnsupportedExtension(String),

	#[error("Invalid configuration: {0}")]
	Validation(#[from] ValidationError),
}

/// Supported configuration file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
	Toml,
	Json,
}

impl ConfigFormat {
	/// Detect the format from a file extension
	///
	/// # Examples
	///
	/// ```
	/// use lingua_conf::ConfigFormat;
	/// use std::path::Path;
	///
	/// assert_eq!(ConfigFormat::from_path(Path::new("i18n.toml")).unwrap(), ConfigFormat::Toml);
	/// assert_eq!(ConfigFormat::from_path(Path::new("i18n.json")).unwrap(), ConfigFormat::Json);
	/// assert!(ConfigFormat::from_path(Path::new("i18n.yaml")).is_err());
	/// ```
	pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
		let extension = path
			.extension()
			.and_then(|ext| ext.to_str())
			.unwrap_or_default()
			.to_ascii_lowercase();

		match extension.as_str() {
			"toml" => Ok(Self::Toml),
			"json" => Ok(Self::Json),
			other => Err(ConfigError::UnsupportedExtension(other.to_string())),
		}
	}
}

impl LocalizeConfig {
	/// Parse and validate a TOML document.
	pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
		let config: Self = toml::from_str(content)?;
		config.validate()?;
		Ok(config)
	}

	/// Parse and validate a JSON document.
	pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
		let config: Self = serde_json::from_str(content)?;
		config.validate()?;
		Ok(config)
	}

	/// Load and validate a configuration file (`.toml` or `.json`).
	pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
		let path = path.as_ref();
		let format = ConfigFormat::from_path(path)?;
		let content = fs::read_to_string(path)?;

		tracing::debug!(path = %path.display(), ?format, "loading localization config");

		match format {
			ConfigFormat::Toml => Self::from_toml_str(&content),
			ConfigFormat::Json => Self::from_json_str(&content),
		}
	}
}
