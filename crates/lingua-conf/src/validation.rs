//! Configuration validation
//!
//! Checks that a [`LocalizeConfig`] can drive route expansion before any
//! route is rewritten. All problems are collected, so a misconfigured
//! installation reports everything at once.

use crate::config::LocalizeConfig;

/// Validation error
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
	#[error("No languages configured")]
	NoLanguages,

	#[error("No enabled languages configured")]
	NoEnabledLanguages,

	#[error("Invalid language code '{code}': {message}")]
	InvalidLanguageCode { code: String, message: String },

	#[error("Default language '{0}' is not configured")]
	UnknownDefaultLanguage(String),

	#[error("Default language '{0}' is disabled")]
	DefaultLanguageDisabled(String),

	#[error("Fallback language '{0}' is not configured")]
	UnknownFallbackLanguage(String),

	#[error("Multiple validation errors: {0:?}")]
	Multiple(Vec<ValidationError>),
}

/// Characters that would corrupt `<lang>_<name>` route names or `/<lang>`
/// path prefixes.
fn language_code_problem(code: &str) -> Option<&'static str> {
	if code.is_empty() {
		Some("must not be empty")
	} else if code.contains('_') {
		Some("must not contain '_'")
	} else if code.contains('/') {
		Some("must not contain '/'")
	} else if code.chars().any(char::is_whitespace) {
		Some("must not contain whitespace")
	} else {
		None
	}
}

pub(crate) fn validate(config: &LocalizeConfig) -> Result<(), ValidationError> {
	if config.languages.is_empty() {
		return Err(ValidationError::NoLanguages);
	}

	let mut errors = Vec::new();

	for code in config.languages.keys() {
		if let Some(message) = language_code_problem(code) {
			errors.push(ValidationError::InvalidLanguageCode {
				code: code.clone(),
				message: message.to_string(),
			});
		}
	}

	match config.languages.get(&config.default_language) {
		None => errors.push(ValidationError::UnknownDefaultLanguage(
			config.default_language.clone(),
		)),
		Some(language) if !language.enabled => errors.push(
			ValidationError::DefaultLanguageDisabled(config.default_language.clone()),
		),
		Some(_) => {}
	}

	if let Some(fallback) = &config.fallback_language
		&& !config.languages.contains_key(fallback)
	{
		errors.push(ValidationError::UnknownFallbackLanguage(fallback.clone()));
	}

	if config.enabled_languages().next().is_none() {
		errors.push(ValidationError::NoEnabledLanguages);
	}

	match errors.len() {
		0 => Ok(()),
		1 => Err(errors.remove(0)),
		_ => Err(ValidationError::Multiple(errors)),
	}
}
