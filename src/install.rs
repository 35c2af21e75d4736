//! Installation into a host router and the runtime helpers

use crate::navigation::{NavigationHost, language_guard};
use lingua_conf::{LocalizeConfig, ValidationError};
use lingua_i18n::{LanguageState, LanguageStore, MemoryStorage, SET_APP_LANGUAGE, StoreError, Translator};
use lingua_routes::{
	LocalizeError, Route, RouteExpander, RouteLocation, RouteRegistry, Transition, localize_route_name,
	localize_route_path,
};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Errors that abort installation. No routes reach the host when one is
/// returned.
#[derive(Debug, Error)]
pub enum InstallError {
	/// The configuration is not usable.
	#[error("Invalid localization config: {0}")]
	Config(#[from] ValidationError),

	/// The route tree could not be expanded.
	#[error("Route expansion failed: {0}")]
	Localize(#[from] LocalizeError),

	/// The language store rejected the default language.
	#[error("Language store error: {0}")]
	Store(#[from] StoreError),
}

/// Handle to an installed localization setup.
///
/// Cheap to clone; all clones share the same registry, language store and
/// translator.
#[derive(Clone)]
pub struct Localize {
	config: Arc<LocalizeConfig>,
	registry: Arc<RouteRegistry>,
	store: Arc<dyn LanguageStore>,
	translator: Arc<Translator>,
}

impl Localize {
	/// Start configuring an installation
	pub fn builder<C>(config: LocalizeConfig) -> LocalizeBuilder<C> {
		LocalizeBuilder::new(config)
	}

	pub fn config(&self) -> &LocalizeConfig {
		&self.config
	}

	/// Names recorded while the routes were expanded
	pub fn registry(&self) -> &RouteRegistry {
		&self.registry
	}

	pub fn translator(&self) -> &Translator {
		&self.translator
	}

	pub fn store(&self) -> &Arc<dyn LanguageStore> {
		&self.store
	}

	pub fn current_language(&self) -> String {
		self.store.current_language()
	}

	/// Switch the application language outside of navigation
	pub fn set_language(&self, lang: &str, persist: bool) -> Result<(), StoreError> {
		self.store.commit(SET_APP_LANGUAGE, lang, persist)
	}

	/// Pick the start language from the first route the application shows.
	///
	/// A localized route provides its own language; otherwise the language
	/// last persisted is used, if any. The choice is persisted when
	/// `resave_on_localized_routes` is set.
	pub fn init_language(&self, route: &RouteLocation) -> Result<(), StoreError> {
		let initial = if route.meta.localized {
			route.meta.lang.clone()
		} else {
			self.store.stored_language()?
		};

		match initial.filter(|lang| !lang.is_empty()) {
			Some(lang) => {
				tracing::debug!(language = %lang, path = %route.path, "initial language selected");
				self.store
					.commit(SET_APP_LANGUAGE, &lang, self.config.resave_on_localized_routes)
			}
			None => Ok(()),
		}
	}

	/// Localized name of the route named `name`.
	///
	/// Uses the current language when `lang` is `None`. Names that are not
	/// known original route names come back unchanged.
	pub fn localize_route_name(&self, name: &str, lang: Option<&str>) -> String {
		match lang {
			Some(lang) => localize_route_name(&self.registry, name, lang),
			None => localize_route_name(&self.registry, name, &self.current_language()),
		}
	}

	/// Path of `route` in `new_lang`, or `None` if `new_lang` is not
	/// enabled.
	pub fn localize_route_path(&self, route: &RouteLocation, new_lang: &str) -> Option<String> {
		localize_route_path(&self.registry, &self.config, route, new_lang)
	}

	/// Returns `true` when `transition` only changes the language.
	pub fn is_language_switch_only(&self, transition: &Transition) -> bool {
		transition.is_language_switch_only()
	}

	/// Translate `key`, in the current language when `lang` is `None`.
	pub fn translate(&self, key: &str, params: &[(&str, &str)], lang: Option<&str>) -> String {
		match lang {
			Some(lang) => self.translator.translate(key, params, lang),
			None => self
				.translator
				.translate(key, params, &self.current_language()),
		}
	}
}

impl fmt::Debug for Localize {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Localize")
			.field("config", &self.config)
			.field("registry", &self.registry)
			.field("current_language", &self.current_language())
			.finish_non_exhaustive()
	}
}

/// Builder for [`Localize`].
///
/// # Examples
///
/// ```
/// use lingua::navigation::{NavigationHook, NavigationHost};
/// use lingua::prelude::*;
///
/// #[derive(Default)]
/// struct Router {
/// 	routes: Vec<Route<&'static str>>,
/// 	hooks: Vec<NavigationHook>,
/// }
///
/// impl NavigationHost<&'static str> for Router {
/// 	fn add_routes(&mut self, routes: Vec<Route<&'static str>>) {
/// 		self.routes.extend(routes);
/// 	}
///
/// 	fn before_each(&mut self, hook: NavigationHook) {
/// 		self.hooks.push(hook);
/// 	}
/// }
///
/// let config = LocalizeConfig::new("en")
/// 	.with_language("en", LanguageConfig::enabled())
/// 	.with_language("fr", LanguageConfig::enabled());
///
/// let mut router = Router::default();
/// let localize = Localize::builder(config)
/// 	.routes(vec![
/// 		Route::new("/").localized().child(Route::new("about").named("about").component("About")),
/// 	])
/// 	.install(&mut router)
/// 	.unwrap();
///
/// assert_eq!(router.routes.len(), 2);
/// assert_eq!(router.hooks.len(), 1);
/// assert_eq!(localize.localize_route_name("about", Some("fr")), "fr_about");
/// ```
pub struct LocalizeBuilder<C> {
	config: LocalizeConfig,
	routes: Vec<Route<C>>,
	store: Option<Arc<dyn LanguageStore>>,
	translator: Option<Translator>,
}

impl<C> LocalizeBuilder<C> {
	pub fn new(config: LocalizeConfig) -> Self {
		Self {
			config,
			routes: Vec::new(),
			store: None,
			translator: None,
		}
	}

	/// Top-level routes to expand, in order
	pub fn routes(mut self, routes: Vec<Route<C>>) -> Self {
		self.routes = routes;
		self
	}

	/// Language store to use instead of an in-memory [`LanguageState`]
	pub fn store(mut self, store: Arc<dyn LanguageStore>) -> Self {
		self.store = Some(store);
		self
	}

	pub fn translator(mut self, translator: Translator) -> Self {
		self.translator = Some(translator);
		self
	}

	/// Validate, expand the routes and register them with `host`.
	///
	/// The store is reset to the default language, without persisting it;
	/// [`Localize::init_language`] picks the actual start language.
	pub fn install<H>(self, host: &mut H) -> Result<Localize, InstallError>
	where
		H: NavigationHost<C> + ?Sized,
	{
		let Self {
			config,
			routes,
			store,
			translator,
		} = self;

		config.validate()?;
		let input_len = routes.len();
		let expansion = RouteExpander::new(&config).expand(routes)?;

		let config = Arc::new(config);
		let store: Arc<dyn LanguageStore> = match store {
			Some(store) => store,
			None => Arc::new(LanguageState::new(&config, Arc::new(MemoryStorage::new()))),
		};
		store.commit(SET_APP_LANGUAGE, &config.default_language, false)?;

		let mut translator = translator.unwrap_or_default();
		if translator.fallback_language().is_none()
			&& let Some(fallback) = config.fallback_language.as_deref()
		{
			translator = translator.with_fallback_language(fallback);
		}

		let output_len = expansion.routes.len();
		host.add_routes(expansion.routes);
		host.before_each(language_guard(Arc::clone(&config), Arc::clone(&store)));

		tracing::info!(
			routes = input_len,
			expanded = output_len,
			localized_names = expansion.registry.localized_len(),
			language = %store.current_language(),
			"localized routes installed"
		);

		Ok(Localize {
			config,
			registry: Arc::new(expansion.registry),
			store,
			translator: Arc::new(translator),
		})
	}
}
