//! Router integration
//!
//! The host router receives the expanded routes and calls the registered
//! hook before every navigation. The hook installed by [`Localize`] keeps
//! the application language in step with the language of the route being
//! entered, and restores the persisted language when a localized section
//! is left.
//!
//! [`Localize`]: crate::Localize

use lingua_conf::LocalizeConfig;
use lingua_i18n::{LanguageStore, SET_APP_LANGUAGE};
use lingua_routes::{Route, Transition};
use std::fmt;
use std::sync::Arc;

/// Hook invoked before every navigation.
pub type NavigationHook = Arc<dyn Fn(&Transition, Next<'_>) + Send + Sync>;

/// Continuation handed to a [`NavigationHook`].
///
/// Consumed by [`proceed`](Self::proceed), so a hook can resume navigation
/// at most once.
pub struct Next<'a> {
	resume: Box<dyn FnOnce() + 'a>,
}

impl<'a> Next<'a> {
	pub fn new(resume: impl FnOnce() + 'a) -> Self {
		Self {
			resume: Box::new(resume),
		}
	}

	/// Let the navigation continue
	pub fn proceed(self) {
		(self.resume)()
	}
}

impl fmt::Debug for Next<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Next").finish_non_exhaustive()
	}
}

/// A router that can receive routes and navigation hooks.
pub trait NavigationHost<C> {
	/// Register routes, appended after any existing ones
	fn add_routes(&mut self, routes: Vec<Route<C>>);

	/// Register a hook to run before every navigation
	fn before_each(&mut self, hook: NavigationHook);
}

/// Wrap a closure as a [`NavigationHook`].
///
/// ```
/// use lingua::navigation::{Next, navigation_hook};
/// use lingua::routes::{RouteLocation, Transition};
/// use std::cell::Cell;
///
/// let hook = navigation_hook(|_transition, next| next.proceed());
///
/// let resumed = Cell::new(false);
/// hook(&Transition::default(), Next::new(|| resumed.set(true)));
/// assert!(resumed.get());
/// ```
pub fn navigation_hook<F>(hook: F) -> NavigationHook
where
	F: Fn(&Transition, Next<'_>) + Send + Sync + 'static,
{
	Arc::new(hook)
}

/// Hook that keeps the application language in step with navigation.
///
/// - Entering a localized route in another language switches to that
///   language. It is persisted only when `resave_on_localized_routes` is
///   set.
/// - Leaving a localized route for a plain one, when languages taken from
///   routes are not persisted, restores the language last persisted.
///
/// A failed switch is logged and navigation proceeds regardless.
pub(crate) fn language_guard(config: Arc<LocalizeConfig>, store: Arc<dyn LanguageStore>) -> NavigationHook {
	navigation_hook(move |transition, next| {
		let (from, to) = (&transition.from, &transition.to);
		if to.meta.localized {
			if let Some(lang) = to.meta.lang.as_deref() {
				let current = store.current_language();
				if lang != current {
					tracing::debug!(from = %current, to = lang, path = %to.path, "switching application language");
					switch_language(store.as_ref(), lang, config.resave_on_localized_routes);
				}
			}
		} else if from.meta.localized && !config.resave_on_localized_routes {
			match store.stored_language() {
				Ok(Some(stored)) if from.meta.lang.as_deref() != Some(stored.as_str()) => {
					tracing::debug!(language = %stored, path = %to.path, "restoring stored language");
					switch_language(store.as_ref(), &stored, false);
				}
				Ok(_) => {}
				Err(error) => tracing::warn!(%error, "failed to read stored language"),
			}
		}
		next.proceed();
	})
}

fn switch_language(store: &dyn LanguageStore, lang: &str, persist: bool) {
	if let Err(error) = store.commit(SET_APP_LANGUAGE, lang, persist) {
		tracing::warn!(%error, lang, "failed to switch application language");
	}
}
