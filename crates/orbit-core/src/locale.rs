#![forbid(unsafe_code)]

//! Locale context provider.
//!
//! The [`LocaleContext`] owns the display locale. Locale changes are
//! versioned and broadcast to subscribers so embedding applications know
//! when to re-render.

use std::cell::RefCell;
use std::env;
use std::rc::{Rc, Weak};

/// A BCP-47-ish locale code such as `en`, `fr-CA`, or `pt-BR`.
pub type Locale = String;

/// Locale used when nothing better is known.
pub const DEFAULT_LOCALE: &str = "en";

type Callback = Rc<dyn Fn(&Locale)>;

#[derive(Default)]
struct Inner {
    locale: Locale,
    version: u64,
    next_id: u64,
    subscribers: Vec<(u64, Callback)>,
}

/// Shared locale handle with change notification.
///
/// Clones share the same locale and subscriber list.
#[derive(Clone)]
pub struct LocaleContext {
    inner: Rc<RefCell<Inner>>,
}

impl std::fmt::Debug for LocaleContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("LocaleContext")
            .field("locale", &inner.locale)
            .field("version", &inner.version)
            .field("subscribers", &inner.subscribers.len())
            .finish()
    }
}

impl LocaleContext {
    /// Create a new locale context with the provided locale.
    #[must_use]
    pub fn new(locale: impl Into<Locale>) -> Self {
        let locale = normalize_locale(locale.into());
        Self {
            inner: Rc::new(RefCell::new(Inner {
                locale,
                ..Inner::default()
            })),
        }
    }

    /// Create a locale context initialized from system locale detection.
    #[must_use]
    pub fn system() -> Self {
        Self::new(detect_system_locale())
    }

    /// Get the active locale.
    #[must_use]
    pub fn current_locale(&self) -> Locale {
        self.inner.borrow().locale.clone()
    }

    /// Set the locale.
    ///
    /// Setting the locale that is already active does not bump the version
    /// or notify subscribers.
    pub fn set_locale(&self, locale: impl Into<Locale>) {
        let locale = normalize_locale(locale.into());
        let callbacks: Vec<Callback> = {
            let mut inner = self.inner.borrow_mut();
            if inner.locale == locale {
                return;
            }
            inner.locale = locale.clone();
            inner.version += 1;
            inner.subscribers.iter().map(|(_, cb)| Rc::clone(cb)).collect()
        };
        crate::debug!(locale = %locale, "locale changed");
        for cb in callbacks {
            cb(&locale);
        }
    }

    /// Subscribe to locale changes.
    ///
    /// The callback stays registered until the returned [`Subscription`] is
    /// dropped.
    pub fn subscribe(&self, callback: impl Fn(&Locale) + 'static) -> Subscription {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.subscribers.push((id, Rc::new(callback)));
        Subscription {
            inner: Rc::downgrade(&self.inner),
            id,
        }
    }

    /// Current version counter, bumped on every change.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.inner.borrow().version
    }
}

/// Handle for a locale-change callback. Dropping it unsubscribes.
#[must_use = "dropping this handle unsubscribes the callback"]
pub struct Subscription {
    inner: Weak<RefCell<Inner>>,
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.inner.upgrade() {
            inner.borrow_mut().subscribers.retain(|(id, _)| *id != self.id);
        }
    }
}

/// Detect the system locale from environment variables.
///
/// Preference order: `LC_ALL`, then `LANG`. Falls back to `"en"` when unknown.
#[must_use]
pub fn detect_system_locale() -> Locale {
    let lc_all = env::var("LC_ALL").ok();
    let lang = env::var("LANG").ok();
    detect_system_locale_from(lc_all.as_deref(), lang.as_deref())
}

/// Primary language subtag of a locale (`"fr-CA"` -> `"fr"`).
#[must_use]
pub fn primary_language(locale: &str) -> &str {
    locale.split(['-', '_']).next().unwrap_or(locale)
}

fn normalize_locale(locale: Locale) -> Locale {
    normalize_locale_raw(&locale).unwrap_or_else(|| DEFAULT_LOCALE.to_string())
}

fn detect_system_locale_from(lc_all: Option<&str>, lang: Option<&str>) -> Locale {
    lc_all
        .and_then(normalize_locale_raw)
        .or_else(|| lang.and_then(normalize_locale_raw))
        .unwrap_or_else(|| DEFAULT_LOCALE.to_string())
}

/// Normalize a raw locale string (`en_US.UTF-8@euro` -> `en-US`).
///
/// Returns `None` for empty input.
#[must_use]
pub fn normalize_locale_raw(raw: &str) -> Option<Locale> {
    let raw = raw.trim();
    let raw = raw.split('@').next().unwrap_or(raw);
    let raw = raw.split('.').next().unwrap_or(raw).trim();
    if raw.is_empty() {
        return None;
    }
    if raw.eq_ignore_ascii_case("c") || raw.eq_ignore_ascii_case("posix") {
        return Some(DEFAULT_LOCALE.to_string());
    }
    Some(raw.replace('_', "-"))
}
