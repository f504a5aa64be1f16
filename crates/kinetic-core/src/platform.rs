//! Platform capabilities consumed by the interaction state machines.
//!
//! Everything that would otherwise reach into a browser or desktop shell is
//! injected through one of these traits:
//!
//! - [`PreferenceReader`]: system color scheme and reduced-motion signals
//! - [`KeyValueStore`]: synchronous string persistence (see [`crate::storage`])
//! - [`ThemeApplier`]: the observable side effect of a theme change
//!
//! The in-memory implementations here double as the fakes used by tests and as
//! the degraded fallbacks when the real platform is unavailable.

use std::collections::HashMap;

use parking_lot::Mutex;

use crate::error::KineticResult;
use crate::theme::Theme;

/// Read-only access to platform presentation preferences.
pub trait PreferenceReader: Send + Sync {
    /// Whether the platform prefers a dark color scheme.
    ///
    /// `None` when the platform offers no signal at all.
    fn prefers_dark(&self) -> Option<bool>;

    /// Whether the platform asks for non-essential motion to be suppressed.
    fn prefers_reduced_motion(&self) -> bool;
}

/// Synchronous string key-value persistence.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`.
    fn get(&self, key: &str) -> KineticResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> KineticResult<()>;
}

/// Receives the resolved theme so dependent styling can react.
pub trait ThemeApplier: Send + Sync {
    /// Apply `theme` (for example as a root-level marker attribute).
    fn apply(&self, theme: Theme);
}

/// A fixed snapshot of platform preferences.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StaticPreferences {
    /// System dark-mode signal, if any
    pub prefers_dark: Option<bool>,
    /// System reduced-motion signal
    pub reduced_motion: bool,
}

impl StaticPreferences {
    /// Preferences for a platform that exposes no signals.
    pub fn unavailable() -> Self {
        Self::default()
    }

    pub fn dark() -> Self {
        Self {
            prefers_dark: Some(true),
            reduced_motion: false,
        }
    }

    pub fn light() -> Self {
        Self {
            prefers_dark: Some(false),
            reduced_motion: false,
        }
    }

    /// Builder-style override of the reduced-motion signal.
    pub fn with_reduced_motion(mut self, reduced_motion: bool) -> Self {
        self.reduced_motion = reduced_motion;
        self
    }
}

impl PreferenceReader for StaticPreferences {
    fn prefers_dark(&self) -> Option<bool> {
        self.prefers_dark
    }

    fn prefers_reduced_motion(&self) -> bool {
        self.reduced_motion
    }
}

/// Process-local key-value store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> KineticResult<Option<String>> {
        Ok(self.entries.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> KineticResult<()> {
        self.entries.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Applier that discards theme changes (headless use).
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopApplier;

impl ThemeApplier for NoopApplier {
    fn apply(&self, _theme: Theme) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_roundtrip() {
        let store = MemoryStore::new();
        assert_eq!(store.get("theme").unwrap(), None);
        store.set("theme", "dark").unwrap();
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));
        store.set("theme", "light").unwrap();
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn static_preferences_builders() {
        let prefs = StaticPreferences::dark().with_reduced_motion(true);
        assert_eq!(prefs.prefers_dark(), Some(true));
        assert!(prefs.prefers_reduced_motion());
        assert_eq!(StaticPreferences::unavailable().prefers_dark(), None);
    }
}
