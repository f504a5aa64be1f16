//! Light/dark theme resolution and persistence.
//!
//! ## Lifecycle
//!
//! ```text
//! ThemeStore::new ──► pending (current() == Theme::FALLBACK)
//!        │
//!        ▼ initialize(prefs)
//!   persisted value? ──yes──► use it
//!        │ no
//!   system preference? ──yes──► dark / light
//!        │ no
//!   Theme::FALLBACK
//! ```
//!
//! Every mutation updates memory, persists synchronously, applies the side
//! effect and notifies subscribers while holding one lock.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use crate::error::KineticError;
use crate::platform::{KeyValueStore, PreferenceReader, ThemeApplier};

/// Storage key the theme is persisted under
pub const THEME_STORAGE_KEY: &str = "theme";

/// Color scheme
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Theme reported before initialization resolves
    pub const FALLBACK: Theme = Theme::Light;

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// The other theme.
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = KineticError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(KineticError::InvalidTheme(other.to_string())),
        }
    }
}

/// Where the initial theme came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeSource {
    /// Not yet initialized; reporting the fallback
    Pending,
    Persisted,
    System,
    Fallback,
    /// Explicitly chosen through `set`/`toggle`
    Explicit,
}

struct ThemeState {
    theme: Theme,
    source: ThemeSource,
}

struct Inner {
    state: Mutex<ThemeState>,
    store: Arc<dyn KeyValueStore>,
    applier: Arc<dyn ThemeApplier>,
    notify: watch::Sender<Theme>,
}

/// Process-wide theme store shared by every consumer.
///
/// Cloning is cheap and yields a handle to the same store.
#[derive(Clone)]
pub struct ThemeStore {
    inner: Arc<Inner>,
}

impl fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.inner.state.lock();
        f.debug_struct("ThemeStore")
            .field("theme", &state.theme)
            .field("source", &state.source)
            .finish()
    }
}

impl ThemeStore {
    /// Create a pending store. Call [`Self::initialize`] to resolve the theme.
    pub fn new(store: Arc<dyn KeyValueStore>, applier: Arc<dyn ThemeApplier>) -> Self {
        let (notify, _) = watch::channel(Theme::FALLBACK);
        Self {
            inner: Arc::new(Inner {
                state: Mutex::new(ThemeState {
                    theme: Theme::FALLBACK,
                    source: ThemeSource::Pending,
                }),
                store,
                applier,
                notify,
            }),
        }
    }

    /// Resolve the initial theme from storage, then the system preference.
    ///
    /// Does nothing if the store is already initialized or a theme was set
    /// explicitly in the meantime; returns the current theme either way.
    pub fn initialize(&self, prefs: &dyn PreferenceReader) -> Theme {
        let mut state = self.inner.state.lock();
        if state.source != ThemeSource::Pending {
            return state.theme;
        }

        let (theme, source) = match self.read_persisted() {
            Some(theme) => (theme, ThemeSource::Persisted),
            None => match prefs.prefers_dark() {
                Some(true) => (Theme::Dark, ThemeSource::System),
                Some(false) => (Theme::Light, ThemeSource::System),
                None => (Theme::FALLBACK, ThemeSource::Fallback),
            },
        };

        tracing::info!(%theme, ?source, "Theme initialized");
        state.theme = theme;
        state.source = source;
        self.inner.applier.apply(theme);
        self.inner.notify.send_replace(theme);
        theme
    }

    fn read_persisted(&self) -> Option<Theme> {
        match self.inner.store.get(THEME_STORAGE_KEY) {
            Ok(Some(raw)) => match raw.parse() {
                Ok(theme) => Some(theme),
                Err(e) => {
                    tracing::warn!("Ignoring persisted theme: {}", e);
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                tracing::warn!("Theme storage unavailable, using system preference: {}", e);
                None
            }
        }
    }

    /// Current theme ([`Theme::FALLBACK`] while pending).
    pub fn current(&self) -> Theme {
        self.inner.state.lock().theme
    }

    pub fn source(&self) -> ThemeSource {
        self.inner.state.lock().source
    }

    pub fn is_initialized(&self) -> bool {
        self.source() != ThemeSource::Pending
    }

    /// Receive every theme change. The receiver starts at the current theme.
    pub fn subscribe(&self) -> watch::Receiver<Theme> {
        self.inner.notify.subscribe()
    }

    /// Set, persist and apply `theme`.
    ///
    /// Persistence failures are logged; the in-memory theme still changes.
    pub fn set(&self, theme: Theme) -> Theme {
        let mut state = self.inner.state.lock();
        self.commit(&mut state, theme);
        tracing::debug!(%theme, "Theme set");
        theme
    }

    /// Switch between light and dark; returns the new theme.
    pub fn toggle(&self) -> Theme {
        // Read and write under one lock so concurrent toggles don't cancel out
        let mut state = self.inner.state.lock();
        let theme = state.theme.toggled();
        self.commit(&mut state, theme);
        tracing::debug!(%theme, "Theme toggled");
        theme
    }

    fn commit(&self, state: &mut ThemeState, theme: Theme) {
        state.theme = theme;
        state.source = ThemeSource::Explicit;

        if let Err(e) = self.inner.store.set(THEME_STORAGE_KEY, theme.as_str()) {
            tracing::warn!("Failed to persist theme '{}': {}", theme, e);
        }
        self.inner.applier.apply(theme);
        self.inner.notify.send_replace(theme);
    }
}
