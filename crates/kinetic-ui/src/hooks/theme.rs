//! Shared theme context.
//!
//! ## Usage
//!
//! ```ignore
//! // In the root component
//! use_theme_provider(|| ThemeStore::new(Arc::new(store), Arc::new(DocumentThemeApplier)));
//!
//! // In any child component
//! let mut theme = use_theme();
//! rsx! { button { onclick: move |_| { theme.toggle(); }, "{theme.current()}" } }
//! ```

use dioxus::prelude::*;
use kinetic_core::{Theme, ThemeStore};

use crate::platform::read_preferences;

/// Context value shared by every theme consumer.
#[derive(Clone, Copy, PartialEq)]
pub struct UseTheme {
    store: Signal<ThemeStore>,
    theme: Signal<Theme>,
    ready: Signal<bool>,
}

impl UseTheme {
    /// Current theme; [`Theme::FALLBACK`] until initialization resolves.
    pub fn current(&self) -> Theme {
        (self.theme)()
    }

    /// Whether the persisted/system theme has been resolved.
    pub fn is_ready(&self) -> bool {
        (self.ready)()
    }

    pub fn set(&mut self, theme: Theme) {
        let applied = self.store.peek().set(theme);
        self.theme.set(applied);
    }

    pub fn toggle(&mut self) -> Theme {
        let applied = self.store.peek().toggle();
        self.theme.set(applied);
        applied
    }
}

/// Create the process-wide theme store and provide it to descendants.
///
/// The store is created once. Its theme is resolved asynchronously (storage
/// first, then the system color scheme), and every change made through any
/// handle is mirrored into the reactive signal.
pub fn use_theme_provider(init: impl FnOnce() -> ThemeStore) -> UseTheme {
    let store = use_signal(init);
    let mut theme = use_signal(|| store.peek().current());
    let mut ready = use_signal(|| store.peek().is_initialized());

    use_hook(move || {
        let handle = ThemeStore::clone(&store.peek());
        let mut changes = handle.subscribe();

        spawn(async move {
            while changes.changed().await.is_ok() {
                let next = *changes.borrow_and_update();
                theme.set(next);
            }
        });

        spawn(async move {
            let prefs = read_preferences().await;
            let resolved = handle.initialize(&prefs);
            theme.set(resolved);
            ready.set(true);
        });
    });

    use_context_provider(|| UseTheme {
        store,
        theme,
        ready,
    })
}

/// Access the theme provided by [`use_theme_provider`].
pub fn use_theme() -> UseTheme {
    use_context::<UseTheme>()
}
