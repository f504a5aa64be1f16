//! Theme Toggle Component
//!
//! Switches between light and dark through the shared theme context.

use dioxus::prelude::*;
use kinetic_core::Theme;

use crate::hooks::use_theme;

/// Icon shown for the theme the button switches *to*
pub fn toggle_icon(current: Theme) -> &'static str {
    match current {
        Theme::Light => "\u{263E}",
        Theme::Dark => "\u{2600}",
    }
}

/// Accessible label describing the action
pub fn toggle_label(current: Theme) -> String {
    format!("Switch to {} theme", current.toggled())
}

/// Button toggling the shared theme
///
/// Requires an ancestor to call `use_theme_provider`.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     ThemeToggle {}
/// }
/// ```
#[component]
pub fn ThemeToggle(#[props(default)] class: Option<String>) -> Element {
    let mut theme = use_theme();
    let current = theme.current();
    let extra = class.as_deref().unwrap_or("");
    let label = toggle_label(current);
    let icon = toggle_icon(current);

    rsx! {
        button {
            class: "theme-toggle {extra}",
            r#type: "button",
            "aria-label": "{label}",
            "data-theme": "{current}",
            disabled: !theme.is_ready(),
            onclick: move |_| {
                let next = theme.toggle();
                tracing::info!("Theme switched to {}", next);
            },
            "{icon}"
        }
    }
}
