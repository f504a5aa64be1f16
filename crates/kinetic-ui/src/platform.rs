//! Webview implementations of the core platform capabilities.
//!
//! Media queries and the root theme marker live in the webview, so they are
//! reached through `document::eval`. Every read degrades to a documented
//! default when the script fails or the API is missing.

use dioxus::prelude::*;
use kinetic_core::{StaticPreferences, Theme, ThemeApplier};

pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Script evaluating a media query, or `null` without `matchMedia`.
pub fn media_query_script(query: &str) -> String {
    format!(
        "return (window.matchMedia ? window.matchMedia('{}').matches : null);",
        query
    )
}

/// Script marking the document root with the theme.
pub fn apply_theme_script(theme: Theme) -> String {
    format!(
        "document.documentElement.dataset.theme = '{}'; \
         document.documentElement.classList.toggle('dark', {});",
        theme,
        theme.is_dark()
    )
}

const VISIBILITY_PROBE: &str = "return typeof IntersectionObserver !== 'undefined';";

async fn media_query(query: &str) -> Option<bool> {
    match document::eval(&media_query_script(query))
        .join::<Option<bool>>()
        .await
    {
        Ok(matches) => matches,
        Err(e) => {
            tracing::warn!("Media query {} unavailable: {:?}", query, e);
            None
        }
    }
}

/// Snapshot the color-scheme and reduced-motion preferences.
///
/// Missing signals read as "no preference" and "motion allowed".
pub async fn read_preferences() -> StaticPreferences {
    let prefers_dark = media_query(DARK_SCHEME_QUERY).await;
    let reduced_motion = media_query(REDUCED_MOTION_QUERY).await.unwrap_or(false);
    tracing::debug!(?prefers_dark, reduced_motion, "Read platform preferences");
    StaticPreferences {
        prefers_dark,
        reduced_motion,
    }
}

/// Whether the webview can report element visibility.
pub async fn visibility_supported() -> bool {
    match document::eval(VISIBILITY_PROBE).join::<bool>().await {
        Ok(supported) => supported,
        Err(e) => {
            tracing::warn!("Visibility probe failed: {:?}", e);
            false
        }
    }
}

/// Applies the theme as `data-theme` and a `dark` class on `<html>`.
#[derive(Debug, Default, Clone, Copy)]
pub struct DocumentThemeApplier;

impl ThemeApplier for DocumentThemeApplier {
    fn apply(&self, theme: Theme) {
        let _ = document::eval(&apply_theme_script(theme));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_query_script_embeds_query() {
        let script = media_query_script(REDUCED_MOTION_QUERY);
        assert!(script.contains("matchMedia('(prefers-reduced-motion: reduce)')"));
        assert!(script.starts_with("return"));
    }

    #[test]
    fn apply_theme_script_marks_root() {
        let dark = apply_theme_script(Theme::Dark);
        assert!(dark.contains("dataset.theme = 'dark'"));
        assert!(dark.contains("toggle('dark', true)"));

        let light = apply_theme_script(Theme::Light);
        assert!(light.contains("dataset.theme = 'light'"));
        assert!(light.contains("toggle('dark', false)"));
    }
}
