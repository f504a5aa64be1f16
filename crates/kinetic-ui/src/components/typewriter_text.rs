//! Typewriter Text Component
//!
//! Types, holds and deletes each string in turn with a blinking cursor.

use dioxus::prelude::*;
use kinetic_core::TypewriterConfig;

use crate::hooks::use_typewriter;

/// Properties for the TypewriterText component
#[derive(Clone, PartialEq, Props)]
pub struct TypewriterTextProps {
    /// Strings and timing
    pub config: TypewriterConfig,
    /// Show the blinking cursor (default: true)
    #[props(default = true)]
    pub cursor: bool,
    #[props(default)]
    pub class: Option<String>,
}

/// Cycling typewriter text
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     TypewriterText {
///         config: TypewriterConfig::new(["fast", "safe", "fearless"]),
///     }
/// }
/// ```
#[component]
pub fn TypewriterText(props: TypewriterTextProps) -> Element {
    let text = use_typewriter(props.config);
    let extra = props.class.as_deref().unwrap_or("");

    rsx! {
        span {
            class: "typewriter {extra}",
            "aria-live": "polite",
            "{text}"
            if props.cursor {
                span { class: "typewriter-cursor", "aria-hidden": "true", "|" }
            }
        }
    }
}
