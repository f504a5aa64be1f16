//! Tilt Card Component
//!
//! A container that leans towards the pointer in 3D and follows it with a
//! radial glare highlight.

use dioxus::prelude::*;
use kinetic_core::TiltConfig;

use crate::hooks::use_tilt;

/// Properties for the TiltCard component
#[derive(Clone, PartialEq, Props)]
pub struct TiltCardProps {
    /// Tilt bounds, scale, transition and glare
    #[props(default)]
    pub config: TiltConfig,
    /// Card content
    pub children: Element,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Card with a pointer-driven 3D tilt
///
/// # Design Notes
///
/// - Glare follows the pointer through `--glare-x` / `--glare-y`
/// - Under reduced motion the card renders without any pointer listeners
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     TiltCard {
///         config: TiltConfig { max_tilt_degrees: 10.0, ..Default::default() },
///         h3 { "Hover me" }
///     }
/// }
/// ```
#[component]
pub fn TiltCard(props: TiltCardProps) -> Element {
    let mut tilt = use_tilt(props.config);
    let full_class = match props.class.as_deref() {
        Some(extra) if !extra.is_empty() => format!("tilt-card {}", extra),
        _ => "tilt-card".to_string(),
    };

    if !tilt.is_active() {
        return rsx! {
            div { class: "{full_class}", {props.children} }
        };
    }

    let style = tilt.style();
    rsx! {
        div {
            class: "{full_class}",
            style: "{style}",
            onmounted: move |evt| tilt.mounted(evt),
            onmouseenter: move |_| tilt.refresh_rect(),
            onmousemove: move |evt| tilt.pointer_move(evt),
            onmouseleave: move |_| tilt.pointer_leave(),
            {props.children}
            if tilt.glare_enabled() {
                div { class: "tilt-glare", "aria-hidden": "true" }
            }
        }
    }
}
