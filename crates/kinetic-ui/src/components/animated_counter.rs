//! Animated Counter Component
//!
//! Counts up (or down) to a target the first time it scrolls into view.

use dioxus::prelude::*;
use kinetic_core::CounterConfig;

use crate::hooks::use_counter;

/// Format `value` with a thousands separator (none when `separator` is empty).
pub fn format_count(value: i64, separator: &str) -> String {
    let digits = value.unsigned_abs().to_string();
    if separator.is_empty() {
        return if value < 0 { format!("-{}", digits) } else { digits };
    }

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 * separator.len() + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(ch);
    }
    out
}

/// Properties for the AnimatedCounter component
#[derive(Clone, PartialEq, Props)]
pub struct AnimatedCounterProps {
    /// Start, end, duration and easing
    pub config: CounterConfig,
    /// Text before the number (e.g. "$")
    #[props(default)]
    pub prefix: String,
    /// Text after the number (e.g. "+")
    #[props(default)]
    pub suffix: String,
    /// Thousands separator (default: ",")
    #[props(default = ",".to_string())]
    pub separator: String,
    #[props(default)]
    pub class: Option<String>,
}

/// Number that animates once when it becomes visible
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     AnimatedCounter { config: CounterConfig::to(12_500.0), suffix: "+" }
/// }
/// ```
#[component]
pub fn AnimatedCounter(props: AnimatedCounterProps) -> Element {
    let mut counter = use_counter(props.config);
    let extra = props.class.as_deref().unwrap_or("");
    let display = format_count(counter.value(), &props.separator);

    rsx! {
        span {
            class: "animated-counter {extra}",
            onmounted: move |_| counter.on_mounted(),
            onvisible: move |evt| counter.on_visible(evt),
            "{props.prefix}{display}{props.suffix}"
        }
    }
}
