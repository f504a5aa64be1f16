//! Kinetic UI Components
//!
//! Dioxus hooks and components for four interactions:
//!
//! - **TiltCard** / `use_tilt`: pointer-driven 3D tilt with glare
//! - **TypewriterText** / `use_typewriter`: cycling type/delete animation
//! - **AnimatedCounter** / `use_counter`: count-up once visible
//! - **ThemeToggle** / `use_theme`: shared, persisted light/dark theme
//!
//! All behaviour lives in `kinetic-core`; this crate only wires webview events,
//! media queries and timers to it. Reduced-motion preferences are honoured by
//! every animated hook.

pub mod components;
pub mod hooks;
pub mod platform;

pub use components::*;
pub use hooks::*;
pub use platform::DocumentThemeApplier;
