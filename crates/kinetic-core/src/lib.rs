//! Kinetic Core Library
//!
//! Platform-independent state machines behind four UI interactions.
//!
//! ## Overview
//!
//! | Interaction | Type | Drives |
//! |---|---|---|
//! | 3D tilt + glare | [`Tilt`] | pointer move / leave events |
//! | Cycling typewriter | [`Typewriter`] | one [`Typewriter::tick`] per timer |
//! | Count-up number | [`Counter`] | elapsed time after first visibility |
//! | Light/dark theme | [`ThemeStore`] | explicit `set` / `toggle` |
//!
//! Platform reads (color scheme, reduced motion, storage) are injected through
//! the traits in [`platform`], so everything here runs and tests headless.
//!
//! ## Quick Start
//!
//! ```ignore
//! use kinetic_core::{spawn_typewriter, Typewriter, TypewriterConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let machine = Typewriter::new(TypewriterConfig::new(["Rust", "Dioxus"]))?;
//!     let handle = spawn_typewriter(machine, |text, _phase| println!("{text}"));
//!
//!     tokio::time::sleep(std::time::Duration::from_secs(5)).await;
//!     handle.cancel();
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod counter;
pub mod driver;
pub mod easing;
pub mod error;
pub mod platform;
pub mod storage;
pub mod theme;
pub mod tilt;
pub mod typewriter;

// Re-exports
pub use config::KineticConfig;
pub use counter::{Counter, CounterConfig};
pub use driver::{run_counter, run_typewriter, spawn_counter, spawn_typewriter, AnimationHandle};
pub use easing::Easing;
pub use error::{KineticError, KineticResult};
pub use platform::{
    KeyValueStore, MemoryStore, NoopApplier, PreferenceReader, StaticPreferences, ThemeApplier,
};
pub use storage::RedbStore;
pub use theme::{Theme, ThemeSource, ThemeStore, THEME_STORAGE_KEY};
pub use tilt::{ElementRect, GlarePosition, Point, Tilt, TiltConfig, TiltFrame};
pub use typewriter::{Phase, Tick, Typewriter, TypewriterConfig};

// Re-exported so callers can hold the token the `run_*` futures take
pub use tokio_util::sync::CancellationToken;
