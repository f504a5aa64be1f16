//! Dioxus hooks bridging the kinetic-core state machines to the webview.
//!
//! Each hook owns its timers and tasks; they are cancelled when the calling
//! component unmounts.

mod counter;
mod theme;
mod tilt;
mod typewriter;

pub use counter::*;
pub use theme::*;
pub use tilt::*;
pub use typewriter::*;
