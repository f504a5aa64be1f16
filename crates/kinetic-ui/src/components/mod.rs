//! Interaction components built on the kinetic hooks
//!
//! Each component renders only the markup its behaviour needs; visual styling
//! comes from the host application's stylesheet (`.tilt-card`, `.tilt-glare`,
//! `.typewriter`, `.animated-counter`, `.theme-toggle`).

mod animated_counter;
mod theme_toggle;
mod tilt_card;
mod typewriter_text;

pub use animated_counter::*;
pub use theme_toggle::*;
pub use tilt_card::*;
pub use typewriter_text::*;
