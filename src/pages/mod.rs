//! Page components for the Kinetic gallery.

mod gallery;

pub use gallery::Gallery;
