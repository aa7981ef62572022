pub mod api;

mod canvas;
pub use canvas::*;

mod colour;
pub use colour::*;

mod error;
pub use error::*;

mod font;
pub use font::*;

pub mod hook;

/// Utility functions and structures to lay out overlay text on canvases
pub mod layout;

mod overlay;
pub use overlay::*;

mod rect;
pub use rect::*;

mod resolver;
pub use resolver::*;

/// Pre-defined canvas sizes for carousel slides
pub mod sizes;

mod slides;
pub use slides::*;

mod units;
pub use units::*;

/// Re-export the image crate, mostly for direct pixel access on [Canvas]
pub use image;
