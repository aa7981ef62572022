//! The text-overlay layout engine.
//!
//! Layout happens in three pure steps, none of which touch the raster:
//!
//! 1. [`wrap`](crate::layout::wrap) - greedily word-wrap a hook into
//!    measured [`Line`](crate::layout::Line)s no wider than a maximum
//! 2. [`layout_block`](crate::layout::layout_block) - stack the lines into
//!    a [`TextBlock`](crate::layout::TextBlock) with overall dimensions
//! 3. [`compute_placement`](crate::layout::compute_placement) - derive the
//!    backing-panel rectangle, centered and clamped to the canvas
//!
//! The measured results are then handed to
//! [`overlay_text`](crate::overlay_text) which performs the actual drawing.
//!
//! # Example
//!
//! ```no_run
//! use overlay_gen::{Font, Px};
//! use overlay_gen::layout::{compute_placement, layout_block, wrap};
//!
//! let font = Font::load(std::fs::read("DejaVuSans-Bold.ttf")?)?;
//! let size = Px(1152.0 * 0.065);
//!
//! let lines = wrap("Read Quran daily", &font, size, Px(768.0 * 0.8));
//! let block = layout_block(lines, Px(6.0));
//! let panel = compute_placement(&block, Px(768.0), Px(1152.0), 0.35, 0.02, 0.5, size);
//! # Ok::<(), overlay_gen::OverlayError>(())
//! ```

mod placement;
mod text;

pub use placement::*;
pub use text::*;
