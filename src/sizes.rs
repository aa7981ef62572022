//! Pre-defined canvas sizes for carousel slides.
//!
//! All sizes are (width, height) in pixels, portrait orientation.

/// Canvas dimensions as (width, height) in pixels.
pub type CanvasSize = (u32, u32);

/// The working size slides are composed and overlaid at
pub const SLIDE_PORTRAIT: CanvasSize = (768, 1152);

/// The size requested from the image generation API
pub const GENERATION_PORTRAIT: CanvasSize = (1024, 1536);

/// Full-resolution TikTok portrait
pub const TIKTOK_FULL: CanvasSize = (1080, 1920);
