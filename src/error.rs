use std::path::PathBuf;
use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum OverlayError {
    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [ttf_parser] failed to parse the font
    FaceParsingError(#[from] owned_ttf_parser::FaceParsingError),

    #[error(transparent)]
    /// [ab_glyph] rejected the font data
    InvalidFont(#[from] ab_glyph::InvalidFont),

    #[error(transparent)]
    /// [image] failed to decode or encode the image
    Image(#[from] image::ImageError),

    /// No usable font file could be found in any of the searched directories
    #[error("no usable font found in {0:?}")]
    NoFontFound(Vec<PathBuf>),
}
