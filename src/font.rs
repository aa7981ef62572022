use crate::{OverlayError, Px};
use ab_glyph::FontArc;
use owned_ttf_parser::{AsFaceRef, OwnedFace};

/// Measures text in pixels. This is the capability the layout engine
/// depends on: a pure function of (string, size) with no side effects, so
/// tests can substitute fixed-width metrics without loading a real font.
pub trait FontMetrics {
    /// The horizontal advance of `text` rendered at `size`
    fn text_width(&self, text: &str, size: Px) -> Px;

    /// The height of a single line box at `size` (ascent minus descent)
    fn line_height(&self, size: Px) -> Px;
}

/// A parsed font. Fonts can be TTF or OTF fonts; the same bytes are parsed
/// twice—once by [owned_ttf_parser] for metrics and once by [ab_glyph] for
/// rasterization, since the drawing layer consumes the latter.
///
/// Typically a font is resolved once per process via
/// [`FontResolver`](crate::FontResolver) and shared by reference across
/// overlay calls.
pub struct Font {
    pub face: OwnedFace,
    pub raster: FontArc,
}

impl Font {
    /// Load a font from raw bytes, parsing the font and returning an error
    /// if the font could not be parsed
    pub fn load(bytes: Vec<u8>) -> Result<Font, OverlayError> {
        let raster = FontArc::try_from_vec(bytes.clone())?;
        let face = OwnedFace::from_vec(bytes, 0)?;

        Ok(Font { face, raster })
    }

    /// Obtain the family name of the font, if the font carries one
    pub fn family(&self) -> Option<String> {
        self.face
            .as_face_ref()
            .names()
            .into_iter()
            .find(|name| name.name_id == owned_ttf_parser::name_id::FAMILY && name.is_unicode())
            .and_then(|name| name.to_string())
    }

    /// Calculate the ascent (distance from the baseline to the top of the
    /// font) for the given font size
    pub fn ascent(&self, size: Px) -> Px {
        let scaling: Px = size / self.face.as_face_ref().units_per_em() as f32;
        scaling * self.face.as_face_ref().ascender() as f32
    }

    /// Calculate the descent (distance from the baseline to the bottom of
    /// the font) for the given font size. Note: this is usually negative
    pub fn descent(&self, size: Px) -> Px {
        let scaling: Px = size / self.face.as_face_ref().units_per_em() as f32;
        scaling * self.face.as_face_ref().descender() as f32
    }

    /// Calculate the leading (extra space between lines) for the given
    /// font size
    pub fn leading(&self, size: Px) -> Px {
        let scaling: Px = size / self.face.as_face_ref().units_per_em() as f32;
        scaling * self.face.as_face_ref().line_gap() as f32
    }

    /// Calculate the width of a given string of text at the given font size
    pub fn width_of_text(&self, text: &str, size: Px) -> Px {
        let scaling = size / self.face.as_face_ref().units_per_em() as f32;
        text.chars()
            .filter_map(|ch| self.glyph_id(ch))
            .map(|gid| {
                scaling
                    * self
                        .face
                        .as_face_ref()
                        .glyph_hor_advance(owned_ttf_parser::GlyphId(gid))
                        .unwrap_or_default() as f32
            })
            .sum()
    }

    pub fn glyph_id(&self, ch: char) -> Option<u16> {
        self.face
            .as_face_ref()
            .glyph_index(ch)
            .or_else(|| self.face.as_face_ref().glyph_index('\u{FFFD}'))
            .map(|i| i.0)
    }
}

impl FontMetrics for Font {
    fn text_width(&self, text: &str, size: Px) -> Px {
        self.width_of_text(text, size)
    }

    fn line_height(&self, size: Px) -> Px {
        self.ascent(size) - self.descent(size)
    }
}
