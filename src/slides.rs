use crate::canvas::Canvas;
use crate::colour::colours;
use crate::font::{Font, FontMetrics};
use crate::units::Px;
use ab_glyph::PxScale;
use imageproc::drawing::draw_text_mut;

/// How much of the prompt to echo onto a placeholder slide
const PROMPT_EXCERPT_CHARS: usize = 200;

/// Synthesize the dark placeholder slide the pipeline falls back to when
/// no image generation API is configured, so local runs and tests produce
/// a complete carousel. When a font is available the prompt excerpt is
/// stamped small in the top-left corner; without one the slide is a plain
/// fill.
pub fn placeholder_slide(width: u32, height: u32, prompt: &str, font: Option<&Font>) -> Canvas {
    let mut canvas = Canvas::new(width, height, colours::PLACEHOLDER);

    if let Some(font) = font {
        let size = Px::from(height) * 0.02;
        let scale = PxScale::from(size.0);
        let excerpt: String = prompt.chars().take(PROMPT_EXCERPT_CHARS).collect();
        let line_height = font.line_height(size);

        draw_text_mut(
            &mut canvas.image,
            colours::WHITE.into(),
            20,
            20,
            scale,
            &font.raster,
            "PLACEHOLDER IMAGE",
        );
        draw_text_mut(
            &mut canvas.image,
            colours::WHITE.into(),
            20,
            20 + line_height.round() as i32,
            scale,
            &font.raster,
            &excerpt,
        );
    }

    canvas
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sizes::SLIDE_PORTRAIT;

    #[test]
    fn placeholder_has_requested_dimensions() {
        let (w, h) = SLIDE_PORTRAIT;
        let canvas = placeholder_slide(w, h, "a photo series about tea", None);
        assert_eq!((canvas.width(), canvas.height()), (w, h));
        let px = canvas.image.get_pixel(w / 2, h / 2);
        assert_eq!(px[0], 30);
    }
}
