use crate::colour::Colour;
use crate::error::OverlayError;
use crate::rect::Rect;
use crate::units::Px;
use image::{Pixel, Rgba, RgbaImage};
use std::path::Path;

/// A raster canvas that overlays are drawn onto. The canvas works in RGBA
/// internally regardless of the source pixel format and keeps its
/// dimensions fixed for the duration of an overlay operation.
pub struct Canvas {
    pub image: RgbaImage,
}

impl Canvas {
    /// Decode an existing raster image from disk into a working canvas.
    /// Unreadable or corrupt files fail the call with the decode error;
    /// nothing is retried.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Canvas, OverlayError> {
        let image = image::open(path)?.to_rgba8();
        Ok(Canvas { image })
    }

    /// Create a blank canvas filled with a solid colour
    pub fn new(width: u32, height: u32, fill: Colour) -> Canvas {
        Canvas {
            image: RgbaImage::from_pixel(width, height, fill.into()),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Write the canvas to disk, flattening the alpha channel first. The
    /// output format is chosen from the file extension (PNG for `.png` and
    /// so on); parent directories are created as needed.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), OverlayError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let rgb = image::DynamicImage::ImageRgba8(self.image.clone()).to_rgb8();
        rgb.save(path)?;
        Ok(())
    }

    /// Alpha-composite a translucent fill over the given rectangle. The
    /// rectangle is clamped to the canvas first; degenerate rectangles and
    /// fully transparent colours draw nothing.
    pub fn blend_rect(&mut self, rect: Rect, colour: Colour) {
        if colour.is_transparent() {
            return;
        }

        let rect = rect.clamp_to(Px::from(self.width()), Px::from(self.height()));
        if rect.is_degenerate() {
            return;
        }

        let x1 = rect.x1.round() as u32;
        let y1 = rect.y1.round() as u32;
        let x2 = (rect.x2.round() as u32).min(self.width());
        let y2 = (rect.y2.round() as u32).min(self.height());

        let fill: Rgba<u8> = colour.into();
        for y in y1..y2 {
            for x in x1..x2 {
                self.image.get_pixel_mut(x, y).blend(&fill);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colour::colours;

    #[test]
    fn blend_rect_composites_alpha() {
        let mut canvas = Canvas::new(10, 10, colours::WHITE);
        canvas.blend_rect(
            Rect::new(Px(0.0), Px(0.0), Px(10.0), Px(10.0)),
            Colour::new_rgba(0, 0, 0, 128),
        );
        let px = canvas.image.get_pixel(5, 5);
        // half-opaque black over white lands mid-grey
        assert!(px[0] > 100 && px[0] < 150, "got {px:?}");
    }

    #[test]
    fn blend_rect_skips_degenerate_rects() {
        let mut canvas = Canvas::new(10, 10, colours::WHITE);
        let before = canvas.image.clone();
        canvas.blend_rect(Rect::new(Px(5.0), Px(5.0), Px(5.0), Px(5.0)), colours::BLACK);
        canvas.blend_rect(
            Rect::new(Px(-20.0), Px(-20.0), Px(-10.0), Px(-10.0)),
            colours::BLACK,
        );
        assert_eq!(canvas.image, before);
    }

    #[test]
    fn blend_rect_stays_inside_canvas() {
        let mut canvas = Canvas::new(10, 10, colours::WHITE);
        // larger than the canvas on all sides; must not panic
        canvas.blend_rect(
            Rect::new(Px(-5.0), Px(-5.0), Px(50.0), Px(50.0)),
            colours::BLACK,
        );
        assert_eq!(*canvas.image.get_pixel(9, 9), Rgba([0, 0, 0, 255]));
    }

    #[test]
    fn open_rejects_garbage() {
        let dir = std::env::temp_dir().join("overlay-gen-test-open");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("not-an-image.png");
        std::fs::write(&path, b"this is not a png").unwrap();
        match Canvas::open(&path) {
            Err(OverlayError::Image(_)) => {}
            Err(e) => panic!("expected a decode error, got {e:?}"),
            Ok(_) => panic!("expected a decode error, got a canvas"),
        }
    }
}
