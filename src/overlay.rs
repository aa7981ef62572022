use crate::canvas::Canvas;
use crate::colour::{colours, Colour};
use crate::font::Font;
use crate::layout::{compute_placement, layout_block, wrap, TextBlock};
use crate::rect::Rect;
use crate::units::Px;
use ab_glyph::PxScale;
use image::RgbaImage;
use imageproc::drawing::draw_text_mut;

/// Styling knobs for a text overlay. The defaults match the carousel
/// pipeline this crate grew out of: bold white text with a 2px black
/// outline over a translucent panel, sized and anchored to keep the hook
/// clear of the top and bottom of the slide where platform UI sits.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayStyle {
    /// Font size as a fraction of canvas height
    pub font_size_fraction: f32,
    /// Maximum line width as a fraction of canvas width
    pub max_width_fraction: f32,
    /// Vertical position of the block's top edge as a fraction of canvas height
    pub anchor_fraction: f32,
    /// Horizontal panel padding as a fraction of canvas width
    pub pad_x_fraction: f32,
    /// Vertical panel padding as a fraction of the font size
    pub pad_y_fraction: f32,
    /// Gap between consecutive lines
    pub line_spacing: Px,
    /// Outline thickness around each glyph; 0 disables the outline
    pub stroke_width: u32,
    pub fill: Colour,
    pub stroke: Colour,
    pub panel: Colour,
}

impl Default for OverlayStyle {
    fn default() -> OverlayStyle {
        OverlayStyle {
            font_size_fraction: 0.065,
            max_width_fraction: 0.8,
            anchor_fraction: 0.35,
            pad_x_fraction: 0.02,
            pad_y_fraction: 0.5,
            line_spacing: Px(6.0),
            stroke_width: 2,
            fill: colours::WHITE,
            stroke: colours::BLACK,
            panel: colours::PANEL,
        }
    }
}

/// Wrap `text` and draw it onto `canvas` according to `style`: the backing
/// panel first, then each line horizontally centered within the block,
/// top-to-bottom. Returns the panel rectangle that was used.
///
/// Empty text degenerates to a zero-area panel and a no-op draw; the
/// canvas comes back unchanged.
pub fn overlay_text(canvas: &mut Canvas, text: &str, font: &Font, style: &OverlayStyle) -> Rect {
    let width = Px::from(canvas.width());
    let height = Px::from(canvas.height());
    let size = height * style.font_size_fraction;

    let lines = wrap(text, font, size, width * style.max_width_fraction);
    let block = layout_block(lines, style.line_spacing);
    let placement = compute_placement(
        &block,
        width,
        height,
        style.anchor_fraction,
        style.pad_x_fraction,
        style.pad_y_fraction,
        size,
    );
    log::debug!(
        "overlaying {} line(s) ({}x{} block) on {}x{} canvas",
        block.lines.len(),
        block.width,
        block.height,
        canvas.width(),
        canvas.height(),
    );

    render(canvas, &block, placement, font, size, style);
    placement
}

/// Draw an already-laid-out [TextBlock] onto the canvas. Split out from
/// [overlay_text] so callers that need to inspect or adjust the layout
/// before committing pixels can run the steps themselves.
pub fn render(
    canvas: &mut Canvas,
    block: &TextBlock,
    placement: Rect,
    font: &Font,
    size: Px,
    style: &OverlayStyle,
) {
    if !placement.is_degenerate() {
        canvas.blend_rect(placement, style.panel);
    }

    let scale = PxScale::from(size.0);
    let block_left = Px::from(canvas.width()) / 2.0 - block.width / 2.0;
    let mut y = Px::from(canvas.height()) * style.anchor_fraction;

    for line in &block.lines {
        if !line.text.is_empty() {
            let x = block_left + (block.width - line.width) / 2.0;
            draw_line_stroked(
                &mut canvas.image,
                &line.text,
                x.round() as i32,
                y.round() as i32,
                scale,
                font,
                style,
            );
        }
        y += line.height + block.spacing;
    }
}

/// Draws text with a stroked outline for legibility against arbitrary
/// backgrounds: the line is drawn in the stroke colour at every offset
/// within `stroke_width` of the origin, then once more in the fill colour
/// on top.
fn draw_line_stroked(
    image: &mut RgbaImage,
    text: &str,
    x: i32,
    y: i32,
    scale: PxScale,
    font: &Font,
    style: &OverlayStyle,
) {
    let sw = style.stroke_width as i32;
    if sw > 0 && !style.stroke.is_transparent() {
        for dy in -sw..=sw {
            for dx in -sw..=sw {
                if (dx == 0 && dy == 0) || dx * dx + dy * dy > sw * sw {
                    continue;
                }
                draw_text_mut(
                    image,
                    style.stroke.into(),
                    x + dx,
                    y + dy,
                    scale,
                    &font.raster,
                    text,
                );
            }
        }
    }

    draw_text_mut(image, style.fill.into(), x, y, scale, &font.raster, text);
}
