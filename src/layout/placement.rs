use crate::layout::TextBlock;
use crate::rect::Rect;
use crate::units::Px;

/// Compute the backing-panel rectangle for a [TextBlock] on a canvas of
/// `canvas_width` × `canvas_height` pixels.
///
/// The block is centered horizontally and its top edge sits at
/// `canvas_height × anchor_fraction`. The panel extends beyond the block by
/// `canvas_width × pad_x_fraction` horizontally and `font_size ×
/// pad_y_fraction` vertically, then is clamped into the canvas bounds.
///
/// A zero-size block (the empty-text case) produces a zero-area rectangle
/// at the anchor point; renderers skip drawing such panels.
pub fn compute_placement(
    block: &TextBlock,
    canvas_width: Px,
    canvas_height: Px,
    anchor_fraction: f32,
    pad_x_fraction: f32,
    pad_y_fraction: f32,
    font_size: Px,
) -> Rect {
    let x0 = canvas_width / 2.0 - block.width / 2.0;
    let y0 = canvas_height * anchor_fraction;

    if block.width <= Px::ZERO || block.height <= Px::ZERO {
        let x = x0.clamp(Px::ZERO, canvas_width);
        let y = y0.clamp(Px::ZERO, canvas_height);
        return Rect::new(x, y, x, y);
    }

    let pad_x = canvas_width * pad_x_fraction;
    let pad_y = font_size * pad_y_fraction;

    Rect::new(
        x0 - pad_x,
        y0 - pad_y,
        x0 + block.width + pad_x,
        y0 + block.height + pad_y,
    )
    .clamp_to(canvas_width, canvas_height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Line;

    fn block(width: f32, height: f32) -> TextBlock {
        TextBlock {
            lines: vec![Line {
                text: "x".into(),
                width: Px(width),
                height: Px(height),
            }],
            width: Px(width),
            height: Px(height),
            spacing: Px(6.0),
        }
    }

    fn assert_in_bounds(rect: Rect, w: f32, h: f32) {
        assert!(rect.x1 >= Px::ZERO, "{rect:?}");
        assert!(rect.y1 >= Px::ZERO, "{rect:?}");
        assert!(rect.x1 <= rect.x2, "{rect:?}");
        assert!(rect.y1 <= rect.y2, "{rect:?}");
        assert!(rect.x2 <= Px(w), "{rect:?}");
        assert!(rect.y2 <= Px(h), "{rect:?}");
    }

    #[test]
    fn panel_contains_block_plus_padding() {
        let b = block(160.0, 75.0);
        let rect = compute_placement(&b, Px(768.0), Px(1152.0), 0.35, 0.02, 0.5, Px(74.0));
        // block is centered: x0 = 384 - 80 = 304, y0 = 403.2
        assert_eq!(rect.x1, Px(304.0 - 768.0 * 0.02));
        assert_eq!(rect.y1, Px(1152.0 * 0.35 - 74.0 * 0.5));
        assert_eq!(rect.x2, Px(304.0 + 160.0 + 768.0 * 0.02));
        assert_eq!(rect.y2, Px(1152.0 * 0.35 + 75.0 + 74.0 * 0.5));
        assert_in_bounds(rect, 768.0, 1152.0);
    }

    #[test]
    fn panel_is_clamped_to_canvas() {
        // wider than the canvas itself
        let b = block(2000.0, 75.0);
        let rect = compute_placement(&b, Px(768.0), Px(1152.0), 0.35, 0.02, 0.5, Px(74.0));
        assert_in_bounds(rect, 768.0, 1152.0);
        assert_eq!(rect.x1, Px::ZERO);
        assert_eq!(rect.x2, Px(768.0));

        // anchored so far down that the block hangs off the bottom
        let b = block(160.0, 500.0);
        let rect = compute_placement(&b, Px(768.0), Px(1152.0), 0.95, 0.02, 0.5, Px(74.0));
        assert_in_bounds(rect, 768.0, 1152.0);
        assert_eq!(rect.y2, Px(1152.0));
    }

    #[test]
    fn zero_size_block_collapses_to_degenerate_rect() {
        let b = TextBlock {
            lines: vec![],
            width: Px::ZERO,
            height: Px::ZERO,
            spacing: Px(6.0),
        };
        let rect = compute_placement(&b, Px(768.0), Px(1152.0), 0.35, 0.02, 0.5, Px(74.0));
        assert!(rect.is_degenerate());
        assert_in_bounds(rect, 768.0, 1152.0);
    }
}
