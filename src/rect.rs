use crate::units::*;

/// A rectangle, specified by two opposite corners.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rect {
    /// The x-coordinate of the first (typically, upper-left) corner.
    pub x1: Px,
    /// The y-coordinate of the first (typically, upper-left) corner.
    pub y1: Px,
    /// The x-coordinate of the second (typically, lower-right) corner.
    pub x2: Px,
    /// The y-coordinate of the second (typically, lower-right) corner.
    pub y2: Px,
}

impl Rect {
    pub fn new(x1: Px, y1: Px, x2: Px, y2: Px) -> Rect {
        Rect { x1, y1, x2, y2 }
    }

    pub fn width(&self) -> Px {
        self.x2 - self.x1
    }

    pub fn height(&self) -> Px {
        self.y2 - self.y1
    }

    /// Whether the rectangle encloses no area at all. Degenerate rectangles
    /// are valid values—renderers skip them rather than treating them as
    /// errors.
    pub fn is_degenerate(&self) -> bool {
        self.x2 <= self.x1 || self.y2 <= self.y1
    }

    /// Clamp all four coordinates into `[0, width] × [0, height]`. If
    /// clamping would invert the rectangle, it collapses to a zero-area
    /// rectangle at the nearest valid corner instead.
    pub fn clamp_to(&self, width: Px, height: Px) -> Rect {
        let x1 = self.x1.clamp(Px::ZERO, width);
        let y1 = self.y1.clamp(Px::ZERO, height);
        let x2 = self.x2.clamp(Px::ZERO, width).max(x1);
        let y2 = self.y2.clamp(Px::ZERO, height).max(y1);
        Rect { x1, y1, x2, y2 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_keeps_interior_rect() {
        let r = Rect::new(Px(10.0), Px(20.0), Px(100.0), Px(200.0));
        assert_eq!(r.clamp_to(Px(768.0), Px(1152.0)), r);
    }

    #[test]
    fn clamp_cuts_overflowing_edges() {
        let r = Rect::new(Px(-5.0), Px(-5.0), Px(800.0), Px(1200.0));
        let c = r.clamp_to(Px(768.0), Px(1152.0));
        assert_eq!(c, Rect::new(Px(0.0), Px(0.0), Px(768.0), Px(1152.0)));
    }

    #[test]
    fn clamp_collapses_fully_outside_rect() {
        let r = Rect::new(Px(-50.0), Px(-50.0), Px(-10.0), Px(-10.0));
        let c = r.clamp_to(Px(768.0), Px(1152.0));
        assert!(c.is_degenerate());
        assert_eq!(c, Rect::new(Px(0.0), Px(0.0), Px(0.0), Px(0.0)));
    }
}
