use image::Rgba;

/// An 8-bit RGBA colour
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    /// Create a new opaque colour. r, g, and b range from 0 to 255
    pub fn new_rgb(r: u8, g: u8, b: u8) -> Colour {
        Colour { r, g, b, a: 255 }
    }

    /// Create a new colour with an explicit alpha channel; 0 is fully
    /// transparent, 255 is fully opaque
    pub fn new_rgba(r: u8, g: u8, b: u8, a: u8) -> Colour {
        Colour { r, g, b, a }
    }

    /// Create a new opaque grey, where g ranges from 0 (black) to 255 (white)
    pub fn new_grey(g: u8) -> Colour {
        Colour {
            r: g,
            g,
            b: g,
            a: 255,
        }
    }

    /// The same colour with a different alpha
    pub fn with_alpha(self, a: u8) -> Colour {
        Colour { a, ..self }
    }

    /// Whether drawing this colour would change nothing at all
    pub fn is_transparent(&self) -> bool {
        self.a == 0
    }
}

impl From<(u8, u8, u8)> for Colour {
    fn from(c: (u8, u8, u8)) -> Self {
        Colour::new_rgb(c.0, c.1, c.2)
    }
}

impl From<[u8; 3]> for Colour {
    fn from(c: [u8; 3]) -> Self {
        let [r, g, b] = c;
        Colour::new_rgb(r, g, b)
    }
}

impl From<(u8, u8, u8, u8)> for Colour {
    fn from(c: (u8, u8, u8, u8)) -> Self {
        Colour::new_rgba(c.0, c.1, c.2, c.3)
    }
}

impl From<[u8; 4]> for Colour {
    fn from(c: [u8; 4]) -> Self {
        let [r, g, b, a] = c;
        Colour::new_rgba(r, g, b, a)
    }
}

impl From<Colour> for Rgba<u8> {
    fn from(c: Colour) -> Self {
        Rgba([c.r, c.g, c.b, c.a])
    }
}

/// A list of pre-defined colour constants
pub mod colours {
    use super::*;

    pub const BLACK: Colour = Colour {
        r: 0,
        g: 0,
        b: 0,
        a: 255,
    };
    pub const WHITE: Colour = Colour {
        r: 255,
        g: 255,
        b: 255,
        a: 255,
    };
    /// The translucent black used behind overlay text
    pub const PANEL: Colour = Colour {
        r: 0,
        g: 0,
        b: 0,
        a: 120,
    };
    /// The dark grey fill of placeholder slides
    pub const PLACEHOLDER: Colour = Colour {
        r: 30,
        g: 30,
        b: 30,
        a: 255,
    };
}
