use derive_more::{Add, AddAssign, Display, From, Into, Sub, Sum};

/// A distance in image pixels. Layout math is carried out in fractional
/// pixels and only rounded when coordinates hit the raster.
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    Add,
    AddAssign,
    Display,
    From,
    Into,
    Sub,
    Sum,
)]
pub struct Px(pub f32);

impl Px {
    /// The zero distance
    pub const ZERO: Px = Px(0.0);

    /// Round to the nearest whole pixel
    pub fn round(self) -> f32 {
        self.0.round()
    }

    /// The larger of two distances
    pub fn max(self, other: Px) -> Px {
        Px(self.0.max(other.0))
    }

    /// Clamp the distance into `[lo, hi]`
    pub fn clamp(self, lo: Px, hi: Px) -> Px {
        Px(self.0.clamp(lo.0, hi.0))
    }
}

impl std::ops::Mul<f32> for Px {
    type Output = Px;

    fn mul(self, rhs: f32) -> Px {
        Px(self.0 * rhs)
    }
}

impl std::ops::Div<f32> for Px {
    type Output = Px;

    fn div(self, rhs: f32) -> Px {
        Px(self.0 / rhs)
    }
}

impl From<u32> for Px {
    fn from(v: u32) -> Px {
        Px(v as f32)
    }
}
