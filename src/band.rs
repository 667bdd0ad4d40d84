use num_enum::{IntoPrimitive, TryFromPrimitive};
use std::fmt;

/// Alpha applied to the R/G/B overlay colors so the base map stays legible.
const OVERLAY_ALPHA: u8 = 100;

/// One addressable channel of a raster. Band indices are 1-based,
/// matching raster conventions.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum Band {
    Red = 1,
    Green = 2,
    Blue = 3,
    Alpha = 4,
}

impl Band {
    /// All four bands in attach order.
    pub const ALL: [Band; 4] = [Band::Red, Band::Green, Band::Blue, Band::Alpha];

    pub fn index(self) -> u8 {
        self.into()
    }

    /// Projects a raw band value into this band's RGBA channel.
    ///
    /// The alpha band carries the value in the alpha channel only; it is
    /// kept for data access rather than display.
    pub fn rgba(self, value: u8) -> [u8; 4] {
        match self {
            Band::Red => [value, 0, 0, OVERLAY_ALPHA],
            Band::Green => [0, value, 0, OVERLAY_ALPHA],
            Band::Blue => [0, 0, value, OVERLAY_ALPHA],
            Band::Alpha => [0, 0, 0, value],
        }
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}
