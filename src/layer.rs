use crate::band::Band;
use crate::engine::MapLayer;
use crate::raster::Raster;
use std::fmt;
use std::sync::Arc;

/// Layer opacity on the closed range [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Opacity(f64);

impl Opacity {
    pub const CLEAR: Opacity = Opacity(0.0);
    pub const OPAQUE: Opacity = Opacity(1.0);

    pub fn new<V: TryInto<f64>>(value: V) -> Result<Self, String> {
        let Ok(v) = value.try_into() else {
            return Err("Value could not be interpreted as f64".to_string());
        };
        if v >= 0.0 && v <= 1.0 {
            Ok(Self(v))
        } else {
            Err("Value must be on the closed range [0.0, 1.0]".to_string())
        }
    }

    pub fn new_saturated(v: f64) -> Self {
        Self(v.clamp(0.0, 1.0))
    }

    pub fn as_f64(self) -> f64 {
        self.0
    }
}

impl From<Opacity> for f64 {
    fn from(opacity: Opacity) -> Self {
        opacity.as_f64()
    }
}

impl fmt::Display for Opacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How band values become pixels. The original widget only ever renders
/// per-pixel RGBA.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Rgba,
}

/// Everything an adapter needs to turn one raster band into a drawable
/// layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandLayerSpec {
    pub band: Band,
    pub opacity: Opacity,
    pub resolution: u32,
    pub color_mode: ColorMode,
}

impl BandLayerSpec {
    /// The color function for this layer: raw band value in, RGBA out.
    pub fn color(&self, value: u8) -> [u8; 4] {
        self.band.rgba(value)
    }
}

impl fmt::Display for BandLayerSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BandLayerSpec({}, opacity {}, {} samples, {:?})",
            self.band, self.opacity, self.resolution, self.color_mode
        )
    }
}

#[derive(Debug)]
pub enum LayerError {
    /// (requested band index, bands available in the raster)
    MissingBand((u8, usize)),
    NotSupported(String),
}

impl fmt::Display for LayerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for LayerError {}

/// Wraps a raster band and its rendering parameters into a map layer.
pub trait LayerAdapter: Send + Sync {
    fn band_layer(
        &self,
        raster: Arc<dyn Raster>,
        spec: BandLayerSpec,
    ) -> Result<Arc<dyn MapLayer>, LayerError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opacity_checked_constructor() {
        assert!(Opacity::new(0.2).is_ok());
        assert!(Opacity::new(1.0).is_ok());
        assert!(Opacity::new(-0.1).is_err());
        assert!(Opacity::new(1.5).is_err());
    }

    #[test]
    fn opacity_saturates() {
        assert_eq!(Opacity::new_saturated(3.0), Opacity::OPAQUE);
        assert_eq!(Opacity::new_saturated(-1.0), Opacity::CLEAR);
        assert_eq!(Opacity::new_saturated(0.2).as_f64(), 0.2);
    }

    #[test]
    fn spec_color_follows_band() {
        let spec = BandLayerSpec {
            band: Band::Green,
            opacity: Opacity::new_saturated(0.2),
            resolution: 256,
            color_mode: ColorMode::Rgba,
        };
        assert_eq!(spec.color(42), [0, 42, 0, 100]);
    }
}
