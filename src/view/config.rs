use crate::band::Band;
use crate::geo::LatLng;
use crate::layer::{BandLayerSpec, ColorMode, Opacity};

pub const DEFAULT_CENTER: LatLng = LatLng::new(4.5709, -74.2973);
pub const DEFAULT_ZOOM: u8 = 6;
pub const DEFAULT_TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const DEFAULT_TILE_ATTRIBUTION: &str = "&copy; OpenStreetMap contributors";
pub const DEFAULT_RESOLUTION: u32 = 256;

/// Configuration for one map view.
///
/// The defaults reproduce the widget's stock behavior: an OSM base map
/// centered on Colombia until raster bounds are known, R/G/B overlays at
/// 0.2 opacity, and an invisible alpha-band layer kept for data access.
#[derive(Debug, Clone, PartialEq)]
pub struct MapViewConfig {
    /// Initial view center, used only until the raster bounds are fit.
    pub center: LatLng,
    pub zoom: u8,
    pub tile_url_template: String,
    pub tile_attribution: String,
    /// Opacity of the R, G and B overlay layers.
    pub overlay_opacity: Opacity,
    /// Opacity of the alpha-band layer.
    pub alpha_opacity: Opacity,
    /// Samples per layer edge.
    pub resolution: u32,
}

impl Default for MapViewConfig {
    fn default() -> Self {
        Self {
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
            tile_url_template: DEFAULT_TILE_URL.to_string(),
            tile_attribution: DEFAULT_TILE_ATTRIBUTION.to_string(),
            overlay_opacity: Opacity::new_saturated(0.2),
            alpha_opacity: Opacity::CLEAR,
            resolution: DEFAULT_RESOLUTION,
        }
    }
}

impl MapViewConfig {
    /// The four band layer specs in attach order R, G, B, Alpha.
    pub fn band_specs(&self) -> [BandLayerSpec; 4] {
        Band::ALL.map(|band| BandLayerSpec {
            band,
            opacity: match band {
                Band::Alpha => self.alpha_opacity,
                _ => self.overlay_opacity,
            },
            resolution: self.resolution,
            color_mode: ColorMode::Rgba,
        })
    }
}
