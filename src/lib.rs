//! Band-decomposed raster overlays on a slippy map.
//!
//! [`MapView`] owns the mapping from an optional input file to a live map
//! instance carrying a base tile layer and four band overlays (R, G, B,
//! Alpha). Every input change tears the previous instance down before a
//! new one is built; stale in-flight rebuilds are discarded.
//!
//! Rendering, tile fetching and raster decoding are not implemented here.
//! They sit behind the [`MapEngine`], [`RasterDecoder`] and
//! [`LayerAdapter`] seams, so any backend providing those operations can
//! host the view.

mod band;
mod engine;
mod error;
mod geo;
mod layer;
mod raster;
mod source;
mod view;

pub use band::Band;
pub use engine::{Container, EngineError, MapEngine, MapInstance, MapLayer};
pub use error::{MapViewError, MapViewResult};
pub use geo::{LatLng, LatLngBounds};
pub use layer::{BandLayerSpec, ColorMode, LayerAdapter, LayerError, Opacity};
pub use raster::{DecodeError, DecodeResult, Raster, RasterDecoder, StaticRaster};
pub use source::{PathSource, SourceFile};
pub use view::{
    MapView, MapViewConfig, Rebuild, DEFAULT_CENTER, DEFAULT_RESOLUTION,
    DEFAULT_TILE_ATTRIBUTION, DEFAULT_TILE_URL, DEFAULT_ZOOM,
};
