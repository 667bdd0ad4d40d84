use crate::band::Band;
use crate::geo::LatLngBounds;
use futures::future::BoxFuture;
use std::fmt;
use std::io;
use std::sync::Arc;

pub type DecodeResult<T> = Result<T, DecodeError>;

#[derive(Debug)]
pub enum DecodeError {
    Corrupt(String),
    NotSupported(String),
    TruncatedInput(usize),
    ReadError(io::Error),
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for DecodeError {}

impl From<io::Error> for DecodeError {
    fn from(e: io::Error) -> Self {
        DecodeError::ReadError(e)
    }
}

/// A decoded multi-band raster with geographic bounds.
///
/// Produced once per input change and discarded after layer construction;
/// the view never caches rasters across inputs.
pub trait Raster: Send + Sync {
    fn band_count(&self) -> usize;

    fn bounds(&self) -> LatLngBounds;

    /// Bounds of a single band. Bands of a georeferenced raster share the
    /// raster's extent unless the decoder knows better.
    fn band_bounds(&self, _band: Band) -> LatLngBounds {
        self.bounds()
    }
}

/// Turns raw file bytes into a [`Raster`].
///
/// Format parsing lives entirely behind this seam; the view only cares
/// that decoding is async and may fail.
pub trait RasterDecoder: Send + Sync {
    fn decode<'a>(&'a self, bytes: &'a [u8]) -> BoxFuture<'a, DecodeResult<Arc<dyn Raster>>>;
}

/// A raster that is nothing but a band count and an extent. Useful for
/// hosts whose decoder reports geometry separately, and for tests.
#[derive(Debug, Clone, Copy)]
pub struct StaticRaster {
    band_count: usize,
    bounds: LatLngBounds,
}

impl StaticRaster {
    pub fn new(band_count: usize, bounds: LatLngBounds) -> Self {
        Self { band_count, bounds }
    }
}

impl Raster for StaticRaster {
    fn band_count(&self) -> usize {
        self.band_count
    }

    fn bounds(&self) -> LatLngBounds {
        self.bounds
    }
}

impl fmt::Display for StaticRaster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StaticRaster({} bands, {})", self.band_count, self.bounds)
    }
}
