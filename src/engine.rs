// Map engine capability traits
//   The view depends on exactly the operations it uses: create a map bound
//   to a container, add layers, fit the view, destroy. Any rendering
//   backend that can do those five things can sit behind these traits.

use crate::geo::{LatLng, LatLngBounds};
use std::fmt;
use std::sync::Arc;

#[derive(Debug)]
pub enum EngineError {
    ContainerUnavailable(String),
    LayerRejected(String),
    Backend(String),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for EngineError {}

/// A drawable layer. Base tile layers report [`LatLngBounds::WORLD`].
pub trait MapLayer: Send + Sync {
    fn bounds(&self) -> LatLngBounds;
}

/// A live rendering context bound to one container region.
pub trait MapInstance: Send {
    fn add_layer(&mut self, layer: Arc<dyn MapLayer>) -> Result<(), EngineError>;

    fn fit_bounds(&mut self, bounds: LatLngBounds) -> Result<(), EngineError>;

    /// Releases everything the instance holds. Called exactly once per
    /// instance, before the reference is dropped.
    fn destroy(&mut self);
}

/// The screen region a map instance renders into. The view owns it
/// exclusively while mounted.
pub trait Container: Send {
    /// Wipes residual rendered content left behind by a destroyed
    /// instance, so the next create starts from a blank region.
    fn clear(&mut self);
}

pub trait MapEngine: Send + Sync {
    fn create(
        &self,
        container: &mut dyn Container,
        center: LatLng,
        zoom: u8,
    ) -> Result<Box<dyn MapInstance>, EngineError>;

    fn tile_layer(
        &self,
        url_template: &str,
        attribution: &str,
    ) -> Result<Arc<dyn MapLayer>, EngineError>;
}
