use crate::engine::EngineError;
use crate::layer::LayerError;
use crate::raster::DecodeError;
use std::fmt;
use std::io;

pub type MapViewResult<T> = Result<T, MapViewError>;

#[derive(Debug)]
pub enum MapViewError {
    DecodeFailure(DecodeError),
    Engine(EngineError),
    Layer(LayerError),
    ReadError(io::Error),
}

impl fmt::Display for MapViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for MapViewError {}

impl From<DecodeError> for MapViewError {
    fn from(e: DecodeError) -> Self {
        MapViewError::DecodeFailure(e)
    }
}

impl From<EngineError> for MapViewError {
    fn from(e: EngineError) -> Self {
        MapViewError::Engine(e)
    }
}

impl From<LayerError> for MapViewError {
    fn from(e: LayerError) -> Self {
        MapViewError::Layer(e)
    }
}

impl From<io::Error> for MapViewError {
    fn from(e: io::Error) -> Self {
        MapViewError::ReadError(e)
    }
}
