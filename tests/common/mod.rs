#![allow(dead_code)] // not every test file uses every fixture

use futures::future::BoxFuture;
use futures::FutureExt;
use rastermap::{
    Band, Container, DecodeError, DecodeResult, EngineError, LatLng, LatLngBounds, LayerAdapter,
    LayerError, MapEngine, MapInstance, MapLayer, MapView, MapViewConfig, Raster, RasterDecoder,
    StaticRaster,
};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    ClearContainer,
    Create { center: LatLng, zoom: u8 },
    TileLayer { url: String, attribution: String },
    BandLayer(Band),
    AddLayer,
    FitBounds(LatLngBounds),
    Destroy,
}

pub type EventLog = Arc<Mutex<Vec<Event>>>;

pub fn new_log() -> EventLog {
    Arc::new(Mutex::new(Vec::new()))
}

pub fn events(log: &EventLog) -> Vec<Event> {
    log.lock().unwrap().clone()
}

fn push(log: &EventLog, event: Event) {
    log.lock().unwrap().push(event);
}

pub struct RecordingContainer {
    log: EventLog,
}

impl Container for RecordingContainer {
    fn clear(&mut self) {
        push(&self.log, Event::ClearContainer);
    }
}

struct FixedLayer {
    bounds: LatLngBounds,
}

impl MapLayer for FixedLayer {
    fn bounds(&self) -> LatLngBounds {
        self.bounds
    }
}

pub struct RecordingInstance {
    log: EventLog,
}

impl MapInstance for RecordingInstance {
    fn add_layer(&mut self, _layer: Arc<dyn MapLayer>) -> Result<(), EngineError> {
        push(&self.log, Event::AddLayer);
        Ok(())
    }

    fn fit_bounds(&mut self, bounds: LatLngBounds) -> Result<(), EngineError> {
        push(&self.log, Event::FitBounds(bounds));
        Ok(())
    }

    fn destroy(&mut self) {
        push(&self.log, Event::Destroy);
    }
}

pub struct RecordingEngine {
    log: EventLog,
}

impl MapEngine for RecordingEngine {
    fn create(
        &self,
        _container: &mut dyn Container,
        center: LatLng,
        zoom: u8,
    ) -> Result<Box<dyn MapInstance>, EngineError> {
        push(&self.log, Event::Create { center, zoom });
        Ok(Box::new(RecordingInstance {
            log: self.log.clone(),
        }))
    }

    fn tile_layer(
        &self,
        url_template: &str,
        attribution: &str,
    ) -> Result<Arc<dyn MapLayer>, EngineError> {
        push(
            &self.log,
            Event::TileLayer {
                url: url_template.to_string(),
                attribution: attribution.to_string(),
            },
        );
        Ok(Arc::new(FixedLayer {
            bounds: LatLngBounds::WORLD,
        }))
    }
}

pub struct RecordingAdapter {
    log: EventLog,
}

impl LayerAdapter for RecordingAdapter {
    fn band_layer(
        &self,
        raster: Arc<dyn Raster>,
        spec: rastermap::BandLayerSpec,
    ) -> Result<Arc<dyn MapLayer>, LayerError> {
        let available = raster.band_count();
        if spec.band.index() as usize > available {
            return Err(LayerError::MissingBand((spec.band.index(), available)));
        }
        push(&self.log, Event::BandLayer(spec.band));
        Ok(Arc::new(FixedLayer {
            bounds: raster.band_bounds(spec.band),
        }))
    }
}

/// Decodes any non-empty input into a raster with fixed geometry.
pub struct FixedDecoder {
    pub bands: usize,
    pub bounds: LatLngBounds,
}

impl RasterDecoder for FixedDecoder {
    fn decode<'a>(&'a self, bytes: &'a [u8]) -> BoxFuture<'a, DecodeResult<Arc<dyn Raster>>> {
        async move {
            if bytes.is_empty() {
                return Err(DecodeError::TruncatedInput(0));
            }
            Ok(Arc::new(StaticRaster::new(self.bands, self.bounds)) as Arc<dyn Raster>)
        }
        .boxed()
    }
}

/// Decodes `b"slow"` only after the gate is notified; anything else
/// decodes immediately. Lets a test hold one rebuild in flight while a
/// newer one completes.
pub struct GatedDecoder {
    pub gate: Arc<Notify>,
    pub slow_bounds: LatLngBounds,
    pub fast_bounds: LatLngBounds,
}

impl RasterDecoder for GatedDecoder {
    fn decode<'a>(&'a self, bytes: &'a [u8]) -> BoxFuture<'a, DecodeResult<Arc<dyn Raster>>> {
        async move {
            let bounds = if bytes == b"slow".as_slice() {
                self.gate.notified().await;
                self.slow_bounds
            } else {
                self.fast_bounds
            };
            Ok(Arc::new(StaticRaster::new(4, bounds)) as Arc<dyn Raster>)
        }
        .boxed()
    }
}

pub fn recording_view(decoder: Arc<dyn RasterDecoder>) -> (MapView, EventLog) {
    let log = new_log();
    let view = MapView::new(
        Arc::new(RecordingEngine { log: log.clone() }),
        decoder,
        Arc::new(RecordingAdapter { log: log.clone() }),
        Box::new(RecordingContainer { log: log.clone() }),
        MapViewConfig::default(),
    );
    (view, log)
}

pub fn count(log: &EventLog, pred: impl Fn(&Event) -> bool) -> usize {
    events(log).iter().filter(|e| pred(e)).count()
}
