use crate::band::Band;
use crate::engine::{Container, MapEngine, MapInstance, MapLayer};
use crate::error::{MapViewError, MapViewResult};
use crate::layer::{BandLayerSpec, LayerAdapter};
use crate::raster::{Raster, RasterDecoder};
use crate::source::SourceFile;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, warn};

mod config;

pub use config::{
    MapViewConfig, DEFAULT_CENTER, DEFAULT_RESOLUTION, DEFAULT_TILE_ATTRIBUTION, DEFAULT_TILE_URL,
    DEFAULT_ZOOM,
};

/// The view's instance state. Either no map exists, or exactly one map
/// with its four band layers does; there is no in-between.
enum MapHandle {
    None,
    Active {
        instance: Box<dyn MapInstance>,
        layers: [Arc<dyn MapLayer>; 4],
    },
}

/// Outcome of one input change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rebuild {
    /// The input was cleared; no instance exists.
    Cleared,
    /// A new instance with four band layers is active.
    Built,
    /// A newer input arrived while this rebuild was in flight; its result
    /// was discarded without touching the visible state.
    Superseded,
}

/// Owns the mapping from "current source file" to "current map instance
/// plus four band layers", and tears the old state down before building
/// the new.
///
/// Rebuilds are keyed by a monotone generation counter: every call to
/// [`MapView::set_source`] or [`MapView::teardown`] bumps it, and a rebuild
/// that notices a newer generation after any await point abandons its work.
pub struct MapView {
    engine: Arc<dyn MapEngine>,
    decoder: Arc<dyn RasterDecoder>,
    adapter: Arc<dyn LayerAdapter>,
    container: Mutex<Box<dyn Container>>,
    config: MapViewConfig,
    handle: Mutex<MapHandle>,
    generation: AtomicU64,
}

impl MapView {
    pub fn new(
        engine: Arc<dyn MapEngine>,
        decoder: Arc<dyn RasterDecoder>,
        adapter: Arc<dyn LayerAdapter>,
        container: Box<dyn Container>,
        config: MapViewConfig,
    ) -> Self {
        Self {
            engine,
            decoder,
            adapter,
            container: Mutex::new(container),
            config,
            handle: Mutex::new(MapHandle::None),
            generation: AtomicU64::new(0),
        }
    }

    pub fn config(&self) -> &MapViewConfig {
        &self.config
    }

    pub fn is_active(&self) -> bool {
        matches!(*self.lock_handle(), MapHandle::Active { .. })
    }

    /// Reacts to a change of the input file.
    ///
    /// The current instance is always destroyed first and the container
    /// cleared. With no source that is the whole job; otherwise the source
    /// is read and decoded, and a fresh instance with a base tile layer
    /// and four band layers is built and fit to the red band's bounds.
    ///
    /// Decode and read failures are returned to the caller; the view is
    /// left in the empty state.
    pub async fn set_source(&self, source: Option<&dyn SourceFile>) -> MapViewResult<Rebuild> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.destroy_current();
        self.lock_container().clear();

        let Some(source) = source else {
            info!("source cleared, map removed");
            return Ok(Rebuild::Cleared);
        };

        let bytes = source.read_all().await?;
        if self.is_stale(generation) {
            debug!("rebuild {generation} superseded during read");
            return Ok(Rebuild::Superseded);
        }

        debug!("decoding {} byte source", bytes.len());
        let raster = self.decoder.decode(&bytes).await?;
        if self.is_stale(generation) {
            debug!("rebuild {generation} superseded during decode");
            return Ok(Rebuild::Superseded);
        }

        self.build(generation, raster)
    }

    /// Destroys the current instance, if any, and releases the handle.
    /// Safe to call at any time, any number of times.
    pub fn teardown(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.destroy_current();
    }

    fn build(&self, generation: u64, raster: Arc<dyn Raster>) -> MapViewResult<Rebuild> {
        let bands = raster.band_count();
        if bands < Band::ALL.len() {
            warn!("raster has {bands} bands, need {}", Band::ALL.len());
        }

        let mut instance = {
            let mut container = self.lock_container();
            self.engine
                .create(&mut **container, self.config.center, self.config.zoom)?
        };

        let layers = match self.populate(&mut *instance, &raster) {
            Ok(layers) => layers,
            Err(e) => {
                // A half-assembled instance must not outlive the error.
                instance.destroy();
                return Err(e);
            }
        };

        let mut handle = self.lock_handle();
        if self.is_stale(generation) {
            drop(handle);
            debug!("rebuild {generation} superseded before install, discarding instance");
            instance.destroy();
            return Ok(Rebuild::Superseded);
        }
        if let MapHandle::Active {
            instance: mut old, ..
        } = std::mem::replace(&mut *handle, MapHandle::Active { instance, layers }) {
            // Unreachable in practice: the teardown at the top of
            // set_source cleared the handle, and stale installers bail
            // above. Destroy anyway so no instance can leak.
            warn!("replaced a live map instance during install");
            old.destroy();
        }
        info!("map instance active");
        Ok(Rebuild::Built)
    }

    /// Attaches the base tile layer and the four band layers, then fits
    /// the view to the red band's bounds.
    fn populate(
        &self,
        instance: &mut dyn MapInstance,
        raster: &Arc<dyn Raster>,
    ) -> MapViewResult<[Arc<dyn MapLayer>; 4]> {
        let base = self
            .engine
            .tile_layer(&self.config.tile_url_template, &self.config.tile_attribution)?;
        instance.add_layer(base)?;

        let mut attach = |spec: BandLayerSpec| -> MapViewResult<Arc<dyn MapLayer>> {
            let layer = self.adapter.band_layer(raster.clone(), spec)?;
            instance.add_layer(layer.clone())?;
            Ok(layer)
        };
        let [r, g, b, a] = self.config.band_specs();
        let red = attach(r)?;
        let green = attach(g)?;
        let blue = attach(b)?;
        let alpha = attach(a)?;

        // The red layer's bounds stand in for the raster's full extent.
        let bounds = red.bounds();
        instance.fit_bounds(bounds)?;
        debug!("attached 4 band layers, fit to {bounds}");

        Ok([red, green, blue, alpha])
    }

    fn destroy_current(&self) {
        let mut handle = self.lock_handle();
        if let MapHandle::Active { mut instance, .. } =
            std::mem::replace(&mut *handle, MapHandle::None)
        {
            instance.destroy();
            debug!("map instance destroyed");
        }
    }

    fn is_stale(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) != generation
    }

    // A poisoned lock still holds a coherent handle; recover it so
    // teardown stays infallible.
    fn lock_handle(&self) -> MutexGuard<'_, MapHandle> {
        self.handle.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_container(&self) -> MutexGuard<'_, Box<dyn Container>> {
        self.container
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Display for MapView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = if self.is_active() { "active" } else { "empty" };
        write!(f, "MapView({state})")
    }
}
