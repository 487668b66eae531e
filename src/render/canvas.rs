//! The map collaborator seam.
//!
//! [`MapCanvas`] is the interface the renderer drives: add/remove layers,
//! fit the viewport. [`SceneCanvas`] is the production implementation — a
//! server-side mirror of the browser map whose snapshot ([`Scene`]) the
//! shell applies wholesale. Tests substitute recording canvases to observe
//! the renderer's layer lifecycle.

use serde::Serialize;

use crate::models::LatLngBounds;
use crate::render::layer::Layer;

/// Opaque handle to a layer attached to a canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayerHandle(u64);

impl LayerHandle {
    /// Mint a handle. Canvas implementations are responsible for keeping
    /// their handles unique.
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }
}

/// The operations the renderer needs from a map.
pub trait MapCanvas {
    fn add_layer(&mut self, layer: Layer) -> LayerHandle;
    fn remove_layer(&mut self, handle: LayerHandle);
    fn fit_bounds(&mut self, bounds: LatLngBounds, padding_px: u32);
}

/// A viewport-fit instruction, with pixel padding so boundary markers are
/// not clipped at the viewport edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FitRequest {
    pub bounds: LatLngBounds,
    pub padding_px: u32,
}

/// Snapshot of a canvas: the layers currently attached, plus the fit
/// requested by the render cycle that produced it (if any). The shell
/// replaces its whole display with this on every filter action.
#[derive(Debug, Clone, Serialize)]
pub struct Scene {
    pub layers: Vec<Layer>,
    pub fit: Option<FitRequest>,
}

/// Server-side mirror of the browser map state.
#[derive(Debug, Default)]
pub struct SceneCanvas {
    next_handle: u64,
    layers: Vec<(LayerHandle, Layer)>,
    fit: Option<FitRequest>,
}

impl SceneCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop the previous cycle's fit instruction. Called at the start of
    /// each render cycle so a render with nothing to fit leaves the
    /// viewport alone instead of replaying stale bounds.
    pub fn clear_fit(&mut self) {
        self.fit = None;
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Snapshot the current state for the shell.
    pub fn scene(&self) -> Scene {
        Scene {
            layers: self.layers.iter().map(|(_, layer)| layer.clone()).collect(),
            fit: self.fit,
        }
    }
}

impl MapCanvas for SceneCanvas {
    fn add_layer(&mut self, layer: Layer) -> LayerHandle {
        let handle = LayerHandle(self.next_handle);
        self.next_handle += 1;
        self.layers.push((handle, layer));
        handle
    }

    fn remove_layer(&mut self, handle: LayerHandle) {
        self.layers.retain(|(h, _)| *h != handle);
    }

    fn fit_bounds(&mut self, bounds: LatLngBounds, padding_px: u32) {
        self.fit = Some(FitRequest { bounds, padding_px });
    }
}
