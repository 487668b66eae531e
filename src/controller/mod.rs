//! The application-state object behind the interactive cycle.
//!
//! One [`MapController`] is constructed at startup and owns everything the
//! cycle touches: the loaded store, the renderer with its live layer set,
//! and the canvas. The HTTP layer shares it behind `Arc<Mutex<_>>`, which
//! serializes filter/render cycles — at most one rendered layer set can
//! ever exist, even on a multi-threaded runtime.

use thiserror::Error;

use crate::render::{self, Renderer, Scene, SceneCanvas};
use crate::store::{DataSource, FeatureStore, LoadError};
use crate::view::{FilterQuery, LineVisibility, View};

/// Load lifecycle of the dataset: `Idle -> Loading -> Ready`, or
/// `Loading -> Error`, which is terminal for the attempt. Nothing retries;
/// recovery is a process restart.
#[derive(Debug)]
pub enum LoadState {
    Idle,
    Loading,
    Ready(FeatureStore),
    Error(String),
}

/// Why a filter action could not run.
#[derive(Debug, Error)]
pub enum ControllerError {
    #[error("dataset not ready: {0}")]
    NotReady(String),
}

pub struct MapController {
    state: LoadState,
    renderer: Renderer,
    canvas: SceneCanvas,
}

impl MapController {
    pub fn new() -> Self {
        Self {
            state: LoadState::Idle,
            renderer: Renderer::new(),
            canvas: SceneCanvas::new(),
        }
    }

    /// Construct a controller that is already `Ready` with `store`, with
    /// the unfiltered scene rendered.
    pub fn with_store(store: FeatureStore) -> Self {
        let mut controller = Self::new();
        controller.finish_load(store);
        controller
    }

    /// Load the dataset and render the initial, unfiltered scene. A failed
    /// load moves the controller to `Error` and stays there.
    pub async fn load(&mut self, source: &DataSource) -> Result<(), LoadError> {
        self.state = LoadState::Loading;
        match FeatureStore::load(source).await {
            Ok(store) => {
                self.finish_load(store);
                Ok(())
            }
            Err(e) => {
                tracing::error!("dataset load failed: {}", e);
                self.state = LoadState::Error(e.to_string());
                Err(e)
            }
        }
    }

    fn finish_load(&mut self, store: FeatureStore) {
        self.state = LoadState::Ready(store);
        if let Err(e) = self.apply_filter(&FilterQuery::default(), LineVisibility::Always) {
            tracing::error!("initial render failed: {}", e);
        }
    }

    /// Run one `Ready -> Filtering -> Ready` cycle: build the view, replace
    /// the rendered layer set, fit the viewport, and snapshot the scene.
    pub fn apply_filter(
        &mut self,
        query: &FilterQuery,
        line_visibility: LineVisibility,
    ) -> Result<Scene, ControllerError> {
        let store = match &self.state {
            LoadState::Ready(store) => store,
            LoadState::Idle | LoadState::Loading => {
                return Err(ControllerError::NotReady(
                    "dataset is still loading".to_string(),
                ))
            }
            LoadState::Error(reason) => return Err(ControllerError::NotReady(reason.clone())),
        };

        let view = View::build(store.collection(), query, line_visibility);
        self.canvas.clear_fit();
        let summary = self.renderer.render(&view, &mut self.canvas);
        render::fit_viewport(&summary, &mut self.canvas);
        tracing::debug!(
            "rendered {} markers, {} paths ({} skipped)",
            summary.markers,
            summary.paths,
            summary.skipped
        );
        Ok(self.canvas.scene())
    }

    /// The loaded store, once `Ready`.
    pub fn store(&self) -> Option<&FeatureStore> {
        match &self.state {
            LoadState::Ready(store) => Some(store),
            _ => None,
        }
    }

    /// The load failure message, once in `Error`.
    pub fn load_error(&self) -> Option<&str> {
        match &self.state {
            LoadState::Error(reason) => Some(reason),
            _ => None,
        }
    }
}

impl Default for MapController {
    fn default() -> Self {
        Self::new()
    }
}
