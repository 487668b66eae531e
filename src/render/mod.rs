//! The Renderer and Viewport Fitter: materialize a filtered [`View`] as
//! styled layers on a [`MapCanvas`], then bound the viewport to the result.
//!
//! The renderer owns the one live layer set. Every render removes the
//! previous set before adding its replacement, so the canvas never carries
//! duplicate or orphaned layers across filter cycles.

pub mod canvas;
pub mod layer;
pub mod popup;
pub mod style;

pub use canvas::{FitRequest, LayerHandle, MapCanvas, Scene, SceneCanvas};
pub use layer::{ClusterLayer, Layer, Marker, PathLayer};

use crate::models::LatLngBounds;
use crate::view::View;

/// Pixel padding applied when fitting, so boundary markers stay visible.
pub const FIT_PADDING_PX: u32 = 24;

/// What a render pass produced.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSummary {
    pub markers: usize,
    pub paths: usize,
    /// Features dropped for non-finite coordinates.
    pub skipped: usize,
    pub marker_bounds: Option<LatLngBounds>,
    pub line_bounds: Option<LatLngBounds>,
}

/// Owner of the live layer set.
#[derive(Debug, Default)]
pub struct Renderer {
    live: Vec<LayerHandle>,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the canvas content with `view`.
    ///
    /// Point features become markers in one cluster layer; line features
    /// become individual paths. Features with non-finite coordinates are
    /// skipped and counted, the rest of the pass proceeds.
    pub fn render(&mut self, view: &View<'_>, canvas: &mut dyn MapCanvas) -> RenderSummary {
        // The previous set must be gone before anything new is attached.
        for handle in self.live.drain(..) {
            canvas.remove_layer(handle);
        }

        let mut skipped = 0;

        let mut cluster = ClusterLayer::default();
        for point in &view.points {
            if !point.position.is_finite() {
                tracing::warn!("skipping marker {}: non-finite position", point.id);
                skipped += 1;
                continue;
            }
            cluster.markers.push(Marker {
                feature_id: point.id.clone(),
                position: point.position,
                style: style::marker_style(&point.entity_type),
                popup: popup::point_popup(point),
            });
        }
        let markers = cluster.markers.len();
        let marker_bounds = cluster.bounds();
        if markers > 0 {
            self.live.push(canvas.add_layer(Layer::Cluster(cluster)));
        }

        let mut paths = 0;
        let mut line_positions = Vec::new();
        for line in &view.lines {
            if !(line.path[0].is_finite() && line.path[1].is_finite()) {
                tracing::warn!(
                    "skipping path {} -> {}: non-finite position",
                    line.source_id,
                    line.target_id
                );
                skipped += 1;
                continue;
            }
            line_positions.extend(line.path);
            self.live.push(canvas.add_layer(Layer::Path(PathLayer {
                path: line.path,
                style: style::path_style(&line.relationship),
                popup: popup::line_popup(line),
            })));
            paths += 1;
        }

        RenderSummary {
            markers,
            paths,
            skipped,
            marker_bounds,
            line_bounds: LatLngBounds::covering(line_positions),
        }
    }
}

/// The Viewport Fitter: bound the viewport to the rendered markers, fall
/// back to the rendered lines, and leave the viewport untouched when the
/// render produced nothing to show.
pub fn fit_viewport(summary: &RenderSummary, canvas: &mut dyn MapCanvas) {
    if let Some(bounds) = summary.marker_bounds.or(summary.line_bounds) {
        canvas.fit_bounds(bounds, FIT_PADDING_PX);
    }
}
