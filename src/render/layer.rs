//! Layer types: the drawable output of a render pass.

use serde::Serialize;

use crate::models::{LatLng, LatLngBounds};
use crate::render::style::{MarkerStyle, PathStyle};

/// A styled, popup-carrying marker for one point feature.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Marker {
    pub feature_id: String,
    pub position: LatLng,
    pub style: MarkerStyle,
    pub popup: String,
}

/// The clustering aggregate all markers of a render pass go into.
///
/// Clustering itself (merge, expand, spiderfy at max zoom) is the map
/// widget's job; the core only guarantees that markers arrive as one group
/// so co-located entities stay individually reachable.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ClusterLayer {
    pub markers: Vec<Marker>,
}

impl ClusterLayer {
    /// Geographic bounds over the grouped markers, `None` when empty.
    pub fn bounds(&self) -> Option<LatLngBounds> {
        LatLngBounds::covering(self.markers.iter().map(|m| m.position))
    }
}

/// A styled two-point path for one line feature.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PathLayer {
    pub path: [LatLng; 2],
    pub style: PathStyle,
    pub popup: String,
}

impl PathLayer {
    pub fn bounds(&self) -> Option<LatLngBounds> {
        LatLngBounds::covering(self.path)
    }
}

/// Anything that can be attached to the map canvas.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Layer {
    Cluster(ClusterLayer),
    Path(PathLayer),
}

impl Layer {
    pub fn bounds(&self) -> Option<LatLngBounds> {
        match self {
            Self::Cluster(cluster) => cluster.bounds(),
            Self::Path(path) => path.bounds(),
        }
    }
}
