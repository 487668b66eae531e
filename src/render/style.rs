//! Fixed styling tables for markers and relationship paths.
//!
//! Styles serialize in the shape the browser map consumes directly
//! (`fillColor`, `fillOpacity`, ...), so the shell can pass them through
//! untouched.

use serde::Serialize;

/// Neutral fallback for entity types outside the palette.
pub const DEFAULT_NODE_COLOR: &str = "#3388ff";

/// De-emphasized stroke for ordinary relationship paths.
pub const DEFAULT_PATH_COLOR: &str = "#555555";

/// Visual style of a point marker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerStyle {
    pub radius: f64,
    pub fill_color: &'static str,
    pub color: &'static str,
    pub weight: f64,
    pub opacity: f64,
    pub fill_opacity: f64,
}

impl MarkerStyle {
    fn new(radius: f64, fill_color: &'static str) -> Self {
        Self {
            radius,
            fill_color,
            color: "#000",
            weight: 1.0,
            opacity: 1.0,
            fill_opacity: 0.7,
        }
    }
}

/// Marker style for an entity type. Unknown types get the neutral default.
pub fn marker_style(entity_type: &str) -> MarkerStyle {
    match entity_type {
        "Person" => MarkerStyle::new(4.0, "#E91E63"),
        "City" => MarkerStyle::new(6.0, "#3F51B5"),
        "Country" => MarkerStyle::new(8.0, "#4CAF50"),
        _ => MarkerStyle::new(6.0, DEFAULT_NODE_COLOR),
    }
}

/// Visual style of a relationship path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PathStyle {
    pub color: &'static str,
    pub weight: f64,
    pub opacity: f64,
}

/// Path style for a relationship name. `In Land` (entity-to-country
/// containment) is highlighted; everything else stays de-emphasized so
/// markers dominate visually.
pub fn path_style(relationship: &str) -> PathStyle {
    match relationship {
        "In Land" => PathStyle {
            color: "#FF9800",
            weight: 2.0,
            opacity: 0.8,
        },
        _ => PathStyle {
            color: DEFAULT_PATH_COLOR,
            weight: 1.0,
            opacity: 0.8,
        },
    }
}
