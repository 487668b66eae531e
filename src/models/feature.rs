use serde::{Deserialize, Serialize};

use crate::models::LatLng;

/// One entity of the network: a person, a city, a country, pinned to a
/// geographic position.
///
/// Relations are owned by the declaring point. `target` is the label of the
/// related entity, not a reference to another feature object; line features
/// carry the drawable form of the same relationships.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointFeature {
    /// Source-assigned identifier, kept as an opaque string.
    pub id: String,
    pub label: String,
    /// Category the entity belongs to (`Person`, `City`, `Country`, ...).
    /// Drives marker styling; unknown categories get the neutral default.
    #[serde(rename = "type")]
    pub entity_type: String,
    #[serde(default)]
    pub relations: Vec<Relation>,
    pub position: LatLng,
}

/// One relationship as declared on a point feature's property list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relation {
    /// Relationship name (`kent`, `In Land`, ...).
    pub rel: String,
    pub dir: Direction,
    /// Label of the related entity.
    pub target: String,
}

/// Direction of a relation as seen from the declaring entity.
///
/// The dataset encodes directions with the Dutch prepositions of the source
/// pipeline: `naar` ("to") for outgoing, `van` ("from") for incoming. Those
/// stay the wire values; English spellings are accepted on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    #[serde(rename = "naar", alias = "outgoing")]
    Outgoing,
    #[serde(rename = "van", alias = "incoming")]
    Incoming,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Outgoing => "naar",
            Self::Incoming => "van",
        }
    }
}

/// One relationship drawn as a line between two entities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineFeature {
    pub relationship: String,
    pub source_id: String,
    pub target_id: String,
    pub source_label: String,
    pub target_label: String,
    /// The two endpoint positions, source first.
    pub path: [LatLng; 2],
}

/// A feature of the network dataset.
///
/// The source format dispatches on the GeoJSON geometry type string; here
/// that becomes an exhaustive sum type so every consumer is forced to handle
/// both shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NetworkFeature {
    Point(PointFeature),
    Line(LineFeature),
}

impl NetworkFeature {
    pub fn as_point(&self) -> Option<&PointFeature> {
        match self {
            Self::Point(point) => Some(point),
            Self::Line(_) => None,
        }
    }

    pub fn as_line(&self) -> Option<&LineFeature> {
        match self {
            Self::Line(line) => Some(line),
            Self::Point(_) => None,
        }
    }
}
