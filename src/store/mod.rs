//! The Feature Store: loads the pre-built GeoJSON dataset and holds the
//! authoritative, immutable [`FeatureCollection`].
//!
//! Loading happens once at startup, from a local file or over HTTP. The
//! document must be a GeoJSON FeatureCollection; individual features that
//! fail to decode (missing geometry, bad properties, truncated lines) are
//! skipped with a warning so one defective row cannot take down the whole
//! map. Only an unreadable document fails the load.

use std::fmt;
use std::path::PathBuf;

use geojson::GeoJson;
use serde::{Deserialize, Deserializer};
use thiserror::Error;

use crate::models::{
    FeatureCollection, LatLng, LineFeature, NetworkFeature, PointFeature, Relation,
};

/// Where the dataset comes from.
#[derive(Debug, Clone)]
pub enum DataSource {
    Path(PathBuf),
    Url(String),
}

impl DataSource {
    /// Interpret a CLI/env value: anything with an `http(s)` scheme is a
    /// URL, everything else a filesystem path.
    pub fn parse(raw: &str) -> Self {
        if raw.starts_with("http://") || raw.starts_with("https://") {
            Self::Url(raw.to_string())
        } else {
            Self::Path(PathBuf::from(raw))
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path(path) => write!(f, "{}", path.display()),
            Self::Url(url) => write!(f, "{}", url),
        }
    }
}

/// Why a dataset could not be loaded. Load failures are terminal for the
/// attempt: the caller surfaces them, nothing retries.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read dataset file: {0}")]
    Io(#[from] std::io::Error),

    #[error("dataset fetch failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid GeoJSON: {0}")]
    Geojson(#[from] geojson::Error),

    #[error("dataset is not a GeoJSON FeatureCollection")]
    NotACollection,
}

/// A line endpoint id with no matching point feature. Reported by
/// `netatlas check`; rendering ignores these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DanglingEndpoint {
    pub relationship: String,
    pub missing_id: String,
}

/// Read-only holder of the loaded dataset.
#[derive(Debug, Clone)]
pub struct FeatureStore {
    collection: FeatureCollection,
    skipped: usize,
}

impl FeatureStore {
    /// Fetch and decode the dataset from `source`.
    pub async fn load(source: &DataSource) -> Result<Self, LoadError> {
        tracing::info!("loading dataset from {}", source);
        let raw = match source {
            DataSource::Path(path) => tokio::fs::read_to_string(path).await?,
            DataSource::Url(url) => {
                reqwest::get(url)
                    .await?
                    .error_for_status()?
                    .text()
                    .await?
            }
        };
        Self::from_geojson_str(&raw)
    }

    /// Decode a GeoJSON document. Defective features are skipped and
    /// counted, not fatal.
    pub fn from_geojson_str(raw: &str) -> Result<Self, LoadError> {
        let geojson = raw.parse::<GeoJson>()?;
        let GeoJson::FeatureCollection(collection) = geojson else {
            return Err(LoadError::NotACollection);
        };

        let mut features = Vec::with_capacity(collection.features.len());
        let mut skipped = 0;
        for (index, feature) in collection.features.into_iter().enumerate() {
            match decode_feature(feature) {
                Ok(feature) => features.push(feature),
                Err(reason) => {
                    tracing::warn!("skipping feature {}: {}", index, reason);
                    skipped += 1;
                }
            }
        }

        let store = Self {
            collection: FeatureCollection::new(features),
            skipped,
        };
        tracing::info!(
            "dataset loaded: {} points, {} lines, {} skipped",
            store.collection.points().count(),
            store.collection.lines().count(),
            skipped
        );
        Ok(store)
    }

    /// Wrap an already-decoded collection. Test seam; also the reason the
    /// store never needs mutation after construction.
    pub fn from_collection(collection: FeatureCollection) -> Self {
        Self {
            collection,
            skipped: 0,
        }
    }

    pub fn collection(&self) -> &FeatureCollection {
        &self.collection
    }

    /// How many source features were dropped during decode.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Line endpoints referencing ids with no matching point feature, in
    /// collection order.
    pub fn dangling_endpoints(&self) -> Vec<DanglingEndpoint> {
        let ids = self.collection.point_ids();
        let mut dangling = Vec::new();
        for line in self.collection.lines() {
            for endpoint in [&line.source_id, &line.target_id] {
                if !ids.contains(endpoint.as_str()) {
                    dangling.push(DanglingEndpoint {
                        relationship: line.relationship.clone(),
                        missing_id: endpoint.clone(),
                    });
                }
            }
        }
        dangling
    }
}

// ============================================================
// GeoJSON decoding
// ============================================================

/// Point feature properties as they appear in the source document.
#[derive(Deserialize)]
struct PointProperties {
    #[serde(deserialize_with = "id_string")]
    id: String,
    label: String,
    #[serde(rename = "type")]
    entity_type: String,
    #[serde(default)]
    relations: Vec<Relation>,
}

/// Line feature properties as they appear in the source document.
#[derive(Deserialize)]
struct LineProperties {
    relationship: String,
    #[serde(deserialize_with = "id_string")]
    source_id: String,
    #[serde(deserialize_with = "id_string")]
    target_id: String,
    source_label: String,
    target_label: String,
}

/// The extraction pipeline writes numeric ids, older exports string ids.
/// Accept both, normalize to string.
fn id_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number id, got {}",
            other
        ))),
    }
}

fn decode_feature(feature: geojson::Feature) -> Result<NetworkFeature, String> {
    let geometry = feature.geometry.ok_or("missing geometry")?;
    let properties = feature.properties.ok_or("missing properties")?;
    let properties = serde_json::Value::Object(properties);

    match geometry.value {
        geojson::Value::Point(position) => {
            let props: PointProperties = serde_json::from_value(properties)
                .map_err(|e| format!("bad point properties: {}", e))?;
            Ok(NetworkFeature::Point(PointFeature {
                id: props.id,
                label: props.label,
                entity_type: props.entity_type,
                relations: props.relations,
                position: decode_position(&position)?,
            }))
        }
        geojson::Value::LineString(positions) => {
            let props: LineProperties = serde_json::from_value(properties)
                .map_err(|e| format!("bad line properties: {}", e))?;
            let (first, last) = match (positions.first(), positions.last()) {
                (Some(first), Some(last)) if positions.len() >= 2 => (first, last),
                _ => return Err("line has fewer than two positions".to_string()),
            };
            Ok(NetworkFeature::Line(LineFeature {
                relationship: props.relationship,
                source_id: props.source_id,
                target_id: props.target_id,
                source_label: props.source_label,
                target_label: props.target_label,
                path: [decode_position(first)?, decode_position(last)?],
            }))
        }
        other => Err(format!("unsupported geometry type: {}", other.type_name())),
    }
}

/// GeoJSON positions are `[lon, lat]`; the map side wants `lat`/`lng`.
fn decode_position(position: &[f64]) -> Result<LatLng, String> {
    match position {
        [lng, lat, ..] => Ok(LatLng::new(*lat, *lng)),
        _ => Err("position is not a [lon, lat] pair".to_string()),
    }
}
