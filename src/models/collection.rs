use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};

use crate::models::{LineFeature, NetworkFeature, PointFeature};

/// The ordered, immutable set of features loaded from the dataset.
///
/// Order is the order of the source document and is preserved through every
/// derived view (filters are stable).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    features: Vec<NetworkFeature>,
}

impl FeatureCollection {
    pub fn new(features: Vec<NetworkFeature>) -> Self {
        Self { features }
    }

    pub fn features(&self) -> &[NetworkFeature] {
        &self.features
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = &PointFeature> {
        self.features.iter().filter_map(NetworkFeature::as_point)
    }

    pub fn lines(&self) -> impl Iterator<Item = &LineFeature> {
        self.features.iter().filter_map(NetworkFeature::as_line)
    }

    /// Distinct entity types, sorted. Feeds the type-selection control.
    pub fn entity_types(&self) -> Vec<String> {
        let types: BTreeSet<&str> = self.points().map(|p| p.entity_type.as_str()).collect();
        types.into_iter().map(str::to_string).collect()
    }

    /// Ids of all point features, for endpoint lookups.
    pub fn point_ids(&self) -> HashSet<&str> {
        self.points().map(|p| p.id.as_str()).collect()
    }
}
