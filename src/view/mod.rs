//! The filter side of the filter/redraw cycle: a pure predicate over point
//! features and a stable, borrowing view builder.
//!
//! Nothing here mutates or copies the collection. A [`View`] is a pair of
//! reference lists into the store, rebuilt from scratch on every filter
//! action and discarded after rendering.

use std::collections::HashSet;

use crate::models::{FeatureCollection, LineFeature, PointFeature};

/// The type-selection control's value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TypeFilter {
    #[default]
    All,
    Only(String),
}

impl TypeFilter {
    /// Interpret the raw control value: empty or `all` selects everything.
    pub fn from_param(raw: &str) -> Self {
        if raw.is_empty() || raw.eq_ignore_ascii_case("all") {
            Self::All
        } else {
            Self::Only(raw.to_string())
        }
    }
}

/// The two user inputs of a filter action, read together when the filter
/// triggers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterQuery {
    pub search: String,
    pub entity_type: TypeFilter,
}

impl FilterQuery {
    pub fn new(search: impl Into<String>, entity_type: TypeFilter) -> Self {
        Self {
            search: search.into(),
            entity_type,
        }
    }

    /// Whether a point feature is visible under this query.
    ///
    /// Search matches case-insensitively on the label substring; an empty
    /// search matches everything, an empty label matches nothing else. Both
    /// conditions must hold.
    pub fn matches(&self, point: &PointFeature) -> bool {
        let search_ok = self.search.is_empty()
            || point
                .label
                .to_lowercase()
                .contains(&self.search.to_lowercase());

        let type_ok = match &self.entity_type {
            TypeFilter::All => true,
            TypeFilter::Only(entity_type) => point.entity_type == *entity_type,
        };

        search_ok && type_ok
    }
}

/// How line features respond to filtering.
///
/// The observed system never hides lines, even when both endpoints are
/// filtered out; that stays the default. `BothEndpoints` is the stricter
/// opt-in: a line shows only while both of its endpoint points are visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineVisibility {
    #[default]
    Always,
    BothEndpoints,
}

impl LineVisibility {
    /// Interpret the scene request's `lines` parameter.
    pub fn from_param(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case("strict") {
            Self::BothEndpoints
        } else {
            Self::Always
        }
    }
}

/// The subset of features to display, partitioned by shape. Borrows the
/// collection; order matches the source document.
#[derive(Debug, Clone)]
pub struct View<'a> {
    pub points: Vec<&'a PointFeature>,
    pub lines: Vec<&'a LineFeature>,
}

impl<'a> View<'a> {
    /// Filter `collection` through `query` and partition the survivors.
    pub fn build(
        collection: &'a FeatureCollection,
        query: &FilterQuery,
        line_visibility: LineVisibility,
    ) -> Self {
        let points: Vec<&PointFeature> =
            collection.points().filter(|p| query.matches(p)).collect();

        let lines: Vec<&LineFeature> = match line_visibility {
            LineVisibility::Always => collection.lines().collect(),
            LineVisibility::BothEndpoints => {
                let visible: HashSet<&str> = points.iter().map(|p| p.id.as_str()).collect();
                collection
                    .lines()
                    .filter(|l| {
                        visible.contains(l.source_id.as_str())
                            && visible.contains(l.target_id.as_str())
                    })
                    .collect()
            }
        };

        Self { points, lines }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty() && self.lines.is_empty()
    }
}
