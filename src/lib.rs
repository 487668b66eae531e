//! NetAtlas: an interactive web map over a pre-computed network graph.
//!
//! The dataset — people, places, and the relationships between them,
//! extracted elsewhere into a GeoJSON file — is loaded once into an
//! immutable [`store::FeatureStore`]. Every user filter action then runs
//! the same synchronous cycle: evaluate the predicate and build a borrowed
//! [`view::View`], replace the rendered layer set on the map canvas
//! ([`render`]), fit the viewport, and hand the browser shell the resulting
//! scene ([`api`]).

pub mod api;
pub mod controller;
pub mod models;
pub mod render;
pub mod store;
pub mod view;
pub mod web;
