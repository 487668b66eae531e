//! Domain models for NetAtlas.
//!
//! # Core Concepts
//!
//! The dataset is a flat, ordered [`FeatureCollection`] of [`NetworkFeature`]s,
//! loaded once at startup and immutable afterwards. A feature is either:
//!
//! - a [`PointFeature`]: one entity of the network (a person, a city, ...),
//!   pinned to a geographic position and carrying its [`Relation`]s as owned
//!   data, or
//! - a [`LineFeature`]: one relationship drawn between two entities,
//!   referencing them by id and label.
//!
//! Filtering never touches these types: visibility is derived per filter pass
//! (see [`crate::view`]) and views borrow into the collection rather than
//! copying it.

mod collection;
mod feature;
mod geometry;

pub use collection::*;
pub use feature::*;
pub use geometry::*;
