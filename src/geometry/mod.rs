//! Geometry shapes and projection dispatch
//!
//! This module provides the geometry model (GeoJSON kinds, features,
//! collections) and the projector that reworks their coordinates between
//! coordinate reference systems.

mod projector;
mod shape;
#[cfg(test)]
mod tests;

// Re-export key types
pub use self::projector::FeatureProjector;
pub use self::shape::{Feature, FeatureCollection, Geometry, GeometryKind};
