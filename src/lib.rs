//! Reproject GeoJSON features and geometries between coordinate
//! reference systems.
//!
//! The common geographic↔spherical-mercator conversion takes a
//! closed-form fast path; every other CRS pair resolves through a
//! memoizing projection registry backed by proj4rs.

pub mod coordinate;
pub mod crs;
pub mod errors;
pub mod geometry;

pub use crate::coordinate::{mercator, BoundingBox, Point, PointTransformer};
pub use crate::crs::{shared, CrsRef, IdentifierPolicy, Projection, ProjectionRegistry};
pub use crate::errors::{ProjError, ProjResult};
pub use crate::geometry::{Feature, FeatureCollection, FeatureProjector, Geometry, GeometryKind};
