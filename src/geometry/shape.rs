//! Geometry shapes and feature containers
//!
//! The GeoJSON geometry kinds this crate reprojects, as a closed tagged
//! union: the shape of a value never changes under transformation, only
//! its leaf coordinates. (De)serialization follows the GeoJSON encoding,
//! with geometries tagged by their "type" member.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::coordinate::Point;
use crate::errors::{ProjError, ProjResult};

/// Discriminator for the supported geometry kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryKind {
    Point,
    MultiPoint,
    LineString,
    MultiLineString,
    Polygon,
    MultiPolygon,
}

impl GeometryKind {
    /// The GeoJSON "type" tag for this kind
    pub fn name(&self) -> &'static str {
        match self {
            GeometryKind::Point => "Point",
            GeometryKind::MultiPoint => "MultiPoint",
            GeometryKind::LineString => "LineString",
            GeometryKind::MultiLineString => "MultiLineString",
            GeometryKind::Polygon => "Polygon",
            GeometryKind::MultiPolygon => "MultiPolygon",
        }
    }

    /// Parse a GeoJSON "type" tag
    ///
    /// Tags outside the supported set (for example "GeometryCollection")
    /// fail with `ProjError::UnsupportedGeometryKind`.
    pub fn parse(tag: &str) -> ProjResult<GeometryKind> {
        match tag {
            "Point" => Ok(GeometryKind::Point),
            "MultiPoint" => Ok(GeometryKind::MultiPoint),
            "LineString" => Ok(GeometryKind::LineString),
            "MultiLineString" => Ok(GeometryKind::MultiLineString),
            "Polygon" => Ok(GeometryKind::Polygon),
            "MultiPolygon" => Ok(GeometryKind::MultiPolygon),
            other => Err(ProjError::UnsupportedGeometryKind(other.to_string())),
        }
    }
}

impl FromStr for GeometryKind {
    type Err = ProjError;

    fn from_str(tag: &str) -> ProjResult<GeometryKind> {
        GeometryKind::parse(tag)
    }
}

impl fmt::Display for GeometryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A geometry value: coordinates nested per kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Point { coordinates: Point },
    MultiPoint { coordinates: Vec<Point> },
    LineString { coordinates: Vec<Point> },
    MultiLineString { coordinates: Vec<Vec<Point>> },
    Polygon { coordinates: Vec<Vec<Point>> },
    MultiPolygon { coordinates: Vec<Vec<Vec<Point>>> },
}

impl Geometry {
    /// The kind of this geometry
    pub fn kind(&self) -> GeometryKind {
        match self {
            Geometry::Point { .. } => GeometryKind::Point,
            Geometry::MultiPoint { .. } => GeometryKind::MultiPoint,
            Geometry::LineString { .. } => GeometryKind::LineString,
            Geometry::MultiLineString { .. } => GeometryKind::MultiLineString,
            Geometry::Polygon { .. } => GeometryKind::Polygon,
            Geometry::MultiPolygon { .. } => GeometryKind::MultiPolygon,
        }
    }
}

/// A feature: one geometry plus pass-through metadata
///
/// The `id` and `properties` members are carried verbatim; transformation
/// only ever touches the geometry's coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub struct Feature {
    pub geometry: Geometry,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Map<String, Value>>,
}

impl Feature {
    /// Wrap a geometry with no metadata
    pub fn new(geometry: Geometry) -> Self {
        Feature {
            geometry,
            id: None,
            properties: None,
        }
    }
}

/// An ordered collection of features
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    /// Collect features into a collection
    pub fn new(features: Vec<Feature>) -> Self {
        FeatureCollection { features }
    }
}
