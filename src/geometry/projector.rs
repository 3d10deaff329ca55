//! Geometry traversal and projection dispatch
//!
//! [`FeatureProjector`] walks a geometry value and routes every leaf
//! coordinate pair through the point transformer, preserving the value's
//! shape exactly: kinds, sequence lengths, and nesting never change.
//! Values are reworked in place through an exclusive borrow; on error the
//! traversal stops where it is, so siblings visited before the failure
//! keep their transformed coordinates.

use crate::coordinate::{Point, PointTransformer, Route};
use crate::crs::{self, CrsRef, ProjectionRegistry};
use crate::errors::ProjResult;

use super::shape::{Feature, FeatureCollection, Geometry};

/// Projects geometries, features, and collections between CRSs
pub struct FeatureProjector<'a> {
    transformer: PointTransformer<'a>,
}

impl<'a> FeatureProjector<'a> {
    /// Create a projector resolving through the given registry
    pub fn new(registry: &'a ProjectionRegistry) -> Self {
        FeatureProjector {
            transformer: PointTransformer::new(registry),
        }
    }

    /// The point transformer this projector dispatches to
    pub fn transformer(&self) -> &PointTransformer<'a> {
        &self.transformer
    }

    /// Transform a single point
    pub fn project_point(
        &self,
        input: Option<&CrsRef>,
        output: Option<&CrsRef>,
        point: &mut Point,
    ) -> ProjResult<()> {
        self.transformer.transform(input, output, point)
    }

    /// Transform every point of a multi-point
    pub fn project_multi_point(
        &self,
        input: Option<&CrsRef>,
        output: Option<&CrsRef>,
        points: &mut [Point],
    ) -> ProjResult<()> {
        let route = self.transformer.route(input, output)?;
        Self::line_with(&route, points)
    }

    /// Transform every point of a line string
    pub fn project_line_string(
        &self,
        input: Option<&CrsRef>,
        output: Option<&CrsRef>,
        line: &mut [Point],
    ) -> ProjResult<()> {
        let route = self.transformer.route(input, output)?;
        Self::line_with(&route, line)
    }

    /// Transform every line of a multi-line-string
    pub fn project_multi_line_string(
        &self,
        input: Option<&CrsRef>,
        output: Option<&CrsRef>,
        lines: &mut [Vec<Point>],
    ) -> ProjResult<()> {
        let route = self.transformer.route(input, output)?;
        Self::polygon_with(&route, lines)
    }

    /// Transform every ring of a polygon
    pub fn project_polygon(
        &self,
        input: Option<&CrsRef>,
        output: Option<&CrsRef>,
        rings: &mut [Vec<Point>],
    ) -> ProjResult<()> {
        let route = self.transformer.route(input, output)?;
        Self::polygon_with(&route, rings)
    }

    /// Transform every polygon of a multi-polygon
    pub fn project_multi_polygon(
        &self,
        input: Option<&CrsRef>,
        output: Option<&CrsRef>,
        polygons: &mut [Vec<Vec<Point>>],
    ) -> ProjResult<()> {
        let route = self.transformer.route(input, output)?;
        Self::multi_polygon_with(&route, polygons)
    }

    /// Transform a geometry of any kind
    pub fn project_geometry(
        &self,
        input: Option<&CrsRef>,
        output: Option<&CrsRef>,
        geometry: &mut Geometry,
    ) -> ProjResult<()> {
        let route = self.transformer.route(input, output)?;
        Self::geometry_with(&route, geometry)
    }

    /// Transform a feature's geometry, leaving its metadata untouched
    pub fn project_feature(
        &self,
        input: Option<&CrsRef>,
        output: Option<&CrsRef>,
        feature: &mut Feature,
    ) -> ProjResult<()> {
        let route = self.transformer.route(input, output)?;
        Self::geometry_with(&route, &mut feature.geometry)
    }

    /// Transform every feature of a collection, in order
    ///
    /// The CRS references are resolved once for the whole collection.
    pub fn project_feature_collection(
        &self,
        input: Option<&CrsRef>,
        output: Option<&CrsRef>,
        collection: &mut FeatureCollection,
    ) -> ProjResult<()> {
        let route = self.transformer.route(input, output)?;
        for feature in &mut collection.features {
            Self::geometry_with(&route, &mut feature.geometry)?;
        }
        Ok(())
    }

    fn line_with(route: &Route, points: &mut [Point]) -> ProjResult<()> {
        for point in points {
            PointTransformer::apply(route, point)?;
        }
        Ok(())
    }

    fn polygon_with(route: &Route, rings: &mut [Vec<Point>]) -> ProjResult<()> {
        for ring in rings {
            Self::line_with(route, ring)?;
        }
        Ok(())
    }

    fn multi_polygon_with(route: &Route, polygons: &mut [Vec<Vec<Point>>]) -> ProjResult<()> {
        for polygon in polygons {
            Self::polygon_with(route, polygon)?;
        }
        Ok(())
    }

    fn geometry_with(route: &Route, geometry: &mut Geometry) -> ProjResult<()> {
        match geometry {
            Geometry::Point { coordinates } => PointTransformer::apply(route, coordinates),
            Geometry::MultiPoint { coordinates } => Self::line_with(route, coordinates),
            Geometry::LineString { coordinates } => Self::line_with(route, coordinates),
            Geometry::MultiLineString { coordinates } => Self::polygon_with(route, coordinates),
            Geometry::Polygon { coordinates } => Self::polygon_with(route, coordinates),
            Geometry::MultiPolygon { coordinates } => Self::multi_polygon_with(route, coordinates),
        }
    }
}

impl FeatureProjector<'static> {
    /// A projector over the process-wide shared registry
    pub fn shared() -> Self {
        FeatureProjector::new(crs::shared())
    }
}
