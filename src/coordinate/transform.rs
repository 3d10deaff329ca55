//! Coordinate transformation functionality
//!
//! The [`PointTransformer`] carries a point between two CRS references.
//! The ubiquitous geographic↔spherical-mercator pair takes a closed-form
//! fast path; every other pair resolves through the registry and the
//! general projection capability.

use std::sync::Arc;

use log::debug;

use super::bbox::BoundingBox;
use super::mercator;
use super::point::Point;
use crate::crs::{CrsRef, Projection, ProjectionRegistry};
use crate::errors::ProjResult;

// Fast-path identifiers: geographic lon/lat and spherical web mercator
const GEOGRAPHIC_ID: &str = "EPSG:4326";
const SPHERICAL_MERCATOR_ID: &str = "EPSG:900913";

/// How a pair of CRS references maps points
pub(crate) enum Route {
    /// Leave coordinates untouched
    Identity,
    /// Closed-form geographic → spherical mercator
    FastForward,
    /// Closed-form spherical mercator → geographic
    FastInverse,
    /// Through the general projection capability
    General {
        from: Arc<Projection>,
        to: Arc<Projection>,
    },
}

/// Transformer for converting points between coordinate systems
pub struct PointTransformer<'a> {
    registry: &'a ProjectionRegistry,
}

impl<'a> PointTransformer<'a> {
    /// Create a transformer resolving through the given registry
    pub fn new(registry: &'a ProjectionRegistry) -> Self {
        PointTransformer { registry }
    }

    /// The registry this transformer resolves through
    pub fn registry(&self) -> &'a ProjectionRegistry {
        self.registry
    }

    /// Work out the route between two references
    ///
    /// An absent reference on either side means no projection is wanted,
    /// as does a pair normalizing to the same identifier. Resolution of
    /// general-path definitions happens here, once, so a geometry
    /// traversal does not resolve per point.
    pub(crate) fn route(
        &self,
        input: Option<&CrsRef>,
        output: Option<&CrsRef>,
    ) -> ProjResult<Route> {
        let (input, output) = match (input, output) {
            (Some(input), Some(output)) => (input, output),
            _ => return Ok(Route::Identity),
        };

        let in_id = self.registry.normalized_id(input)?;
        let out_id = self.registry.normalized_id(output)?;

        if in_id == out_id {
            return Ok(Route::Identity);
        }
        if in_id == GEOGRAPHIC_ID && out_id == SPHERICAL_MERCATOR_ID {
            return Ok(Route::FastForward);
        }
        if in_id == SPHERICAL_MERCATOR_ID && out_id == GEOGRAPHIC_ID {
            return Ok(Route::FastInverse);
        }

        debug!("General projection route {} -> {}", in_id, out_id);
        Ok(Route::General {
            from: self.registry.resolve(input)?,
            to: self.registry.resolve(output)?,
        })
    }

    /// Apply a route to a single point
    pub(crate) fn apply(route: &Route, point: &mut Point) -> ProjResult<()> {
        match route {
            Route::Identity => {}
            Route::FastForward => {
                let meters = mercator::lon_lat_to_meters(point.x, point.y);
                point.x = meters.x;
                point.y = meters.y;
            }
            Route::FastInverse => {
                let geographic = mercator::meters_to_lon_lat(point.x, point.y);
                point.x = geographic.x;
                point.y = geographic.y;
            }
            Route::General { from, to } => from.project_to(to, point)?,
        }
        Ok(())
    }

    /// Transform a point between coordinate systems
    ///
    /// # Arguments
    /// * `input` - Source CRS reference, or `None` to pass through
    /// * `output` - Target CRS reference, or `None` to pass through
    /// * `point` - The point, replaced in place with its transformed value
    pub fn transform(
        &self,
        input: Option<&CrsRef>,
        output: Option<&CrsRef>,
        point: &mut Point,
    ) -> ProjResult<()> {
        let route = self.route(input, output)?;
        Self::apply(&route, point)
    }

    /// Transform a bounding box between coordinate systems
    ///
    /// Projects the two corners; the box is not densified, so boxes
    /// crossing strong distortion are approximate.
    pub fn transform_bbox(
        &self,
        input: Option<&CrsRef>,
        output: Option<&CrsRef>,
        bbox: &BoundingBox,
    ) -> ProjResult<BoundingBox> {
        let route = self.route(input, output)?;

        let mut min = Point::new(bbox.min_x, bbox.min_y);
        let mut max = Point::new(bbox.max_x, bbox.max_y);
        Self::apply(&route, &mut min)?;
        Self::apply(&route, &mut max)?;

        Ok(BoundingBox::new(min.x, min.y, max.x, max.y))
    }
}
