//! Projection definition handles
//!
//! A [`Projection`] is the resolved, reusable form of a CRS reference:
//! expensive to construct, cheap to share. Construction goes through the
//! EPSG definitions database (or the raw "+proj" text for custom
//! definitions); the general point transform delegates to proj4rs.

use std::fmt;

use log::debug;
use proj4rs::proj::Proj;
use proj4rs::transform::transform;

use super::identifier::normalize_code;
use crate::coordinate::Point;
use crate::errors::{ProjError, ProjResult};

// Spherical mercator definition for legacy codes outside the u16 range of
// the EPSG database (EPSG:900913 and the deprecated EPSG:3785)
const SPHERICAL_MERCATOR_DEF: &str =
    "+proj=merc +a=6378137 +b=6378137 +lat_ts=0.0 +lon_0=0.0 +x_0=0.0 +y_0=0 \
     +k=1.0 +units=m +nadgrids=@null +no_defs";

/// A resolved projection definition
///
/// Owned by the registry and shared read-only between transform calls.
pub struct Projection {
    id: String,
    epsg: Option<u32>,
    proj: Proj,
    geographic: bool,
}

impl Projection {
    /// Construct a definition from a normalized identifier
    ///
    /// The identifier is either a raw "+proj" definition string or an
    /// "EPSG:<code>" spelling whose code is looked up in the definitions
    /// database.
    pub(crate) fn from_id(id: &str) -> ProjResult<Self> {
        if id.contains("+proj") {
            let proj = Proj::from_proj_string(id)
                .map_err(|e| ProjError::UnresolvableProjection(id.to_string(), e.to_string()))?;
            let geographic = proj.is_latlong();
            return Ok(Projection {
                id: id.to_string(),
                epsg: None,
                proj,
                geographic,
            });
        }

        let code = parse_epsg(id).ok_or_else(|| {
            ProjError::UnresolvableProjection(
                id.to_string(),
                "not an EPSG:<code> identifier".to_string(),
            )
        })?;
        let definition = epsg_definition(code).ok_or_else(|| {
            ProjError::UnresolvableProjection(
                id.to_string(),
                format!("EPSG:{} is not in the definitions database", code),
            )
        })?;
        let proj = Proj::from_proj_string(definition)
            .map_err(|e| ProjError::UnresolvableProjection(id.to_string(), e.to_string()))?;
        let geographic = proj.is_latlong();

        debug!("Constructed projection {} from {}", id, definition);

        Ok(Projection {
            id: id.to_string(),
            epsg: Some(code),
            proj,
            geographic,
        })
    }

    /// The normalized identifier this definition was registered under
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The embedded EPSG code, if the definition came from one
    pub fn epsg(&self) -> Option<u32> {
        self.epsg
    }

    /// Whether coordinates in this CRS are geographic degrees
    pub fn is_geographic(&self) -> bool {
        self.geographic
    }

    /// Identifier used for fast-path comparison: the "EPSG:<code>" form
    /// when a code is embedded, otherwise the definition's own id
    pub fn code_id(&self) -> String {
        match self.epsg {
            Some(code) => normalize_code(code),
            None => self.id.clone(),
        }
    }

    /// Transform a point from this CRS into `to`
    ///
    /// Geographic ends are converted between degrees and the radians
    /// proj4rs works in; a Z coordinate rides through the third slot.
    pub(crate) fn project_to(&self, to: &Projection, point: &mut Point) -> ProjResult<()> {
        let mut coords = if self.geographic {
            (point.x.to_radians(), point.y.to_radians(), point.z_value())
        } else {
            (point.x, point.y, point.z_value())
        };

        transform(&self.proj, &to.proj, &mut coords).map_err(|e| {
            ProjError::TransformFailed(format!("{} -> {}: {}", self.id, to.id, e))
        })?;

        if to.geographic {
            point.x = coords.0.to_degrees();
            point.y = coords.1.to_degrees();
        } else {
            point.x = coords.0;
            point.y = coords.1;
        }
        if point.has_z() {
            point.z = Some(coords.2);
        }

        Ok(())
    }
}

impl fmt::Debug for Projection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Projection")
            .field("id", &self.id)
            .field("epsg", &self.epsg)
            .field("geographic", &self.geographic)
            .finish()
    }
}

/// Extract the numeric code from an "EPSG:<code>" identifier
fn parse_epsg(id: &str) -> Option<u32> {
    let start = id.find("EPSG:")? + "EPSG:".len();
    id[start..].parse::<u32>().ok()
}

/// Look up the proj4 definition string for an EPSG code
fn epsg_definition(code: u32) -> Option<&'static str> {
    u16::try_from(code)
        .ok()
        .and_then(crs_definitions::from_code)
        .map(|def| def.proj4)
        .or(match code {
            900913 | 3785 => Some(SPHERICAL_MERCATOR_DEF),
            _ => None,
        })
}
