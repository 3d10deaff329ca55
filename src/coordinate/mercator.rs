//! Spherical mercator math
//!
//! Closed-form conversions between WGS84 (EPSG:4326) and spherical web
//! mercator (EPSG:900913/3857), plus the pixel and tile helpers used by
//! tile-based renderers. These back the transformer's fast path so the
//! common geographic↔mercator case never touches the general projection
//! machinery.

use std::f64::consts::PI;
use log::debug;

use super::bbox::BoundingBox;
use super::point::Point;

/// Earth equatorial radius in meters (WGS84 / spherical mercator)
pub const EARTH_RADIUS: f64 = 6378137.0;

/// Mercator extent half-width: the projection covers
/// [-MAX_EXTENT, +MAX_EXTENT] on both axes (π * EARTH_RADIUS)
pub const MAX_EXTENT: f64 = PI * EARTH_RADIUS;

/// Tile edge length in pixels used by web map renderers
pub const DEFAULT_TILE_SIZE: u32 = 256;

fn clamp_extent(v: f64) -> f64 {
    v.max(-MAX_EXTENT).min(MAX_EXTENT)
}

/// Convert geographic coordinates to spherical mercator meters
///
/// # Arguments
/// * `lon` - Longitude in degrees
/// * `lat` - Latitude in degrees
///
/// # Returns
/// A Point with x and y in mercator meters, each clamped to
/// [-MAX_EXTENT, +MAX_EXTENT]. Latitudes at the poles would otherwise
/// produce infinite y; they clamp to the extent edge instead.
pub fn lon_lat_to_meters(lon: f64, lat: f64) -> Point {
    let x = EARTH_RADIUS * lon * (PI / 180.0);
    let y = EARTH_RADIUS * f64::ln(f64::tan(PI / 4.0 + 0.5 * lat * (PI / 180.0)));

    Point::new(clamp_extent(x), clamp_extent(y))
}

/// Convert spherical mercator meters to geographic coordinates
///
/// # Arguments
/// * `x` - X coordinate in mercator meters
/// * `y` - Y coordinate in mercator meters
///
/// # Returns
/// A Point with longitude and latitude in degrees
pub fn meters_to_lon_lat(x: f64, y: f64) -> Point {
    let lon = x * (180.0 / PI) / EARTH_RADIUS;
    let lat = (PI / 2.0 - 2.0 * f64::atan(f64::exp(-y / EARTH_RADIUS))) * (180.0 / PI);

    Point::new(lon, lat)
}

/// Convert pixel coordinates at a zoom level to mercator meters
///
/// # Arguments
/// * `px` - Pixel x at the given zoom
/// * `py` - Pixel y at the given zoom
/// * `zoom` - Zoom level
/// * `tile_size` - Tile edge length in pixels (usually 256)
///
/// # Returns
/// A Point in mercator meters, measured from the projection origin
pub fn pixels_to_meters(px: f64, py: f64, zoom: u8, tile_size: u32) -> Point {
    // meters per pixel at zoom 0, measured at the equator
    let initial_resolution = 2.0 * PI * EARTH_RADIUS / tile_size as f64;
    let resolution = initial_resolution / f64::powi(2.0, zoom as i32);

    Point::new(px * resolution - MAX_EXTENT, py * resolution - MAX_EXTENT)
}

/// Convert a TMS tile index to its mercator bounding box
///
/// The tile row follows the TMS convention (origin at the bottom) and is
/// flipped to the Google/XYZ scheme before the pixel conversion.
///
/// # Arguments
/// * `tx` - Tile column
/// * `ty` - Tile row (TMS)
/// * `zoom` - Zoom level
/// * `tile_size` - Tile edge length in pixels (usually 256)
///
/// # Returns
/// The tile's bounds in mercator meters
pub fn tile_to_meters(tx: u32, ty: u32, zoom: u8, tile_size: u32) -> BoundingBox {
    let flipped = (1u64 << zoom) - 1 - ty as u64;

    let ts = tile_size as u64;
    let min = pixels_to_meters((tx as u64 * ts) as f64, (flipped * ts) as f64, zoom, tile_size);
    let max = pixels_to_meters(
        ((tx as u64 + 1) * ts) as f64,
        ((flipped + 1) * ts) as f64,
        zoom,
        tile_size,
    );

    debug!("Tile ({}, {}) @ z{} covers ({}, {}) - ({}, {})",
           tx, ty, zoom, min.x, min.y, max.x, max.y);

    BoundingBox::new(min.x, min.y, max.x, max.y)
}
