//! Tests for the geometry shape model

extern crate std;

use crate::coordinate::Point;
use crate::errors::ProjError;
use crate::geometry::{Feature, FeatureCollection, Geometry, GeometryKind};

#[test]
fn test_kind_tags_round_trip() {
    let kinds = [
        GeometryKind::Point,
        GeometryKind::MultiPoint,
        GeometryKind::LineString,
        GeometryKind::MultiLineString,
        GeometryKind::Polygon,
        GeometryKind::MultiPolygon,
    ];

    for kind in kinds {
        std::assert_eq!(GeometryKind::parse(kind.name()).unwrap(), kind);
    }
}

#[test]
fn test_unknown_kind_is_unsupported() {
    let result = GeometryKind::parse("GeometryCollection");
    std::assert!(matches!(result, Err(ProjError::UnsupportedGeometryKind(_))));

    let result: Result<GeometryKind, _> = "Circle".parse();
    std::assert!(result.is_err());
}

#[test]
fn test_geometry_reports_its_kind() {
    let geometry = Geometry::LineString {
        coordinates: vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)],
    };
    std::assert_eq!(geometry.kind(), GeometryKind::LineString);
}

#[test]
fn test_geometry_json_round_trip() {
    let json = r#"{"type":"Polygon","coordinates":[[[0.0,0.0],[4.0,0.0],[4.0,4.0],[0.0,0.0]]]}"#;

    let geometry: Geometry = serde_json::from_str(json).unwrap();
    match &geometry {
        Geometry::Polygon { coordinates } => {
            std::assert_eq!(coordinates.len(), 1);
            std::assert_eq!(coordinates[0].len(), 4);
        }
        other => std::panic!("expected Polygon, got {:?}", other),
    }

    let back = serde_json::to_string(&geometry).unwrap();
    let reparsed: Geometry = serde_json::from_str(&back).unwrap();
    std::assert_eq!(reparsed, geometry);
}

#[test]
fn test_unknown_geometry_type_fails_to_parse() {
    let json = r#"{"type":"GeometryCollection","geometries":[]}"#;
    let result: Result<Geometry, _> = serde_json::from_str(json);
    std::assert!(result.is_err());
}

#[test]
fn test_feature_carries_metadata() {
    let json = r#"{
        "type": "Feature",
        "id": 42,
        "properties": {"name": "depot", "height": 12.5},
        "geometry": {"type": "Point", "coordinates": [13.4, 52.52]}
    }"#;

    let feature: Feature = serde_json::from_str(json).unwrap();
    std::assert_eq!(feature.id, Some(serde_json::json!(42)));
    let properties = feature.properties.as_ref().unwrap();
    std::assert_eq!(properties["name"], serde_json::json!("depot"));
    std::assert_eq!(feature.geometry.kind(), GeometryKind::Point);

    let back = serde_json::to_value(&feature).unwrap();
    std::assert_eq!(back["type"], serde_json::json!("Feature"));
    std::assert_eq!(back["properties"]["height"], serde_json::json!(12.5));
}

#[test]
fn test_feature_collection_json_round_trip() {
    let json = r#"{
        "type": "FeatureCollection",
        "features": [
            {"type": "Feature", "properties": null,
             "geometry": {"type": "Point", "coordinates": [1.0, 2.0]}},
            {"type": "Feature", "properties": null,
             "geometry": {"type": "MultiPoint", "coordinates": [[3.0, 4.0], [5.0, 6.0]]}}
        ]
    }"#;

    let collection: FeatureCollection = serde_json::from_str(json).unwrap();
    std::assert_eq!(collection.features.len(), 2);
    std::assert_eq!(collection.features[1].geometry.kind(), GeometryKind::MultiPoint);

    let back = serde_json::to_value(&collection).unwrap();
    std::assert_eq!(back["type"], serde_json::json!("FeatureCollection"));
    std::assert_eq!(back["features"].as_array().unwrap().len(), 2);
}
