//! Integration tests for feature reprojection

extern crate std;

use projkit::mercator::{self, MAX_EXTENT};
use projkit::{
    CrsRef, Feature, FeatureCollection, FeatureProjector, Geometry, Point, ProjectionRegistry,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_complete_reprojection_workflow() {
    init_logging();

    // A small collection the way it arrives from upstream tooling
    let geojson = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "id": 1,
                "properties": {"name": "Ferry Building"},
                "geometry": {"type": "Point", "coordinates": [-122.4194, 37.7749]}
            },
            {
                "type": "Feature",
                "properties": {"name": "pier"},
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [
                        [[-122.42, 37.77], [-122.41, 37.77], [-122.41, 37.78],
                         [-122.42, 37.78], [-122.42, 37.77]],
                        [[-122.416, 37.773], [-122.413, 37.773], [-122.415, 37.776],
                         [-122.416, 37.773]]
                    ]
                }
            }
        ]
    }"#;

    let mut collection: FeatureCollection = serde_json::from_str(geojson).unwrap();

    let registry = ProjectionRegistry::new();
    let projector = FeatureProjector::new(&registry);
    let input = CrsRef::from("EPSG:4326");
    let output = CrsRef::from("EPSG:900913");

    projector
        .project_feature_collection(Some(&input), Some(&output), &mut collection)
        .unwrap();

    // Structure survives: counts, order, metadata
    std::assert_eq!(collection.features.len(), 2);
    std::assert_eq!(collection.features[0].id, Some(serde_json::json!(1)));
    std::assert_eq!(
        collection.features[1].properties.as_ref().unwrap()["name"],
        serde_json::json!("pier")
    );

    // The point landed on the known mercator coordinates
    match &collection.features[0].geometry {
        Geometry::Point { coordinates } => {
            std::assert!((coordinates.x - -13627665.0).abs() < 5.0, "x={}", coordinates.x);
            std::assert!((coordinates.y - 4547676.0).abs() < 5.0, "y={}", coordinates.y);
        }
        other => std::panic!("expected Point, got {:?}", other),
    }

    // Ring and point counts intact
    match &collection.features[1].geometry {
        Geometry::Polygon { coordinates } => {
            std::assert_eq!(coordinates.len(), 2);
            std::assert_eq!(coordinates[0].len(), 5);
            std::assert_eq!(coordinates[1].len(), 4);
        }
        other => std::panic!("expected Polygon, got {:?}", other),
    }

    // The result serializes back to GeoJSON with the projected coordinates
    let out = serde_json::to_value(&collection).unwrap();
    std::assert_eq!(out["type"], serde_json::json!("FeatureCollection"));
    let x = out["features"][0]["geometry"]["coordinates"][0].as_f64().unwrap();
    std::assert!(x < -13_000_000.0);
}

#[test]
fn test_round_trip_through_mercator_and_back() {
    let registry = ProjectionRegistry::new();
    let projector = FeatureProjector::new(&registry);
    let geographic = CrsRef::from(4326);
    let mercator_ref = CrsRef::from(900913);

    let mut feature = Feature::new(Geometry::LineString {
        coordinates: vec![
            Point::new(13.4, 52.52),
            Point::new(2.35, 48.85),
            Point::new(-0.1276, 51.5074),
        ],
    });
    let original = feature.clone();

    projector
        .project_feature(Some(&geographic), Some(&mercator_ref), &mut feature)
        .unwrap();
    projector
        .project_feature(Some(&mercator_ref), Some(&geographic), &mut feature)
        .unwrap();

    let (before, after) = match (&original.geometry, &feature.geometry) {
        (
            Geometry::LineString { coordinates: before },
            Geometry::LineString { coordinates: after },
        ) => (before, after),
        _ => std::panic!("shape changed"),
    };

    for (b, a) in before.iter().zip(after) {
        std::assert!((b.x - a.x).abs() < 1e-6);
        std::assert!((b.y - a.y).abs() < 1e-6);
    }
}

#[test]
fn test_general_path_reprojection() {
    init_logging();

    // UTM 33N is not on the fast path, so this exercises the registry and
    // the general projection capability end to end
    let registry = ProjectionRegistry::new();
    let projector = FeatureProjector::new(&registry);
    let geographic = CrsRef::from(4326);
    let utm33 = CrsRef::from(32633);

    let mut feature = Feature::new(Geometry::Point {
        coordinates: Point::new(15.0, 52.0),
    });

    projector
        .project_feature(Some(&geographic), Some(&utm33), &mut feature)
        .unwrap();

    match &feature.geometry {
        Geometry::Point { coordinates } => {
            std::assert!(
                coordinates.x > 400_000.0 && coordinates.x < 600_000.0,
                "easting={}",
                coordinates.x
            );
            std::assert!(
                coordinates.y > 5_000_000.0 && coordinates.y < 6_000_000.0,
                "northing={}",
                coordinates.y
            );
        }
        other => std::panic!("expected Point, got {:?}", other),
    }

    // both definitions are now cached
    std::assert_eq!(registry.len(), 2);
}

#[test]
fn test_tile_math_agrees_with_projection() {
    // The root tile spans the whole mercator extent, which is where the
    // clamped pole latitudes land
    let root = mercator::tile_to_meters(0, 0, 0, mercator::DEFAULT_TILE_SIZE);
    std::assert_eq!(root.min_x, -MAX_EXTENT);
    std::assert_eq!(root.max_y, MAX_EXTENT);

    let pole = mercator::lon_lat_to_meters(0.0, 89.9);
    std::assert_eq!(pole.y, root.max_y);
}
