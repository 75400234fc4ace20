//! Integration tests for the coordinate pipeline

// Import crate items
use coordkit::utils::config::CliConfig;
use coordkit::CoordKit;
use coordkit::{Format, Point};

#[test]
fn test_complete_coordinate_workflow() {
    let kit = CoordKit::new(Some("integration_test.log")).unwrap();

    // Parse a seconds-notation coordinate with unit glyphs
    let parsed = kit.parse(r#"45° 41' 59.1" N 69° 44' 01.4" W"#).unwrap();
    assert!((parsed.latitude() - 45.699750).abs() < 1e-6);
    assert!((parsed.longitude() + 69.733722).abs() < 1e-6);

    // Re-render a canonical point in every notation
    let point = Point::new(45.699750, -69.733722);
    assert_eq!(
        kit.format(&point, Format::DecimalDegrees).unwrap(),
        "45.699750,-69.733722"
    );
    assert_eq!(
        kit.format(&point, Format::DecimalMinutes).unwrap(),
        "N 45 41.985, W 69 44.023"
    );
    assert_eq!(
        kit.format(&point, Format::DecimalSeconds).unwrap(),
        "N 45 41 59.100, W 69 44 1.399"
    );

    // One-call conversion between notations
    let converted = kit
        .convert("40 30.0 S, 120 30 W", Format::DecimalDegrees)
        .unwrap();
    assert_eq!(converted, "-40.500000,-120.500000");
}

#[test]
fn test_route_computation_workflow() {
    let kit = CoordKit::new(Some("integration_route_test.log")).unwrap();

    let sea = kit.parse("47.4489, -122.3094").unwrap();
    let sfo = kit.parse("37.6160933, -122.3924223").unwrap();

    let distance = kit.distance(&sea, &sfo);
    assert!((distance - 1093.379199082169).abs() < 0.1);

    let bearing = kit.bearing(&sea, &sfo);
    assert!(bearing >= 0.0 && bearing < 360.0);

    let midpoint = kit.midpoint(&sea, &sfo);
    assert!(midpoint.latitude() < sea.latitude());
    assert!(midpoint.latitude() > sfo.latitude());

    // Projecting the origin along the route length lands near the target
    let projected = kit.destination(&sea, distance, bearing);
    assert!((projected.latitude() - sfo.latitude()).abs() < 0.01);
    assert!((projected.longitude() - sfo.longitude()).abs() < 0.01);
}

#[test]
fn test_interchange_workflow() {
    let kit = CoordKit::new(Some("integration_codec_test.log")).unwrap();

    let point = kit.parse("40.7486, -73.9864").unwrap();

    let json = kit.encode_json(&point).unwrap();
    assert_eq!(json, r#"{"lat":40.7486,"lng":-73.9864}"#);
    assert_eq!(kit.decode_json(&json).unwrap(), point);

    let binary = kit.encode_binary(&point).unwrap();
    assert_eq!(binary.len(), 16);
    assert_eq!(kit.decode_binary(&binary).unwrap(), point);
}

#[test]
fn test_config_parsing() {
    let config = CliConfig::from_str(
        r#"
[output]
format = "dms"

[log]
file = "custom.log"
"#,
    )
    .unwrap();

    assert_eq!(config.default_format, Format::DecimalSeconds);
    assert_eq!(config.log_file, "custom.log");
}

#[test]
fn test_config_defaults_for_missing_keys() {
    let config = CliConfig::from_str("[output]\n").unwrap();

    assert_eq!(config.default_format, Format::DecimalDegrees);
    assert_eq!(config.log_file, "coordkit.log");
}

#[test]
fn test_config_rejects_unknown_format() {
    assert!(CliConfig::from_str("[output]\nformat = \"mgrs\"\n").is_err());
}
