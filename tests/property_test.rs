//! Property tests for notation, geodesy and interchange invariants

// Import crate items
use coordkit::codec::{binary, json};
use coordkit::{Format, Point};
use proptest::prelude::*;

const ALL_FORMATS: [Format; 3] = [
    Format::DecimalDegrees,
    Format::DecimalMinutes,
    Format::DecimalSeconds,
];

proptest! {
    /// Rendering a point in any notation and parsing the text back
    /// stays within the printed precision of that notation.
    #[test]
    fn render_then_parse_round_trips(lat in -90.0f64..90.0, lng in -180.0f64..180.0) {
        let point = Point::new(lat, lng);
        for format in ALL_FORMATS {
            let text = point.format(format).unwrap();
            let parsed = Point::parse(&text).unwrap();
            prop_assert!(
                (parsed.latitude() - lat).abs() < 1e-3,
                "latitude drifted through {}: {} became {} via {:?}",
                format.name(), lat, parsed.latitude(), text
            );
            prop_assert!(
                (parsed.longitude() - lng).abs() < 1e-3,
                "longitude drifted through {}: {} became {} via {:?}",
                format.name(), lng, parsed.longitude(), text
            );
        }
    }

    #[test]
    fn distance_is_symmetric(
        lat1 in -90.0f64..90.0, lng1 in -180.0f64..180.0,
        lat2 in -90.0f64..90.0, lng2 in -180.0f64..180.0,
    ) {
        let a = Point::new(lat1, lng1);
        let b = Point::new(lat2, lng2);
        prop_assert!((a.great_circle_distance(&b) - b.great_circle_distance(&a)).abs() < 1e-6);
    }

    #[test]
    fn distance_to_self_is_zero(lat in -90.0f64..90.0, lng in -180.0f64..180.0) {
        let point = Point::new(lat, lng);
        prop_assert_eq!(point.great_circle_distance(&point), 0.0);
    }

    #[test]
    fn bearing_stays_in_compass_range(
        lat1 in -90.0f64..90.0, lng1 in -180.0f64..180.0,
        lat2 in -90.0f64..90.0, lng2 in -180.0f64..180.0,
    ) {
        let bearing = Point::new(lat1, lng1).bearing_to(&Point::new(lat2, lng2));
        prop_assert!(bearing >= 0.0 && bearing < 360.0, "bearing out of range: {}", bearing);
    }

    /// Travelling a given distance must put the destination exactly that
    /// far from the origin along the great circle.
    #[test]
    fn projection_preserves_distance(
        lat in -80.0f64..80.0, lng in -180.0f64..180.0,
        distance in 1.0f64..15000.0, bearing in 0.0f64..360.0,
    ) {
        let origin = Point::new(lat, lng);
        let reached = origin.point_at_distance_and_bearing(distance, bearing);
        let measured = origin.great_circle_distance(&reached);
        prop_assert!(
            (measured - distance).abs() <= 0.1,
            "asked for {} km, measured {} km", distance, measured
        );
    }

    #[test]
    fn binary_round_trip_is_bit_exact(lat in -90.0f64..90.0, lng in -180.0f64..180.0) {
        let point = Point::new(lat, lng);
        let encoded = binary::encode(&point).unwrap();
        let decoded = binary::decode(&encoded).unwrap();
        prop_assert_eq!(decoded.latitude().to_bits(), lat.to_bits());
        prop_assert_eq!(decoded.longitude().to_bits(), lng.to_bits());
    }

    #[test]
    fn json_round_trip_preserves_the_point(lat in -90.0f64..90.0, lng in -180.0f64..180.0) {
        let point = Point::new(lat, lng);
        let decoded = json::decode(&json::encode(&point).unwrap()).unwrap();
        prop_assert_eq!(decoded, point);
    }
}
