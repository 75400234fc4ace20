use crate::geo::point::Point;

/// Tolerance for comparing parsed coordinate values, in degrees
pub const COORD_EPSILON: f64 = 1e-6;

/// Asserts that two points agree within the given tolerance in degrees
pub fn assert_points_close(actual: &Point, expected: &Point, epsilon: f64) {
    let lat_diff = (actual.latitude() - expected.latitude()).abs();
    let lng_diff = (actual.longitude() - expected.longitude()).abs();

    assert!(
        lat_diff <= epsilon && lng_diff <= epsilon,
        "expected point ({:.6}, {:.6}), got ({:.6}, {:.6})",
        expected.latitude(),
        expected.longitude(),
        actual.latitude(),
        actual.longitude()
    );
}
