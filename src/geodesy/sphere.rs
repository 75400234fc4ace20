//! Great-circle math on the spherical Earth model
//!
//! All functions take and return decimal degrees and kilometers;
//! radians stay internal. They are total over finite inputs, with
//! no error paths.

use std::f64::consts::PI;

use crate::geo::constants::earth;
use crate::geo::point::Point;

/// Haversine distance between two points in kilometers
pub fn great_circle_distance(a: &Point, b: &Point) -> f64 {
    let d_lat = (b.latitude() - a.latitude()).to_radians();
    let d_lng = (b.longitude() - a.longitude()).to_radians();

    let lat1 = a.latitude().to_radians();
    let lat2 = b.latitude().to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + (d_lng / 2.0).sin().powi(2) * lat1.cos() * lat2.cos();
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    earth::RADIUS_KM * c
}

/// Initial bearing (forward azimuth) from one point towards another,
/// in degrees normalized to [0, 360)
pub fn initial_bearing(a: &Point, b: &Point) -> f64 {
    let d_lng = (b.longitude() - a.longitude()).to_radians();

    let lat1 = a.latitude().to_radians();
    let lat2 = b.latitude().to_radians();

    let y = d_lng.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lng.cos();

    let mut bearing = y.atan2(x).to_degrees();
    if bearing < 0.0 {
        bearing += 360.0;
    }
    bearing
}

/// Great-circle midpoint between two points
pub fn midpoint(a: &Point, b: &Point) -> Point {
    let lat1 = a.latitude().to_radians();
    let lat2 = b.latitude().to_radians();

    let lng1 = a.longitude().to_radians();
    let d_lng = (b.longitude() - a.longitude()).to_radians();

    let bx = lat2.cos() * d_lng.cos();
    let by = lat2.cos() * d_lng.sin();

    let lat3 = (lat1.sin() + lat2.sin())
        .atan2(((lat1.cos() + bx).powi(2) + by.powi(2)).sqrt());
    let lng3 = lng1 + by.atan2(lat1.cos() + bx);

    Point::new(lat3.to_degrees(), lng3.to_degrees())
}

/// Destination point reached by travelling a distance (in kilometers)
/// from an origin on an initial compass bearing (in degrees)
pub fn destination(origin: &Point, distance_km: f64, bearing_deg: f64) -> Point {
    let angular = distance_km / earth::RADIUS_KM;
    let bearing = bearing_deg.to_radians();

    let lat1 = origin.latitude().to_radians();
    let lng1 = origin.longitude().to_radians();

    let lat2 = (lat1.sin() * angular.cos() + lat1.cos() * angular.sin() * bearing.cos()).asin();

    let y = bearing.sin() * angular.sin() * lat1.cos();
    let x = angular.cos() - lat1.sin() * lat2.sin();

    // Reduce the longitude into [-180, 180)
    let lng2 = (lng1 + y.atan2(x) + 3.0 * PI) % (2.0 * PI) - PI;

    Point::new(lat2.to_degrees(), lng2.to_degrees())
}
