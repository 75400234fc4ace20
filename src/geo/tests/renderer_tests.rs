//! Tests for the coordinate renderer

use crate::geo::format::Format;
use crate::geo::point::Point;
use crate::geo::tests::test_utils::assert_points_close;
use crate::notation::renderer::render;

#[test]
fn test_render_decimal_degrees() {
    let point = Point::new(45.699750, -69.733722);
    let text = render(&point, Format::DecimalDegrees).unwrap();
    assert_eq!(text, "45.699750,-69.733722");
}

#[test]
fn test_render_decimal_minutes() {
    let point = Point::new(45.699750, -69.733722);
    let text = render(&point, Format::DecimalMinutes).unwrap();
    assert_eq!(text, "N 45 41.985, W 69 44.023");
}

#[test]
fn test_render_decimal_seconds() {
    let point = Point::new(45.699750, -69.733722);
    let text = render(&point, Format::DecimalSeconds).unwrap();
    assert_eq!(text, "N 45 41 59.100, W 69 44 1.399");
}

#[test]
fn test_render_southern_eastern_hemispheres() {
    let point = Point::new(-45.699750, 69.733722);

    let dd = render(&point, Format::DecimalDegrees).unwrap();
    assert_eq!(dd, "-45.699750,69.733722");

    let dm = render(&point, Format::DecimalMinutes).unwrap();
    assert_eq!(dm, "S 45 41.985, E 69 44.023");

    let dms = render(&point, Format::DecimalSeconds).unwrap();
    assert_eq!(dms, "S 45 41 59.100, E 69 44 1.399");
}

#[test]
fn test_render_zero_is_northern_eastern() {
    let point = Point::new(0.0, 0.0);
    let text = render(&point, Format::DecimalMinutes).unwrap();
    assert_eq!(text, "N 0 0.000, E 0 0.000");
}

#[test]
fn test_render_negative_zero_is_northern() {
    let point = Point::new(-0.0, -0.0);
    let text = render(&point, Format::DecimalMinutes).unwrap();
    assert_eq!(text, "N 0 0.000, E 0 0.000");
}

#[test]
fn test_render_parse_round_trip_minutes() {
    let point = Point::new(45.699750, -69.733722);
    let text = render(&point, Format::DecimalMinutes).unwrap();
    let parsed = Point::parse(&text).unwrap();
    assert_points_close(&parsed, &point, 1e-3);
}

#[test]
fn test_render_parse_round_trip_seconds() {
    let point = Point::new(45.699750, -69.733722);
    let text = render(&point, Format::DecimalSeconds).unwrap();
    let parsed = Point::parse(&text).unwrap();
    assert_points_close(&parsed, &point, 1e-3);
}
