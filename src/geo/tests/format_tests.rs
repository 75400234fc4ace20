//! Tests for format name resolution

use crate::geo::errors::GeoError;
use crate::geo::format::{Format, FormatFactory};

#[test]
fn test_format_from_short_names() {
    assert_eq!(FormatFactory::from_name("dd").unwrap(), Format::DecimalDegrees);
    assert_eq!(FormatFactory::from_name("dm").unwrap(), Format::DecimalMinutes);
    assert_eq!(FormatFactory::from_name("dms").unwrap(), Format::DecimalSeconds);
}

#[test]
fn test_format_from_long_names() {
    assert_eq!(
        FormatFactory::from_name("decimal-degrees").unwrap(),
        Format::DecimalDegrees
    );
    assert_eq!(FormatFactory::from_name("minutes").unwrap(), Format::DecimalMinutes);
    assert_eq!(FormatFactory::from_name("seconds").unwrap(), Format::DecimalSeconds);
}

#[test]
fn test_format_names_are_case_insensitive() {
    assert_eq!(FormatFactory::from_name("DMS").unwrap(), Format::DecimalSeconds);
    assert_eq!(FormatFactory::from_name(" Degrees ").unwrap(), Format::DecimalDegrees);
}

#[test]
fn test_format_from_unknown_name() {
    let err = FormatFactory::from_name("utm").unwrap_err();
    match err {
        GeoError::UnsupportedFormat(name) => assert_eq!(name, "utm"),
        other => panic!("expected UnsupportedFormat, got {:?}", other),
    }
}

#[test]
fn test_format_display_names() {
    assert_eq!(Format::DecimalDegrees.name(), "decimal degrees");
    assert_eq!(Format::DecimalMinutes.name(), "decimal minutes");
    assert_eq!(Format::DecimalSeconds.name(), "decimal seconds");
}
