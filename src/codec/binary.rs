//! Binary point interchange
//!
//! A point travels as 16 bytes: latitude then longitude, each a
//! little-endian IEEE 754 double. There is no header, version or
//! length prefix.

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use std::io::Cursor;

use crate::geo::constants::binary;
use crate::geo::errors::{GeoError, GeoResult};
use crate::geo::point::Point;

/// Encode a point into its 16-byte binary form
pub fn encode(point: &Point) -> GeoResult<Vec<u8>> {
    let mut buffer = Vec::with_capacity(binary::POINT_ENCODED_LEN);
    buffer.write_f64::<LittleEndian>(point.latitude())?;
    buffer.write_f64::<LittleEndian>(point.longitude())?;
    Ok(buffer)
}

/// Decode a point from its binary form
///
/// Input shorter than one encoded point is rejected with a
/// `TruncatedBinary` error carrying the actual length. Bytes beyond
/// the first 16 are ignored.
pub fn decode(data: &[u8]) -> GeoResult<Point> {
    if data.len() < binary::POINT_ENCODED_LEN {
        return Err(GeoError::TruncatedBinary(data.len()));
    }

    let mut cursor = Cursor::new(data);
    let lat = cursor.read_f64::<LittleEndian>()?;
    let lng = cursor.read_f64::<LittleEndian>()?;

    Ok(Point::new(lat, lng))
}
