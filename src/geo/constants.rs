//! Shared constants for coordinate handling
//!
//! This module defines constants used throughout the coordinate code,
//! replacing magic numbers with descriptive names.

/// Spherical Earth model constants
pub mod earth {
    /// Mean Earth radius in kilometers
    pub const RADIUS_KM: f64 = 6371.0;
}

/// Binary interchange constants
pub mod binary {
    pub const COORD_LEN: usize = 8;          // One little-endian f64
    pub const POINT_ENCODED_LEN: usize = 16; // Latitude then longitude
}
