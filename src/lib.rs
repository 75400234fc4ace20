pub mod geo;
pub mod notation;
pub mod geodesy;
pub mod codec;
pub mod utils;
pub mod commands;
pub mod api;

pub use crate::api::CoordKit;

pub use geo::{Format, FormatFactory, GeoError, GeoResult, Point};
pub use geodesy::{destination, great_circle_distance, initial_bearing, midpoint};
