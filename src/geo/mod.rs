//! Core coordinate types
//!
//! This module provides the point model, the notation identifiers
//! and the shared error types used across the crate.

pub mod constants;
pub mod errors;
pub mod format;
pub mod point;

#[cfg(test)]
mod tests;

pub use errors::{GeoError, GeoResult};
pub use format::{Format, FormatFactory};
pub use point::Point;
