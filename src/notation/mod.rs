//! Coordinate text notations
//!
//! This module provides parsing and rendering of the supported
//! latitude/longitude text notations: decimal degrees, decimal
//! minutes and decimal seconds.

pub(crate) mod grammar;
pub mod parser;
pub mod renderer;

pub use parser::parse;
pub use renderer::render;
