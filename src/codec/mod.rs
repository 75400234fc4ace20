//! Interchange encodings for geographic points

pub mod binary;
pub mod json;
