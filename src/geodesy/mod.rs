//! Geodesic computations between geographic points

pub mod sphere;

pub use sphere::{destination, great_circle_distance, initial_bearing, midpoint};
