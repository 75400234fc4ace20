//! Unit tests for the coordinate core

mod format_tests;
mod renderer_tests;

pub mod test_utils;
