//! Utility modules for common functionality
//!
//! This module provides the logging and configuration support used by
//! the library facade and the CLI.

pub mod config;
pub mod logger;
