//! Command pattern interfaces
//!
//! This module defines the traits behind the CLI: one for runnable
//! commands and one for the factory that builds them from arguments.

use crate::geo::errors::GeoResult;
use crate::utils::config::CliConfig;
use crate::utils::logger::Logger;

/// A runnable CLI operation
///
/// Each coordinate operation (parse, convert, route, project) lives in
/// its own command type, keeping argument handling separate from the
/// work itself.
pub trait Command {
    /// Run the command
    ///
    /// # Returns
    /// Ok on success, or the error that stopped the command
    fn execute(&self) -> GeoResult<()>;
}

/// Builds the right command for a set of CLI arguments
pub trait CommandFactory<'a> {
    /// Inspect the arguments and construct the matching command
    ///
    /// # Arguments
    /// * `args` - Argument matches from clap
    /// * `logger` - Logger the command reports through
    /// * `config` - Settings from the optional configuration file
    ///
    /// # Returns
    /// A boxed command ready to execute, or an error
    fn create_command(
        &self,
        args: &clap::ArgMatches,
        logger: &'a Logger,
        config: &CliConfig,
    ) -> GeoResult<Box<dyn Command + 'a>>;
}
