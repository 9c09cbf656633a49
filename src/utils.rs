//! Miscellaneous utilities for sls.
//!
//! - [cli]: command-line parsing into [crate::config::Options]
//! - [logging]: the stderr diagnostic subscriber

pub mod cli;
pub mod logging;

pub use cli::handle_args;
pub use logging::init_logging;
