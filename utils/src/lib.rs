//! Shared utilities for the suiwire crates.

pub mod logging;

pub use logging::{init_logging, LogFormat, LoggingError};
