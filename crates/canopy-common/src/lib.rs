//! # Canopy Common
//!
//! Shared functionality for the Canopy workspace.
//!
//! This crate provides logging initialization used by applications embedding
//! Canopy, and test helpers shared by the other crates.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod logging;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use logging::{
    init_default_logging, init_dev_logging, init_logging, LoggingConfig, LoggingError,
    LoggingResult,
};
