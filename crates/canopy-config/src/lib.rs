//! # Canopy Config
//!
//! Locale configuration for Canopy applications.
//!
//! This crate loads the supported locale list from TOML, YAML or JSON files,
//! validates it, and keeps the active configuration in a lock-free cache.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cache;
pub mod defaults;
pub mod error;
pub mod loader;
pub mod schema;
pub mod validator;

pub use cache::*;
pub use defaults::*;
pub use error::*;
pub use loader::*;
pub use schema::*;
pub use validator::*;
