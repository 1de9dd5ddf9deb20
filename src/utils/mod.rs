//! The `utils` module provides shared definitions used across `compere`:
//! the crate error type and logging setup.

pub mod error;
pub mod logging;

pub use error::CompereError;
