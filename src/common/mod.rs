//! Common utilities and shared functionality.
//!
//! # Utilities
//!
//! - Logging setup
//! - Graceful shutdown waiting
//!
//! # Data Structures
//!
//! - `CustomError` - boot time error type

/// Common data structures.
pub mod structs;

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;

/// Implementation blocks for common types.
pub mod impls;
