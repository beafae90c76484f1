//! Configuration management module.
//!
//! Loads, defaults and validates `config.toml`.
//!
//! # Configuration Structure
//!
//! - **peer**: listener address, local peer name, replication mode, optional
//!   outbound peers and keepalive
//! - **web**: presentation server (table snapshot, live feed, statistics)
//! - **vwr**: waiting room tables, routes and session inactivity
//!
//! # Example
//!
//! ```rust,ignore
//! use lineq::config::structs::configuration::Configuration;
//!
//! let config = Configuration::load_from_file(false, "config.toml")?;
//! config.validate()?;
//! ```

/// Configuration enumerations (replication mode, errors).
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;
