//! HAProxy peers protocol codec.
//!
//! This module implements the binary side of the stick-table peers protocol:
//! the self-delimiting varint used for every length and numeric field, the
//! incremental frame reader that pulls length-prefixed records off a socket,
//! and the three update messages exchanged between nodes.
//!
//! # Framing
//!
//! ```text
//! +-------+------+----------------+-----------------+
//! | class | type | varint(length) | payload[length] |
//! +-------+------+----------------+-----------------+
//! ```
//!
//! Control and error messages are the bare two byte header. Update messages
//! carry a varint length followed by the payload.
//!
//! # Messages
//!
//! - **Stick table definition** (130): schema of the table that the following
//!   entry updates refer to
//! - **Entry update** (128): one row, key plus values, decoded against the most
//!   recent definition seen on the connection
//! - **Update acknowledgement** (132): table id and update id of the last
//!   processed entry update
//!
//! # Example
//!
//! ```rust,ignore
//! use lineq::protocol::varint::{decode, encode};
//!
//! let bytes = encode(300);
//! assert_eq!(decode(&bytes).unwrap(), (bytes.len(), 300));
//! ```

/// Enumerations for key types, data types, values and codec errors.
pub mod enums;

/// Implementation blocks for the protocol types.
pub mod impls;

/// Message structures and the frame reader.
pub mod structs;

/// Protocol constants and frame helpers.
#[allow(clippy::module_inception)]
pub mod protocol;

/// Variable length integer encoding.
pub mod varint;
