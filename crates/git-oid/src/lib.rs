//! Object identity for the gitr git implementation.
//!
//! This crate provides the fixed-size `ObjectId` type together with the hex
//! codec used to parse and format it. Hash computation lives elsewhere; every
//! identifier handled here has already been hashed by the caller.

mod error;
pub mod hex;
mod oid;

pub use error::OidError;
pub use oid::ObjectId;

/// Size in bytes of a raw object id.
pub const OID_RAW_LEN: usize = 20;

/// Size in characters of a hex formatted object id.
pub const OID_HEX_LEN: usize = OID_RAW_LEN * 2;

/// Minimum number of hex characters accepted as an object id prefix.
pub const OID_MIN_PREFIX_LEN: usize = 4;
