//! Shortest unique prefix computation for the gitr git implementation.
//!
//! An [`OidShortener`] is fed object ids one at a time (usually in their
//! 40-character text form) and reports, after every insertion, how many hex
//! digits are needed so that every id seen so far has a distinct
//! abbreviation. This is what `--abbrev` style output is sized from.
//!
//! The ids are indexed in a [`NibbleTrie`], so each insertion costs at most
//! one walk of 40 levels no matter how many ids are already tracked.

pub mod config;
mod error;
mod shorten;
pub mod trie;

pub use config::ShortenerConfig;
pub use error::ShortenError;
pub use shorten::OidShortener;
pub use trie::{Insertion, NibbleTrie};

pub type Result<T> = std::result::Result<T, ShortenError>;
