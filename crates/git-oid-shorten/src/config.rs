//! Shortener settings.

use git_oid::{OID_HEX_LEN, OID_MIN_PREFIX_LEN};
use serde::{Deserialize, Serialize};

/// Default ceiling on the number of ids a single shortener tracks.
///
/// Bounds memory and insertion cost for the worst case, where every id needs
/// a full 40-node path. Raising it never changes the lengths reported.
pub const DEFAULT_CAPACITY: usize = 22_000;

/// Settings for an [`OidShortener`](crate::OidShortener).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShortenerConfig {
    /// Floor for every reported length, even when fewer digits would already
    /// be unique.
    pub min_length: usize,
    /// Maximum number of distinct ids accepted.
    pub capacity: usize,
}

impl ShortenerConfig {
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// `min_length` clamped to `1..=40`.
    pub fn effective_min_length(&self) -> usize {
        self.min_length.clamp(1, OID_HEX_LEN)
    }
}

impl Default for ShortenerConfig {
    fn default() -> Self {
        Self {
            min_length: OID_MIN_PREFIX_LEN,
            capacity: DEFAULT_CAPACITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ShortenerConfig::default();
        assert_eq!(config.min_length, 4);
        assert_eq!(config.capacity, DEFAULT_CAPACITY);
    }

    #[test]
    fn min_length_is_clamped() {
        let config = ShortenerConfig::default();
        assert_eq!(config.with_min_length(0).effective_min_length(), 1);
        assert_eq!(config.with_min_length(7).effective_min_length(), 7);
        assert_eq!(config.with_min_length(99).effective_min_length(), 40);
    }

    #[test]
    fn partial_toml_uses_defaults() {
        let config: ShortenerConfig = toml::from_str("min_length = 7").unwrap();
        assert_eq!(config, ShortenerConfig::default().with_min_length(7));

        let config: ShortenerConfig = toml::from_str("capacity = 10").unwrap();
        assert_eq!(config.min_length, 4);
        assert_eq!(config.capacity, 10);
    }

    #[test]
    fn toml_roundtrip() {
        let config = ShortenerConfig::default()
            .with_min_length(12)
            .with_capacity(500);
        let text = toml::to_string(&config).unwrap();
        assert_eq!(toml::from_str::<ShortenerConfig>(&text).unwrap(), config);
    }
}
