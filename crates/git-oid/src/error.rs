/// Errors produced when parsing object ids.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OidError {
    #[error("invalid hex character at position {position}: '{character}'")]
    InvalidHex { position: usize, character: char },

    #[error("invalid hex length: expected {expected}, got {actual}")]
    InvalidHexLength { expected: usize, actual: usize },

    #[error("invalid object id length: expected {expected} bytes, got {actual}")]
    InvalidRawLength { expected: usize, actual: usize },
}

impl OidError {
    /// Whether the error came from malformed hex text rather than raw bytes.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, Self::InvalidHex { .. } | Self::InvalidHexLength { .. })
    }
}
