use git_oid::OidError;

/// Errors produced by the shortener.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShortenError {
    #[error("invalid object id: {0}")]
    InvalidFormat(#[from] OidError),

    #[error("shortener is full: at most {capacity} object ids can be tracked")]
    OutOfCapacity { capacity: usize },
}
