use git_oid::{ObjectId, OID_HEX_LEN};

use crate::trie::{Insertion, NibbleTrie};
use crate::{Result, ShortenError, ShortenerConfig};

/// Tracks a growing set of object ids and the shortest abbreviation length
/// that keeps all of them unique.
///
/// The reported length only ever grows. Ids cannot be removed; dropping the
/// shortener releases the whole index.
///
/// Insertion mutates the index without locking. To spread work over threads,
/// give each thread its own shortener and take the maximum of their lengths;
/// that is a lower bound, and only a single shortener that has seen every id
/// gives the exact answer.
#[derive(Debug)]
pub struct OidShortener {
    trie: NibbleTrie,
    min_length: usize,
    capacity: usize,
    current_min_length: usize,
}

impl OidShortener {
    /// Create a shortener that never reports fewer than `min_length` digits.
    ///
    /// `min_length` is clamped to `1..=40`; capacity is the default.
    pub fn new(min_length: usize) -> Self {
        Self::with_config(ShortenerConfig::default().with_min_length(min_length))
    }

    pub fn with_config(config: ShortenerConfig) -> Self {
        let min_length = config.effective_min_length();
        tracing::debug!(min_length, capacity = config.capacity, "created oid shortener");
        Self {
            trie: NibbleTrie::new(),
            min_length,
            capacity: config.capacity,
            current_min_length: min_length,
        }
    }

    /// Add an id given in hex text form and return the updated length.
    ///
    /// Only the first 40 characters are read. Malformed text and a full
    /// shortener are both rejected before anything is modified.
    pub fn insert(&mut self, text_oid: impl AsRef<[u8]>) -> Result<usize> {
        let oid = ObjectId::parse_hex(text_oid.as_ref())?;
        self.insert_oid(&oid)
    }

    /// Add an already decoded id and return the updated length.
    pub fn insert_oid(&mut self, oid: &ObjectId) -> Result<usize> {
        if self.is_full() {
            tracing::debug!(capacity = self.capacity, %oid, "oid shortener is full");
            return Err(ShortenError::OutOfCapacity {
                capacity: self.capacity,
            });
        }

        match self.trie.insert(oid)? {
            Insertion::Inserted { branch_depth } => self.raise(branch_depth),
            Insertion::Duplicate => tracing::trace!(%oid, "duplicate oid ignored"),
        }
        Ok(self.current_min_length)
    }

    fn raise(&mut self, required: usize) {
        let required = required.min(OID_HEX_LEN);
        if required > self.current_min_length {
            tracing::debug!(
                from = self.current_min_length,
                to = required,
                count = self.trie.len(),
                "abbreviation length grew"
            );
            self.current_min_length = required;
        }
    }

    /// Digits needed so that every id inserted so far is unique.
    pub fn current_min_length(&self) -> usize {
        self.current_min_length
    }

    /// The configured floor, after clamping.
    pub fn min_length(&self) -> usize {
        self.min_length
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of distinct ids inserted.
    pub fn len(&self) -> usize {
        self.trie.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.trie.len() >= self.capacity
    }

    pub fn contains(&self, oid: &ObjectId) -> bool {
        self.trie.contains(oid)
    }

    /// Hex prefix of `oid` at the current length.
    pub fn abbreviate(&self, oid: &ObjectId) -> String {
        let mut hex = oid.to_hex();
        hex.truncate(self.current_min_length);
        hex
    }
}

impl Default for OidShortener {
    fn default() -> Self {
        Self::with_config(ShortenerConfig::default())
    }
}
