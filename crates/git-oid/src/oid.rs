use std::fmt;
use std::str::FromStr;

use crate::hex::{decode_nibble, hex_decode, hex_encode};
use crate::{OidError, OID_HEX_LEN, OID_RAW_LEN};

/// A git object identifier: the 20-byte hash of an object's content.
///
/// Ordering is unsigned lexicographic over the raw bytes, which is also the
/// order of the lowercase hex forms.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct ObjectId([u8; OID_RAW_LEN]);

impl ObjectId {
    /// The null OID (all zeros).
    pub const NULL: Self = Self([0u8; OID_RAW_LEN]);

    /// Wrap an already raw id.
    pub const fn from_raw(raw: [u8; OID_RAW_LEN]) -> Self {
        Self(raw)
    }

    /// Create an ObjectId from a raw byte slice of exactly 20 bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, OidError> {
        let raw: [u8; OID_RAW_LEN] =
            bytes.try_into().map_err(|_| OidError::InvalidRawLength {
                expected: OID_RAW_LEN,
                actual: bytes.len(),
            })?;
        Ok(Self(raw))
    }

    /// Parse the first 40 hex digits of `text`.
    ///
    /// `text` may be longer; trailing bytes are not inspected. Either case is
    /// accepted.
    pub fn parse_hex(text: &[u8]) -> Result<Self, OidError> {
        let mut raw = [0u8; OID_RAW_LEN];
        hex_decode(text, &mut raw)?;
        Ok(Self(raw))
    }

    /// Create an ObjectId from a hex string of exactly 40 characters.
    pub fn from_hex(hex: &str) -> Result<Self, OidError> {
        if hex.len() != OID_HEX_LEN {
            return Err(OidError::InvalidHexLength {
                expected: OID_HEX_LEN,
                actual: hex.len(),
            });
        }
        Self::parse_hex(hex.as_bytes())
    }

    /// Get the raw bytes of the hash.
    pub fn as_bytes(&self) -> &[u8; OID_RAW_LEN] {
        &self.0
    }

    /// Check if this is the null (all-zeros) OID.
    pub fn is_null(&self) -> bool {
        self.0.iter().all(|&b| b == 0)
    }

    /// The hex digit value (`0..16`) at nibble position `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= 40`.
    #[inline]
    pub fn nibble(&self, index: usize) -> u8 {
        let byte = self.0[index / 2];
        if index % 2 == 0 {
            byte >> 4
        } else {
            byte & 0x0f
        }
    }

    /// Iterate over all 40 nibbles, most significant first.
    pub fn nibbles(&self) -> impl Iterator<Item = u8> + '_ {
        (0..OID_HEX_LEN).map(move |i| self.nibble(i))
    }

    /// Write the 40 lowercase hex digits into `out`. No terminator is added.
    pub fn write_hex(&self, out: &mut [u8; OID_HEX_LEN]) {
        hex_encode(&self.0, out);
    }

    /// The 40 lowercase hex digits as a fixed-size array.
    pub fn hex_bytes(&self) -> [u8; OID_HEX_LEN] {
        let mut out = [0u8; OID_HEX_LEN];
        self.write_hex(&mut out);
        out
    }

    /// The loose object path form as a fixed-size array: `xx/` followed by
    /// the remaining 38 digits.
    pub fn path_hex(&self) -> [u8; OID_HEX_LEN + 1] {
        let hex = self.hex_bytes();
        let mut out = [0u8; OID_HEX_LEN + 1];
        out[..2].copy_from_slice(&hex[..2]);
        out[2] = b'/';
        out[3..].copy_from_slice(&hex[2..]);
        out
    }

    /// Get the hex string representation (lowercase).
    pub fn to_hex(&self) -> String {
        String::from_utf8_lossy(&self.hex_bytes()).into_owned()
    }

    /// Get the loose object path component: `"xx/xxxx..."`.
    pub fn loose_path(&self) -> String {
        String::from_utf8_lossy(&self.path_hex()).into_owned()
    }

    /// Whether the first `len` hex digits of both ids are identical.
    ///
    /// An odd `len` compares only the high nibble of the last byte. Lengths
    /// past 40 are treated as 40.
    pub fn prefix_eq(&self, other: &ObjectId, len: usize) -> bool {
        let len = len.min(OID_HEX_LEN);
        let whole = len / 2;
        if self.0[..whole] != other.0[..whole] {
            return false;
        }
        len % 2 == 0 || (self.0[whole] ^ other.0[whole]) & 0xf0 == 0
    }

    /// Check if this OID's hex representation starts with the given hex prefix.
    ///
    /// Case-insensitive; a prefix longer than 40 digits or containing a
    /// non-hex character never matches.
    pub fn starts_with_hex(&self, prefix: &str) -> bool {
        prefix.len() <= OID_HEX_LEN
            && prefix
                .bytes()
                .enumerate()
                .all(|(i, c)| decode_nibble(c) == Some(self.nibble(i)))
    }
}

impl From<[u8; OID_RAW_LEN]> for ObjectId {
    fn from(raw: [u8; OID_RAW_LEN]) -> Self {
        Self::from_raw(raw)
    }
}

impl AsRef<[u8]> for ObjectId {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hex = self.hex_bytes();
        f.write_str(std::str::from_utf8(&hex).map_err(|_| fmt::Error)?)
    }
}

impl fmt::Debug for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectId({})", &self.to_hex()[..8])
    }
}

impl FromStr for ObjectId {
    type Err = OidError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}
