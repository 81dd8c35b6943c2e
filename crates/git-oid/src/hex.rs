use crate::{ObjectId, OidError, OID_HEX_LEN};

/// Lookup table: ASCII byte → nibble value (255 = invalid).
const HEX_DECODE: [u8; 256] = {
    let mut table = [255u8; 256];
    let mut i = 0u8;
    loop {
        match i {
            b'0'..=b'9' => table[i as usize] = i - b'0',
            b'a'..=b'f' => table[i as usize] = i - b'a' + 10,
            b'A'..=b'F' => table[i as usize] = i - b'A' + 10,
            _ => {}
        }
        if i == 255 {
            break;
        }
        i += 1;
    }
    table
};

const HEX_ENCODE: &[u8; 16] = b"0123456789abcdef";

/// Decode a single ASCII hex digit (either case) into its nibble value.
#[inline]
pub fn decode_nibble(c: u8) -> Option<u8> {
    match HEX_DECODE[c as usize] {
        255 => None,
        v => Some(v),
    }
}

/// Encode a nibble (`0..16`) as a lowercase ASCII hex digit.
#[inline]
pub fn encode_nibble(n: u8) -> u8 {
    HEX_ENCODE[(n & 0x0f) as usize]
}

/// Hex-encode `bytes` into `buf`. `buf` must be at least `bytes.len() * 2` bytes.
///
/// # Panics
///
/// Panics if `buf` is too short.
pub fn hex_encode(bytes: &[u8], buf: &mut [u8]) {
    assert!(buf.len() >= bytes.len() * 2, "hex_encode: buffer too short");
    for (pair, &b) in buf.chunks_exact_mut(2).zip(bytes) {
        pair[0] = encode_nibble(b >> 4);
        pair[1] = encode_nibble(b);
    }
}

/// Hex-encode `bytes` to a new `String`.
pub fn hex_to_string(bytes: &[u8]) -> String {
    let mut buf = vec![0u8; bytes.len() * 2];
    hex_encode(bytes, &mut buf);
    // SAFETY: hex_encode only writes ASCII hex digits.
    unsafe { String::from_utf8_unchecked(buf) }
}

/// Decode the leading `buf.len() * 2` hex digits of `hex` into `buf`.
///
/// Anything after the required digits is ignored. High nibble first within
/// each byte.
pub fn hex_decode(hex: &[u8], buf: &mut [u8]) -> Result<(), OidError> {
    let needed = buf.len() * 2;
    if hex.len() < needed {
        return Err(OidError::InvalidHexLength {
            expected: needed,
            actual: hex.len(),
        });
    }
    for (i, out) in buf.iter_mut().enumerate() {
        let hi = decode_at(hex, i * 2)?;
        let lo = decode_at(hex, i * 2 + 1)?;
        *out = (hi << 4) | lo;
    }
    Ok(())
}

fn decode_at(hex: &[u8], position: usize) -> Result<u8, OidError> {
    decode_nibble(hex[position]).ok_or(OidError::InvalidHex {
        position,
        character: hex[position] as char,
    })
}

/// Format `oid` into `out` as a NUL-terminated hex string and return the
/// written digits.
///
/// At most `out.len() - 1` digits are written, so a buffer shorter than
/// `OID_HEX_LEN + 1` yields a truncated prefix. A missing buffer, an empty
/// buffer or a missing id produce `""` instead of an error; the result is
/// always printable.
pub fn to_bounded_str<'a>(out: Option<&'a mut [u8]>, oid: Option<&ObjectId>) -> &'a str {
    let (out, oid) = match (out, oid) {
        (Some(out), Some(oid)) if !out.is_empty() => (out, oid),
        _ => return "",
    };
    let len = (out.len() - 1).min(OID_HEX_LEN);
    out[..len].copy_from_slice(&oid.hex_bytes()[..len]);
    out[len] = 0;
    std::str::from_utf8(&out[..len]).unwrap_or("")
}
