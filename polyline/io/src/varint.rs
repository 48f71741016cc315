//! Variable-length integers
use arrayvec::ArrayVec;

use crate::{DecodeError, ALPHABET};

/// The maximum number of characters an encoded `u64` occupies.
pub const MAX_VARINT_LEN: usize = 13;

/// Set on every character of an integer except the last one.
const CONTINUATION: u8 = 0x20;
const PAYLOAD_MASK: u8 = 0x1f;
const PAYLOAD_BITS: u32 = 5;

/// Get the 6-bit value of a character. Returns `None` if the character isn't
/// included in [`ALPHABET`].
///
/// # Example
///
///     use flexpolyline_io::char_value;
///     assert_eq!(char_value(b'A'), Some(0));
///     assert_eq!(char_value(b'_'), Some(63));
///     assert_eq!(char_value(b'!'), None);
///
#[inline]
pub fn char_value(c: u8) -> Option<u8> {
    match c {
        b'A'..=b'Z' => Some(c - b'A'),
        b'a'..=b'z' => Some(c - b'a' + 26),
        b'0'..=b'9' => Some(c - b'0' + 52),
        b'-' => Some(62),
        b'_' => Some(63),
        _ => None,
    }
}

/// Decode an unsigned variable-length integer starting at `cursor`.
///
/// Returns the decoded value and the offset of the first character after it.
pub fn decode_unsigned(data: &[u8], cursor: usize) -> Result<(u64, usize), DecodeError> {
    let mut acc = 0u64;
    let mut shift = 0u32;
    let mut i = cursor;

    loop {
        let c = *data
            .get(i)
            .ok_or(DecodeError::Truncated { offset: cursor })?;
        let value = char_value(c).ok_or(DecodeError::InvalidChar { byte: c, offset: i })?;

        // Reject payload bits that would be shifted out of `acc`
        let payload = u64::from(value & PAYLOAD_MASK);
        let fits = shift < 64 && (shift <= 64 - PAYLOAD_BITS || payload >> (64 - shift) == 0);
        if !fits {
            return Err(DecodeError::Overflow { offset: cursor });
        }

        acc |= payload << shift;
        shift += PAYLOAD_BITS;
        i += 1;

        if value & CONTINUATION == 0 {
            return Ok((acc, i));
        }
    }
}

/// Decode a zig-zag encoded, signed variable-length integer starting at
/// `cursor`.
///
/// Returns the decoded value and the offset of the first character after it.
///
/// # Example
///
///     use flexpolyline_io::decode_signed;
///     assert_eq!(decode_signed(b"uorrC", 0), Ok((1234567, 5)));
///     assert_eq!(decode_signed(b"xxB", 2), Ok((-1, 3)));
///
pub fn decode_signed(data: &[u8], cursor: usize) -> Result<(i64, usize), DecodeError> {
    let (x, cursor) = decode_unsigned(data, cursor)?;
    Ok((unzigzag(x), cursor))
}

/// Encode an unsigned variable-length integer.
pub fn encode_unsigned(mut x: u64) -> ArrayVec<[u8; MAX_VARINT_LEN]> {
    let mut out = ArrayVec::new();
    while x >= u64::from(CONTINUATION) {
        let chunk = (x as u8 & PAYLOAD_MASK) | CONTINUATION;
        out.push(ALPHABET[chunk as usize]);
        x >>= PAYLOAD_BITS;
    }
    out.push(ALPHABET[x as usize]);
    out
}

/// Encode a signed variable-length integer using zig-zag encoding.
///
/// # Example
///
///     use flexpolyline_io::encode_signed;
///     assert_eq!(&encode_signed(-1234567)[..], b"torrC");
///
pub fn encode_signed(x: i64) -> ArrayVec<[u8; MAX_VARINT_LEN]> {
    encode_unsigned(zigzag(x))
}

#[inline]
fn zigzag(x: i64) -> u64 {
    ((x << 1) ^ (x >> 63)) as u64
}

#[inline]
fn unzigzag(x: u64) -> i64 {
    ((x >> 1) as i64) ^ -((x & 1) as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn alphabet_lookup() {
        for (i, &c) in ALPHABET.iter().enumerate() {
            assert_eq!(char_value(c), Some(i as u8), "{:?}", c as char);
        }
        for &c in b"!+/= \0\x7f" {
            assert_eq!(char_value(c), None, "{:?}", c as char);
        }
        assert_eq!(char_value(0xd0), None);
    }

    #[test]
    fn known_values() {
        assert_eq!(decode_signed(b"A", 0), Ok((0, 1)));
        assert_eq!(decode_signed(b"C", 0), Ok((1, 1)));
        assert_eq!(decode_signed(b"B", 0), Ok((-1, 1)));
        assert_eq!(decode_signed(b"uorrC", 0), Ok((1234567, 5)));
        assert_eq!(decode_signed(b"torrC", 0), Ok((-1234567, 5)));
        assert_eq!(decode_unsigned(b"gB", 0), Ok((32, 2)));
    }

    #[test]
    fn truncated() {
        assert_eq!(
            decode_unsigned(b"AAg", 2),
            Err(DecodeError::Truncated { offset: 2 })
        );
        assert_eq!(
            decode_unsigned(b"", 0),
            Err(DecodeError::Truncated { offset: 0 })
        );
    }

    #[test]
    fn invalid_char() {
        assert_eq!(
            decode_unsigned(b"g!", 0),
            Err(DecodeError::InvalidChar { byte: b'!', offset: 1 })
        );
    }

    #[test]
    fn overflow() {
        assert_eq!(
            decode_unsigned(b"____________Q", 0),
            Err(DecodeError::Overflow { offset: 0 })
        );
        // The top four bits of the thirteenth character still fit
        assert_eq!(
            decode_unsigned(b"____________P", 0),
            Ok((u64::max_value(), 13))
        );
        assert_eq!(
            decode_unsigned(b"______________", 0),
            Err(DecodeError::Overflow { offset: 0 })
        );
    }

    #[test]
    fn extremes() {
        let max = encode_unsigned(u64::max_value());
        assert_eq!(max.len(), MAX_VARINT_LEN);
        assert_eq!(decode_unsigned(&max, 0), Ok((u64::max_value(), MAX_VARINT_LEN)));

        for &x in &[i64::min_value(), i64::max_value()] {
            let e = encode_signed(x);
            assert_eq!(decode_signed(&e, 0), Ok((x, e.len())));
        }
    }

    #[quickcheck]
    fn zigzag_inverse(x: i64) -> bool {
        unzigzag(zigzag(x)) == x
    }

    #[quickcheck]
    fn signed_agrees_with_encoder(x: i64) -> bool {
        let e = encode_signed(x);
        decode_signed(&e, 0) == Ok((x, e.len()))
    }
}
