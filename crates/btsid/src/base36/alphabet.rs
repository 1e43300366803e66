use crate::{ArgumentError, Result};

/// The 36 symbols, in digit order. Lowercase only.
pub const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// The numeric base of the encoding.
pub const RADIX: u128 = 36;

/// Maximum number of base-36 digits needed for any `u128`.
///
/// `36^24 < u128::MAX < 36^25`.
pub const MAX_ENCODED_LEN: usize = 25;

/// A stack buffer large enough to hold the encoding of any `u128`.
pub type Base36Buf = [u8; MAX_ENCODED_LEN];

const NO_VALUE: u8 = 255;

/// Lookup table for base-36 decoding. Uppercase letters are not mapped.
const LOOKUP: [u8; 256] = {
    let mut lut = [NO_VALUE; 256];
    let mut i = 0_u8;
    while i < 36 {
        lut[ALPHABET[i as usize] as usize] = i;
        i += 1;
    }
    lut
};

/// Encodes `value` into the tail of `buf`, most significant digit first, and
/// returns the written slice as a `&str`.
///
/// Zero writes no digits and yields the empty string.
#[inline]
pub fn encode_base36(mut value: u128, buf: &mut Base36Buf) -> &str {
    let mut pos = buf.len();
    while value > 0 {
        pos -= 1;
        // `value % RADIX` is in 0..36
        buf[pos] = ALPHABET[(value % RADIX) as usize];
        value /= RADIX;
    }

    // SAFETY: every byte written above comes from `ALPHABET`, which is ASCII.
    unsafe { core::str::from_utf8_unchecked(&buf[pos..]) }
}

/// Decodes a base-36 string, folding digits left to right.
///
/// The empty string decodes to zero. Any byte outside `0-9a-z` is rejected,
/// as is a value that would exceed `u128::MAX`.
#[inline]
pub fn decode_base36(encoded: &str) -> Result<u128, ArgumentError> {
    let mut acc = 0_u128;
    for (index, byte) in encoded.bytes().enumerate() {
        let digit = LOOKUP[byte as usize];
        if digit == NO_VALUE {
            return Err(ArgumentError::InvalidChar { byte, index });
        }
        acc = acc
            .checked_mul(RADIX)
            .and_then(|acc| acc.checked_add(u128::from(digit)))
            .ok_or(ArgumentError::Overflow)?;
    }
    Ok(acc)
}
