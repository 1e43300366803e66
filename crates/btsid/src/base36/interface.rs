use super::{Base36Buf, DecimalNumeral, decode_base36, encode_base36};
use crate::{ArgumentError, Result, TimestampPrecision};
use chrono::NaiveDateTime;
#[cfg(feature = "tracing")]
use tracing::instrument;

/// Encodes a non-negative value as base 36, most significant digit first.
///
/// Zero encodes to the empty string: the conversion emits one digit per
/// division while the value is positive, so there is nothing to emit for zero.
/// [`decode`] accepts the empty string back as zero.
///
/// # Example
///
/// ```
/// assert_eq!(btsid::encode(35), "z");
/// assert_eq!(btsid::encode(36), "10");
/// assert_eq!(btsid::encode(1295), "zz");
/// assert_eq!(btsid::encode(0), "");
/// ```
pub fn encode(value: u128) -> String {
    let mut buf = Base36Buf::default();
    encode_base36(value, &mut buf).to_owned()
}

/// Decodes a base-36 string into its value.
///
/// Only `0-9` and lowercase `a-z` are accepted.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidArgument`] if the input holds any other
/// byte, or if the value exceeds `u128::MAX`.
///
/// # Example
///
/// ```
/// assert_eq!(btsid::decode("z").unwrap(), 35);
/// assert_eq!(btsid::decode("10").unwrap(), 36);
/// assert!(btsid::decode("A!").is_err());
/// ```
#[cfg_attr(feature = "tracing", instrument(level = "trace", err(level = "debug")))]
pub fn decode(text: &str) -> Result<u128> {
    Ok(decode_base36(text)?)
}

/// Parses `text` as a decimal numeral and encodes it.
///
/// Surrounding whitespace, a leading or trailing sign and `,` group
/// separators are accepted. A fractional part does not contribute digits
/// once the integer part is at least one, so `"37.5"` encodes like `"37"`.
/// A value strictly between zero and one still produces a single `"0"`
/// digit, while `"0.000"` and `"-0"` are zero and encode to `""`.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidArgument`] wrapping the parse failure if
/// `text` is not a decimal numeral, or carrying
/// [`ArgumentError::NegativeNumeral`] if it is below zero.
///
/// # Example
///
/// ```
/// assert_eq!(btsid::encode_from_decimal_string("1295").unwrap(), "zz");
/// assert_eq!(btsid::encode_from_decimal_string("1,000").unwrap(), "rs");
/// assert_eq!(btsid::encode_from_decimal_string("0.5").unwrap(), "0");
/// assert!(btsid::encode_from_decimal_string("-0.5").is_err());
/// assert!(btsid::encode_from_decimal_string("not-a-number").is_err());
/// ```
#[cfg_attr(feature = "tracing", instrument(level = "trace", err(level = "debug")))]
pub fn encode_from_decimal_string(text: &str) -> Result<String> {
    let numeral = DecimalNumeral::parse(text)?;
    if numeral.is_negative() {
        return Err(ArgumentError::NegativeNumeral {
            numeral: text.trim().to_owned(),
        }
        .into());
    }
    if numeral.integer == 0 && numeral.fraction_nonzero {
        // the digit loop runs once for 0 < x < 1 and emits digit zero
        return Ok(String::from("0"));
    }
    Ok(encode(numeral.integer))
}

/// Encodes a signed 64-bit integer.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidArgument`] if `value` is negative.
pub fn encode_from_integer(value: i64) -> Result<String> {
    let value = u128::try_from(value).map_err(|_| ArgumentError::Negative {
        value: i128::from(value),
    })?;
    Ok(encode(value))
}

/// Encodes a date-time through its 17-digit `yyyyMMddHHmmssfff` numeral.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidArgument`] if the date-time has a negative
/// year, which has no unsigned numeral.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
///
/// let instant = NaiveDate::from_ymd_opt(2024, 1, 15)
///     .unwrap()
///     .and_hms_milli_opt(8, 30, 45, 123)
///     .unwrap();
/// // 20240115083045123
/// assert_eq!(btsid::encode_from_timestamp(&instant).unwrap(), "5jaisi85r7n");
/// ```
pub fn encode_from_timestamp(instant: &NaiveDateTime) -> Result<String> {
    let value = TimestampPrecision::Millis.value(instant)?;
    Ok(encode(value))
}

/// Decodes `current`, adds one and re-encodes.
///
/// # Errors
///
/// Fails under the same conditions as [`decode`], and on overflow past
/// `u128::MAX`.
///
/// # Example
///
/// ```
/// assert_eq!(btsid::next("z").unwrap(), "10");
/// assert_eq!(btsid::next("").unwrap(), "1");
/// ```
#[cfg_attr(feature = "tracing", instrument(level = "trace", err(level = "debug")))]
pub fn next(current: &str) -> Result<String> {
    let value = decode_base36(current)?
        .checked_add(1)
        .ok_or(ArgumentError::Overflow)?;
    Ok(encode(value))
}

/// Conversion of a value into its base-36 string.
///
/// Implemented for the unsigned and signed primitive integers, for `str`
/// (parsed as a decimal numeral) and for [`NaiveDateTime`] (through its
/// `yyyyMMddHHmmssfff` numeral).
///
/// # Example
///
/// ```
/// use btsid::ToBase36;
///
/// assert_eq!(36_u32.to_base36().unwrap(), "10");
/// assert_eq!("1295".to_base36().unwrap(), "zz");
/// assert!((-1_i64).to_base36().is_err());
/// ```
pub trait ToBase36 {
    /// Encodes `self` as base 36.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidArgument`] if `self` has no
    /// non-negative integer value.
    fn to_base36(&self) -> Result<String>;
}

macro_rules! impl_to_base36_unsigned {
    ($($ty:ty),*) => {
        $(
            impl ToBase36 for $ty {
                fn to_base36(&self) -> Result<String> {
                    Ok(encode(u128::from(*self)))
                }
            }
        )*
    };
}

macro_rules! impl_to_base36_signed {
    ($($ty:ty),*) => {
        $(
            impl ToBase36 for $ty {
                fn to_base36(&self) -> Result<String> {
                    let value = u128::try_from(*self).map_err(|_| ArgumentError::Negative {
                        value: i128::from(*self),
                    })?;
                    Ok(encode(value))
                }
            }
        )*
    };
}

impl_to_base36_unsigned!(u8, u16, u32, u64, u128);
impl_to_base36_signed!(i8, i16, i32, i64, i128);

impl ToBase36 for usize {
    fn to_base36(&self) -> Result<String> {
        // usize is at most 64 bits on every supported target
        Ok(encode(*self as u128))
    }
}

impl ToBase36 for str {
    fn to_base36(&self) -> Result<String> {
        encode_from_decimal_string(self)
    }
}

impl ToBase36 for NaiveDateTime {
    fn to_base36(&self) -> Result<String> {
        encode_from_timestamp(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, ParseDecimalErrorKind};
    use chrono::NaiveDate;

    fn instant(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32, ms: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_milli_opt(h, mi, s, ms)
            .unwrap()
    }

    #[test]
    fn encode_decode_known_vectors() {
        assert_eq!(encode(35), "z");
        assert_eq!(encode(36), "10");
        assert_eq!(encode(1295), "zz");
        assert_eq!(decode("z").unwrap(), 35);
        assert_eq!(decode("10").unwrap(), 36);
    }

    #[test]
    fn zero_is_the_empty_string() {
        assert_eq!(encode(0), "");
        assert_eq!(decode("").unwrap(), 0);
        assert_eq!(encode_from_integer(0).unwrap(), "");
        assert_eq!(encode_from_decimal_string("-0").unwrap(), "");
    }

    #[test]
    fn decode_inverts_encode() {
        let mut n = 1_u128;
        while let Some(next) = n.checked_mul(7) {
            assert_eq!(decode(&encode(n)).unwrap(), n);
            assert_eq!(decode(&encode(n - 1)).unwrap(), n - 1);
            n = next;
        }
        assert_eq!(decode(&encode(u128::MAX)).unwrap(), u128::MAX);
    }

    #[test]
    fn encoded_output_stays_in_alphabet() {
        for n in (1..50_000_u128).step_by(97) {
            let s = encode(n * 1_000_003);
            assert!(!s.is_empty());
            assert!(
                s.bytes().all(|b| b.is_ascii_digit() || b.is_ascii_lowercase()),
                "{s}"
            );
        }
    }

    #[test]
    fn next_increments_by_one() {
        for s in ["", "1", "z", "zz", "5jaisi85r7n", "f5lxx1zz5pnorynqglhzmsp32"] {
            let v = decode(s).unwrap();
            assert_eq!(decode(&next(s).unwrap()).unwrap(), v + 1);
        }
        assert_eq!(next("zz").unwrap(), "100");
    }

    #[test]
    fn next_rejects_invalid_and_maximal_input() {
        assert!(next("A!").unwrap_err().is_invalid_argument());
        assert_eq!(
            next("f5lxx1zz5pnorynqglhzmsp33").unwrap_err(),
            Error::InvalidArgument(ArgumentError::Overflow)
        );
    }

    #[test]
    fn decode_fails_loudly_on_foreign_characters() {
        assert_eq!(
            decode("A!").unwrap_err(),
            Error::InvalidArgument(ArgumentError::InvalidChar {
                byte: b'A',
                index: 0
            })
        );
    }

    #[test]
    fn decimal_string_is_parsed_then_encoded() {
        assert_eq!(encode_from_decimal_string("35").unwrap(), "z");
        assert_eq!(encode_from_decimal_string(" 36 ").unwrap(), "10");
        assert_eq!(encode_from_decimal_string("37.5").unwrap(), "11");
        assert_eq!(
            encode_from_decimal_string("20240115083045123").unwrap(),
            "5jaisi85r7n"
        );
    }

    #[test]
    fn decimal_string_errors() {
        let err = encode_from_decimal_string("not-a-number").unwrap_err();
        match err {
            Error::InvalidArgument(ArgumentError::ParseDecimal(e)) => {
                assert_eq!(e.kind(), ParseDecimalErrorKind::InvalidDigit);
            }
            other => panic!("unexpected error: {other:?}"),
        }

        assert_eq!(
            encode_from_decimal_string("-12").unwrap_err(),
            Error::InvalidArgument(ArgumentError::NegativeNumeral {
                numeral: "-12".to_owned()
            })
        );
        let huge_negative = format!("-{}", u128::MAX);
        assert!(matches!(
            encode_from_decimal_string(&huge_negative).unwrap_err(),
            Error::InvalidArgument(ArgumentError::NegativeNumeral { .. })
        ));
    }

    #[test]
    fn negative_fractions_are_rejected() {
        for s in ["-0.5", "-0.99", " -.001 ", "0.5-", "-37.5"] {
            assert_eq!(
                encode_from_decimal_string(s).unwrap_err(),
                Error::InvalidArgument(ArgumentError::NegativeNumeral {
                    numeral: s.trim().to_owned()
                }),
                "input {s:?}"
            );
        }
    }

    #[test]
    fn signed_zero_encodes_empty() {
        for s in ["-0", "-0.0", "-0.000", "+0", "0-", "0.000"] {
            assert_eq!(encode_from_decimal_string(s).unwrap(), "", "input {s:?}");
        }
    }

    #[test]
    fn fraction_below_one_emits_single_zero_digit() {
        for s in ["0.5", ".5", "0.99", "0.0001", "+0.5"] {
            assert_eq!(encode_from_decimal_string(s).unwrap(), "0", "input {s:?}");
        }
        assert_eq!(encode_from_decimal_string("1.5").unwrap(), "1");
        assert_eq!(encode_from_decimal_string("36.999").unwrap(), "10");
    }

    #[test]
    fn group_separators_and_trailing_sign() {
        assert_eq!(encode_from_decimal_string("1,000").unwrap(), "rs");
        assert_eq!(encode_from_decimal_string("1,295.75").unwrap(), "zz");
        assert_eq!(encode_from_decimal_string("1295+").unwrap(), "zz");
        assert!(
            encode_from_decimal_string("1295-")
                .unwrap_err()
                .is_invalid_argument()
        );
    }

    #[test]
    fn integer_entry_point_rejects_negatives() {
        assert_eq!(encode_from_integer(1295).unwrap(), "zz");
        assert_eq!(encode_from_integer(i64::MAX).unwrap(), "1y2p0ij32e8e7");
        assert_eq!(
            encode_from_integer(-1).unwrap_err(),
            Error::InvalidArgument(ArgumentError::Negative { value: -1 })
        );
    }

    #[test]
    fn timestamp_uses_millisecond_numeral() {
        let t = instant(2024, 1, 15, 8, 30, 45, 123);
        assert_eq!(encode_from_timestamp(&t).unwrap(), "5jaisi85r7n");
        assert_eq!(t.to_base36().unwrap(), "5jaisi85r7n");
    }

    #[test]
    fn timestamp_encoding_preserves_order() {
        let a = encode_from_timestamp(&instant(2024, 1, 15, 8, 30, 45, 123)).unwrap();
        let b = encode_from_timestamp(&instant(2024, 1, 15, 8, 30, 45, 124)).unwrap();
        let c = encode_from_timestamp(&instant(2099, 12, 31, 23, 59, 59, 999)).unwrap();
        assert_eq!(a.len(), b.len());
        assert_eq!(a.len(), c.len());
        assert!(a < b && b < c);
    }

    #[test]
    fn trait_covers_primitives() {
        assert_eq!(35_u8.to_base36().unwrap(), "z");
        assert_eq!(1295_u16.to_base36().unwrap(), "zz");
        assert_eq!(36_usize.to_base36().unwrap(), "10");
        assert_eq!(u128::MAX.to_base36().unwrap(), "f5lxx1zz5pnorynqglhzmsp33");
        assert_eq!(35_i32.to_base36().unwrap(), "z");
        assert!(i128::MIN.to_base36().unwrap_err().is_invalid_argument());
        assert_eq!("1295".to_base36().unwrap(), "zz");
    }
}
