use crate::{ArgumentError, Base36Buf, Error, Result, decode_base36, encode_base36};
use core::{fmt, str::FromStr};

/// A non-negative quantity and its base-36 form.
///
/// The value is held as a `u128`, which represents every 17-digit
/// `yyyyMMddHHmmssfff` numeral (plus any process-id offset) exactly.
/// Ordering follows the numeric value; for encodings of equal length this is
/// also the lexicographic order of the strings.
///
/// # Example
///
/// ```
/// use btsid::Base36Id;
///
/// let id: Base36Id = "zz".parse().unwrap();
/// assert_eq!(id.to_raw(), 1295);
/// assert_eq!(id.next().unwrap().to_string(), "100");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Base36Id(u128);

impl Base36Id {
    /// The zero value. Encodes to the empty string.
    pub const ZERO: Self = Self(0);

    /// The largest representable value.
    pub const MAX: Self = Self(u128::MAX);

    /// Wraps a raw value.
    pub const fn from_raw(raw: u128) -> Self {
        Self(raw)
    }

    /// Returns the raw value.
    pub const fn to_raw(self) -> u128 {
        self.0
    }

    /// Encodes this value into a [`String`].
    pub fn encode(&self) -> String {
        let mut buf = Base36Buf::default();
        self.encode_to_buf(&mut buf).to_owned()
    }

    /// Encodes this value into a stack buffer without heap allocation,
    /// returning the written tail of `buf`.
    ///
    /// ```
    /// use btsid::{Base36Buf, Base36Id};
    ///
    /// let mut buf = Base36Buf::default();
    /// assert_eq!(Base36Id::from_raw(36).encode_to_buf(&mut buf), "10");
    /// ```
    pub fn encode_to_buf<'a>(&self, buf: &'a mut Base36Buf) -> &'a str {
        encode_base36(self.0, buf)
    }

    /// Decodes a base-36 string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] on a byte outside `0-9a-z` or on
    /// overflow.
    pub fn decode(s: &str) -> Result<Self> {
        Ok(Self(decode_base36(s)?))
    }

    /// Adds `rhs`, failing instead of wrapping.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the sum exceeds `u128::MAX`.
    pub fn checked_add(self, rhs: u128) -> Result<Self> {
        self.0
            .checked_add(rhs)
            .map(Self)
            .ok_or(ArgumentError::Overflow.into())
    }

    /// The successor of this value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] on [`Base36Id::MAX`].
    pub fn next(self) -> Result<Self> {
        self.checked_add(1)
    }
}

impl fmt::Display for Base36Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = Base36Buf::default();
        f.pad(self.encode_to_buf(&mut buf))
    }
}

impl FromStr for Base36Id {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::decode(s)
    }
}

impl From<u128> for Base36Id {
    fn from(raw: u128) -> Self {
        Self(raw)
    }
}

impl From<u64> for Base36Id {
    fn from(raw: u64) -> Self {
        Self(u128::from(raw))
    }
}

impl From<u32> for Base36Id {
    fn from(raw: u32) -> Self {
        Self(u128::from(raw))
    }
}

impl From<Base36Id> for u128 {
    fn from(id: Base36Id) -> Self {
        id.0
    }
}

impl TryFrom<i64> for Base36Id {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self> {
        u128::try_from(value).map(Self).map_err(|_| {
            ArgumentError::Negative {
                value: i128::from(value),
            }
            .into()
        })
    }
}
