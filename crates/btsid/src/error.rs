use crate::ParseDecimalError;

/// A result type defaulting to the crate-wide [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All possible errors that `btsid` can produce.
///
/// Every failure is synchronous and deterministic: retrying with the same
/// input fails the same way.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The caller supplied a value the codec cannot represent.
    ///
    /// The wrapped [`ArgumentError`] says which argument was rejected and why.
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] ArgumentError),
}

impl Error {
    /// Returns `true` if this is an [`Error::InvalidArgument`].
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// Returns the underlying argument error, if any.
    pub const fn as_argument_error(&self) -> Option<&ArgumentError> {
        match self {
            Self::InvalidArgument(err) => Some(err),
        }
    }
}

/// Details of an [`Error::InvalidArgument`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ArgumentError {
    /// A negative quantity was passed where only non-negative values encode.
    #[error("negative value: {value}")]
    Negative {
        /// The rejected value.
        value: i128,
    },

    /// A decimal numeral denotes a value below zero.
    #[error("negative numeral: {numeral}")]
    NegativeNumeral {
        /// The rejected numeral, without surrounding whitespace.
        numeral: String,
    },

    /// A byte outside `0-9a-z` appeared in a base-36 string.
    #[error("invalid base36 byte {byte:#04x} at index {index}")]
    InvalidChar {
        /// The offending byte.
        byte: u8,
        /// Byte offset into the input.
        index: usize,
    },

    /// The result does not fit in a `u128`.
    #[error("value exceeds the u128 range")]
    Overflow,

    /// The input is not a decimal numeral.
    #[error("the number string is not a valid decimal")]
    ParseDecimal(#[from] ParseDecimalError),
}

impl From<ParseDecimalError> for Error {
    fn from(err: ParseDecimalError) -> Self {
        Self::InvalidArgument(ArgumentError::ParseDecimal(err))
    }
}
