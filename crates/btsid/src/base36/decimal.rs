use core::fmt;

/// Why a decimal numeral failed to parse.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ParseDecimalErrorKind {
    /// No digits were found.
    Empty,
    /// A byte that is not part of the numeral grammar.
    InvalidDigit,
    /// The integer part does not fit in a `u128`.
    Overflow,
}

/// An error returned when a string is not a valid decimal numeral.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at index {index}")]
pub struct ParseDecimalError {
    kind: ParseDecimalErrorKind,
    index: usize,
}

impl ParseDecimalError {
    pub(crate) const fn new(kind: ParseDecimalErrorKind, index: usize) -> Self {
        Self { kind, index }
    }

    /// The category of failure.
    pub const fn kind(&self) -> ParseDecimalErrorKind {
        self.kind
    }

    /// Byte offset into the input where parsing stopped.
    pub const fn index(&self) -> usize {
        self.index
    }
}

impl fmt::Display for ParseDecimalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("no digits"),
            Self::InvalidDigit => f.write_str("invalid digit"),
            Self::Overflow => f.write_str("integer part overflows u128"),
        }
    }
}

/// A parsed decimal numeral: its sign, the integer part of its magnitude and
/// whether anything non-zero follows the decimal point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecimalNumeral {
    /// `true` if the numeral carried a `-` sign, leading or trailing.
    pub negative: bool,
    /// The integer part of the magnitude.
    pub integer: u128,
    /// `true` if any fractional digit is non-zero.
    pub fraction_nonzero: bool,
}

impl DecimalNumeral {
    /// Parses `[ws] [sign] digits [. digits] [sign] [ws]`, where `digits` may
    /// be empty on one side of the point and `sign` is `+` or `-`, given at
    /// most once.
    ///
    /// Commas between integer digits are group separators and are skipped.
    /// Exponents and inner whitespace are rejected.
    pub fn parse(input: &str) -> Result<Self, ParseDecimalError> {
        let bytes = input.as_bytes();
        let start = bytes
            .iter()
            .position(|b| !b.is_ascii_whitespace())
            .unwrap_or(bytes.len());
        let end = bytes
            .iter()
            .rposition(|b| !b.is_ascii_whitespace())
            .map_or(start, |i| i + 1);

        let mut i = start;
        let mut signed = true;
        let mut negative = match bytes.get(i) {
            Some(b'-') => {
                i += 1;
                true
            }
            Some(b'+') => {
                i += 1;
                false
            }
            _ => {
                signed = false;
                false
            }
        };

        let mut integer = 0_u128;
        let mut digits = 0_usize;
        while i < end {
            match bytes[i] {
                b @ b'0'..=b'9' => {
                    integer = integer
                        .checked_mul(10)
                        .and_then(|n| n.checked_add(u128::from(b - b'0')))
                        .ok_or(ParseDecimalError::new(ParseDecimalErrorKind::Overflow, i))?;
                    digits += 1;
                }
                // group separator, only after the first digit
                b',' if digits > 0 => {}
                _ => break,
            }
            i += 1;
        }

        let mut fraction_nonzero = false;
        if i < end && bytes[i] == b'.' {
            i += 1;
            while i < end && bytes[i].is_ascii_digit() {
                fraction_nonzero |= bytes[i] != b'0';
                digits += 1;
                i += 1;
            }
        }

        if !signed && digits > 0 && i + 1 == end && matches!(bytes[i], b'+' | b'-') {
            negative = bytes[i] == b'-';
            i += 1;
        }

        if i < end {
            return Err(ParseDecimalError::new(ParseDecimalErrorKind::InvalidDigit, i));
        }
        if digits == 0 {
            return Err(ParseDecimalError::new(ParseDecimalErrorKind::Empty, i));
        }

        Ok(Self {
            negative,
            integer,
            fraction_nonzero,
        })
    }

    /// Whether the numeral denotes a value below zero. `-0` and `-0.00` do not.
    pub const fn is_negative(&self) -> bool {
        self.negative && (self.integer > 0 || self.fraction_nonzero)
    }
}
