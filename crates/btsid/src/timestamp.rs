use crate::{ArgumentError, Result};
use chrono::{Datelike, NaiveDateTime, Timelike};

/// How much of a date-time goes into its decimal numeral.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimestampPrecision {
    /// `yyyyMMddHHmmssfff`, 17 digits.
    Millis,
    /// `yyyyMMddHHmmss`, 14 digits.
    Seconds,
}

impl TimestampPrecision {
    /// Number of digits in the numeral for years `1000..=9999`.
    pub const fn digits(self) -> usize {
        match self {
            Self::Millis => 17,
            Self::Seconds => 14,
        }
    }

    /// Formats `instant` as its zero-padded numeral, without separators.
    ///
    /// ```
    /// use btsid::TimestampPrecision;
    /// use chrono::NaiveDate;
    ///
    /// let t = NaiveDate::from_ymd_opt(2024, 1, 5)
    ///     .unwrap()
    ///     .and_hms_milli_opt(8, 3, 4, 7)
    ///     .unwrap();
    /// assert_eq!(TimestampPrecision::Millis.numeral(&t), "20240105080304007");
    /// assert_eq!(TimestampPrecision::Seconds.numeral(&t), "20240105080304");
    /// ```
    pub fn numeral(self, instant: &NaiveDateTime) -> String {
        let seconds = format!(
            "{:04}{:02}{:02}{:02}{:02}{:02}",
            instant.year(),
            instant.month(),
            instant.day(),
            instant.hour(),
            instant.minute(),
            instant.second(),
        );
        match self {
            Self::Millis => format!("{seconds}{:03}", millis(instant)),
            Self::Seconds => seconds,
        }
    }

    /// The numeric value of [`TimestampPrecision::numeral`], computed
    /// directly rather than through a string.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidArgument`] for a negative year.
    pub fn value(self, instant: &NaiveDateTime) -> Result<u128> {
        let year = u128::try_from(instant.year()).map_err(|_| ArgumentError::Negative {
            value: i128::from(instant.year()),
        })?;
        let seconds = ((((year * 100 + u128::from(instant.month())) * 100
            + u128::from(instant.day()))
            * 100
            + u128::from(instant.hour()))
            * 100
            + u128::from(instant.minute()))
            * 100
            + u128::from(instant.second());
        Ok(match self {
            Self::Millis => seconds * 1000 + u128::from(millis(instant)),
            Self::Seconds => seconds,
        })
    }
}

/// Milliseconds within the second, truncated. A leap second's extra
/// nanoseconds clamp to 999.
fn millis(instant: &NaiveDateTime) -> u32 {
    (instant.nanosecond() / 1_000_000).min(999)
}
