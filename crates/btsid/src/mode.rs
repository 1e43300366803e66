use crate::TimestampPrecision;
use core::{fmt, str::FromStr};

/// Identifier-generation strategy for [`crate::new_identifier`].
///
/// Parses case-insensitively from `"uniq"`, `"short"` or `"compressed"`, and
/// serializes (with the `serde` feature) as the lowercase name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum NumberMode {
    /// Millisecond timestamp plus the current process id.
    #[default]
    Uniq,
    /// Millisecond timestamp.
    Short,
    /// Second timestamp.
    Compressed,
}

impl NumberMode {
    /// Every mode, in declaration order.
    pub const ALL: [Self; 3] = [Self::Uniq, Self::Short, Self::Compressed];

    /// The timestamp numeral this mode starts from.
    pub const fn precision(self) -> TimestampPrecision {
        match self {
            Self::Uniq | Self::Short => TimestampPrecision::Millis,
            Self::Compressed => TimestampPrecision::Seconds,
        }
    }

    /// Whether the process id is added to the timestamp.
    pub const fn adds_process_id(self) -> bool {
        matches!(self, Self::Uniq)
    }

    /// The lowercase name of this mode.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Uniq => "uniq",
            Self::Short => "short",
            Self::Compressed => "compressed",
        }
    }
}

impl fmt::Display for NumberMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown [`NumberMode`] name.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown number mode {input:?}, expected one of: uniq, short, compressed")]
pub struct ParseNumberModeError {
    input: String,
}

impl FromStr for NumberMode {
    type Err = ParseNumberModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseNumberModeError {
                input: s.to_owned(),
            })
    }
}
