use crate::{
    Base36Id, CurrentProcess, NumberMode, ProcessIdSource, Result, SystemClock, WallClock,
};
#[cfg(feature = "tracing")]
use tracing::instrument;


/// Produces short, time-sortable identifiers from a clock and a process id.
///
/// Both sources are injected so that tests can supply fixed values. The
/// generator holds no mutable state: two calls that observe the same instant
/// in the same mode yield the same identifier.
///
/// # Example
///
/// ```
/// use btsid::{Base36Generator, FixedClock, FixedProcessId, NumberMode};
/// use chrono::NaiveDate;
///
/// let t = NaiveDate::from_ymd_opt(2024, 1, 15)
///     .unwrap()
///     .and_hms_milli_opt(8, 30, 45, 123)
///     .unwrap();
/// let generator = Base36Generator::new(FixedClock(t), FixedProcessId(4242));
///
/// assert_eq!(generator.new_identifier(NumberMode::Short).unwrap(), "5jaisi85r7n");
/// assert_eq!(generator.new_identifier(NumberMode::Uniq).unwrap(), "5jaisi85uhh");
/// assert_eq!(generator.new_identifier(NumberMode::Compressed).unwrap(), "76a6hxp9h");
/// ```
#[derive(Clone, Debug, Default)]
pub struct Base36Generator<C, P> {
    clock: C,
    pid: P,
}

impl Base36Generator<SystemClock, CurrentProcess> {
    /// A generator reading the host's local clock and this process's id.
    pub const fn system() -> Self {
        Self::new(SystemClock, CurrentProcess)
    }
}

impl<C, P> Base36Generator<C, P>
where
    C: WallClock,
    P: ProcessIdSource,
{
    /// Creates a generator over the given clock and process-id source.
    pub const fn new(clock: C, pid: P) -> Self {
        Self { clock, pid }
    }

    /// Returns a reference to the clock.
    pub const fn clock(&self) -> &C {
        &self.clock
    }

    /// Returns a reference to the process-id source.
    pub const fn process_id_source(&self) -> &P {
        &self.pid
    }

    /// Reads the clock once and derives the identifier value for `mode`.
    ///
    /// - [`NumberMode::Uniq`]: `yyyyMMddHHmmssfff` plus the process id. The
    ///   offset makes collisions between processes less likely but does not
    ///   rule them out.
    /// - [`NumberMode::Short`]: `yyyyMMddHHmmssfff`.
    /// - [`NumberMode::Compressed`]: `yyyyMMddHHmmss`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidArgument`] if the clock reports a
    /// negative year.
    #[cfg_attr(
        feature = "tracing",
        instrument(level = "trace", skip(self), err(level = "debug"))
    )]
    pub fn next_id(&self, mode: NumberMode) -> Result<Base36Id> {
        let now = self.clock.now();
        let stamp = Base36Id::from_raw(mode.precision().value(&now)?);
        if mode.adds_process_id() {
            stamp.checked_add(u128::from(self.pid.process_id()))
        } else {
            Ok(stamp)
        }
    }

    /// Like [`Base36Generator::next_id`], encoded as a string.
    ///
    /// # Errors
    ///
    /// See [`Base36Generator::next_id`].
    pub fn new_identifier(&self, mode: NumberMode) -> Result<String> {
        self.next_id(mode).map(|id| id.encode())
    }
}

/// Generates an identifier from the local clock and the current process id.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidArgument`] only if the host clock reports a
/// negative year.
///
/// # Example
///
/// ```
/// use btsid::NumberMode;
///
/// let id = btsid::new_identifier(NumberMode::Compressed).unwrap();
/// assert!(id.bytes().all(|b| b.is_ascii_digit() || b.is_ascii_lowercase()));
/// ```
pub fn new_identifier(mode: NumberMode) -> Result<String> {
    Base36Generator::system().new_identifier(mode)
}

/// [`new_identifier`] with [`NumberMode::Uniq`].
///
/// # Errors
///
/// See [`new_identifier`].
pub fn new_identifier_default() -> Result<String> {
    new_identifier(NumberMode::default())
}
