use chrono::{Local, NaiveDateTime};

/// A source of local wall-clock time.
///
/// This abstraction allows you to plug in the real system clock, or a fixed
/// time source in tests.
///
/// # Example
///
/// ```
/// use btsid::WallClock;
/// use chrono::{NaiveDate, NaiveDateTime};
///
/// struct Noon;
/// impl WallClock for Noon {
///     fn now(&self) -> NaiveDateTime {
///         NaiveDate::from_ymd_opt(2024, 6, 1)
///             .unwrap()
///             .and_hms_opt(12, 0, 0)
///             .unwrap()
///     }
/// }
///
/// assert_eq!(Noon.now().to_string(), "2024-06-01 12:00:00");
/// ```
pub trait WallClock {
    /// Returns the current local date-time.
    fn now(&self) -> NaiveDateTime;
}

/// A source of the identifier of the running process.
pub trait ProcessIdSource {
    /// Returns the current process id.
    fn process_id(&self) -> u32;
}

impl<T: WallClock + ?Sized> WallClock for &T {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}

impl<T: ProcessIdSource + ?Sized> ProcessIdSource for &T {
    fn process_id(&self) -> u32 {
        (**self).process_id()
    }
}

/// The host's local clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl WallClock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// The id the operating system assigned to this process.
#[derive(Clone, Copy, Debug, Default)]
pub struct CurrentProcess;

impl ProcessIdSource for CurrentProcess {
    fn process_id(&self) -> u32 {
        std::process::id()
    }
}

/// A clock stopped at a single instant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl WallClock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// A constant process id.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FixedProcessId(pub u32);

impl ProcessIdSource for FixedProcessId {
    fn process_id(&self) -> u32 {
        self.0
    }
}
