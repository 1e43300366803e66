//! Base-36 encoding of non-negative decimal quantities, and short,
//! time-sortable identifiers derived from the local wall clock.
//!
//! Values are `u128`, so every 17-digit `yyyyMMddHHmmssfff` timestamp numeral
//! converts exactly. The alphabet is `0-9a-z`, most significant digit first.
//!
//! ```
//! assert_eq!(btsid::encode(1295), "zz");
//! assert_eq!(btsid::decode("zz").unwrap(), 1295);
//! assert_eq!(btsid::next("zz").unwrap(), "100");
//!
//! let id = btsid::new_identifier(btsid::NumberMode::Uniq).unwrap();
//! assert!(!id.is_empty());
//! ```
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`Base36Id`] and [`NumberMode`],
//!   plus the `as_base36` and `as_native` field adapters.
//! - `tracing`: trace-level spans on decoding and generation; failures are
//!   recorded at debug level.

mod base36;
mod error;
mod generator;
mod id;
mod mode;
#[cfg(feature = "serde")]
mod serde;
mod time;
mod timestamp;

pub use crate::base36::*;
pub use crate::error::*;
pub use crate::generator::*;
pub use crate::id::*;
pub use crate::mode::*;
#[cfg(feature = "serde")]
pub use crate::serde::*;
pub use crate::time::*;
pub use crate::timestamp::*;
