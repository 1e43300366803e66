//! Serde support for [`Base36Id`].
//!
//! By default a [`Base36Id`] serializes as its base-36 string. Use the field
//! adapters to choose a representation explicitly:
//!
//! ```
//! use btsid::{Base36Id, as_base36, as_native};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Row {
//!     #[serde(with = "as_base36")]
//!     public_id: Base36Id,
//!     #[serde(with = "as_native")]
//!     raw_id: Base36Id,
//! }
//! ```

use crate::Base36Id;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Serialize as the base-36 string; deserialize from one.
pub mod as_base36 {
    use super::*;

    /// Writes `id` as its base-36 string.
    pub fn serialize<S>(id: &Base36Id, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut buf = crate::Base36Buf::default();
        s.serialize_str(id.encode_to_buf(&mut buf))
    }

    /// Reads a base-36 string, rejecting bytes outside `0-9a-z`.
    pub fn deserialize<'de, D>(d: D) -> Result<Base36Id, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct Base36Visitor;

        impl serde::de::Visitor<'_> for Base36Visitor {
            type Value = Base36Id;

            fn expecting(&self, formatter: &mut core::fmt::Formatter) -> core::fmt::Result {
                formatter.write_str("a base36 encoded string")
            }

            #[inline]
            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Base36Id::decode(v).map_err(serde::de::Error::custom)
            }
        }

        d.deserialize_str(Base36Visitor)
    }
}

/// Serialize as the raw `u128` value.
pub mod as_native {
    use super::*;

    /// Writes the raw value of `id`.
    pub fn serialize<S>(id: &Base36Id, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        id.to_raw().serialize(s)
    }

    /// Reads a raw `u128` value.
    pub fn deserialize<'de, D>(d: D) -> Result<Base36Id, D::Error>
    where
        D: Deserializer<'de>,
    {
        u128::deserialize(d).map(Base36Id::from_raw)
    }
}

impl Serialize for Base36Id {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        as_base36::serialize(self, s)
    }
}

impl<'de> Deserialize<'de> for Base36Id {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        as_base36::deserialize(d)
    }
}
