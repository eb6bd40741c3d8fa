//! Decimal text, serde and little-endian byte codec.
//!
//! The decimal form is produced 19 digits at a time by dividing through
//! `10^19`, the largest power of ten in a 64-bit limb; parsing stages
//! through an arbitrary-precision integer so range errors are reported
//! with the same taxonomy as the checked constructors.

use core::fmt;
use core::str::FromStr;

use num_bigint::BigInt;
use serde::de::{self, Deserializer, Visitor};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::error::ParseUintError;

use super::{U256, BYTES};

/// Largest power of ten that fits a 64-bit limb.
pub(crate) const CHUNK: u64 = 10_000_000_000_000_000_000;

impl U256 {
    /// Builds a value from its little-endian byte representation.
    pub fn from_le_bytes(bytes: [u8; BYTES]) -> Self {
        let mut lo = [0u8; 16];
        let mut hi = [0u8; 16];
        lo.copy_from_slice(&bytes[..16]);
        hi.copy_from_slice(&bytes[16..]);
        Self {
            lo: u128::from_le_bytes(lo),
            hi: u128::from_le_bytes(hi),
        }
    }

    /// The little-endian byte representation.
    pub fn to_le_bytes(self) -> [u8; BYTES] {
        let mut out = [0u8; BYTES];
        out[..16].copy_from_slice(&self.lo.to_le_bytes());
        out[16..].copy_from_slice(&self.hi.to_le_bytes());
        out
    }
}

impl fmt::Display for U256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.hi == 0 {
            return fmt::Display::fmt(&self.lo, f);
        }

        let mut out = String::new();
        let mut u = *self;
        loop {
            let (q, r) = u.quo_rem_u64(CHUNK);
            if q.is_zero() {
                out.insert_str(0, &r.to_string());
                break;
            }
            out.insert_str(0, &format!("{r:019}"));
            u = q;
        }
        f.pad_integral(true, "", &out)
    }
}

impl FromStr for U256 {
    type Err = ParseUintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let i: BigInt = s.parse()?;
        Ok(Self::try_from_big(&i)?)
    }
}

impl Serialize for U256 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for U256 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct U256Visitor;

        impl Visitor<'_> for U256Visitor {
            type Value = U256;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a decimal string encoding a 256-bit unsigned integer")
            }

            fn visit_str<E: de::Error>(self, s: &str) -> Result<U256, E> {
                s.parse().map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_str(U256Visitor)
    }
}
