//! Decimal text, serde and little-endian byte codec.

use core::fmt;
use core::str::FromStr;

use num_bigint::BigInt;
use serde::de::{self, Deserializer, Visitor};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::error::ParseUintError;
use crate::u256::{CHUNK, U256};

use super::{U512, BYTES};

impl U512 {
    /// Builds a value from its little-endian byte representation.
    pub fn from_le_bytes(bytes: [u8; BYTES]) -> Self {
        let mut lo = [0u8; 32];
        let mut hi = [0u8; 32];
        lo.copy_from_slice(&bytes[..32]);
        hi.copy_from_slice(&bytes[32..]);
        Self {
            lo: U256::from_le_bytes(lo),
            hi: U256::from_le_bytes(hi),
        }
    }

    /// The little-endian byte representation.
    pub fn to_le_bytes(self) -> [u8; BYTES] {
        let mut out = [0u8; BYTES];
        out[..32].copy_from_slice(&self.lo.to_le_bytes());
        out[32..].copy_from_slice(&self.hi.to_le_bytes());
        out
    }
}

impl fmt::Display for U512 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.hi.is_zero() {
            return fmt::Display::fmt(&self.lo, f);
        }

        // log10(2^512) ≈ 154, at most 155 digits in 19-digit chunks.
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

impl FromStr for U512 {
    type Err = ParseUintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let i: BigInt = s.parse()?;
        Ok(Self::try_from_big(&i)?)
    }
}

impl Serialize for U512 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for U512 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct U512Visitor;

        impl Visitor<'_> for U512Visitor {
            type Value = U512;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a decimal string encoding a 512-bit unsigned integer")
            }

            fn visit_str<E: de::Error>(self, s: &str) -> Result<U512, E> {
                s.parse().map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_str(U512Visitor)
    }
}
