//! Decimal text, serde and little-endian byte codec.

use core::fmt;
use core::str::FromStr;

use num_bigint::BigInt;
use serde::de::{self, Deserializer, Visitor};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::error::ParseUintError;
use crate::u256::CHUNK;
use crate::u512::U512;

use super::{U1024, BYTES};

impl U1024 {
    /// Builds a value from its little-endian byte representation.
    pub fn from_le_bytes(bytes: [u8; BYTES]) -> Self {
        let mut lo = [0u8; 64];
        let mut hi = [0u8; 64];
        lo.copy_from_slice(&bytes[..64]);
        hi.copy_from_slice(&bytes[64..]);
        Self {
            lo: U512::from_le_bytes(lo),
            hi: U512::from_le_bytes(hi),
        }
    }

    /// The little-endian byte representation.
    pub fn to_le_bytes(self) -> [u8; BYTES] {
        let mut out = [0u8; BYTES];
        out[..64].copy_from_slice(&self.lo.to_le_bytes());
        out[64..].copy_from_slice(&self.hi.to_le_bytes());
        out
    }
}

impl fmt::Display for U1024 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.hi.is_zero() {
            return fmt::Display::fmt(&self.lo, f);
        }

        // log10(2^1024) ≈ 308, at most 309 digits in 19-digit chunks.
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

impl FromStr for U1024 {
    type Err = ParseUintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let i: BigInt = s.parse()?;
        Ok(Self::try_from_big(&i)?)
    }
}

impl Serialize for U1024 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for U1024 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct U1024Visitor;

        impl Visitor<'_> for U1024Visitor {
            type Value = U1024;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a decimal string encoding a 1024-bit unsigned integer")
            }

            fn visit_str<E: de::Error>(self, s: &str) -> Result<U1024, E> {
                s.parse().map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_str(U1024Visitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TryFromBigError;

    #[test]
    fn test_display_against_big() {
        assert_eq!(U1024::ZERO.to_string(), "0");
        assert_eq!(U1024::from(7u64).to_string(), "7");
        for u in [
            U1024::ONE.shl(512),
            U1024::ONE.shl(1023),
            U1024::MAX,
            U1024::ONE.shl(760) + U1024::ONE,
        ] {
            assert_eq!(u.to_string(), u.to_big().to_string());
        }
    }

    #[test]
    fn test_from_str_round_trip() {
        let u = U1024::ONE.shl(999) + U1024::from(0x1234_5678_9ABC_DEF0u64);
        let parsed: U1024 = u.to_string().parse().unwrap();
        assert_eq!(parsed, u);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "ten".parse::<U1024>(),
            Err(ParseUintError::Invalid(_))
        ));
        assert_eq!(
            "-100".parse::<U1024>(),
            Err(ParseUintError::OutOfRange(TryFromBigError::Negative))
        );
        let too_big = (U1024::MAX.to_big() + 1u32).to_string();
        assert_eq!(
            too_big.parse::<U1024>(),
            Err(ParseUintError::OutOfRange(TryFromBigError::Overflow {
                width: 1024
            }))
        );
    }

    #[test]
    fn test_le_bytes_round_trip() {
        let mut bytes = [0u8; 128];
        for (i, b) in bytes.iter_mut().enumerate() {
            *b = (i as u8).wrapping_mul(13).wrapping_add(1);
        }
        let u = U1024::from_le_bytes(bytes);
        assert_eq!(u.to_le_bytes(), bytes);
        assert_eq!(u.to_big(), num_bigint::BigUint::from_bytes_le(&bytes));
    }

    #[test]
    fn test_serde_round_trip() {
        let u = U1024::ONE.shl(600) + U1024::from(42u64);
        let json = serde_json::to_string(&u).unwrap();
        assert_eq!(json, format!("\"{u}\""));
        let back: U1024 = serde_json::from_str(&json).unwrap();
        assert_eq!(back, u);
    }
}
