//! 512-bit unsigned integer built from two [`U256`] halves.
//!
//! The value of `{ lo, hi }` is `lo + hi·2^256`. Every operation composes
//! the half-width layer: carries chain low-to-high, products decompose
//! into four half products, division narrows through `U256::div_wide`.

mod add;
mod bits;
mod div;
mod fmt;
mod mul;
mod shift;

use core::cmp::Ordering;
use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

use num_bigint::{BigInt, BigUint, Sign};

use crate::error::TryFromBigError;
use crate::u256::U256;

/// Bit width of [`U512`].
pub const BITS: u32 = 512;

/// Width of [`U512`] in bytes.
pub const BYTES: usize = 64;

/// A 512-bit unsigned integer.
///
/// Arithmetic wraps modulo 2^512; widening and carry-exposing variants are
/// provided alongside the operator impls. Plain `Copy` data, immutable
/// under every operation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(C)]
pub struct U512 {
    /// Low 256 bits.
    pub lo: U256,
    /// High 256 bits.
    pub hi: U256,
}

impl U512 {
    /// The value 0.
    pub const ZERO: Self = Self {
        lo: U256::ZERO,
        hi: U256::ZERO,
    };

    /// The value 1.
    pub const ONE: Self = Self {
        lo: U256::ONE,
        hi: U256::ZERO,
    };

    /// The largest representable value, 2^512 − 1.
    pub const MAX: Self = Self {
        lo: U256::MAX,
        hi: U256::MAX,
    };

    /// Whether the value is 0.
    #[inline]
    pub fn is_zero(self) -> bool {
        self.lo.is_zero() && self.hi.is_zero()
    }

    /// Converts an arbitrary-precision integer, saturating out-of-domain
    /// inputs: negative values become [`U512::ZERO`], values wider than
    /// 512 bits become [`U512::MAX`].
    pub fn from_big(i: &BigInt) -> Self {
        match Self::try_from_big(i) {
            Ok(u) => u,
            Err(TryFromBigError::Negative) => Self::ZERO,
            Err(TryFromBigError::Overflow { .. }) => Self::MAX,
        }
    }

    /// Converts an arbitrary-precision integer, reporting negative and
    /// overflowing inputs instead of saturating.
    pub fn try_from_big(i: &BigInt) -> Result<Self, TryFromBigError> {
        if i.sign() == Sign::Minus {
            return Err(TryFromBigError::Negative);
        }
        if i.bits() > BITS as u64 {
            return Err(TryFromBigError::Overflow { width: BITS });
        }
        let mut bytes = [0u8; BYTES];
        let mag = i.magnitude().to_bytes_le();
        bytes[..mag.len()].copy_from_slice(&mag);
        Ok(Self::from_le_bytes(bytes))
    }

    /// The exact value as an arbitrary-precision integer.
    pub fn to_big(self) -> BigUint {
        BigUint::from_bytes_le(&self.to_le_bytes())
    }

    /// `self & !rhs`.
    #[inline]
    pub fn and_not(self, rhs: Self) -> Self {
        Self {
            lo: self.lo.and_not(rhs.lo),
            hi: self.hi.and_not(rhs.hi),
        }
    }

    /// `self & !rhs` with `rhs` zero-extended; the high half passes
    /// through unchanged since `!0` is all ones.
    #[inline]
    pub fn and_not_u256(self, rhs: U256) -> Self {
        Self {
            lo: self.lo.and_not(rhs),
            hi: self.hi,
        }
    }
}

impl From<u64> for U512 {
    #[inline]
    fn from(v: u64) -> Self {
        Self {
            lo: U256::from(v),
            hi: U256::ZERO,
        }
    }
}

impl From<u128> for U512 {
    #[inline]
    fn from(v: u128) -> Self {
        Self {
            lo: U256::from(v),
            hi: U256::ZERO,
        }
    }
}

impl From<U256> for U512 {
    #[inline]
    fn from(v: U256) -> Self {
        Self {
            lo: v,
            hi: U256::ZERO,
        }
    }
}

impl TryFrom<&BigInt> for U512 {
    type Error = TryFromBigError;

    fn try_from(i: &BigInt) -> Result<Self, Self::Error> {
        Self::try_from_big(i)
    }
}

impl Ord for U512 {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        match self.hi.cmp(&other.hi) {
            Ordering::Equal => self.lo.cmp(&other.lo),
            ord => ord,
        }
    }
}

impl PartialOrd for U512 {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq<U256> for U512 {
    #[inline]
    fn eq(&self, other: &U256) -> bool {
        self.hi.is_zero() && self.lo == *other
    }
}

impl PartialOrd<U256> for U512 {
    #[inline]
    fn partial_cmp(&self, other: &U256) -> Option<Ordering> {
        if !self.hi.is_zero() {
            return Some(Ordering::Greater);
        }
        Some(self.lo.cmp(other))
    }
}

impl Not for U512 {
    type Output = Self;

    #[inline]
    fn not(self) -> Self {
        Self {
            lo: !self.lo,
            hi: !self.hi,
        }
    }
}

impl BitAnd for U512 {
    type Output = Self;

    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self {
            lo: self.lo & rhs.lo,
            hi: self.hi & rhs.hi,
        }
    }
}

impl BitOr for U512 {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self {
            lo: self.lo | rhs.lo,
            hi: self.hi | rhs.hi,
        }
    }
}

impl BitXor for U512 {
    type Output = Self;

    #[inline]
    fn bitxor(self, rhs: Self) -> Self {
        Self {
            lo: self.lo ^ rhs.lo,
            hi: self.hi ^ rhs.hi,
        }
    }
}

impl BitAndAssign for U512 {
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        *self = *self & rhs;
    }
}

impl BitOrAssign for U512 {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        *self = *self | rhs;
    }
}

impl BitXorAssign for U512 {
    #[inline]
    fn bitxor_assign(&mut self, rhs: Self) {
        *self = *self ^ rhs;
    }
}

impl BitAnd<U256> for U512 {
    type Output = Self;

    #[inline]
    fn bitand(self, rhs: U256) -> Self {
        Self {
            lo: self.lo & rhs,
            hi: U256::ZERO,
        }
    }
}

impl BitOr<U256> for U512 {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: U256) -> Self {
        Self {
            lo: self.lo | rhs,
            hi: self.hi,
        }
    }
}

impl BitXor<U256> for U512 {
    type Output = Self;

    #[inline]
    fn bitxor(self, rhs: U256) -> Self {
        Self {
            lo: self.lo ^ rhs,
            hi: self.hi,
        }
    }
}
