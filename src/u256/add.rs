//! Addition and subtraction with carry/borrow propagation.
//!
//! The carry-exposing forms chain the halves low-to-high; the operator
//! impls discard the outgoing flag, giving mod-2^256 semantics.

use core::ops::{Add, AddAssign, Sub, SubAssign};

use crate::limb::{adc128, sbb128};

use super::U256;

impl U256 {
    /// `self + rhs + carry`, returning the sum and outgoing carry.
    #[inline]
    pub fn carrying_add(self, rhs: Self, carry: bool) -> (Self, bool) {
        let (lo, carry) = adc128(self.lo, rhs.lo, carry);
        let (hi, carry) = adc128(self.hi, rhs.hi, carry);
        (Self { lo, hi }, carry)
    }

    /// `self - rhs - borrow`, returning the difference and outgoing borrow.
    #[inline]
    pub fn borrowing_sub(self, rhs: Self, borrow: bool) -> (Self, bool) {
        let (lo, borrow) = sbb128(self.lo, rhs.lo, borrow);
        let (hi, borrow) = sbb128(self.hi, rhs.hi, borrow);
        (Self { lo, hi }, borrow)
    }

    /// Addition modulo 2^256.
    #[inline]
    pub fn wrapping_add(self, rhs: Self) -> Self {
        self.carrying_add(rhs, false).0
    }

    /// Subtraction modulo 2^256.
    #[inline]
    pub fn wrapping_sub(self, rhs: Self) -> Self {
        self.borrowing_sub(rhs, false).0
    }
}

impl Add for U256 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        self.wrapping_add(rhs)
    }
}

impl Sub for U256 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.wrapping_sub(rhs)
    }
}

impl AddAssign for U256 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for U256 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Add<u128> for U256 {
    type Output = Self;

    /// Adds a zero-extended half-width operand, propagating the single
    /// carry into the high half.
    #[inline]
    fn add(self, rhs: u128) -> Self {
        let (lo, carry) = self.lo.overflowing_add(rhs);
        Self {
            lo,
            hi: self.hi.wrapping_add(carry as u128),
        }
    }
}

impl Sub<u128> for U256 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: u128) -> Self {
        let (lo, borrow) = self.lo.overflowing_sub(rhs);
        Self {
            lo,
            hi: self.hi.wrapping_sub(borrow as u128),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_add() {
        let sum = U256::from(100u64) + U256::from(200u64);
        assert_eq!(sum, U256::from(300u64));
    }

    #[test]
    fn test_carry_across_halves() {
        let u = U256 {
            lo: u128::MAX,
            hi: 0,
        };
        let sum = u + U256::ONE;
        assert_eq!(sum, U256 { lo: 0, hi: 1 });
    }

    #[test]
    fn test_add_wraps() {
        assert_eq!(U256::MAX + U256::ONE, U256::ZERO);
        assert_eq!(U256::MAX + U256::MAX, U256::MAX - U256::ONE);
    }

    #[test]
    fn test_carrying_add_flags() {
        let (sum, carry) = U256::MAX.carrying_add(U256::ZERO, true);
        assert_eq!(sum, U256::ZERO);
        assert!(carry);

        let (sum, carry) = U256::ONE.carrying_add(U256::ONE, false);
        assert_eq!(sum, U256::from(2u64));
        assert!(!carry);
    }

    #[test]
    fn test_sub_borrow() {
        let diff = U256 { lo: 0, hi: 1 } - U256::ONE;
        assert_eq!(
            diff,
            U256 {
                lo: u128::MAX,
                hi: 0
            }
        );

        let (diff, borrow) = U256::ZERO.borrowing_sub(U256::ONE, false);
        assert_eq!(diff, U256::MAX);
        assert!(borrow);
    }

    #[test]
    fn test_half_width_operands() {
        let u = U256 {
            lo: u128::MAX,
            hi: 5,
        };
        assert_eq!(u + 1u128, U256 { lo: 0, hi: 6 });
        assert_eq!(U256 { lo: 0, hi: 6 } - 1u128, u);
        assert_eq!(U256::ZERO - 1u128, U256::MAX);
    }

    #[test]
    fn test_add_sub_inverse() {
        let u = U256 {
            lo: 0x1111_2222_3333_4444_5555_6666_7777_8888,
            hi: 0x9999_AAAA_BBBB_CCCC,
        };
        let v = U256 {
            lo: 0xFFFF_0000_FFFF_0000_FFFF_0000_FFFF_0000,
            hi: 0x1234,
        };
        assert_eq!(u + v - v, u);
        assert_eq!(u - v + v, u);
    }
}
