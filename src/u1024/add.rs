//! Addition and subtraction with carry/borrow propagation.

use core::ops::{Add, AddAssign, Sub, SubAssign};

use crate::u256::U256;
use crate::u512::U512;

use super::U1024;

impl U1024 {
    /// `self + rhs + carry`, returning the sum and outgoing carry.
    #[inline]
    pub fn carrying_add(self, rhs: Self, carry: bool) -> (Self, bool) {
        let (lo, carry) = self.lo.carrying_add(rhs.lo, carry);
        let (hi, carry) = self.hi.carrying_add(rhs.hi, carry);
        (Self { lo, hi }, carry)
    }

    /// `self - rhs - borrow`, returning the difference and outgoing borrow.
    #[inline]
    pub fn borrowing_sub(self, rhs: Self, borrow: bool) -> (Self, bool) {
        let (lo, borrow) = self.lo.borrowing_sub(rhs.lo, borrow);
        let (hi, borrow) = self.hi.borrowing_sub(rhs.hi, borrow);
        (Self { lo, hi }, borrow)
    }

    /// Addition modulo 2^1024.
    #[inline]
    pub fn wrapping_add(self, rhs: Self) -> Self {
        self.carrying_add(rhs, false).0
    }

    /// Subtraction modulo 2^1024.
    #[inline]
    pub fn wrapping_sub(self, rhs: Self) -> Self {
        self.borrowing_sub(rhs, false).0
    }
}

impl Add for U1024 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        self.wrapping_add(rhs)
    }
}

impl Sub for U1024 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.wrapping_sub(rhs)
    }
}

impl AddAssign for U1024 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for U1024 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Add<U512> for U1024 {
    type Output = Self;

    /// Adds a zero-extended half-width operand, propagating the single
    /// carry into the high half.
    #[inline]
    fn add(self, rhs: U512) -> Self {
        let (lo, carry) = self.lo.carrying_add(rhs, false);
        Self {
            lo,
            hi: self.hi + U256::from(carry as u64),
        }
    }
}

impl Sub<U512> for U1024 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: U512) -> Self {
        let (lo, borrow) = self.lo.borrowing_sub(rhs, false);
        Self {
            lo,
            hi: self.hi - U256::from(borrow as u64),
        }
    }
}
