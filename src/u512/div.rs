//! Quotient and remainder.
//!
//! The full-width `quo_rem` corrects a trial quotient by at most one in
//! each direction; the narrowing ladder threads one remainder per limb
//! down to 64 bits; `div_wide` is the 1024-by-512 Algorithm D step used by
//! the 1024-bit layer above.

use core::ops::{Div, Rem};

use crate::limb::{div128, div64};
use crate::u256::U256;

use super::U512;

impl U512 {
    /// Quotient and remainder of `self / v`.
    ///
    /// For a divisor with a populated high half the quotient is estimated
    /// from the top halves of the normalized operands and corrected by at
    /// most one increment; it panics only when `v` is zero.
    pub fn quo_rem(self, v: Self) -> (Self, Self) {
        if v.hi.is_zero() {
            let (q, r) = self.quo_rem_u256(v.lo);
            return (q, Self::from(r));
        }

        // Trial quotient from the 1-right-shifted dividend and the
        // normalized divisor, guaranteed within 1 of the true quotient.
        let n = v.hi.leading_zeros();
        let u1 = self.shr(1);
        let v1 = v.shl(n);
        let (tq, _) = U256::div_wide(u1.hi, u1.lo, v1.hi);
        let mut tq = tq.shr(255 - n);
        if !tq.is_zero() {
            tq = tq - 1u128;
        }

        let mut q = Self::from(tq);
        let mut r = self.wrapping_sub(v * tq);
        if r >= v {
            q = q + U256::ONE;
            r = r.wrapping_sub(v);
        }
        (q, r)
    }

    /// Quotient and remainder by a half-width divisor.
    pub fn quo_rem_u256(self, v: U256) -> (Self, U256) {
        if self.hi < v {
            let (lo, r) = U256::div_wide(self.hi, self.lo, v);
            return (
                Self {
                    lo,
                    hi: U256::ZERO,
                },
                r,
            );
        }

        let (hi, r) = U256::div_wide(U256::ZERO, self.hi, v);
        let (lo, r) = U256::div_wide(r, self.lo, v);
        (Self { lo, hi }, r)
    }

    /// Quotient and remainder by a 128-bit divisor, threading the running
    /// remainder through one widening divide per limb.
    pub fn quo_rem_u128(self, v: u128) -> (Self, u128) {
        let (hi, r) = self.hi.quo_rem_u128(v);
        let (a, r) = div128(r, self.lo.hi, v);
        let (b, r) = div128(r, self.lo.lo, v);
        (
            Self {
                lo: U256 { lo: b, hi: a },
                hi,
            },
            r,
        )
    }

    /// Quotient and remainder by a 64-bit divisor.
    pub fn quo_rem_u64(self, v: u64) -> (Self, u64) {
        let (hi, r) = self.hi.quo_rem_u64(v);
        let (w3, r) = div64(r, (self.lo.hi >> 64) as u64, v);
        let (w2, r) = div64(r, self.lo.hi as u64, v);
        let (w1, r) = div64(r, (self.lo.lo >> 64) as u64, v);
        let (w0, r) = div64(r, self.lo.lo as u64, v);
        (
            Self {
                lo: U256 {
                    lo: ((w1 as u128) << 64) | w0 as u128,
                    hi: ((w3 as u128) << 64) | w2 as u128,
                },
                hi,
            },
            r,
        )
    }

    /// Divides the 1024-bit value `(hi, lo)` by `y`, returning the 512-bit
    /// quotient and remainder.
    ///
    /// Panics on `y == 0` (divide by zero) and on `y <= hi` (the quotient
    /// would not fit); both are contract violations.
    pub fn div_wide(hi: Self, lo: Self, y: Self) -> (Self, Self) {
        if y.is_zero() {
            panic!("integer divide by zero");
        }
        if y <= hi {
            panic!("integer overflow");
        }

        let s = y.leading_zeros();
        let y = y.shl(s);

        let un32 = hi.shl(s) | lo.shr(512 - s);
        let un10 = lo.shl(s);
        let (mut q1, rhat) = un32.quo_rem_u256(y.hi);
        let mut r1 = Self::from(rhat);

        while !q1.hi.is_zero()
            || q1 * y.lo
                > (Self {
                    lo: un10.hi,
                    hi: r1.lo,
                })
        {
            q1 = q1 - U256::ONE;
            r1 = r1 + y.hi;
            if !r1.hi.is_zero() {
                break;
            }
        }

        let un21 = (Self {
            lo: un10.hi,
            hi: un32.lo,
        })
        .wrapping_sub(q1.wrapping_mul(y));
        let (mut q0, rhat) = un21.quo_rem_u256(y.hi);
        let mut r0 = Self::from(rhat);

        while !q0.hi.is_zero()
            || q0 * y.lo
                > (Self {
                    lo: un10.lo,
                    hi: r0.lo,
                })
        {
            q0 = q0 - U256::ONE;
            r0 = r0 + y.hi;
            if !r0.hi.is_zero() {
                break;
            }
        }

        (
            Self {
                lo: q0.lo,
                hi: q1.lo,
            },
            (Self {
                lo: un10.lo,
                hi: un21.lo,
            })
            .wrapping_sub(q0.wrapping_mul(y))
            .shr(s),
        )
    }
}

impl Div for U512 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        self.quo_rem(rhs).0
    }
}

impl Rem for U512 {
    type Output = Self;

    #[inline]
    fn rem(self, rhs: Self) -> Self {
        self.quo_rem(rhs).1
    }
}

impl Div<U256> for U512 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: U256) -> Self {
        self.quo_rem_u256(rhs).0
    }
}

impl Rem<U256> for U512 {
    type Output = U256;

    #[inline]
    fn rem(self, rhs: U256) -> U256 {
        self.quo_rem_u256(rhs).1
    }
}

impl Div<u128> for U512 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: u128) -> Self {
        self.quo_rem_u128(rhs).0
    }
}

impl Rem<u128> for U512 {
    type Output = u128;

    #[inline]
    fn rem(self, rhs: u128) -> u128 {
        self.quo_rem_u128(rhs).1
    }
}

impl Div<u64> for U512 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: u64) -> Self {
        self.quo_rem_u64(rhs).0
    }
}

impl Rem<u64> for U512 {
    type Output = u64;

    #[inline]
    fn rem(self, rhs: u64) -> u64 {
        self.quo_rem_u64(rhs).1
    }
}
