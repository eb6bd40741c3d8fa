//! Quotient and remainder.
//!
//! Three shapes share the Knuth Algorithm D core in `limb::div128`: the
//! full-width `quo_rem` with its trial-quotient correction, the narrowing
//! ladder down to `u64` threading one remainder per limb, and the widening
//! `div_wide` dividing a 512-bit dividend by a 256-bit divisor.

use core::ops::{Div, Rem};

use crate::limb::{div128, div64};

use super::U256;

impl U256 {
    /// Quotient and remainder of `self / v`.
    ///
    /// For a divisor with a populated high half the quotient is estimated
    /// from the top halves of the normalized operands and corrected by at
    /// most one increment; it panics only when `v` is zero.
    pub fn quo_rem(self, v: Self) -> (Self, Self) {
        if v.hi == 0 {
            let (q, r) = self.quo_rem_u128(v.lo);
            return (q, Self::from(r));
        }

        // Trial quotient from the 1-right-shifted dividend and the
        // normalized divisor, guaranteed within 1 of the true quotient.
        let n = v.hi.leading_zeros();
        let u1 = self.shr(1);
        let v1 = v.shl(n);
        let (tq, _) = div128(u1.hi, u1.lo, v1.hi);
        let mut tq = tq >> (127 - n);
        if tq != 0 {
            tq -= 1;
        }

        let mut q = Self::from(tq);
        let mut r = self.wrapping_sub(v * tq);
        if r >= v {
            q = q + 1u128;
            r = r.wrapping_sub(v);
        }
        (q, r)
    }

    /// Quotient and remainder by a half-width divisor.
    pub fn quo_rem_u128(self, v: u128) -> (Self, u128) {
        if self.hi < v {
            let (lo, r) = div128(self.hi, self.lo, v);
            return (Self { lo, hi: 0 }, r);
        }

        let (hi, r) = div128(0, self.hi, v);
        let (lo, r) = div128(r, self.lo, v);
        (Self { lo, hi }, r)
    }

    /// Quotient and remainder by a 64-bit divisor, one widening divide per
    /// limb from the most significant down.
    pub fn quo_rem_u64(self, v: u64) -> (Self, u64) {
        let (q3, r) = div64(0, (self.hi >> 64) as u64, v);
        let (q2, r) = div64(r, self.hi as u64, v);
        let (q1, r) = div64(r, (self.lo >> 64) as u64, v);
        let (q0, r) = div64(r, self.lo as u64, v);
        (
            Self {
                lo: ((q1 as u128) << 64) | q0 as u128,
                hi: ((q3 as u128) << 64) | q2 as u128,
            },
            r,
        )
    }

    /// Divides the 512-bit value `(hi, lo)` by `y`, returning the 256-bit
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

        let un32 = hi.shl(s) | lo.shr(256 - s);
        let un10 = lo.shl(s);
        let (mut q1, rhat) = un32.quo_rem_u128(y.hi);
        let mut r1 = Self::from(rhat);

        while q1.hi != 0
            || q1 * y.lo
                > (Self {
                    lo: un10.hi,
                    hi: r1.lo,
                })
        {
            q1 = q1 - 1u128;
            r1 = r1 + y.hi;
            if r1.hi != 0 {
                break;
            }
        }

        let un21 = (Self {
            lo: un10.hi,
            hi: un32.lo,
        })
        .wrapping_sub(q1.wrapping_mul(y));
        let (mut q0, rhat) = un21.quo_rem_u128(y.hi);
        let mut r0 = Self::from(rhat);

        while q0.hi != 0
            || q0 * y.lo
                > (Self {
                    lo: un10.lo,
                    hi: r0.lo,
                })
        {
            q0 = q0 - 1u128;
            r0 = r0 + y.hi;
            if r0.hi != 0 {
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

impl Div for U256 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        self.quo_rem(rhs).0
    }
}

impl Rem for U256 {
    type Output = Self;

    #[inline]
    fn rem(self, rhs: Self) -> Self {
        self.quo_rem(rhs).1
    }
}

impl Div<u128> for U256 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: u128) -> Self {
        self.quo_rem_u128(rhs).0
    }
}

impl Rem<u128> for U256 {
    type Output = u128;

    #[inline]
    fn rem(self, rhs: u128) -> u128 {
        self.quo_rem_u128(rhs).1
    }
}

impl Div<u64> for U256 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: u64) -> Self {
        self.quo_rem_u64(rhs).0
    }
}

impl Rem<u64> for U256 {
    type Output = u64;

    #[inline]
    fn rem(self, rhs: u64) -> u64 {
        self.quo_rem_u64(rhs).1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_values() {
        let (q, r) = U256::from(1000u64).quo_rem(U256::from(33u64));
        assert_eq!(q, U256::from(30u64));
        assert_eq!(r, U256::from(10u64));
    }

    #[test]
    fn test_divisor_with_high_half() {
        // u = 2^200 + 12345, v = 2^129 + 7
        let u = U256::ONE.shl(200) + 12_345u128;
        let v = U256::ONE.shl(129) + 7u128;
        let (q, r) = u.quo_rem(v);
        assert_eq!(q * v + r, u);
        assert!(r < v);
        assert_eq!(q, u / v);
        assert_eq!(r, u % v);
    }

    #[test]
    fn test_identity_and_self_division() {
        let u = U256 {
            lo: 0xDEAD_BEEF_CAFE_F00D,
            hi: 0x0123_4567,
        };
        assert_eq!(u.quo_rem(U256::ONE), (u, U256::ZERO));
        assert_eq!(u.quo_rem(u), (U256::ONE, U256::ZERO));
        assert_eq!(U256::ZERO.quo_rem(u), (U256::ZERO, U256::ZERO));
    }

    #[test]
    fn test_narrowing_ladder_agrees() {
        let u = U256 {
            lo: 0x1234_5678_9ABC_DEF0_1122_3344_5566_7788,
            hi: 0x99AA_BBCC_DDEE_FF00_1357_9BDF_0246_8ACE,
        };
        let v = 0xFFFF_FFFF_0000_0001u64;
        let (q64, r64) = u.quo_rem_u64(v);
        let (q128, r128) = u.quo_rem_u128(v as u128);
        let (qfull, rfull) = u.quo_rem(U256::from(v));
        assert_eq!(q64, q128);
        assert_eq!(q64, qfull);
        assert_eq!(r64 as u128, r128);
        assert_eq!(U256::from(r64), rfull);
    }

    #[test]
    fn test_div_wide_basic() {
        // (0 : u) / v behaves like the narrow division
        let u = U256 {
            lo: 999_999_937,
            hi: 77,
        };
        let v = U256::from(1_000_003u64);
        let (q, r) = U256::div_wide(U256::ZERO, u, v);
        assert_eq!((q, r), u.quo_rem(v));

        // (1 : 0) / 2 = 2^255
        let (q, r) = U256::div_wide(U256::ONE, U256::ZERO, U256::from(2u64));
        assert_eq!(q, U256::ONE.shl(255));
        assert_eq!(r, U256::ZERO);
    }

    #[test]
    fn test_div_wide_reconstruction() {
        let hi = U256 {
            lo: 0x0F1E_2D3C_4B5A_6978,
            hi: 0x8675_309,
        };
        let lo = U256 {
            lo: 0xFFFF_FFFF_FFFF_FFFF_FFFF_FFFF_FFFF_FFFE,
            hi: 0x1,
        };
        let y = U256 {
            lo: 0x1234_5678,
            hi: 0x8000_0000_0000_0000_0000_0000_0000_0000,
        };
        assert!(y > hi);
        let (q, r) = U256::div_wide(hi, lo, y);
        assert!(r < y);
        // q·y + r == (hi : lo), checked in 512-bit pieces
        let (phi, plo) = q.widening_mul(y);
        let (sum_lo, carry) = plo.carrying_add(r, false);
        let (sum_hi, overflow) = phi.carrying_add(U256::ZERO, carry);
        assert!(!overflow);
        assert_eq!(sum_lo, lo);
        assert_eq!(sum_hi, hi);
    }

    #[test]
    #[should_panic(expected = "integer divide by zero")]
    fn test_div_wide_zero_divisor() {
        U256::div_wide(U256::ZERO, U256::ONE, U256::ZERO);
    }

    #[test]
    #[should_panic(expected = "integer overflow")]
    fn test_div_wide_overflow() {
        U256::div_wide(U256::ONE, U256::ZERO, U256::ONE);
    }

    #[test]
    #[should_panic(expected = "integer divide by zero")]
    fn test_div_by_zero() {
        let _ = U256::ONE / U256::ZERO;
    }
}
