//! Quotient and remainder.
//!
//! Same three shapes as the half width: trial-quotient `quo_rem`, the
//! narrowing ladder down to 64 bits, and the widening 2048-by-1024
//! `div_wide` at the top of the Algorithm D tower.

use core::ops::{Div, Rem};

use crate::limb::{div128, div64};
use crate::u256::U256;
use crate::u512::U512;

use super::U1024;

impl U1024 {
    /// Quotient and remainder of `self / v`.
    ///
    /// For a divisor with a populated high half the quotient is estimated
    /// from the top halves of the normalized operands and corrected by at
    /// most one increment; it panics only when `v` is zero.
    pub fn quo_rem(self, v: Self) -> (Self, Self) {
        if v.hi.is_zero() {
            let (q, r) = self.quo_rem_u512(v.lo);
            return (q, Self::from(r));
        }

        // Trial quotient from the 1-right-shifted dividend and the
        // normalized divisor, guaranteed within 1 of the true quotient.
        let n = v.hi.leading_zeros();
        let u1 = self.shr(1);
        let v1 = v.shl(n);
        let (tq, _) = U512::div_wide(u1.hi, u1.lo, v1.hi);
        let mut tq = tq.shr(511 - n);
        if !tq.is_zero() {
            tq = tq - U256::ONE;
        }

        let mut q = Self::from(tq);
        let mut r = self.wrapping_sub(v * tq);
        if r >= v {
            q = q + U512::ONE;
            r = r.wrapping_sub(v);
        }
        (q, r)
    }

    /// Quotient and remainder by a half-width divisor.
    pub fn quo_rem_u512(self, v: U512) -> (Self, U512) {
        if self.hi < v {
            let (lo, r) = U512::div_wide(self.hi, self.lo, v);
            return (
                Self {
                    lo,
                    hi: U512::ZERO,
                },
                r,
            );
        }

        let (hi, r) = U512::div_wide(U512::ZERO, self.hi, v);
        let (lo, r) = U512::div_wide(r, self.lo, v);
        (Self { lo, hi }, r)
    }

    /// Quotient and remainder by a 256-bit divisor, threading the running
    /// remainder through one widening divide per limb.
    pub fn quo_rem_u256(self, v: U256) -> (Self, U256) {
        let (hi, r) = self.hi.quo_rem_u256(v);
        let (a, r) = U256::div_wide(r, self.lo.hi, v);
        let (b, r) = U256::div_wide(r, self.lo.lo, v);
        (
            Self {
                lo: U512 { lo: b, hi: a },
                hi,
            },
            r,
        )
    }

    /// Quotient and remainder by a 128-bit divisor.
    pub fn quo_rem_u128(self, v: u128) -> (Self, u128) {
        let (hi, r) = self.hi.quo_rem_u128(v);
        let (a, r) = div128(r, self.lo.hi.hi, v);
        let (b, r) = div128(r, self.lo.hi.lo, v);
        let (c, r) = div128(r, self.lo.lo.hi, v);
        let (d, r) = div128(r, self.lo.lo.lo, v);
        (
            Self {
                lo: U512 {
                    lo: U256 { lo: d, hi: c },
                    hi: U256 { lo: b, hi: a },
                },
                hi,
            },
            r,
        )
    }

    /// Quotient and remainder by a 64-bit divisor.
    pub fn quo_rem_u64(self, v: u64) -> (Self, u64) {
        let (hi, r) = self.hi.quo_rem_u64(v);
        let (w7, r) = div64(r, (self.lo.hi.hi >> 64) as u64, v);
        let (w6, r) = div64(r, self.lo.hi.hi as u64, v);
        let (w5, r) = div64(r, (self.lo.hi.lo >> 64) as u64, v);
        let (w4, r) = div64(r, self.lo.hi.lo as u64, v);
        let (w3, r) = div64(r, (self.lo.lo.hi >> 64) as u64, v);
        let (w2, r) = div64(r, self.lo.lo.hi as u64, v);
        let (w1, r) = div64(r, (self.lo.lo.lo >> 64) as u64, v);
        let (w0, r) = div64(r, self.lo.lo.lo as u64, v);
        (
            Self {
                lo: U512 {
                    lo: U256 {
                        lo: ((w1 as u128) << 64) | w0 as u128,
                        hi: ((w3 as u128) << 64) | w2 as u128,
                    },
                    hi: U256 {
                        lo: ((w5 as u128) << 64) | w4 as u128,
                        hi: ((w7 as u128) << 64) | w6 as u128,
                    },
                },
                hi,
            },
            r,
        )
    }

    /// Divides the 2048-bit value `(hi, lo)` by `y`, returning the
    /// 1024-bit quotient and remainder.
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

        let un32 = hi.shl(s) | lo.shr(1024 - s);
        let un10 = lo.shl(s);
        let (mut q1, rhat) = un32.quo_rem_u512(y.hi);
        let mut r1 = Self::from(rhat);

        while !q1.hi.is_zero()
            || q1 * y.lo
                > (Self {
                    lo: un10.hi,
                    hi: r1.lo,
                })
        {
            q1 = q1 - U512::ONE;
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
        let (mut q0, rhat) = un21.quo_rem_u512(y.hi);
        let mut r0 = Self::from(rhat);

        while !q0.hi.is_zero()
            || q0 * y.lo
                > (Self {
                    lo: un10.lo,
                    hi: r0.lo,
                })
        {
            q0 = q0 - U512::ONE;
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

impl Div for U1024 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        self.quo_rem(rhs).0
    }
}

impl Rem for U1024 {
    type Output = Self;

    #[inline]
    fn rem(self, rhs: Self) -> Self {
        self.quo_rem(rhs).1
    }
}

impl Div<U512> for U1024 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: U512) -> Self {
        self.quo_rem_u512(rhs).0
    }
}

impl Rem<U512> for U1024 {
    type Output = U512;

    #[inline]
    fn rem(self, rhs: U512) -> U512 {
        self.quo_rem_u512(rhs).1
    }
}

impl Div<U256> for U1024 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: U256) -> Self {
        self.quo_rem_u256(rhs).0
    }
}

impl Rem<U256> for U1024 {
    type Output = U256;

    #[inline]
    fn rem(self, rhs: U256) -> U256 {
        self.quo_rem_u256(rhs).1
    }
}

impl Div<u128> for U1024 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: u128) -> Self {
        self.quo_rem_u128(rhs).0
    }
}

impl Rem<u128> for U1024 {
    type Output = u128;

    #[inline]
    fn rem(self, rhs: u128) -> u128 {
        self.quo_rem_u128(rhs).1
    }
}

impl Div<u64> for U1024 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: u64) -> Self {
        self.quo_rem_u64(rhs).0
    }
}

impl Rem<u64> for U1024 {
    type Output = u64;

    #[inline]
    fn rem(self, rhs: u64) -> u64 {
        self.quo_rem_u64(rhs).1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::pow;

    fn ten_to(e: usize) -> U1024 {
        let big = num_bigint::BigInt::from(pow(num_bigint::BigUint::from(10u32), e));
        U1024::try_from_big(&big).unwrap()
    }

    #[test]
    fn test_powers_of_ten() {
        // 10^300 / 10^150 = 10^150 exactly.
        let u = ten_to(300);
        let v = ten_to(150);
        assert_eq!(u / v, ten_to(150));
        assert_eq!(u % v, U1024::ZERO);

        // ... and with a remainder: (10^300 + 9) mod 10^150 = 9
        let (q, r) = (u + U1024::from(9u64)).quo_rem(v);
        assert_eq!(q, ten_to(150));
        assert_eq!(r, U1024::from(9u64));
    }

    #[test]
    fn test_trial_quotient_path() {
        let u = U1024::MAX - U512::from(17u64);
        let v = U1024::ONE.shl(700) + U512::from(0xFEEDu64);
        let (q, r) = u.quo_rem(v);
        assert!(r < v);
        assert_eq!(q * v + r, u);
        assert_eq!(v.quo_rem(v), (U1024::ONE, U1024::ZERO));
    }

    #[test]
    fn test_narrowing_ladder_agrees() {
        let u = U1024 {
            lo: U512 {
                lo: U256 {
                    lo: 0x0123_4567_89AB_CDEF_1122_3344_5566_7788,
                    hi: 0x99AA_BBCC_DDEE_FF00_1357_9BDF_0246_8ACE,
                },
                hi: U256 {
                    lo: 0xFEDC_BA98_7654_3210_0011_2233_4455_6677,
                    hi: 0x8899_AABB_CCDD_EEFF_F0E1_D2C3_B4A5_9687,
                },
            },
            hi: U512 {
                lo: U256 {
                    lo: 0x1111_2222_3333_4444_5555_6666_7777_8888,
                    hi: 0x9999_0000_AAAA_BBBB_CCCC_DDDD_EEEE_FFFF,
                },
                hi: U256::from(0x4242_4242u64),
            },
        };
        let v = 0xFFFF_FFFB_0000_0005u64;
        let (q64, r64) = u.quo_rem_u64(v);
        let (q128, r128) = u.quo_rem_u128(v as u128);
        let (q256, r256) = u.quo_rem_u256(U256::from(v));
        let (q512, r512) = u.quo_rem_u512(U512::from(v));
        let (qfull, rfull) = u.quo_rem(U1024::from(v));
        assert_eq!(q64, q128);
        assert_eq!(q64, q256);
        assert_eq!(q64, q512);
        assert_eq!(q64, qfull);
        assert_eq!(r64 as u128, r128);
        assert_eq!(U256::from(r64), r256);
        assert_eq!(U512::from(r64), r512);
        assert_eq!(U1024::from(r64), rfull);
    }

    #[test]
    fn test_div_wide_by_one() {
        // (0 : Max) / 1 = (Max, 0)
        let (q, r) = U1024::div_wide(U1024::ZERO, U1024::MAX, U1024::ONE);
        assert_eq!(q, U1024::MAX);
        assert_eq!(r, U1024::ZERO);
    }

    #[test]
    #[should_panic(expected = "integer overflow")]
    fn test_div_wide_quotient_overflow() {
        // (1 : 0) / 1 = 2^1024, one past the representable range.
        U1024::div_wide(U1024::ONE, U1024::ZERO, U1024::ONE);
    }

    #[test]
    #[should_panic(expected = "integer divide by zero")]
    fn test_div_wide_zero_divisor() {
        U1024::div_wide(U1024::ZERO, U1024::ONE, U1024::ZERO);
    }

    #[test]
    fn test_div_wide_reconstruction() {
        let a = U1024 {
            lo: U512::from(0xDEAD_BEEFu64),
            hi: U512::from(0x5Au64),
        };
        let y = U1024::ONE.shl(777) + U512::from(3u64);
        let (phi, plo) = a.widening_mul(y);
        let (q, r) = U1024::div_wide(phi, plo, y);
        assert_eq!(q, a);
        assert_eq!(r, U1024::ZERO);
    }

    #[test]
    fn test_division_law_against_big() {
        let u = U1024::ONE.shl(1020) + U1024::ONE.shl(500) + U1024::from(12_345u64);
        let v = U1024::ONE.shl(510) + U1024::from(987u64);
        let (q, r) = u.quo_rem(v);
        assert_eq!(q.to_big(), u.to_big() / v.to_big());
        assert_eq!(r.to_big(), u.to_big() % v.to_big());
    }
}
