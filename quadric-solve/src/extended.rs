//! Extended-exponent real arithmetic.
//!
//! An [`Extended`] value is an `f64` significand scaled by a wide binary
//! exponent, so products, quotients and square roots of finite `f64`
//! values never overflow or underflow while they are being combined.
//! Results are narrowed back with [`Extended::to_f64`], which reports when
//! a magnitude does not fit in an `f64`.

use std::{
    cmp::Ordering,
    ops::{Add, Div, Mul, Neg, Sub},
};

/// Largest exponent for which a normalized value is at most `f64::MAX`.
const MAX_F64_EXP: i32 = f64::MAX_EXP;

/// A real number `frac · 2^exp` with `|frac|` in `[0.5, 1)` or `frac == 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extended {
    frac: f64,
    exp: i32,
}

impl Extended {
    pub const ZERO: Self = Self { frac: 0.0, exp: 0 };

    /// Builds a normalized value from an arbitrary significand and exponent.
    fn from_parts(frac: f64, exp: i32) -> Self {
        if frac == 0.0 {
            return Self::ZERO;
        }
        if !frac.is_finite() {
            return Self { frac, exp };
        }
        let (frac, shift) = libm::frexp(frac);
        Self {
            frac,
            exp: exp + shift,
        }
    }

    /// Returns `true` if the value is exactly zero.
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.frac == 0.0
    }

    /// Returns `true` if the value is strictly negative.
    #[must_use]
    pub fn is_sign_negative(self) -> bool {
        self.frac < 0.0
    }

    #[must_use]
    pub fn abs(self) -> Self {
        Self {
            frac: self.frac.abs(),
            exp: self.exp,
        }
    }

    /// Multiplies by `2^n` without rounding.
    #[must_use]
    pub fn scale(self, n: i32) -> Self {
        if self.is_zero() {
            return self;
        }
        Self {
            frac: self.frac,
            exp: self.exp + n,
        }
    }

    /// Square root. Negative values yield a NaN significand.
    #[must_use]
    pub fn sqrt(self) -> Self {
        if self.exp % 2 == 0 {
            Self::from_parts(self.frac.sqrt(), self.exp / 2)
        } else {
            Self::from_parts((2.0 * self.frac).sqrt(), (self.exp - 1) / 2)
        }
    }

    /// Returns the rounded product together with its rounding error.
    ///
    /// The pair sums to the exact product `self · rhs`.
    #[must_use]
    pub fn mul_exact(self, rhs: Self) -> (Self, Self) {
        let hi = self.frac * rhs.frac;
        let lo = self.frac.mul_add(rhs.frac, -hi);
        let exp = self.exp + rhs.exp;
        (Self::from_parts(hi, exp), Self::from_parts(lo, exp))
    }

    /// Narrows to `f64`.
    ///
    /// Returns `None` if the magnitude exceeds `f64::MAX` or the value is not
    /// finite. Magnitudes below the `f64` range round toward zero.
    #[must_use]
    pub fn to_f64(self) -> Option<f64> {
        (self.frac.is_finite() && self.exp <= MAX_F64_EXP).then(|| libm::ldexp(self.frac, self.exp))
    }
}

impl From<f64> for Extended {
    fn from(value: f64) -> Self {
        Self::from_parts(value, 0)
    }
}

impl Neg for Extended {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            frac: -self.frac,
            exp: self.exp,
        }
    }
}

impl Add for Extended {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        if self.is_zero() {
            return rhs;
        }
        if rhs.is_zero() {
            return self;
        }
        let (big, small) = if self.exp >= rhs.exp {
            (self, rhs)
        } else {
            (rhs, self)
        };
        let shift = big.exp.saturating_sub(small.exp);
        Self::from_parts(big.frac + libm::ldexp(small.frac, -shift), big.exp)
    }
}

impl Sub for Extended {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self + -rhs
    }
}

impl Mul for Extended {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::from_parts(self.frac * rhs.frac, self.exp + rhs.exp)
    }
}

impl Div for Extended {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        Self::from_parts(self.frac / rhs.frac, self.exp - rhs.exp)
    }
}

impl PartialOrd for Extended {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        (*self - *other).frac.partial_cmp(&0.0)
    }
}
