use std::fmt;

use crate::Code;

/// Value reported in root slots that carry no root.
pub const SENTINEL: f64 = 0.0;

/// The classified result of solving `a·x² + b·x + c = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    /// Every real number is a root (`a = b = c = 0`).
    InfiniteRoots,
    /// The equation has no real root.
    NoRoots,
    /// Exactly one real root.
    OneRoot(f64),
    /// Two distinct real roots, in no particular order.
    TwoRoots(f64, f64),
    /// A root, or the discriminant it derives from, does not fit in an `f64`.
    Overflow,
}

impl Outcome {
    #[must_use]
    pub fn code(&self) -> Code {
        match self {
            Self::InfiniteRoots => Code::InfiniteRoots,
            Self::NoRoots => Code::NoRoots,
            Self::OneRoot(_) => Code::OneRoot,
            Self::TwoRoots(..) => Code::TwoRoots,
            Self::Overflow => Code::Overflow,
        }
    }

    /// Returns both root slots.
    ///
    /// A single root fills both slots. Outcomes without roots fill both
    /// slots with [`SENTINEL`].
    #[must_use]
    pub fn roots(&self) -> (f64, f64) {
        match *self {
            Self::OneRoot(x) => (x, x),
            Self::TwoRoots(x1, x2) => (x1, x2),
            Self::InfiniteRoots | Self::NoRoots | Self::Overflow => (SENTINEL, SENTINEL),
        }
    }

    #[must_use]
    pub fn message(&self) -> &'static str {
        self.code().message()
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InfiniteRoots => write!(f, "infinite roots"),
            Self::NoRoots => write!(f, "no roots"),
            Self::OneRoot(x) => write!(f, "one root {x:e}"),
            Self::TwoRoots(x1, x2) => write!(f, "two roots {x1:e} and {x2:e}"),
            Self::Overflow => write!(f, "overflow"),
        }
    }
}
