//! Literal reference equations covering every branch of [`solve`].
//!
//! Each [`Fixture`] pairs a coefficient triple with its expected
//! [`Outcome`]. The table exercises every zero pattern of the coefficients,
//! all three signs of the discriminant, and each way an overflow can arise.

use thiserror::Error;

use crate::{Outcome, solve};

/// Relative tolerance used when comparing expected and actual roots.
const ROOT_REL_TOL: f64 = 1e-12;

/// A reference equation with its expected outcome.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fixture {
    pub id: &'static str,
    pub name: &'static str,
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub expected: Outcome,
}

/// A fixture whose actual outcome differs from the expected one.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("fixture `{id}`: expected {expected}, got {actual}")]
pub struct Mismatch {
    pub id: &'static str,
    pub expected: Outcome,
    pub actual: Outcome,
}

impl Fixture {
    /// Solves the fixture's equation and compares against the expectation.
    ///
    /// Codes must match exactly. Roots are compared with a small relative
    /// tolerance, and two roots may come back in either order.
    ///
    /// # Errors
    ///
    /// Returns a [`Mismatch`] if the outcome differs from the expected one.
    pub fn run(&self) -> Result<Outcome, Mismatch> {
        let actual = solve(self.a, self.b, self.c);
        if outcomes_match(&self.expected, &actual) {
            Ok(actual)
        } else {
            Err(Mismatch {
                id: self.id,
                expected: self.expected,
                actual,
            })
        }
    }
}

/// Looks up a fixture by id.
#[must_use]
pub fn find(id: &str) -> Option<&'static Fixture> {
    FIXTURES.iter().find(|fixture| fixture.id == id)
}

fn outcomes_match(expected: &Outcome, actual: &Outcome) -> bool {
    if expected.code() != actual.code() {
        return false;
    }
    let (e1, e2) = expected.roots();
    let (r1, r2) = actual.roots();
    (close(e1, r1) && close(e2, r2)) || (close(e1, r2) && close(e2, r1))
}

fn close(expected: f64, actual: f64) -> bool {
    (expected - actual).abs() <= ROOT_REL_TOL * expected.abs().max(1.0)
}

pub static FIXTURES: &[Fixture] = &[
    Fixture {
        id: "test1",
        name: "All coefficients are zero.",
        a: 0.0,
        b: 0.0,
        c: 0.0,
        expected: Outcome::InfiniteRoots,
    },
    Fixture {
        id: "test2",
        name: "Only `c` is nonzero.",
        a: 0.0,
        b: 0.0,
        c: 1.0,
        expected: Outcome::NoRoots,
    },
    Fixture {
        id: "test3",
        name: "Only `b` is nonzero.",
        a: 0.0,
        b: 1.0,
        c: 0.0,
        expected: Outcome::OneRoot(0.0),
    },
    Fixture {
        id: "test4",
        name: "Only `a` is nonzero.",
        a: 1.0,
        b: 0.0,
        c: 0.0,
        expected: Outcome::OneRoot(0.0),
    },
    Fixture {
        id: "test5",
        name: "Linear equation.",
        a: 0.0,
        b: 5.0,
        c: 3.0,
        expected: Outcome::OneRoot(-0.6),
    },
    Fixture {
        id: "test6",
        name: "Linear equation, overflow.",
        a: 0.0,
        b: 0.01,
        c: f64::MAX - 1.0,
        expected: Outcome::Overflow,
    },
    Fixture {
        id: "test7",
        name: "Incomplete equation with `b` zero, D < 0.",
        a: 1.0,
        b: 0.0,
        c: 1.0,
        expected: Outcome::NoRoots,
    },
    Fixture {
        id: "test8",
        name: "Incomplete equation with `b` zero, D > 0.",
        a: 1.0,
        b: 0.0,
        c: -16.0,
        expected: Outcome::TwoRoots(-4.0, 4.0),
    },
    Fixture {
        id: "test9",
        name: "Incomplete equation with `b` zero, D > 0, overflow.",
        a: -f64::MAX + 1.0,
        b: 0.0,
        c: f64::MAX - 1.0,
        expected: Outcome::Overflow,
    },
    Fixture {
        id: "test10",
        name: "Incomplete equation with `c` zero.",
        a: 10.0,
        b: 5.0,
        c: 0.0,
        expected: Outcome::TwoRoots(0.0, -0.5),
    },
    Fixture {
        id: "test11",
        name: "Incomplete equation with `c` zero, overflow.",
        a: 10.0,
        b: f64::MAX - 1.0,
        c: 0.0,
        expected: Outcome::Overflow,
    },
    Fixture {
        id: "test12",
        name: "Complete equation, D > 0.",
        a: 1.0,
        b: 3.0,
        c: -70.0,
        expected: Outcome::TwoRoots(-10.0, 7.0),
    },
    Fixture {
        id: "test13",
        name: "Complete equation, D = 0.",
        a: -1.5625,
        b: 5.0,
        c: -4.0,
        expected: Outcome::OneRoot(1.6),
    },
    Fixture {
        id: "test14",
        name: "Complete equation, D < 0.",
        a: 5.0,
        b: 10.0,
        c: 100.0,
        expected: Outcome::NoRoots,
    },
    Fixture {
        id: "test15",
        name: "Complete equation, overflow.",
        a: 1.0,
        b: f64::MAX - 1.0,
        c: 1.0,
        expected: Outcome::Overflow,
    },
];
