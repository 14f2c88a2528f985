//! Real roots of quadratic equations with overflow detection.
//!
//! [`solve`] classifies `a·x² + b·x + c = 0` into an [`Outcome`] and returns
//! its real roots. Intermediate arithmetic runs in [`Extended`], so the only
//! way to fail is a root that does not fit in an `f64`, reported as
//! [`Outcome::Overflow`].
//!
//! ```
//! use quadric_solve::{Outcome, solve};
//!
//! assert_eq!(solve(1.0, 3.0, -70.0), Outcome::TwoRoots(7.0, -10.0));
//! assert_eq!(solve(5.0, 10.0, 100.0), Outcome::NoRoots);
//! ```

mod code;
mod extended;
mod outcome;
mod quadratic;

pub mod fixture;
pub mod verify;

pub use code::{Code, UNKNOWN_MESSAGE, UnknownCode, message};
pub use extended::Extended;
pub use outcome::{Outcome, SENTINEL};
pub use quadratic::{solve, solve_into};
