//! Checks that reported roots actually satisfy their equation.

mod config;
mod error;

pub use config::Config;
pub use error::Error;

use crate::Outcome;

/// Evaluates `a·x² + b·x + c` by Horner's rule with fused multiply-adds.
#[must_use]
pub fn residual(a: f64, b: f64, c: f64, x: f64) -> f64 {
    a.mul_add(x, b).mul_add(x, c)
}

/// Verifies an outcome against the equation it was solved from.
///
/// Every root reported by [`Outcome::OneRoot`] or [`Outcome::TwoRoots`] must
/// leave a residual within `config.residual_tol`. Outcomes without roots
/// pass, except [`Outcome::Overflow`], which is reported as an error.
///
/// # Errors
///
/// Returns an error if the config is invalid, the outcome is an overflow,
/// or a root's residual exceeds the tolerance.
pub fn check(a: f64, b: f64, c: f64, outcome: &Outcome, config: &Config) -> Result<(), Error> {
    config
        .validate()
        .map_err(|reason| Error::InvalidConfig { reason })?;

    let tol = config.residual_tol;
    match *outcome {
        Outcome::InfiniteRoots | Outcome::NoRoots => Ok(()),
        Outcome::Overflow => Err(Error::Overflow),
        Outcome::OneRoot(x) => check_root(a, b, c, x, tol),
        Outcome::TwoRoots(x1, x2) => {
            check_root(a, b, c, x1, tol)?;
            check_root(a, b, c, x2, tol)
        }
    }
}

fn check_root(a: f64, b: f64, c: f64, x: f64, tol: f64) -> Result<(), Error> {
    let residual = residual(a, b, c, x);
    if residual.abs() <= tol {
        Ok(())
    } else {
        Err(Error::ResidualTooLarge { x, residual, tol })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn residual_evaluates_polynomial() {
        assert_relative_eq!(residual(1.0, 3.0, -70.0, 7.0), 0.0);
        assert_relative_eq!(residual(2.0, -1.0, 5.0, 3.0), 20.0);
    }

    #[test]
    fn accepts_true_roots() {
        let config = Config::default();
        check(1.0, 3.0, -70.0, &Outcome::TwoRoots(7.0, -10.0), &config).expect("roots are exact");
        check(0.0, 5.0, 3.0, &Outcome::OneRoot(-0.6), &config).expect("root is within tolerance");
        check(5.0, 10.0, 100.0, &Outcome::NoRoots, &config).expect("no roots to check");
    }

    #[test]
    fn rejects_wrong_second_root() {
        let result = check(
            1.0,
            3.0,
            -70.0,
            &Outcome::TwoRoots(7.0, -9.0),
            &Config::default(),
        );
        assert!(matches!(
            result,
            Err(Error::ResidualTooLarge { x, .. }) if x == -9.0
        ));
    }

    #[test]
    fn rejects_overflow() {
        let result = check(1.0, f64::MAX, 1.0, &Outcome::Overflow, &Config::default());
        assert_eq!(result, Err(Error::Overflow));
    }

    #[test]
    fn errors_on_invalid_config() {
        let config = Config { residual_tol: -1.0 };
        let result = check(1.0, 0.0, -16.0, &Outcome::TwoRoots(4.0, -4.0), &config);
        assert!(matches!(result, Err(Error::InvalidConfig { .. })));

        let config = Config {
            residual_tol: f64::NAN,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_tolerance_demands_exact_roots() {
        let config = Config { residual_tol: 0.0 };
        check(1.0, 0.0, -16.0, &Outcome::TwoRoots(4.0, -4.0), &config).expect("roots are exact");
        assert!(check(1.0, 0.0, -16.0, &Outcome::OneRoot(4.001), &config).is_err());
    }
}
