use crate::{Code, Extended, Outcome};

/// Solves `a·x² + b·x + c = 0` over the reals.
///
/// The equation is classified by which coefficients are exactly zero.
/// Degenerate patterns are answered directly, a vanishing `a` leaves the
/// linear root `-c / b`, and everything else goes through the discriminant.
///
/// All intermediate values are carried as [`Extended`] and every root is
/// checked against the `f64` range before it is narrowed. A positive
/// discriminant must itself fit in an `f64`, since both roots derive from
/// its square root. When it or any reported root does not fit, the result
/// is [`Outcome::Overflow`] and no partial result is returned.
///
/// NaN and infinite coefficients are not supported.
#[must_use]
pub fn solve(a: f64, b: f64, c: f64) -> Outcome {
    match (a == 0.0, b == 0.0, c == 0.0) {
        (true, true, true) => Outcome::InfiniteRoots,
        (true, true, false) => Outcome::NoRoots,
        (true, false, true) | (false, true, true) => Outcome::OneRoot(0.0),
        (true, false, false) => linear(b.into(), c.into()),
        (false, _, _) => quadratic(a.into(), b.into(), c.into()),
    }
}

/// Solves into caller-provided root slots.
///
/// Returns [`Code::InvalidArguments`] without writing anything if either
/// slot is missing. Otherwise both slots receive [`Outcome::roots`].
pub fn solve_into(
    a: f64,
    b: f64,
    c: f64,
    root1: Option<&mut f64>,
    root2: Option<&mut f64>,
) -> Code {
    let (Some(root1), Some(root2)) = (root1, root2) else {
        return Code::InvalidArguments;
    };

    let outcome = solve(a, b, c);
    (*root1, *root2) = outcome.roots();
    outcome.code()
}

fn linear(b: Extended, c: Extended) -> Outcome {
    (-c / b).to_f64().map_or(Outcome::Overflow, Outcome::OneRoot)
}

fn quadratic(a: Extended, b: Extended, c: Extended) -> Outcome {
    let discriminant = discriminant(a, b, c);
    if discriminant.is_sign_negative() {
        return Outcome::NoRoots;
    }
    if discriminant.is_zero() {
        return (-b / a.scale(1))
            .to_f64()
            .map_or(Outcome::Overflow, Outcome::OneRoot);
    }
    if discriminant.to_f64().is_none() {
        return Outcome::Overflow;
    }

    let sqrt_d = discriminant.sqrt();

    // q = -(b + sign(b)·√D) / 2 never cancels; the roots are q/a and c/q.
    let q = if b.is_sign_negative() {
        (sqrt_d - b).scale(-1)
    } else {
        -(b + sqrt_d).scale(-1)
    };
    let (plus, minus) = if b.is_sign_negative() {
        (q / a, c / q)
    } else {
        (c / q, q / a)
    };

    match (plus.to_f64(), minus.to_f64()) {
        (Some(x1), Some(x2)) => Outcome::TwoRoots(x1, x2),
        _ => Outcome::Overflow,
    }
}

/// Computes `b² - 4ac` keeping the rounding error of both products.
fn discriminant(a: Extended, b: Extended, c: Extended) -> Extended {
    let (bb, bb_err) = b.mul_exact(b);
    let (ac4, ac4_err) = a.scale(2).mul_exact(c);
    (bb - ac4) + (bb_err - ac4_err)
}
