pub mod fixtures;
pub mod fuzz;
pub mod solve;

use quadric_solve::{Outcome, verify};

/// Prints the coefficients, roots, code and residuals of an outcome.
fn print_report(a: f64, b: f64, c: f64, outcome: &Outcome) {
    let (x1, x2) = outcome.roots();
    let code = outcome.code();
    println!("\tParameters passed: a = {a:E}   b = {b:E}   c = {c:E}");
    println!("\tReceived answer: res1 = {x1:E}   res2 = {x2:E}");
    println!("\tReceived msg[{}]: {}", i32::from(code), code.message());
    println!(
        "\tThe value of the equation[res1]: a * res1^2 + b * res1 + c = {:E}",
        verify::residual(a, b, c, x1)
    );
    println!(
        "\tThe value of the equation[res2]: a * res2^2 + b * res2 + c = {:E}",
        verify::residual(a, b, c, x2)
    );
}
