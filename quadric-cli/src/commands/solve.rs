//! Solves a single equation given on the command line.

use anyhow::Result;
use clap::Args;
use quadric_solve::{Outcome, solve};
use tracing::debug;

#[derive(Args)]
pub struct SolveArgs {
    /// Coefficient of x²
    #[arg(allow_negative_numbers = true)]
    pub a: f64,

    /// Coefficient of x
    #[arg(allow_negative_numbers = true)]
    pub b: f64,

    /// Constant term
    #[arg(allow_negative_numbers = true)]
    pub c: f64,
}

pub fn execute(args: &SolveArgs) -> Result<()> {
    let (a, b, c) = (args.a, args.b, args.c);
    let outcome = solve(a, b, c);
    debug!(a, b, c, %outcome, "solved");

    let code = outcome.code();
    println!("[{}] {}", i32::from(code), code.message());
    match outcome {
        Outcome::OneRoot(x) => println!("x = {x}"),
        Outcome::TwoRoots(x1, x2) => println!("x1 = {x1}\nx2 = {x2}"),
        Outcome::InfiniteRoots | Outcome::NoRoots | Outcome::Overflow => {}
    }
    Ok(())
}
