//! Solves seeded random equations and verifies every reported root.

use anyhow::{Result, anyhow, bail};
use clap::Args;
use quadric_solve::{
    solve,
    verify::{self, Config},
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

#[derive(Args)]
pub struct FuzzArgs {
    /// Number of random equations to solve
    #[arg(short = 'n', long, default_value_t = 5000)]
    pub iterations: usize,

    /// Seed for the random generator
    #[arg(short, long, default_value_t = 1)]
    pub seed: u64,

    /// Coefficients are drawn uniformly from [-range, range]
    #[arg(short, long, default_value_t = 1000.0)]
    pub range: f64,

    /// Largest accepted |a·x² + b·x + c| for a reported root
    #[arg(short, long, default_value_t = 1e-5)]
    pub tol: f64,
}

pub fn execute(args: &FuzzArgs) -> Result<()> {
    if !args.range.is_finite() || args.range <= 0.0 {
        bail!("range must be finite and positive, got {}", args.range);
    }
    let config = Config {
        residual_tol: args.tol,
    };
    config.validate().map_err(|reason| anyhow!(reason))?;

    info!(
        iterations = args.iterations,
        seed = args.seed,
        range = args.range,
        "starting random run"
    );

    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    for i in 1..=args.iterations {
        let a = rng.gen_range(-args.range..=args.range);
        let b = rng.gen_range(-args.range..=args.range);
        let c = rng.gen_range(-args.range..=args.range);

        let outcome = solve(a, b, c);
        if let Err(err) = verify::check(a, b, c, &outcome, &config) {
            println!("RANDOM TEST_{i}: [ERROR]:");
            super::print_report(a, b, c, &outcome);
            bail!("random test {i} failed: {err}");
        }
        debug!(i, a, b, c, %outcome, "verified");
    }

    println!("{} random equations verified.", args.iterations);
    Ok(())
}
