//! Command-line drivers for the quadric solver.
//!
//! `quadric solve` answers a single equation, `quadric fixtures` runs the
//! literal reference table, and `quadric fuzz` checks seeded random
//! equations. Results go to stdout; logs go to stderr.

mod commands;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Real roots of a·x² + b·x + c = 0
#[derive(Parser)]
#[command(name = "quadric")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Solve quadratic equations over the reals", long_about = None)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, global = true, default_value = "warn")]
    log_level: Level,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve one equation
    Solve(commands::solve::SolveArgs),
    /// Run the literal reference equations
    Fixtures(commands::fixtures::FixturesArgs),
    /// Solve and verify seeded random equations
    Fuzz(commands::fuzz::FuzzArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(cli.log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Solve(args) => commands::solve::execute(&args),
        Commands::Fixtures(args) => commands::fixtures::execute(&args),
        Commands::Fuzz(args) => commands::fuzz::execute(&args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use clap::CommandFactory;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn accepts_negative_coefficients() {
        let cli = Cli::try_parse_from(["quadric", "solve", "1", "-3", "-70"]).expect("should parse");
        let Commands::Solve(args) = cli.command else {
            panic!("expected solve");
        };
        assert_eq!((args.a, args.b, args.c), (1.0, -3.0, -70.0));
    }

    #[test]
    fn parses_log_level() {
        let cli = Cli::try_parse_from(["quadric", "--log-level", "debug", "fixtures"])
            .expect("should parse");
        assert_eq!(cli.log_level, Level::DEBUG);
    }

    #[test]
    fn fuzz_defaults() {
        let cli = Cli::try_parse_from(["quadric", "fuzz"]).expect("should parse");
        let Commands::Fuzz(args) = cli.command else {
            panic!("expected fuzz");
        };
        assert_eq!(args.iterations, 5000);
        assert_eq!(args.range, 1000.0);
        assert_eq!(args.tol, 1e-5);
    }
}
