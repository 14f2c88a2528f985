//! Runs the literal reference equations.

use anyhow::{Context, Result, bail};
use clap::Args;
use quadric_solve::fixture::{self, FIXTURES, Fixture};
use tracing::{error, info};

#[derive(Args)]
pub struct FixturesArgs {
    /// Fixture ids to run; all fixtures run when none are given
    pub ids: Vec<String>,
}

pub fn execute(args: &FixturesArgs) -> Result<()> {
    let selected: Vec<&Fixture> = if args.ids.is_empty() {
        FIXTURES.iter().collect()
    } else {
        args.ids
            .iter()
            .map(|id| fixture::find(id).with_context(|| format!("unknown fixture `{id}`")))
            .collect::<Result<_>>()?
    };
    info!(count = selected.len(), "running fixtures");

    let mut failures = 0usize;
    for (i, fixture) in selected.iter().enumerate() {
        print!("TEST_{i} ({}): ", fixture.name);
        match fixture.run() {
            Ok(_) => println!("[OK]."),
            Err(mismatch) => {
                failures += 1;
                error!(%mismatch, "fixture failed");

                let (e1, e2) = mismatch.expected.roots();
                let expected = mismatch.expected.code();
                println!("[ERROR]:");
                super::print_report(fixture.a, fixture.b, fixture.c, &mismatch.actual);
                println!("\tExpected answer: res1 = {e1:E}   res2 = {e2:E}");
                println!(
                    "\tExpected msg[{}]: {}",
                    i32::from(expected),
                    expected.message()
                );
            }
        }
    }

    if failures > 0 {
        bail!("{failures} of {} fixtures failed", selected.len());
    }
    Ok(())
}
