//! soulplan command-line planner.
//!
//! Run with a team file, or with one member given inline:
//!
//! ```text
//! soulplan [options] <team.yaml>
//! soulplan [options] <shikigami> <primary soul> [<attr>=<range>...]
//! ```

mod cli;
mod report;

use anyhow::Result;
use clap::Parser;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    if !cli.quiet {
        soulplan::console::init();
    }
    cli.execute()
}
