//! pltform: inspect layered YAML config profiles and run the ranking,
//! argv and token helpers from the command line.

use anyhow::Result;

mod cli;

fn main() -> Result<()> {
    cli::run()
}
