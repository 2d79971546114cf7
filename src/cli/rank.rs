//! Rank command implementation

use anyhow::Result;
use clap::Args;
use pltform::{rankdata, RankMethod, RankOrder, Ranks};

#[derive(Args)]
pub struct RankArgs {
    /// Values to rank
    #[arg(value_name = "VALUES", allow_negative_numbers = true, value_parser = parse_finite)]
    pub values: Vec<f64>,

    /// Tie handling
    #[arg(short, long, value_enum, default_value_t = RankMethod::Average)]
    pub method: RankMethod,

    /// Give rank 1 to the smallest value
    #[arg(long)]
    pub ascending: bool,
}

fn parse_finite(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|_| format!("'{s}' is not a number"))?;
    if !value.is_finite() {
        return Err(format!("'{s}' is not a finite number"));
    }
    Ok(value)
}

pub fn run(args: RankArgs) -> Result<()> {
    let order = if args.ascending { RankOrder::Ascending } else { RankOrder::Descending };

    match rankdata(&args.values, args.method, order) {
        Ranks::Min(ranks) => ranks.iter().for_each(|rank| println!("{rank}")),
        Ranks::Average(ranks) => ranks.iter().for_each(|rank| println!("{rank:.1}")),
    }
    Ok(())
}
