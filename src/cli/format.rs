//! Format command implementation

use anyhow::Result;
use clap::Args;
use pltform::{parse_argv, replace_tokens};

#[derive(Args)]
pub struct FormatArgs {
    /// Template containing <TOKEN> placeholders
    #[arg(value_name = "TEMPLATE")]
    pub template: String,

    /// Replacement values as key=value (key is the lowercased token name)
    #[arg(value_name = "KEY=VALUE", trailing_var_arg = true, allow_hyphen_values = true)]
    pub values: Vec<String>,
}

pub fn run(args: FormatArgs) -> Result<()> {
    let (bare, kwargs) = parse_argv(&args.values);
    if !bare.is_empty() {
        anyhow::bail!("Replacement values must be key=value, got {} bare argument(s)", bare.len());
    }

    println!("{}", replace_tokens(&args.template, &kwargs)?);
    Ok(())
}
