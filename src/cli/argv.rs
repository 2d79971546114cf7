//! Argv command implementation

use anyhow::Result;
use clap::Args;
use pltform::parse_argv;
use serde_json::json;

#[derive(Args)]
pub struct ArgvArgs {
    /// Bare arguments followed by key=value pairs
    #[arg(value_name = "TOKENS", trailing_var_arg = true, allow_hyphen_values = true)]
    pub tokens: Vec<String>,
}

pub fn run(args: ArgvArgs) -> Result<()> {
    let (args, kwargs) = parse_argv(&args.tokens);
    println!("{}", serde_json::to_string_pretty(&json!({ "args": args, "kwargs": kwargs }))?);
    Ok(())
}
