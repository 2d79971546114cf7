//! Config command implementation

use anyhow::{Context, Result};
use clap::Args;

use super::utils::SourceArgs;

#[derive(Args)]
pub struct ConfigArgs {
    /// Config section to resolve
    #[arg(value_name = "SECTION")]
    pub section: String,

    /// Profile whose values override 'default'
    #[arg(short, long, value_name = "PROFILE")]
    pub profile: Option<String>,

    /// Print as JSON instead of YAML
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub source: SourceArgs,
}

pub fn run(args: ConfigArgs) -> Result<()> {
    let store = args.source.load_store()?;
    let params = store.config(&args.section, args.profile.as_deref())?;

    if args.json {
        let out = serde_json::to_string_pretty(&params)
            .context("Parameters cannot be represented as JSON")?;
        println!("{out}");
    } else if params.is_empty() {
        println!("{{}}");
    } else {
        print!("{}", serde_yaml::to_string(&params)?);
    }
    Ok(())
}
