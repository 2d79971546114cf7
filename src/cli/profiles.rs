//! Profiles command implementation

use anyhow::Result;
use clap::Args;

use super::utils::SourceArgs;

#[derive(Args)]
pub struct ProfilesArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

pub fn run(args: ProfilesArgs) -> Result<()> {
    let store = args.source.load_store()?;

    println!("Loaded files:");
    for path in store.loaded_paths() {
        println!("  {}", path.display());
    }

    println!("Profiles:");
    for profile in store.profiles() {
        let sections = store.sections(profile).unwrap_or_default();
        println!("  {profile}: {}", sections.join(", "));
    }
    if !store.has_profile(pltform::DEFAULT_PROFILE) {
        tracing::warn!("No '{}' profile loaded; section lookups will fail", pltform::DEFAULT_PROFILE);
    }
    Ok(())
}
