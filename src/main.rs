use anyhow::{Context, Result};
use clap::Parser;

use dirlist_lib::{get_dir_listing_with, ListingConfig};

#[derive(Parser, Debug)]
#[clap(name = "dirlist", about = "List a directory's entries with metadata as JSON.")]
struct Cli {
    /// Directory to list; falls back to DIRLIST_DEFAULT_PATH, then `/`.
    path: Option<String>,

    /// Include entries whose name starts with a dot.
    #[clap(long)]
    hidden: bool,
}

fn main() -> Result<()> {
    dirlist_lib::init_logging();
    let cli = Cli::parse();

    let config = ListingConfig::from_env().context("failed to load config")?;
    let hidden = cli.hidden.then_some(true);
    let entries = get_dir_listing_with(&config, cli.path, hidden)?;

    println!(
        "{}",
        serde_json::to_string_pretty(&entries).context("failed to encode listing")?
    );
    Ok(())
}
