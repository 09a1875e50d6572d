use std::path::PathBuf;

use clap::Parser;
use listree::EmptyListingPolicy;

use crate::application::data::LogLevel;
use crate::cli::ListingArg;

#[derive(Parser, Debug, Clone)]
#[command(version)]
pub struct Cli {
    /// Listing to apply, as `FILE` for the root or `DIR=FILE` for a directory.
    /// Applied in order, so parents must come before their children.
    /// The first `=` always ends `DIR`: a root listing whose file name holds
    /// a `=` must name the root explicitly, as in `/=a=b.txt`.
    #[clap(long = "listing", value_name = "DIR=FILE", required = true)]
    pub listings: Vec<ListingArg>,

    /// Remote path the tree is rooted at
    #[clap(long)]
    pub root: Option<String>,

    /// Path of a file to drag
    #[clap(long, value_name = "PATH", requires = "drop_on")]
    pub drag: Option<String>,

    /// Path of the node to drop the dragged file on
    #[clap(long = "drop", value_name = "PATH", requires = "drag")]
    pub drop_on: Option<String>,

    /// What to do with empty listings: `keep-placeholder` or `confirmed-empty`
    #[clap(long, value_parser = parse_empty_listing_policy)]
    pub empty_listing: Option<EmptyListingPolicy>,

    #[clap(long, short, default_value = "warn", value_enum)]
    pub log_level: LogLevel,

    /// Directory holding `listree.yaml`
    #[clap(long, short, default_value = ".")]
    pub config_dir: PathBuf,
}

fn parse_empty_listing_policy(value: &str) -> Result<EmptyListingPolicy, String> {
    EmptyListingPolicy::from_key(value).ok_or_else(|| {
        format!("expected `keep-placeholder` or `confirmed-empty`, got `{value}`")
    })
}
