use std::path::PathBuf;

use listree::EmptyListingPolicy;

use crate::cli::{Cli, ListingArg};

/// Everything a run needs, after command-line parsing.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub listings: Vec<ListingArg>,
    pub root: Option<String>,
    /// Source and target paths of a drag-and-drop to perform.
    pub drag_and_drop: Option<(String, String)>,
    pub empty_listing: Option<EmptyListingPolicy>,
    pub config_dir: PathBuf,
    pub color: bool,
}

impl From<Cli> for RuntimeConfig {
    fn from(cli: Cli) -> Self {
        Self {
            listings: cli.listings,
            root: cli.root,
            drag_and_drop: cli.drag.zip(cli.drop_on),
            empty_listing: cli.empty_listing,
            config_dir: cli.config_dir,
            color: supports_color::on(supports_color::Stream::Stdout).is_some(),
        }
    }
}
