use futures_channel::mpsc;
use listree::{FileTree, TransferIntent};
use snafu::Snafu;
use snafu::prelude::*;
use tracing::{debug, info};

use crate::application::{
    AsyncTryFrom, ListingFile, ListingFileError, RuntimeConfig, TreeRenderer, report_transfers,
};
use crate::cli::ListingArg;
use crate::config::{Settings, SettingsError};

/// Root used when neither the command line nor the settings name one.
const DEFAULT_ROOT: &str = "/";

pub struct Application;

impl Application {
    pub async fn run(runtime_config: impl Into<RuntimeConfig>) -> Result<(), ApplicationError> {
        let runtime_config: RuntimeConfig = runtime_config.into();
        let settings = Settings::read(&runtime_config.config_dir)
            .await
            .context(SettingsSnafu)?;
        debug!("Loaded settings: {:?}", settings);

        let (sender, receiver) = mpsc::unbounded();
        let mut tree = Self::create_tree(&runtime_config, settings);
        tree.subscribe_transfers(sender);

        Self::apply_listings(&mut tree, &runtime_config.listings).await?;
        if let Some((drag, drop_on)) = &runtime_config.drag_and_drop {
            Self::drag_and_drop(&mut tree, drag, drop_on)?;
        }
        print!("{}", TreeRenderer::new(&tree, runtime_config.color));

        drop(tree);
        let transfers = report_transfers(receiver).await;
        info!("{} transfer(s) requested", transfers);

        Ok(())
    }

    fn create_tree(runtime_config: &RuntimeConfig, settings: Settings) -> FileTree {
        let root = runtime_config
            .root
            .clone()
            .or(settings.root)
            .unwrap_or_else(|| DEFAULT_ROOT.to_string());
        let policy = runtime_config
            .empty_listing
            .unwrap_or(settings.empty_listing);
        debug!("Creating tree at {:?} with empty listing policy {}", root, policy);

        FileTree::new(root)
            .with_header(settings.header)
            .with_empty_listing_policy(policy)
    }

    async fn apply_listings(
        tree: &mut FileTree,
        listings: &[ListingArg],
    ) -> Result<(), ApplicationError> {
        for arg in listings {
            let listing = ListingFile::async_try_from(arg)
                .await
                .context(ListingSnafu)?;
            let target = match &listing.directory {
                Some(path) => tree
                    .find_node_by_path(path)
                    .context(UnknownPathSnafu { path })?,
                None => tree.root(),
            };
            info!(
                "Applying {} entries from {}",
                listing.entries.len(),
                arg.file.display()
            );
            tree.populate(target, listing.entries);
        }
        Ok(())
    }

    fn drag_and_drop(
        tree: &mut FileTree,
        drag: &str,
        drop_on: &str,
    ) -> Result<TransferIntent, ApplicationError> {
        let source = tree
            .find_node_by_path(drag)
            .context(UnknownPathSnafu { path: drag })?;
        let payload = tree
            .begin_drag(source)
            .context(DragRejectedSnafu { path: drag })?;
        let target = tree
            .find_node_by_path(drop_on)
            .context(UnknownPathSnafu { path: drop_on })?;
        tree.drop(&payload, target)
            .context(DropRejectedSnafu { path: drop_on })
    }
}

#[derive(Debug, Snafu)]
pub enum ApplicationError {
    #[snafu(display("Critical failure encountered while loading settings"))]
    SettingsError { source: SettingsError },
    #[snafu(display("Critical failure encountered while loading a listing"))]
    ListingError { source: ListingFileError },
    #[snafu(display("Nothing in the tree at '{}'", path))]
    UnknownPath { path: String },
    #[snafu(display("Cannot drag '{}': only files can be dragged", path))]
    DragRejected { path: String },
    #[snafu(display("Cannot drop on '{}'", path))]
    DropRejected { path: String },
}
