mod application;
mod async_conversion;
pub mod data;
mod listing_file;
mod render;
mod runtime_config;
mod transfer_report;

pub use application::{Application, ApplicationError};
pub use async_conversion::AsyncTryFrom;
pub use listing_file::{ListingFile, ListingFileError};
pub use render::TreeRenderer;
pub use runtime_config::RuntimeConfig;
pub use transfer_report::report_transfers;
