mod cli;
mod listing_arg;

pub use cli::Cli;
pub use listing_arg::ListingArg;
