use std::path::PathBuf;
use std::string::FromUtf8Error;

use compio::fs;
use listree::listing::{Entry, LINE_TERMINATOR, parse};
use snafu::{ResultExt, Snafu};
use tracing::debug;

use crate::application::AsyncTryFrom;
use crate::cli::ListingArg;

/// A listing read from disk, ready to populate its directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingFile {
    pub directory: Option<String>,
    pub entries: Vec<Entry>,
}

impl AsyncTryFrom<&ListingArg> for ListingFile {
    type Error = ListingFileError;

    async fn async_try_from(arg: &ListingArg) -> Result<Self, Self::Error> {
        debug!("Reading listing file: {}", arg.file.display());
        let bytes = fs::read(&arg.file).await.context(ReadSnafu {
            file_path: arg.file.clone(),
        })?;
        let text = String::from_utf8(bytes).context(EncodingSnafu {
            file_path: arg.file.clone(),
        })?;

        Ok(ListingFile {
            directory: arg.directory.clone(),
            entries: parse(&normalize_line_endings(text)),
        })
    }
}

/// Listings saved on Unix usually end lines with a bare `\n`; the parser only
/// splits on CRLF.
fn normalize_line_endings(text: String) -> String {
    if text.contains(LINE_TERMINATOR) || !text.contains('\n') {
        return text;
    }
    debug!("Listing uses bare line feeds, converting to CRLF");
    text.replace('\n', LINE_TERMINATOR)
}

#[derive(Debug, Snafu)]
pub enum ListingFileError {
    #[snafu(display("Failed to read the listing file: {}", file_path.display()))]
    ReadError {
        file_path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("Listing file {} is not valid UTF-8", file_path.display()))]
    EncodingError {
        file_path: PathBuf,
        source: FromUtf8Error,
    },
}
