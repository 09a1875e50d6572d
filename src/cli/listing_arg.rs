use std::path::PathBuf;
use std::str::FromStr;

use snafu::{Snafu, ensure};

/// A `--listing` argument: which directory to populate from which file.
///
/// The argument is split on its first `=`, so `a=b.txt` names directory `a`
/// and file `b.txt`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingArg {
    /// Remote directory to populate; `None` means the root.
    pub directory: Option<String>,
    pub file: PathBuf,
}

impl FromStr for ListingArg {
    type Err = ListingArgError;

    fn from_str(arg: &str) -> Result<Self, Self::Err> {
        let (directory, file) = match arg.split_once('=') {
            Some((directory, file)) => (Some(directory.to_string()), file),
            None => (None, arg),
        };
        ensure!(
            !file.is_empty(),
            MissingFileSnafu {
                arg: arg.to_string()
            }
        );

        Ok(ListingArg {
            directory,
            file: PathBuf::from(file),
        })
    }
}

#[derive(Debug, Snafu)]
pub enum ListingArgError {
    #[snafu(display("Listing '{}' does not name a file", arg))]
    MissingFile { arg: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest]
    #[case("root.txt", None, "root.txt")]
    #[case("/srv=srv.txt", Some("/srv"), "srv.txt")]
    #[case("/a=b=c.txt", Some("/a"), "b=c.txt")]
    #[case("=x.txt", Some(""), "x.txt")]
    #[case("a=b.txt", Some("a"), "b.txt")]
    #[case("/=a=b.txt", Some("/"), "a=b.txt")]
    fn parses_listing_args(
        #[case] arg: &str,
        #[case] directory: Option<&str>,
        #[case] file: &str,
    ) {
        let parsed: ListingArg = arg.parse().unwrap();

        assert_eq!(parsed.directory.as_deref(), directory);
        assert_eq!(parsed.file, PathBuf::from(file));
    }

    #[rstest]
    #[case("")]
    #[case("/srv=")]
    fn rejects_args_without_file(#[case] arg: &str) {
        let result = arg.parse::<ListingArg>();
        assert!(matches!(result, Err(ListingArgError::MissingFile { .. })));
    }
}
