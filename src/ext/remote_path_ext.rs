/// Separator used by remote paths, independent of the local platform.
pub const REMOTE_SEPARATOR: char = '/';

/// String helpers for remote (always `/`-separated) paths.
pub trait RemotePathExt {
    /// Prefixes `rest` with `self`, inserting a separator unless `self`
    /// already ends with one.
    fn join_remote(&self, rest: &str) -> String;

    /// The non-empty `/`-separated segments of the path.
    fn remote_segments(&self) -> impl Iterator<Item = &str>;
}

impl RemotePathExt for str {
    fn join_remote(&self, rest: &str) -> String {
        if self.ends_with(REMOTE_SEPARATOR) {
            format!("{self}{rest}")
        } else {
            format!("{self}{REMOTE_SEPARATOR}{rest}")
        }
    }

    fn remote_segments(&self) -> impl Iterator<Item = &str> {
        self.split(REMOTE_SEPARATOR)
            .filter(|segment| !segment.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest]
    #[case("/", "home", "/home")]
    #[case("/data", "x", "/data/x")]
    #[case("/data/", "x", "/data/x")]
    #[case("", "x", "/x")]
    #[case("ftp:", "pub", "ftp:/pub")]
    fn join_remote_inserts_at_most_one_separator(
        #[case] prefix: &str,
        #[case] rest: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(prefix.join_remote(rest), expected);
    }

    #[rstest]
    #[case("", &[])]
    #[case("/", &[])]
    #[case("a/b", &["a", "b"])]
    #[case("//a///b/", &["a", "b"])]
    #[case("/A/a", &["A", "a"])]
    fn remote_segments_drop_empty_parts(#[case] path: &str, #[case] expected: &[&str]) {
        assert_eq!(path.remote_segments().collect::<Vec<_>>(), expected);
    }
}
