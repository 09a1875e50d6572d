use tracing::{debug, trace};

use crate::listing::Entry;

/// Line terminator separating listing rows.
pub const LINE_TERMINATOR: &str = "\r\n";

const PERMISSIONS_TOKEN: usize = 0;
const OWNER_TOKEN: usize = 2;
const GROUP_TOKEN: usize = 3;
const SIZE_TOKEN: usize = 4;
const MODIFIED_FIRST_TOKEN: usize = 5;
const MODIFIED_LAST_TOKEN: usize = 7;
const NAME_FIRST_TOKEN: usize = 8;

/// Parses a raw listing into entries, in input order.
///
/// Empty lines are discarded. Lines too short to carry every field still
/// produce an entry with the missing fields left empty, unless the name itself
/// is empty, in which case the line is skipped.
pub fn parse(raw: &str) -> Vec<Entry> {
    let entries = raw
        .split(LINE_TERMINATOR)
        .filter(|line| !line.is_empty())
        .filter_map(parse_line)
        .collect::<Vec<_>>();

    debug!("Parsed {} listing entries", entries.len());
    entries
}

fn parse_line(line: &str) -> Option<Entry> {
    let tokens = line
        .split(' ')
        .filter(|token| !token.is_empty())
        .collect::<Vec<_>>();

    let name = section(&tokens, NAME_FIRST_TOKEN, tokens.len());
    if name.is_empty() {
        debug!("Skipping listing line without a name: {:?}", line);
        return None;
    }

    let owner_group = format!(
        "{} {}",
        section(&tokens, OWNER_TOKEN, OWNER_TOKEN + 1),
        section(&tokens, GROUP_TOKEN, GROUP_TOKEN + 1)
    );

    let entry = Entry {
        name,
        size: section(&tokens, SIZE_TOKEN, SIZE_TOKEN + 1),
        modified: section(&tokens, MODIFIED_FIRST_TOKEN, MODIFIED_LAST_TOKEN + 1),
        permissions: section(&tokens, PERMISSIONS_TOKEN, PERMISSIONS_TOKEN + 1),
        owner_group,
    };
    trace!("Parsed listing entry: {}", entry);
    Some(entry)
}

/// Joins `tokens[start..end]` with single spaces, clamping to what exists.
fn section(tokens: &[&str], start: usize, end: usize) -> String {
    let end = end.min(tokens.len());
    let start = start.min(end);
    tokens[start..end].join(" ")
}
