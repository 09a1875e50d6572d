use derive_more::Display;

use crate::listing::Column;

/// One structured row decoded from a listing line.
///
/// All fields are raw text exactly as they appeared in the listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Display)]
#[display("{permissions} {owner_group} {size} {modified} {name}")]
pub struct Entry {
    pub name: String,
    pub size: String,
    pub modified: String,
    pub permissions: String,
    pub owner_group: String,
}

impl Entry {
    pub fn new(
        name: impl Into<String>,
        size: impl Into<String>,
        modified: impl Into<String>,
        permissions: impl Into<String>,
        owner_group: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            size: size.into(),
            modified: modified.into(),
            permissions: permissions.into(),
            owner_group: owner_group.into(),
        }
    }

    /// A row with only a name, as used for the root of a tree.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// The all-empty row that marks a directory as "not loaded yet".
    pub fn placeholder() -> Self {
        Self::default()
    }

    pub fn column(&self, column: Column) -> &str {
        match column {
            Column::Name => &self.name,
            Column::Size => &self.size,
            Column::Modified => &self.modified,
            Column::Permissions => &self.permissions,
            Column::OwnerGroup => &self.owner_group,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_has_every_column_empty() {
        let placeholder = Entry::placeholder();
        for column in Column::ALL {
            assert!(placeholder.column(column).is_empty(), "{column} not empty");
        }
    }

    #[test]
    fn column_returns_matching_field() {
        let entry = Entry::new("a.txt", "17", "Jan 2 09:30", "-rw-r--r--", "alice staff");
        assert_eq!(entry.column(Column::Name), "a.txt");
        assert_eq!(entry.column(Column::Size), "17");
        assert_eq!(entry.column(Column::Modified), "Jan 2 09:30");
        assert_eq!(entry.column(Column::Permissions), "-rw-r--r--");
        assert_eq!(entry.column(Column::OwnerGroup), "alice staff");
    }

    #[test]
    fn displays_in_listing_order() {
        let entry = Entry::new("a.txt", "17", "Jan 2 09:30", "-rw-r--r--", "alice staff");
        assert_eq!(
            entry.to_string(),
            "-rw-r--r-- alice staff 17 Jan 2 09:30 a.txt"
        );
    }
}
