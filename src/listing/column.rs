use derive_more::Display;

/// The five display columns of a listing row, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Column {
    #[display("name")]
    Name,
    #[display("size")]
    Size,
    #[display("modified")]
    Modified,
    #[display("permissions")]
    Permissions,
    #[display("owner_group")]
    OwnerGroup,
}

impl Column {
    pub const ALL: [Column; 5] = [
        Column::Name,
        Column::Size,
        Column::Modified,
        Column::Permissions,
        Column::OwnerGroup,
    ];

    /// Position of the column in a row, starting at 0 for the name.
    pub fn index(self) -> usize {
        match self {
            Column::Name => 0,
            Column::Size => 1,
            Column::Modified => 2,
            Column::Permissions => 3,
            Column::OwnerGroup => 4,
        }
    }

    /// Looks a column up by its configuration key (the `Display` form).
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|column| column.to_string() == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest]
    #[case("name", Some(Column::Name))]
    #[case("size", Some(Column::Size))]
    #[case("modified", Some(Column::Modified))]
    #[case("permissions", Some(Column::Permissions))]
    #[case("owner_group", Some(Column::OwnerGroup))]
    #[case("Name", None)]
    #[case("", None)]
    fn column_from_key(#[case] key: &str, #[case] expected: Option<Column>) {
        assert_eq!(Column::from_key(key), expected);
    }

    #[test]
    fn columns_are_in_display_order() {
        let indices = Column::ALL.map(Column::index);
        assert_eq!(indices, [0, 1, 2, 3, 4]);
    }
}
