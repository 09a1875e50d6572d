use crate::listing::Column;

const DEFAULT_LABELS: [&str; 5] = ["Name", "Size", "Last Modified", "Permissions", "Owner/Group"];

/// Column labels shown above the tree. Display metadata only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    labels: [String; 5],
}

impl Default for Header {
    fn default() -> Self {
        Self {
            labels: DEFAULT_LABELS.map(str::to_string),
        }
    }
}

impl Header {
    pub fn label(&self, column: Column) -> &str {
        &self.labels[column.index()]
    }

    pub fn set_label(&mut self, column: Column, label: impl Into<String>) {
        self.labels[column.index()] = label.into();
    }

    pub fn with_label(mut self, column: Column, label: impl Into<String>) -> Self {
        self.set_label(column, label);
        self
    }

    /// Labels in display order.
    pub fn labels(&self) -> impl Iterator<Item = (Column, &str)> {
        Column::ALL
            .into_iter()
            .map(|column| (column, self.label(column)))
    }
}
