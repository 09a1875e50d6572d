use std::fmt;

use colored::Colorize;
use listree::{Column, FileTree, LoadState, Node, NodeKind};

const INDENT: &str = "  ";
const COLUMN_GAP: &str = "  ";
const PLACEHOLDER_LABEL: &str = "...";
const EMPTY_LABEL: &str = "(empty)";

/// Plain-text view of a [`FileTree`]: a header line, then one indented line
/// per node in display order.
pub struct TreeRenderer<'a> {
    tree: &'a FileTree,
    color: bool,
}

impl<'a> TreeRenderer<'a> {
    pub fn new(tree: &'a FileTree, color: bool) -> Self {
        Self { tree, color }
    }

    fn rows(&self) -> Vec<(NodeKind, [String; 5])> {
        self.tree
            .walk(self.tree.root())
            .into_iter()
            .filter_map(|(depth, id)| {
                self.tree
                    .get(id)
                    .map(|node| (node.kind(), self.row(depth, node)))
            })
            .collect()
    }

    fn row(&self, depth: usize, node: &Node) -> [String; 5] {
        let label = match (node.kind(), node.load_state()) {
            (NodeKind::Placeholder, _) => PLACEHOLDER_LABEL.to_string(),
            (NodeKind::Directory, LoadState::ConfirmedEmpty) => {
                format!("{} {}", node.name(), EMPTY_LABEL)
            }
            _ => node.name().to_string(),
        };
        Column::ALL.map(|column| match column {
            Column::Name => format!("{}{}", INDENT.repeat(depth), label),
            other => node.column(other).to_string(),
        })
    }

    fn paint(&self, text: &str, kind: NodeKind) -> String {
        if !self.color {
            return text.to_string();
        }
        match kind {
            NodeKind::Directory => text.blue().bold().to_string(),
            NodeKind::File => text.to_string(),
            NodeKind::Placeholder => text.dimmed().to_string(),
        }
    }
}

impl fmt::Display for TreeRenderer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header = self.tree.header();
        let rows = self.rows();

        let mut widths = Column::ALL.map(|column| header.label(column).chars().count());
        for (_, row) in &rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let header_line = header
            .labels()
            .zip(widths)
            .map(|((_, label), width)| format!("{label:<width$}"))
            .collect::<Vec<_>>()
            .join(COLUMN_GAP);
        let header_line = header_line.trim_end();
        if self.color {
            writeln!(f, "{}", header_line.underline())?;
        } else {
            writeln!(f, "{header_line}")?;
        }

        for (kind, row) in &rows {
            let mut cells = row
                .iter()
                .zip(widths)
                .map(|(cell, width)| format!("{cell:<width$}"))
                .collect::<Vec<_>>();
            cells[Column::Name.index()] = self.paint(&cells[Column::Name.index()], *kind);
            writeln!(f, "{}", cells.join(COLUMN_GAP).trim_end())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use listree::{EmptyListingPolicy, Header, parse};

    use super::*;

    const LISTING: &str = "drwxr-xr-x 2 alice staff 4096 Jan 1 12:00 docs\r\n\
                           -rw-r--r-- 1 alice staff 17 Jan 2 09:30 notes.txt\r\n";

    #[test]
    fn renders_header_and_indented_rows() {
        let mut tree = FileTree::new("/home/alice");
        let root = tree.root();
        tree.populate(root, parse(LISTING));

        let rendered = TreeRenderer::new(&tree, false).to_string();
        let lines = rendered.lines().collect::<Vec<_>>();

        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("Name"));
        assert!(lines[0].ends_with("Owner/Group"));
        assert!(lines[1].starts_with("/home/alice"));
        assert!(lines[2].starts_with("  docs "));
        assert!(lines[2].contains("drwxr-xr-x"));
        assert!(lines[3].starts_with("    ..."));
        assert!(lines[4].starts_with("  notes.txt"));
        assert!(lines[4].ends_with("alice staff"));
    }

    #[test]
    fn columns_are_aligned() {
        let mut tree = FileTree::new("/");
        let root = tree.root();
        tree.populate(root, parse(LISTING));

        let rendered = TreeRenderer::new(&tree, false).to_string();
        let columns = rendered
            .lines()
            .filter(|line| line.contains("alice staff"))
            .map(|line| line.find("alice staff").unwrap())
            .collect::<Vec<_>>();

        assert_eq!(columns.len(), 2);
        assert_eq!(columns[0], columns[1]);
    }

    #[test]
    fn header_line_lists_labels_in_column_order() {
        let tree = FileTree::new("/");

        let rendered = TreeRenderer::new(&tree, false).to_string();
        let header_line = rendered.lines().next().unwrap();
        let positions = tree
            .header()
            .labels()
            .map(|(_, label)| header_line.find(label).unwrap())
            .collect::<Vec<_>>();

        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn uses_configured_header_labels() {
        let tree = FileTree::new("/")
            .with_header(Header::default().with_label(Column::Name, "Filename"));

        let rendered = TreeRenderer::new(&tree, false).to_string();

        assert!(rendered.starts_with("Filename"));
    }

    #[test]
    fn marks_confirmed_empty_directories() {
        let mut tree =
            FileTree::new("/srv").with_empty_listing_policy(EmptyListingPolicy::ConfirmedEmpty);
        let root = tree.root();
        tree.populate(root, Vec::new());

        let rendered = TreeRenderer::new(&tree, false).to_string();

        assert!(rendered.lines().nth(1).unwrap().starts_with("/srv (empty)"));
    }
}
