use derive_more::{Display, IsVariant};

use crate::listing::{Column, Entry};

/// Handle to a node inside a [`FileTree`](crate::tree::FileTree).
///
/// Handles are generation checked: once the node they point at is destroyed,
/// they stop resolving even if its slot gets reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display("#{index}.{generation}")]
pub struct NodeId {
    pub(crate) index: usize,
    pub(crate) generation: u32,
}

/// What a row represents. Derived once, when the node is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IsVariant)]
pub enum NodeKind {
    Directory,
    File,
    /// Synthetic child marking a directory whose content was not fetched yet.
    Placeholder,
}

impl NodeKind {
    /// Classifies a non-root row from its permissions text.
    pub fn from_permissions(permissions: &str) -> Self {
        if permissions.starts_with('d') {
            NodeKind::Directory
        } else if permissions.is_empty() {
            NodeKind::Placeholder
        } else {
            NodeKind::File
        }
    }
}

/// Whether a directory's content has been fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, IsVariant)]
pub enum LoadState {
    #[default]
    NotLoaded,
    Loaded,
    /// A listing was applied and it was empty.
    ConfirmedEmpty,
}

#[derive(Debug, Clone)]
pub struct Node {
    row: Entry,
    kind: NodeKind,
    parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) load_state: LoadState,
}

impl Node {
    pub(crate) fn root(path: impl Into<String>) -> Self {
        Self {
            row: Entry::named(path),
            kind: NodeKind::Directory,
            parent: None,
            children: Vec::new(),
            load_state: LoadState::NotLoaded,
        }
    }

    pub(crate) fn child(row: Entry, parent: NodeId) -> Self {
        Self {
            kind: NodeKind::from_permissions(&row.permissions),
            row,
            parent: Some(parent),
            children: Vec::new(),
            load_state: LoadState::NotLoaded,
        }
    }

    pub fn name(&self) -> &str {
        &self.row.name
    }

    pub fn row(&self) -> &Entry {
        &self.row
    }

    pub fn column(&self, column: Column) -> &str {
        self.row.column(column)
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn load_state(&self) -> LoadState {
        self.load_state
    }
}
