use tracing::debug;

use crate::ext::RemotePathExt;
use crate::tree::{FileTree, NodeId, NodeKind};

impl FileTree {
    /// The absolute path of a node, built from the names of its ancestors.
    ///
    /// Ancestor names that already end in `/` (typically the root) are joined
    /// without adding a second separator. Returns `None` for a stale id.
    pub fn absolute_path(&self, id: NodeId) -> Option<String> {
        self.build_path(id)
    }

    /// The path of the directory a node stands for: files resolve to the
    /// directory containing them, everything else to its own path.
    pub fn directory_path(&self, id: NodeId) -> Option<String> {
        let node = self.get(id)?;
        match node.kind() {
            NodeKind::File => self.build_path(node.parent()?),
            NodeKind::Directory | NodeKind::Placeholder => self.build_path(id),
        }
    }

    fn build_path(&self, anchor: NodeId) -> Option<String> {
        let anchor_node = self.get(anchor)?;
        let mut path = anchor_node.name().to_string();
        let mut ancestor = anchor_node.parent();
        while let Some(current) = ancestor {
            let node = self.get(current)?;
            path = node.name().join_remote(&path);
            ancestor = node.parent();
        }
        Some(path)
    }

    /// Finds the node reached by descending from the root along `path`.
    ///
    /// `path` must start with the root's own name; the rest is split on `/`
    /// and each non-empty segment must exactly match a child's name.
    pub fn find_node_by_path(&self, path: &str) -> Option<NodeId> {
        let root = self.root_node();
        let Some(remainder) = path.strip_prefix(root.name()) else {
            debug!("Path {:?} is outside root {:?}", path, root.name());
            return None;
        };

        remainder
            .remote_segments()
            .try_fold(self.root(), |current, segment| {
                let found = self
                    .children(current)
                    .iter()
                    .copied()
                    .find(|&child| self.get(child).is_some_and(|node| node.name() == segment));
                if found.is_none() {
                    debug!("No entry named {:?} while resolving {:?}", segment, path);
                }
                found
            })
    }
}
