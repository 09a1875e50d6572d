use derive_more::{Display, IsVariant};
use futures_channel::mpsc::UnboundedSender;
use tracing::debug;

use crate::listing::Entry;
use crate::tree::dnd::TransferIntent;
use crate::tree::{Header, LoadState, Node, NodeId, NodeKind};

/// What `populate` does with an empty listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, IsVariant)]
pub enum EmptyListingPolicy {
    /// Leave the current children, placeholder included, untouched.
    #[default]
    #[display("keep-placeholder")]
    KeepPlaceholder,
    /// Clear the children and mark the directory as confirmed empty.
    #[display("confirmed-empty")]
    ConfirmedEmpty,
}

impl EmptyListingPolicy {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "keep-placeholder" => Some(EmptyListingPolicy::KeepPlaceholder),
            "confirmed-empty" => Some(EmptyListingPolicy::ConfirmedEmpty),
            _ => None,
        }
    }
}

#[derive(Debug)]
struct Slot {
    generation: u32,
    node: Option<Node>,
}

/// A lazily loaded tree of listing rows.
///
/// Nodes live in an arena owned by the tree; parents own their children
/// through [`NodeId`] lists and children refer back to their parent by id.
#[derive(Debug)]
pub struct FileTree {
    slots: Vec<Slot>,
    free: Vec<usize>,
    root: NodeId,
    header: Header,
    empty_listing: EmptyListingPolicy,
    pub(crate) transfers: Option<UnboundedSender<TransferIntent>>,
}

impl FileTree {
    /// Creates a tree whose root row is named after `root_path`.
    ///
    /// The root starts out with a placeholder child so it shows as expandable
    /// before the first listing is applied.
    pub fn new(root_path: impl Into<String>) -> Self {
        let mut tree = Self {
            slots: Vec::new(),
            free: Vec::new(),
            root: NodeId {
                index: 0,
                generation: 0,
            },
            header: Header::default(),
            empty_listing: EmptyListingPolicy::default(),
            transfers: None,
        };
        tree.root = tree.insert(Node::root(root_path));
        tree.ensure_placeholder(tree.root);
        debug!("Created tree rooted at {:?}", tree.root_node().name());
        tree
    }

    pub fn with_header(mut self, header: Header) -> Self {
        self.header = header;
        self
    }

    pub fn with_empty_listing_policy(mut self, policy: EmptyListingPolicy) -> Self {
        self.empty_listing = policy;
        self
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn root_node(&self) -> &Node {
        self.slots[self.root.index]
            .node
            .as_ref()
            .unwrap_or_else(|| unreachable!("the root is never removed"))
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn empty_listing_policy(&self) -> EmptyListingPolicy {
        self.empty_listing
    }

    /// Resolves a handle, or `None` when the node no longer exists.
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.slots
            .get(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_ref())
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    pub fn kind(&self, id: NodeId) -> Option<NodeKind> {
        self.get(id).map(Node::kind)
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(Node::parent)
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map(Node::children).unwrap_or_default()
    }

    /// Number of live nodes, root included.
    pub fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Replaces the children of `id` with one child per entry.
    ///
    /// Directory children get a placeholder so they can be expanded before
    /// their own listing is fetched. An empty `entries` is handled according
    /// to the tree's [`EmptyListingPolicy`]. Unknown ids are ignored.
    pub fn populate(&mut self, id: NodeId, entries: Vec<Entry>) {
        if !self.contains(id) {
            debug!("Ignoring populate on stale node {}", id);
            return;
        }

        if entries.is_empty() {
            match self.empty_listing {
                EmptyListingPolicy::KeepPlaceholder => {
                    debug!("Empty listing for node {}, keeping its children", id);
                }
                EmptyListingPolicy::ConfirmedEmpty => {
                    debug!("Empty listing for node {}, marking it empty", id);
                    self.clear_children(id);
                    self.set_load_state(id, LoadState::ConfirmedEmpty);
                }
            }
            return;
        }

        self.clear_children(id);
        debug!("Populating node {} with {} entries", id, entries.len());

        for entry in entries {
            let child = self.insert(Node::child(entry, id));
            self.push_child(id, child);
            if self.kind(child) == Some(NodeKind::Directory) {
                self.ensure_placeholder(child);
            }
        }
        self.set_load_state(id, LoadState::Loaded);
    }

    /// Attaches a placeholder child to `id` if it has no children at all.
    pub fn ensure_placeholder(&mut self, id: NodeId) {
        match self.get(id) {
            Some(node) if node.children().is_empty() => {}
            _ => return,
        }
        let placeholder = self.insert(Node::child(Entry::placeholder(), id));
        self.push_child(id, placeholder);
    }

    /// Depth-first, pre-order walk starting at `id`, with each node's depth
    /// relative to `id`.
    pub fn walk(&self, id: NodeId) -> Vec<(usize, NodeId)> {
        let mut visited = Vec::new();
        let mut stack = vec![(0, id)];
        while let Some((depth, current)) = stack.pop() {
            if !self.contains(current) {
                continue;
            }
            visited.push((depth, current));
            stack.extend(
                self.children(current)
                    .iter()
                    .rev()
                    .map(|&child| (depth + 1, child)),
            );
        }
        visited
    }

    fn insert(&mut self, node: Node) -> NodeId {
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index];
            slot.node = Some(node);
            NodeId {
                index,
                generation: slot.generation,
            }
        } else {
            self.slots.push(Slot {
                generation: 0,
                node: Some(node),
            });
            NodeId {
                index: self.slots.len() - 1,
                generation: 0,
            }
        }
    }

    fn push_child(&mut self, parent: NodeId, child: NodeId) {
        if let Some(node) = self.get_mut(parent) {
            node.children.push(child);
        }
    }

    fn set_load_state(&mut self, id: NodeId, state: LoadState) {
        if let Some(node) = self.get_mut(id) {
            node.load_state = state;
        }
    }

    fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.slots
            .get_mut(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_mut())
    }

    /// Destroys every descendant of `id`.
    fn clear_children(&mut self, id: NodeId) {
        let mut doomed = match self.get_mut(id) {
            Some(node) => std::mem::take(&mut node.children),
            None => return,
        };
        while let Some(child) = doomed.pop() {
            let Some(slot) = self.slots.get_mut(child.index) else {
                continue;
            };
            if slot.generation != child.generation {
                continue;
            }
            if let Some(node) = slot.node.take() {
                doomed.extend(node.children);
                slot.generation = slot.generation.wrapping_add(1);
                self.free.push(child.index);
            }
        }
    }
}
