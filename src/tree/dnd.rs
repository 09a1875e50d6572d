//! Drag-and-drop of files between directories of a [`FileTree`].
//!
//! Dragging a file produces a [`DragPayload`]; dropping that payload on a
//! node produces a [`TransferIntent`]. Nothing is moved or copied here: the
//! intent is handed to whoever subscribed with
//! [`FileTree::subscribe_transfers`] and carrying it out is their job.

use derive_more::Display;
use futures_channel::mpsc::UnboundedSender;
use hashlink::LinkedHashMap;
use tracing::{debug, info, warn};

use crate::tree::{FileTree, NodeId, NodeKind};

const PATH_FIELD: &str = "path";
const FILENAME_FIELD: &str = "filename";

/// Data carried from the drag source to the drop target.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display("{filename} in {path}")]
pub struct DragPayload {
    /// Directory containing the dragged file.
    pub path: String,
    pub filename: String,
}

impl DragPayload {
    /// Names of the fields a payload is exchanged with.
    pub const FIELDS: [&'static str; 2] = [PATH_FIELD, FILENAME_FIELD];

    pub fn to_fields(&self) -> LinkedHashMap<String, String> {
        let mut fields = LinkedHashMap::new();
        fields.insert(PATH_FIELD.to_string(), self.path.clone());
        fields.insert(FILENAME_FIELD.to_string(), self.filename.clone());
        fields
    }

    /// Rebuilds a payload from named fields. Both fields must be present.
    pub fn from_fields(fields: &LinkedHashMap<String, String>) -> Option<Self> {
        Some(Self {
            path: fields.get(PATH_FIELD)?.clone(),
            filename: fields.get(FILENAME_FIELD)?.clone(),
        })
    }
}

/// Request for an external executor to move a file between directories.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display("{filename} from {source_path} to {destination_path}")]
pub struct TransferIntent {
    pub source_path: String,
    pub filename: String,
    pub destination_path: String,
}

impl FileTree {
    /// Registers the channel transfer intents are published on, replacing any
    /// previous subscriber.
    pub fn subscribe_transfers(&mut self, sender: UnboundedSender<TransferIntent>) {
        self.transfers = Some(sender);
    }

    /// Starts dragging `id`. Only files can be dragged.
    pub fn begin_drag(&self, id: NodeId) -> Option<DragPayload> {
        let node = self.get(id)?;
        if node.kind() != NodeKind::File {
            debug!("Refusing to drag {:?}: it is a {}", node.name(), node.kind());
            return None;
        }

        let payload = DragPayload {
            path: self.absolute_path(node.parent()?)?,
            filename: node.name().to_string(),
        };
        debug!("Dragging {}", payload);
        Some(payload)
    }

    /// Drops `payload` on `target` and publishes the resulting intent.
    ///
    /// Dropping on a file targets the directory containing it. Returns `None`
    /// when `target` does not resolve to a node.
    pub fn drop(&mut self, payload: &DragPayload, target: NodeId) -> Option<TransferIntent> {
        let Some(destination_path) = self.directory_path(target) else {
            debug!("Rejecting drop of {} on stale node {}", payload, target);
            return None;
        };

        let intent = TransferIntent {
            source_path: payload.path.clone(),
            filename: payload.filename.clone(),
            destination_path,
        };
        info!("Transfer requested: {}", intent);
        self.publish(&intent);
        Some(intent)
    }

    /// Like [`FileTree::drop`], for payloads exchanged as named fields.
    pub fn drop_fields(
        &mut self,
        fields: &LinkedHashMap<String, String>,
        target: NodeId,
    ) -> Option<TransferIntent> {
        let Some(payload) = DragPayload::from_fields(fields) else {
            debug!(
                "Rejecting drop with fields {:?}",
                fields.keys().collect::<Vec<_>>()
            );
            return None;
        };
        self.drop(&payload, target)
    }

    fn publish(&mut self, intent: &TransferIntent) {
        let Some(sender) = &self.transfers else {
            return;
        };
        if sender.unbounded_send(intent.clone()).is_err() {
            warn!("Transfer subscriber went away, dropping its channel");
            self.transfers = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use futures::StreamExt;
    use futures_channel::mpsc;
    use rstest::*;

    use super::*;
    use crate::listing::parse;

    const LISTING: &str = "drwxr-xr-x 2 alice staff 4096 Jan 1 12:00 docs\r\n\
                           -rw-r--r-- 1 alice staff 17 Jan 2 09:30 notes.txt\r\n";

    fn alice_tree() -> FileTree {
        let mut tree = FileTree::new("/home/alice");
        let root = tree.root();
        tree.populate(root, parse(LISTING));
        tree
    }

    fn find(tree: &FileTree, path: &str) -> NodeId {
        tree.find_node_by_path(path).unwrap()
    }

    #[test]
    fn end_to_end_drag_and_drop() {
        let mut tree = alice_tree();
        let (sender, mut receiver) = mpsc::unbounded();
        tree.subscribe_transfers(sender);
        let root = tree.root();

        let children = tree.children(root).to_vec();
        assert_eq!(children.len(), 2);
        let docs = children[0];
        let notes = children[1];
        assert_eq!(tree.kind(docs), Some(NodeKind::Directory));
        assert_eq!(tree.children(docs).len(), 1);
        assert_eq!(
            tree.kind(tree.children(docs)[0]),
            Some(NodeKind::Placeholder)
        );
        assert_eq!(tree.kind(notes), Some(NodeKind::File));
        assert_eq!(
            tree.absolute_path(notes).as_deref(),
            Some("/home/alice/notes.txt")
        );

        let payload = tree.begin_drag(notes).unwrap();
        let intent = tree.drop(&payload, docs).unwrap();

        let expected = TransferIntent {
            source_path: "/home/alice".to_string(),
            filename: "notes.txt".to_string(),
            destination_path: "/home/alice/docs".to_string(),
        };
        assert_eq!(intent, expected);
        drop(tree);
        let published = futures::executor::block_on(receiver.next());
        assert_eq!(published, Some(expected));
    }

    #[test]
    fn drag_payload_names_containing_directory() {
        let tree = alice_tree();

        let payload = tree.begin_drag(find(&tree, "/home/alice/notes.txt")).unwrap();

        assert_eq!(payload.path, "/home/alice");
        assert_eq!(payload.filename, "notes.txt");
    }

    #[rstest]
    #[case::root("/home/alice")]
    #[case::directory("/home/alice/docs")]
    fn directories_cannot_be_dragged(#[case] path: &str) {
        let tree = alice_tree();
        assert_eq!(tree.begin_drag(find(&tree, path)), None);
    }

    #[test]
    fn placeholders_cannot_be_dragged() {
        let tree = alice_tree();
        let docs = find(&tree, "/home/alice/docs");
        let placeholder = tree.children(docs)[0];

        assert_eq!(tree.begin_drag(placeholder), None);
    }

    #[test]
    fn dropping_on_a_file_targets_its_directory() {
        let mut tree = alice_tree();
        let docs = find(&tree, "/home/alice/docs");
        tree.populate(docs, parse("-rw-r--r-- 1 alice staff 3 Jan 3 10:00 old.txt\r\n"));
        let payload = tree.begin_drag(find(&tree, "/home/alice/notes.txt")).unwrap();

        let intent = tree
            .drop(&payload, find(&tree, "/home/alice/docs/old.txt"))
            .unwrap();

        assert_eq!(intent.destination_path, "/home/alice/docs");
    }

    #[test]
    fn dropping_on_a_stale_node_is_rejected() {
        let mut tree = alice_tree();
        let (sender, mut receiver) = mpsc::unbounded();
        tree.subscribe_transfers(sender);
        let payload = tree.begin_drag(find(&tree, "/home/alice/notes.txt")).unwrap();
        let docs = find(&tree, "/home/alice/docs");
        let root = tree.root();
        tree.populate(root, parse("-rw-r--r-- 1 alice staff 1 Jan 1 00:00 other\r\n"));

        assert_eq!(tree.drop(&payload, docs), None);
        drop(tree);
        assert_eq!(futures::executor::block_on(receiver.next()), None);
    }

    #[test]
    fn payload_fields_round_trip() {
        let mut tree = alice_tree();
        let payload = tree.begin_drag(find(&tree, "/home/alice/notes.txt")).unwrap();
        let fields = payload.to_fields();

        assert_eq!(
            fields.keys().map(String::as_str).collect::<Vec<_>>(),
            DragPayload::FIELDS
        );
        let docs = find(&tree, "/home/alice/docs");
        let intent = tree.drop_fields(&fields, docs).unwrap();
        assert_eq!(intent.filename, "notes.txt");
    }

    #[rstest]
    #[case::empty(&[])]
    #[case::path_only(&[("path", "/home/alice")])]
    #[case::filename_only(&[("filename", "notes.txt")])]
    #[case::wrong_names(&[("src", "/home/alice"), ("name", "notes.txt")])]
    fn incomplete_payloads_are_rejected(#[case] pairs: &[(&str, &str)]) {
        let mut tree = alice_tree();
        let (sender, mut receiver) = mpsc::unbounded();
        tree.subscribe_transfers(sender);
        let fields = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect::<LinkedHashMap<_, _>>();
        let docs = find(&tree, "/home/alice/docs");

        assert_eq!(tree.drop_fields(&fields, docs), None);
        drop(tree);
        assert_eq!(futures::executor::block_on(receiver.next()), None);
    }

    #[test]
    fn drop_survives_a_closed_subscriber() {
        let mut tree = alice_tree();
        let (sender, receiver) = mpsc::unbounded();
        tree.subscribe_transfers(sender);
        drop(receiver);
        let payload = tree.begin_drag(find(&tree, "/home/alice/notes.txt")).unwrap();
        let docs = find(&tree, "/home/alice/docs");

        assert!(tree.drop(&payload, docs).is_some());
        assert!(tree.transfers.is_none());
    }
}
