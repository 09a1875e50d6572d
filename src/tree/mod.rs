//! The lazily loaded listing tree.
//!
//! A [`FileTree`] starts as a single root row named after a remote path. Each
//! directory row is populated from a parsed listing when the user expands it;
//! until then it carries one placeholder child so it still looks expandable.

mod dnd;
mod file_tree;
mod header;
mod node;
mod path;

pub use dnd::{DragPayload, TransferIntent};
pub use file_tree::{EmptyListingPolicy, FileTree};
pub use header::Header;
pub use node::{LoadState, Node, NodeId, NodeKind};
