//! Lazily loaded, drag-and-drop enabled trees of remote directory listings.
//!
//! The crate turns raw `ls -l` style listings into [`Entry`] rows, keeps them
//! in a [`FileTree`] that only grows when directories get populated, maps
//! nodes to and from absolute paths, and turns a drag of a file onto a
//! directory into a [`TransferIntent`]. It performs no I/O of its own.

pub mod ext;
pub mod listing;
pub mod tree;

pub use listing::{Column, Entry, parse};
pub use tree::{
    DragPayload, EmptyListingPolicy, FileTree, Header, LoadState, Node, NodeId, NodeKind,
    TransferIntent,
};
