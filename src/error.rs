use thiserror::Error;

use crate::forest::NodeId;

/// Everything that can go wrong while mutating a [`Forest`][crate::Forest].
///
/// Absence is not an error in this crate: a missing root, a missing node or a value that isn't
/// in the tree all come back as `None`. `TreeError` is reserved for requests the forest could
/// not honour.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// The handle points at a slot that was released (or never belonged to this forest).
    #[error("node {0:?} is not live in this forest")]
    StaleNode(NodeId),
    /// A rotation was asked to promote a child the node doesn't have.
    #[error("node {0:?} has no child to rotate into its place")]
    MissingPivot(NodeId),
    /// The forest's internal bookkeeping doesn't add up, e.g. after deserializing data that
    /// wasn't produced by this crate.
    #[error("forest data is inconsistent: {0}")]
    InvalidForest(&'static str),
    /// A BST insert found the value already in the tree.
    #[error("value {0} is already in the tree")]
    Duplicate(i32),
    /// The forest can't hold another node.
    #[error("forest is full ({limit} nodes)")]
    CapacityExceeded {
        /// The number of live nodes the forest was allowed to hold.
        limit: usize,
    },
    /// Building a BST from a slice stopped at the first occurrence of `value`.
    #[error("building tree stopped at index {index} (value {value})")]
    BuildAborted {
        /// Position of the offending element.
        index: usize,
        /// The element that could not be inserted.
        value: i32,
        /// Why the insert failed.
        #[source]
        source: Box<TreeError>,
    },
}

/// Shorthand used throughout the crate.
pub type Result<T, E = TreeError> = std::result::Result<T, E>;
