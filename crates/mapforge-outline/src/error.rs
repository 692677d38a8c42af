//! Error types for the placement outline.

use crate::element::ElementId;

/// Result type alias for outline operations.
pub type Result<T> = std::result::Result<T, OutlineError>;

/// Malformed input to [`OutlineTree::build`](crate::OutlineTree::build).
///
/// None of these are recoverable by the model; the caller must reject or
/// repair the element set before retrying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StructureError {
    /// The input contains no synthetic root element (id -1, depth -1).
    #[error("input has no root element (id -1, depth -1)")]
    MissingRoot,

    /// A root element exists but is not the first element of the input.
    ///
    /// The depth walk links every element to the most recent shallower one,
    /// so nothing preceding the root could ever be linked.
    #[error("root element must be first in the input")]
    RootNotFirst,

    /// More than one element claims to be the root.
    #[error("duplicate root element")]
    DuplicateRoot,

    /// Two elements share the same id.
    #[error("duplicate element id {id}")]
    DuplicateId { id: ElementId },

    /// A non-root element has a negative depth.
    #[error("element {id} has invalid depth {depth}")]
    InvalidDepth { id: ElementId, depth: i32 },

    /// An element's depth exceeds its predecessor's depth by more than one,
    /// leaving it with no valid parent.
    #[error("element {id} at depth {depth} has no valid parent")]
    DepthJump { id: ElementId, depth: i32 },
}

/// A sort request referencing a column outside the declared column set.
///
/// This is a caller bug; the request is rejected before any reordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    /// The sort key's column index is not a sortable column.
    #[error("unknown sort column {column} (outline has {count} columns)")]
    UnknownColumn { column: usize, count: usize },
}

/// The umbrella error type for outline operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum OutlineError {
    /// Malformed element input.
    #[error("structure error: {0}")]
    Structure(#[from] StructureError),

    /// Invalid sort configuration.
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),
}
