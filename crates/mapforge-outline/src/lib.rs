//! Sortable hierarchical outline model for placed world objects.
//!
//! This crate presents an arbitrary-depth set of placements (objects placed
//! in a game world by a map editor) as a sortable, displayable list. It
//! separates the data model from display logic, so a tree view can render
//! rows and headers without knowing how the hierarchy is stored. This
//! enables:
//!
//! - One linkage pass per refresh, explicit structure afterwards
//! - Multi-key sorting that respects the hierarchy
//! - Consistent id-based lookup for selection and focus callbacks
//!
//! # Core Types
//!
//! - `PlacementElement`: one node — identity, depth, display fields, payload
//! - `OutlineTree`: owns the collection and all parent/child linkage
//! - `SortKey`: one `(column, direction)` sort criterion
//! - `OutlineColumn`: the declared sortable columns
//! - `OutlineSignals`: change notifications for a presentation layer
//!
//! # Example
//!
//! ```
//! use mapforge_outline::{OutlineTree, PlacementRecord, SortKey};
//!
//! // Ingest the domain source's records (scene scan order)
//! let mut tree = OutlineTree::from_records(vec![
//!     PlacementRecord {
//!         name: "water_tower".into(),
//!         source_tag: "Rust".into(),
//!         category: "Industrial".into(),
//!         numeric_id: 182340471,
//!         payload: (),
//!     },
//!     PlacementRecord {
//!         name: "barricade".into(),
//!         source_tag: "Rust".into(),
//!         category: "Military".into(),
//!         numeric_id: 2057881102,
//!         payload: (),
//!     },
//! ])?;
//!
//! // The user clicked the Name header: sort ascending, then re-flatten
//! tree.sort(&[SortKey::ascending(0)])?;
//! for id in tree.flatten() {
//!     if let Some(element) = tree.find(id) {
//!         println!("{}", element.fields().composite_name());
//!     }
//! }
//! # Ok::<(), mapforge_outline::OutlineError>(())
//! ```
//!
//! # Architecture Overview
//!
//! ```text
//! domain records ──> elements ──> OutlineTree (linkage) ──> flatten ──> rows
//!                                      ^                      │
//!                                      └── sort (per sibling group)
//! ```
//!
//! The presentation layer supplies sort keys in response to header clicks,
//! listens on [`OutlineSignals`] for layout changes, and resolves selected
//! ids back to payloads via [`OutlineTree::find`]. Everything is
//! synchronous and single-threaded; callers serialize access.

mod element;
mod error;
mod flatten;
mod record;
mod signals;
mod sort;
mod tree;

pub use element::{CellValue, ElementId, OutlineColumn, PlacementElement, PlacementFields};
pub use error::{ConfigurationError, OutlineError, Result, StructureError};
pub use record::{PlacementRecord, elements_from_records};
pub use signals::OutlineSignals;
pub use sort::SortKey;
pub use tree::OutlineTree;
