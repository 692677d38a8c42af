//! Ingestion of raw domain records into an element list.
//!
//! The domain source (the editor's scene scan) hands over one record per
//! placed object. Ingestion synthesizes the root element, assigns sequential
//! ids in scan order, and sanitizes `':'` out of names so the colon-joined
//! composite label stays splittable.

use crate::element::{ElementId, PlacementElement, PlacementFields};
use crate::error::StructureError;
use crate::tree::OutlineTree;

/// One raw record from the domain source.
#[derive(Debug, Clone)]
pub struct PlacementRecord<P> {
    /// Display name; may contain `':'`, which ingestion replaces.
    pub name: String,
    /// Tag naming the source the object came from.
    pub source_tag: String,
    /// Category label.
    pub category: String,
    /// Numeric object id.
    pub numeric_id: u32,
    /// Opaque handle to the domain object.
    pub payload: P,
}

/// Builds the element list for a flat set of placements: the synthetic root
/// first, then one depth-0 element per record with sequential ids.
pub fn elements_from_records<P>(
    records: impl IntoIterator<Item = PlacementRecord<P>>,
) -> Vec<PlacementElement<P>> {
    let mut elements = vec![PlacementElement::root()];
    for (index, record) in records.into_iter().enumerate() {
        let fields = PlacementFields::new(
            record.name.replace(':', " "),
            record.source_tag,
            record.category,
            record.numeric_id,
        );
        elements.push(PlacementElement::new(
            ElementId(index as i32),
            0,
            fields,
            record.payload,
        ));
    }
    tracing::debug!(
        target: "mapforge_outline::record",
        placements = elements.len() - 1,
        "collected placement records"
    );
    elements
}

impl<P> OutlineTree<P> {
    /// Builds a tree straight from domain records.
    ///
    /// Equivalent to [`elements_from_records`] followed by
    /// [`build`](Self::build).
    pub fn from_records(
        records: impl IntoIterator<Item = PlacementRecord<P>>,
    ) -> Result<Self, StructureError> {
        Self::build(elements_from_records(records))
    }
}
