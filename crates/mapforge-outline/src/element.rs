//! Element and column types for the placement outline.
//!
//! A [`PlacementElement`] is one node of the outline: identity, nesting
//! depth, the four sortable display fields, and an opaque payload handle the
//! model never interprets.

use std::fmt;

/// Identity of one element within an outline, unique per model instance.
///
/// `-1` is reserved for the synthetic root ([`ElementId::ROOT`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub i32);

impl ElementId {
    /// The id of the synthetic root element.
    pub const ROOT: ElementId = ElementId(-1);
}

impl From<i32> for ElementId {
    fn from(id: i32) -> Self {
        ElementId(id)
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The four independently comparable display fields of a placement.
///
/// The editor renders these joined into one colon-separated label (see
/// [`composite_name`](Self::composite_name)); the sorter always compares
/// the typed fields, never the composite.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlacementFields {
    /// Display name of the placed object.
    pub name: String,
    /// Tag naming the source the object came from.
    pub source_tag: String,
    /// Category label.
    pub category: String,
    /// Numeric object id, compared numerically.
    pub numeric_id: u32,
}

impl PlacementFields {
    /// Creates a field set.
    pub fn new(
        name: impl Into<String>,
        source_tag: impl Into<String>,
        category: impl Into<String>,
        numeric_id: u32,
    ) -> Self {
        Self {
            name: name.into(),
            source_tag: source_tag.into(),
            category: category.into(),
            numeric_id,
        }
    }

    /// Renders the colon-joined `name:source:category:id` label.
    ///
    /// The composite stays splittable because `name` is sanitized of `':'`
    /// at record ingestion.
    pub fn composite_name(&self) -> String {
        format!(
            "{}:{}:{}:{}",
            self.name, self.source_tag, self.category, self.numeric_id
        )
    }
}

/// Columns of the outline, in header order.
///
/// The numeric discriminants are the column indices a multi-column header
/// reports back in its sort configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutlineColumn {
    /// Display name.
    Name = 0,
    /// Source tag.
    Type = 1,
    /// Category label.
    Category = 2,
    /// Numeric object id.
    Id = 3,
}

impl OutlineColumn {
    /// Number of columns.
    pub const COUNT: usize = 4;

    /// All columns in header order.
    pub const ALL: [OutlineColumn; Self::COUNT] = [
        OutlineColumn::Name,
        OutlineColumn::Type,
        OutlineColumn::Category,
        OutlineColumn::Id,
    ];

    /// Maps a header column index to a column.
    ///
    /// Returns `None` for indices outside the declared set.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Returns the column's index in header order.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns the header title for this column.
    pub fn title(self) -> &'static str {
        match self {
            OutlineColumn::Name => "Name",
            OutlineColumn::Type => "Type",
            OutlineColumn::Category => "Category",
            OutlineColumn::Id => "ID",
        }
    }
}

/// Value of one cell, typed the way the sorter compares it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellValue<'a> {
    /// A textual cell, compared lexicographically.
    Text(&'a str),
    /// A numeric cell, compared numerically.
    Number(u32),
}

impl fmt::Display for CellValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(text) => write!(f, "{text}"),
            CellValue::Number(n) => write!(f, "{n}"),
        }
    }
}

/// One node of the placement outline.
///
/// Elements are value-like records; parent/child linkage is owned by the
/// [`OutlineTree`](crate::OutlineTree) they are built into. The payload is
/// an opaque reference to the external domain object and is never
/// interpreted by the model. The synthetic root carries no payload.
#[derive(Debug, Clone)]
pub struct PlacementElement<P> {
    id: ElementId,
    depth: i32,
    fields: PlacementFields,
    payload: Option<P>,
}

impl<P> PlacementElement<P> {
    /// Creates an element with the given identity, nesting depth, display
    /// fields, and payload.
    pub fn new(id: ElementId, depth: i32, fields: PlacementFields, payload: P) -> Self {
        Self {
            id,
            depth,
            fields,
            payload: Some(payload),
        }
    }

    /// Creates the synthetic root element (id -1, depth -1, no payload).
    pub fn root() -> Self {
        Self {
            id: ElementId::ROOT,
            depth: -1,
            fields: PlacementFields::default(),
            payload: None,
        }
    }

    /// The element's identity.
    pub fn id(&self) -> ElementId {
        self.id
    }

    /// Nesting depth: -1 for the root, 0 for top-level placements.
    pub fn depth(&self) -> i32 {
        self.depth
    }

    /// The sortable display fields.
    pub fn fields(&self) -> &PlacementFields {
        &self.fields
    }

    /// The payload handle; `None` for the synthetic root.
    pub fn payload(&self) -> Option<&P> {
        self.payload.as_ref()
    }

    /// Whether this is the synthetic root.
    pub fn is_root(&self) -> bool {
        self.id == ElementId::ROOT && self.depth == -1
    }

    /// Returns the cell value for the given column.
    pub fn cell(&self, column: OutlineColumn) -> CellValue<'_> {
        match column {
            OutlineColumn::Name => CellValue::Text(&self.fields.name),
            OutlineColumn::Type => CellValue::Text(&self.fields.source_tag),
            OutlineColumn::Category => CellValue::Text(&self.fields.category),
            OutlineColumn::Id => CellValue::Number(self.fields.numeric_id),
        }
    }
}
