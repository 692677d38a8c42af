//! Hierarchical placement tree.
//!
//! `OutlineTree` owns the full element collection and all parent/child
//! linkage. It is built in one pass from a depth-annotated element list (the
//! form the domain source delivers), after which structure is explicit:
//! every node holds its parent id and an ordered child id list, and lookup
//! by identity is O(1).

use std::collections::HashMap;

use crate::element::{ElementId, PlacementElement};
use crate::error::StructureError;
use crate::flatten;
use crate::signals::OutlineSignals;

/// A linked node: the element plus its structural references.
pub(crate) struct Node<P> {
    pub(crate) element: PlacementElement<P>,
    pub(crate) parent: ElementId,
    pub(crate) children: Vec<ElementId>,
}

/// A sortable hierarchy of placed objects.
///
/// The tree is rebuilt wholesale from the current set of domain objects on
/// every refresh cycle; elements never survive across refreshes. Between
/// refreshes the sibling order may be changed by
/// [`sort`](OutlineTree::sort), after which the flattened view must be
/// regenerated via [`flatten`](OutlineTree::flatten).
///
/// The tree is not thread-safe; callers serialize access (it is driven from
/// a single UI event loop).
///
/// # Example
///
/// ```
/// use mapforge_outline::{ElementId, OutlineTree, PlacementElement, PlacementFields};
///
/// let elements = vec![
///     PlacementElement::root(),
///     PlacementElement::new(
///         ElementId(0),
///         0,
///         PlacementFields::new("water_tower", "Rust", "Industrial", 182340471),
///         (),
///     ),
/// ];
///
/// let tree = OutlineTree::build(elements)?;
/// assert_eq!(tree.len(), 1);
/// assert!(tree.find(ElementId(0)).is_some());
/// # Ok::<(), mapforge_outline::StructureError>(())
/// ```
pub struct OutlineTree<P> {
    pub(crate) root: PlacementElement<P>,
    pub(crate) root_children: Vec<ElementId>,
    pub(crate) nodes: HashMap<ElementId, Node<P>>,
    pub(crate) signals: OutlineSignals,
}

impl<P> OutlineTree<P> {
    /// Builds a tree from a depth-annotated element list.
    ///
    /// The input must start with the synthetic root (id -1, depth -1),
    /// followed by the placements in display order. Linkage is derived from
    /// depth: an element at depth `d` becomes the last child of the most
    /// recently seen element at depth `d - 1`.
    pub fn build(elements: Vec<PlacementElement<P>>) -> Result<Self, StructureError> {
        let mut tree = Self {
            root: PlacementElement::root(),
            root_children: Vec::new(),
            nodes: HashMap::new(),
            signals: OutlineSignals::new(),
        };
        Self::link(
            &mut tree.root,
            &mut tree.root_children,
            &mut tree.nodes,
            elements,
        )?;
        tracing::debug!(
            target: "mapforge_outline::tree",
            placements = tree.nodes.len(),
            "built placement tree"
        );
        Ok(tree)
    }

    /// Replaces the whole element collection in place.
    ///
    /// Unlike [`build`](Self::build), this keeps the model handle (and any
    /// signal connections on it) alive across refresh cycles. The reset
    /// signal pair brackets the swap.
    ///
    /// On malformed input the tree is left holding only the synthetic root
    /// and the error is returned.
    pub fn rebuild(&mut self, elements: Vec<PlacementElement<P>>) -> Result<(), StructureError> {
        self.signals.model_about_to_reset.emit(());

        self.root = PlacementElement::root();
        self.root_children.clear();
        self.nodes.clear();

        let result = Self::link(
            &mut self.root,
            &mut self.root_children,
            &mut self.nodes,
            elements,
        );
        if result.is_err() {
            self.root = PlacementElement::root();
            self.root_children.clear();
            self.nodes.clear();
        }

        self.signals.model_reset.emit(());
        result
    }

    /// The single linkage pass shared by `build` and `rebuild`.
    fn link(
        root: &mut PlacementElement<P>,
        root_children: &mut Vec<ElementId>,
        nodes: &mut HashMap<ElementId, Node<P>>,
        elements: Vec<PlacementElement<P>>,
    ) -> Result<(), StructureError> {
        match elements.iter().position(|e| e.is_root()) {
            None => return Err(StructureError::MissingRoot),
            Some(0) => {}
            Some(_) => return Err(StructureError::RootNotFirst),
        }

        nodes.reserve(elements.len().saturating_sub(1));

        // ancestors[d + 1] holds the most recently linked element at depth d;
        // ancestors[0] is the root (depth -1).
        let mut ancestors: Vec<ElementId> = Vec::new();

        for (position, element) in elements.into_iter().enumerate() {
            if position == 0 {
                *root = element;
                ancestors.push(ElementId::ROOT);
                continue;
            }

            let id = element.id();
            let depth = element.depth();

            if element.is_root() {
                return Err(StructureError::DuplicateRoot);
            }
            if depth < 0 {
                return Err(StructureError::InvalidDepth { id, depth });
            }
            if id == ElementId::ROOT || nodes.contains_key(&id) {
                return Err(StructureError::DuplicateId { id });
            }

            let level = depth as usize + 1;
            let Some(&parent) = ancestors.get(level - 1) else {
                return Err(StructureError::DepthJump { id, depth });
            };

            nodes.insert(
                id,
                Node {
                    element,
                    parent,
                    children: Vec::new(),
                },
            );

            if parent == ElementId::ROOT {
                root_children.push(id);
            } else if let Some(parent_node) = nodes.get_mut(&parent) {
                parent_node.children.push(id);
            }

            ancestors.truncate(level);
            ancestors.push(id);
        }

        Ok(())
    }

    /// Looks up an element by id.
    ///
    /// `None` is the typed absence: callers decide whether a missing id is
    /// expected (a stale selection after a rebuild, for instance).
    pub fn find(&self, id: ElementId) -> Option<&PlacementElement<P>> {
        if id == ElementId::ROOT {
            Some(&self.root)
        } else {
            self.nodes.get(&id).map(|node| &node.element)
        }
    }

    /// Resolves an id to its payload, for selection and focus callbacks.
    ///
    /// `None` when the id is absent or refers to the payload-less root.
    pub fn payload(&self, id: ElementId) -> Option<&P> {
        self.find(id).and_then(|element| element.payload())
    }

    /// The synthetic root element. Always defined post-build.
    pub fn root(&self) -> &PlacementElement<P> {
        &self.root
    }

    /// The ordered children of the given element.
    ///
    /// Empty for leaves and for ids absent from the tree.
    pub fn children(&self, id: ElementId) -> &[ElementId] {
        if id == ElementId::ROOT {
            &self.root_children
        } else {
            self.nodes
                .get(&id)
                .map(|node| node.children.as_slice())
                .unwrap_or(&[])
        }
    }

    /// The parent of the given element; `None` for the root and for absent
    /// ids.
    pub fn parent_of(&self, id: ElementId) -> Option<ElementId> {
        self.nodes.get(&id).map(|node| node.parent)
    }

    /// Number of placements in the tree (the root is not counted).
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the tree holds no placements.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Flattens the tree into display order: pre-order, parents before
    /// children, siblings in current order.
    ///
    /// Pure with respect to the current tree shape; re-invoke after every
    /// structural or sort change.
    pub fn flatten(&self) -> Vec<ElementId> {
        flatten::preorder(self)
    }

    /// Like [`flatten`](Self::flatten), but resolves ids to elements.
    pub fn flatten_elements(&self) -> Vec<&PlacementElement<P>> {
        self.flatten()
            .into_iter()
            .filter_map(|id| self.find(id))
            .collect()
    }

    /// The signals this model emits.
    pub fn signals(&self) -> &OutlineSignals {
        &self.signals
    }
}
