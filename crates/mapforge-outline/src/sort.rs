//! Multi-key sorting of sibling groups.
//!
//! Sorting is structural, not just top-level: every sibling group in the
//! tree is reordered in place, so the hierarchy itself is preserved while
//! each group follows the requested key sequence. The first key establishes
//! the primary order; each subsequent key breaks ties left by the ones
//! before it. All keys are composed into a single stable comparator, which
//! yields the same result as repeated stable sorts from the last key to the
//! first.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::element::{ElementId, OutlineColumn, PlacementElement};
use crate::error::ConfigurationError;
use crate::tree::{Node, OutlineTree};

/// One sort criterion: a header column index and a direction.
///
/// Column indices are the raw values a multi-column header reports when the
/// user changes the sort configuration; they are validated against
/// [`OutlineColumn`] before any reordering happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
    /// Header column index (see [`OutlineColumn::from_index`]).
    pub column: usize,
    /// `true` for ascending order, `false` for descending.
    pub ascending: bool,
}

impl SortKey {
    /// An ascending key on the given column.
    pub fn ascending(column: usize) -> Self {
        Self {
            column,
            ascending: true,
        }
    }

    /// A descending key on the given column.
    pub fn descending(column: usize) -> Self {
        Self {
            column,
            ascending: false,
        }
    }
}

impl<P> OutlineTree<P> {
    /// Reorders every sibling group by the given key sequence.
    ///
    /// An empty `keys` slice is a no-op. All keys are validated up front;
    /// a key referencing a column outside the declared set fails with
    /// [`ConfigurationError::UnknownColumn`] and leaves the tree untouched.
    ///
    /// The sort is stable: elements equal under all keys keep their
    /// pre-sort relative order. The layout signal pair brackets the
    /// mutation; flattened views taken before the sort are stale afterwards
    /// and must be regenerated via [`flatten`](Self::flatten).
    pub fn sort(&mut self, keys: &[SortKey]) -> Result<(), ConfigurationError> {
        if keys.is_empty() {
            return Ok(());
        }

        let mut resolved = Vec::with_capacity(keys.len());
        for key in keys {
            let Some(column) = OutlineColumn::from_index(key.column) else {
                return Err(ConfigurationError::UnknownColumn {
                    column: key.column,
                    count: OutlineColumn::COUNT,
                });
            };
            resolved.push((column, key.ascending));
        }

        tracing::debug!(target: "mapforge_outline::sort", ?keys, "sorting sibling groups");

        self.signals.layout_about_to_change.emit(());

        // Root group first, then every descendant group, via explicit stack.
        let mut group = std::mem::take(&mut self.root_children);
        sort_group(&mut group, &self.nodes, &resolved);
        let mut stack = group.clone();
        self.root_children = group;

        while let Some(id) = stack.pop() {
            let mut children = match self.nodes.get_mut(&id) {
                Some(node) => std::mem::take(&mut node.children),
                None => continue,
            };
            sort_group(&mut children, &self.nodes, &resolved);
            stack.extend(children.iter().copied());
            if let Some(node) = self.nodes.get_mut(&id) {
                node.children = children;
            }
        }

        self.signals.layout_changed.emit(());
        Ok(())
    }
}

/// Stable-sorts one sibling group with the composed comparator.
///
/// Groups of size <= 1 fall through untouched.
fn sort_group<P>(
    group: &mut [ElementId],
    nodes: &HashMap<ElementId, Node<P>>,
    keys: &[(OutlineColumn, bool)],
) {
    group.sort_by(|a, b| match (nodes.get(a), nodes.get(b)) {
        (Some(a), Some(b)) => compare(&a.element, &b.element, keys),
        _ => Ordering::Equal,
    });
}

/// Compares two elements under the key sequence: first inequality wins.
fn compare<P>(
    a: &PlacementElement<P>,
    b: &PlacementElement<P>,
    keys: &[(OutlineColumn, bool)],
) -> Ordering {
    for &(column, ascending) in keys {
        let ordering = match column {
            OutlineColumn::Name => a.fields().name.cmp(&b.fields().name),
            OutlineColumn::Type => a.fields().source_tag.cmp(&b.fields().source_tag),
            OutlineColumn::Category => a.fields().category.cmp(&b.fields().category),
            OutlineColumn::Id => a.fields().numeric_id.cmp(&b.fields().numeric_id),
        };
        let ordering = if ascending { ordering } else { ordering.reverse() };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    Ordering::Equal
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::PlacementFields;
    use parking_lot::Mutex;
    use std::sync::Arc;

    const NAME: usize = 0;
    const CATEGORY: usize = 2;
    const ID: usize = 3;

    fn element(
        id: i32,
        depth: i32,
        name: &str,
        category: &str,
        numeric_id: u32,
    ) -> PlacementElement<u32> {
        PlacementElement::new(
            ElementId(id),
            depth,
            PlacementFields::new(name, "Rust", category, numeric_id),
            id as u32,
        )
    }

    fn ids(raw: &[i32]) -> Vec<ElementId> {
        raw.iter().map(|&id| ElementId(id)).collect()
    }

    #[test]
    fn test_sort_by_name_stable() {
        // Two "Alpha" entries tie on name; stability keeps id 1 before id 2.
        let mut tree = OutlineTree::build(vec![
            PlacementElement::root(),
            element(0, 0, "Bravo", "Misc", 0),
            element(1, 0, "Alpha", "Misc", 1),
            element(2, 0, "Alpha", "Misc", 2),
        ])
        .unwrap();

        tree.sort(&[SortKey::ascending(NAME)]).unwrap();
        assert_eq!(tree.flatten(), ids(&[1, 2, 0]));
    }

    #[test]
    fn test_sort_descending() {
        let mut tree = OutlineTree::build(vec![
            PlacementElement::root(),
            element(0, 0, "Bravo", "Misc", 0),
            element(1, 0, "Alpha", "Misc", 1),
            element(2, 0, "Charlie", "Misc", 2),
        ])
        .unwrap();

        tree.sort(&[SortKey::descending(NAME)]).unwrap();
        assert_eq!(tree.flatten(), ids(&[2, 0, 1]));
    }

    #[test]
    fn test_multi_key_tie_break() {
        // Primary: category ascending. Secondary: numeric id descending —
        // directions are independent per key.
        let mut tree = OutlineTree::build(vec![
            PlacementElement::root(),
            element(0, 0, "a", "Military", 1),
            element(1, 0, "b", "Industrial", 5),
            element(2, 0, "c", "Industrial", 9),
        ])
        .unwrap();

        tree.sort(&[SortKey::ascending(CATEGORY), SortKey::descending(ID)])
            .unwrap();
        assert_eq!(tree.flatten(), ids(&[2, 1, 0]));
    }

    #[test]
    fn test_lexicographic_order_within_group() {
        // Where the primary key differs it decides; where it ties the
        // secondary key decides.
        let mut tree = OutlineTree::build(vec![
            PlacementElement::root(),
            element(0, 0, "b", "Misc", 2),
            element(1, 0, "a", "Misc", 9),
            element(2, 0, "b", "Misc", 1),
            element(3, 0, "a", "Misc", 4),
        ])
        .unwrap();

        tree.sort(&[SortKey::ascending(NAME), SortKey::ascending(ID)])
            .unwrap();
        assert_eq!(tree.flatten(), ids(&[3, 1, 2, 0]));
    }

    #[test]
    fn test_constant_key_preserves_order() {
        // Every element ties under a constant key; the stable sort must
        // leave the relative order unchanged.
        let mut tree = OutlineTree::build(vec![
            PlacementElement::root(),
            element(0, 0, "same", "Misc", 0),
            element(1, 0, "same", "Misc", 1),
            element(2, 0, "same", "Misc", 2),
        ])
        .unwrap();

        tree.sort(&[SortKey::ascending(NAME)]).unwrap();
        assert_eq!(tree.flatten(), ids(&[0, 1, 2]));
    }

    #[test]
    fn test_sort_is_structural() {
        // Nested sibling groups are sorted too, and children stay under
        // their parents.
        let mut tree = OutlineTree::build(vec![
            PlacementElement::root(),
            element(0, 0, "b", "Misc", 0),
            element(2, 1, "d", "Misc", 2),
            element(3, 1, "c", "Misc", 3),
            element(1, 0, "a", "Misc", 1),
        ])
        .unwrap();

        tree.sort(&[SortKey::ascending(NAME)]).unwrap();

        assert_eq!(tree.children(ElementId::ROOT), &[ElementId(1), ElementId(0)]);
        assert_eq!(tree.children(ElementId(0)), &[ElementId(3), ElementId(2)]);
        assert_eq!(tree.flatten(), ids(&[1, 0, 3, 2]));
    }

    #[test]
    fn test_empty_keys_no_op() {
        let mut tree = OutlineTree::build(vec![
            PlacementElement::root(),
            element(0, 0, "b", "Misc", 0),
            element(1, 0, "a", "Misc", 1),
        ])
        .unwrap();

        tree.sort(&[]).unwrap();
        assert_eq!(tree.flatten(), ids(&[0, 1]));
    }

    #[test]
    fn test_unknown_column_rejected() {
        let mut tree = OutlineTree::build(vec![
            PlacementElement::root(),
            element(0, 0, "b", "Misc", 0),
            element(1, 0, "a", "Misc", 1),
        ])
        .unwrap();

        let fired = Arc::new(Mutex::new(0));
        let fired_clone = fired.clone();
        tree.signals().layout_changed.connect(move |_| {
            *fired_clone.lock() += 1;
        });

        let result = tree.sort(&[SortKey::ascending(NAME), SortKey::ascending(7)]);

        assert_eq!(
            result.err(),
            Some(ConfigurationError::UnknownColumn { column: 7, count: 4 })
        );
        // Rejected before any reordering: order untouched, no layout signal.
        assert_eq!(tree.flatten(), ids(&[0, 1]));
        assert_eq!(*fired.lock(), 0);
    }

    #[test]
    fn test_sort_emits_layout_pair() {
        let mut tree = OutlineTree::build(vec![
            PlacementElement::root(),
            element(0, 0, "b", "Misc", 0),
            element(1, 0, "a", "Misc", 1),
        ])
        .unwrap();

        let events = Arc::new(Mutex::new(Vec::new()));

        let about = events.clone();
        tree.signals().layout_about_to_change.connect(move |_| {
            about.lock().push("about");
        });
        let done = events.clone();
        tree.signals().layout_changed.connect(move |_| {
            done.lock().push("changed");
        });

        tree.sort(&[SortKey::ascending(NAME)]).unwrap();

        assert_eq!(*events.lock(), vec!["about", "changed"]);
    }

    #[test]
    fn test_resort_after_rebuild() {
        // The refresh cycle: rebuild from source, then re-apply the active
        // sort configuration.
        let mut tree = OutlineTree::build(vec![
            PlacementElement::root(),
            element(0, 0, "b", "Misc", 0),
        ])
        .unwrap();

        tree.rebuild(vec![
            PlacementElement::root(),
            element(5, 0, "c", "Misc", 5),
            element(6, 0, "a", "Misc", 6),
        ])
        .unwrap();

        tree.sort(&[SortKey::ascending(NAME)]).unwrap();
        assert_eq!(tree.flatten(), ids(&[6, 5]));
    }
}
