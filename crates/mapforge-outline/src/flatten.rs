//! Depth-first flattening of the placement tree.
//!
//! Converts the hierarchy into the linear pre-order sequence a row-based
//! view displays. The traversal uses an explicit stack rather than
//! recursion so arbitrarily deep trees cannot overflow the call stack.

use crate::element::ElementId;
use crate::tree::OutlineTree;

/// Produces the pre-order display sequence of `tree`.
///
/// Parents come before their children, siblings keep their current order,
/// and the synthetic root is not part of the output. Children are pushed in
/// reverse so the LIFO stack pops them in sibling order.
pub(crate) fn preorder<P>(tree: &OutlineTree<P>) -> Vec<ElementId> {
    let mut rows = Vec::with_capacity(tree.len());
    let mut stack: Vec<ElementId> = Vec::new();

    for &child in tree.children(ElementId::ROOT).iter().rev() {
        stack.push(child);
    }

    while let Some(id) = stack.pop() {
        rows.push(id);
        for &child in tree.children(id).iter().rev() {
            stack.push(child);
        }
    }

    tracing::trace!(target: "mapforge_outline::tree", rows = rows.len(), "flattened placement tree");
    rows
}
