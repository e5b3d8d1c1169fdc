//! Merges chains of the same associative operator into a single node.

use alloc::vec::Vec;

use log::trace;

use super::expression::{ExpressionTree, NodeId, Operator};

impl ExpressionTree {
    /// Flattens the subtree rooted at `id` in place.
    ///
    /// Both addition and multiplication are associative, so `(1 + 2) + 3` and `1 + (2 + 3)` can
    /// both become a single `+` node over `1`, `2` and `3`. Any child with the same operator as
    /// its parent has its own children spliced into the parent at the child's position, keeping
    /// their relative order, and the now-empty child is discarded.
    ///
    /// Explicit parentheses are never merged in either direction: a `()` node is never spliced
    /// into its parent, and never absorbs its own child.
    ///
    /// Flattening is idempotent.
    pub fn flatten(&mut self, id: NodeId) {
        let operator = match self.node(id).operator() {
            Some(operator) => operator,
            None => return,
        };

        if operator.is_associative() {
            let mut merged = Vec::with_capacity(self.children(id).len());
            for child in self.children(id).to_vec() {
                self.collect_operands(child, operator, &mut merged);
            }
            // Only touch the node if something was actually merged
            if merged.as_slice() != self.children(id) {
                trace!("flattened {} node to {} children", operator, merged.len());
                self.set_children(id, merged)
                    .expect("compound node rejected children");
            }
        }

        for child in self.children(id).to_vec() {
            self.flatten(child);
        }
    }

    /// Implementation helper of `flatten`. Pushes `id` onto `operands`, unless it is a node of the
    /// given associative `operator`, in which case its children are collected instead (to any
    /// depth) and `id` itself is discarded.
    fn collect_operands(&mut self, id: NodeId, operator: Operator, operands: &mut Vec<NodeId>) {
        if self.node(id).operator() != Some(operator) {
            operands.push(id);
            return;
        }

        for grandchild in self.children(id).to_vec() {
            self.collect_operands(grandchild, operator, operands);
        }
        self.discard(id);
    }
}
