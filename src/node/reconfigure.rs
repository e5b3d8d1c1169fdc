//! Enumerates the sibling orders which a single node can be dragged into.

use alloc::{collections::BTreeMap, vec, vec::Vec};

use log::debug;

use crate::error::NodeError;

use super::expression::{ExpressionTree, NodeId};

impl ExpressionTree {
    /// Returns every arrangement of `id`'s parent which can be reached by moving `id` past its
    /// siblings one adjacent swap at a time, keyed by the position `id` ends up in.
    ///
    /// Only the position of `id` changes; its siblings keep their relative order, so a node with
    /// `k` siblings (itself included) produces exactly `k` arrangements, one of which is the
    /// current order. Each arrangement is an independent deep copy of the parent, so exploring
    /// them never modifies this tree.
    ///
    /// Returns [NodeError::NoParent] if `id` is the root.
    pub fn other_possible_configurations(&self, id: NodeId) -> Result<BTreeMap<usize, ExpressionTree>, NodeError> {
        let parent = self.parent(id).ok_or(NodeError::NoParent)?;
        let siblings = self.children(parent);
        let index = self.position_in_parent(id).ok_or(NodeError::NoParent)?;

        let mut orders = vec![siblings.to_vec()];

        // Walk right until we reach the end...
        let mut current = siblings.to_vec();
        for i in index..siblings.len() - 1 {
            current.swap(i, i + 1);
            orders.push(current.clone());
        }

        // ...then walk left from the original position until we reach the start
        let mut current = siblings.to_vec();
        for i in (1..=index).rev() {
            current.swap(i, i - 1);
            orders.push(current.clone());
        }

        debug!("{} configurations for node at position {}", orders.len(), index);

        let mut result = BTreeMap::new();
        for order in orders {
            let position = order.iter().position(|c| *c == id)
                .ok_or(NodeError::MismatchedChildren)?;
            result.insert(position, self.copy_with_children(parent, &order));
        }
        Ok(result)
    }

    /// Deep copies `parent` into a new tree, but with its children copied in the given order.
    fn copy_with_children(&self, parent: NodeId, order: &[NodeId]) -> ExpressionTree {
        let mut copy = ExpressionTree::empty(self.next_tag());
        let root = copy.new_like(self.node(parent));

        let children: Vec<NodeId> = order.iter()
            .map(|&child| self.copy_subtree_into(child, &mut copy))
            .collect();
        copy.set_children(root, children)
            .expect("parent of a node cannot be a literal");

        copy.set_root(root);
        copy
    }
}
