//! Reorders a tree in place to match a rearranged copy of itself.

use alloc::{collections::BTreeMap, string::String, vec, vec::Vec};

use log::debug;

use crate::error::NodeError;

use super::expression::{ExpressionTree, NodeId, NodeTag};

/// Identifies a child across a tree and its copies.
type ChildKey = (String, NodeTag);

impl ExpressionTree {
    fn child_key(&self, id: NodeId) -> ChildKey {
        (self.name(id).into(), self.tag(id))
    }

    /// Reorders the children of `id` so that they are in the same order as the children of
    /// `target_id` in `target`, then does the same for every compound child, recursively.
    ///
    /// Children are matched using their name and [tag](NodeTag), so `target` will usually be
    /// (part of) a deep copy of this tree, such as one of the
    /// [other possible configurations](ExpressionTree::other_possible_configurations). The
    /// existing child nodes are moved rather than replaced, so every [NodeId] held before the
    /// conversion is still valid and refers to the same node afterwards.
    ///
    /// Returns [NodeError::MismatchedChildren] if the two nodes, or any pair of nodes matched
    /// below them, do not have the same children. The tree is left unchanged in that case.
    pub fn convert_to(&mut self, id: NodeId, target: &ExpressionTree, target_id: NodeId) -> Result<(), NodeError> {
        let mut plan = vec![];
        self.plan_conversion(id, target, target_id, &mut plan)?;

        debug!("converting {} nodes to match target", plan.len());
        for (node, children) in plan {
            self.set_children(node, children)?;
        }
        Ok(())
    }

    /// Works out the new child order of `id` and all of its descendants, without changing
    /// anything.
    fn plan_conversion(
        &self,
        id: NodeId,
        target: &ExpressionTree,
        target_id: NodeId,
        plan: &mut Vec<(NodeId, Vec<NodeId>)>,
    ) -> Result<(), NodeError> {
        if self.name(id) != target.name(target_id) {
            return Err(NodeError::MismatchedChildren);
        }

        let children = self.children(id);
        let target_children = target.children(target_id);
        if children.len() != target_children.len() {
            return Err(NodeError::MismatchedChildren);
        }
        if children.is_empty() {
            return Ok(());
        }

        let new_indices: BTreeMap<ChildKey, usize> = target_children.iter()
            .enumerate()
            .map(|(i, &c)| (target.child_key(c), i))
            .collect();

        let mut reordered: Vec<Option<NodeId>> = vec![None; children.len()];
        for &child in children {
            let index = *new_indices.get(&self.child_key(child))
                .ok_or(NodeError::MismatchedChildren)?;
            if reordered[index].replace(child).is_some() {
                return Err(NodeError::MismatchedChildren);
            }
        }
        let reordered: Vec<NodeId> = reordered.into_iter()
            .collect::<Option<Vec<NodeId>>>()
            .ok_or(NodeError::MismatchedChildren)?;

        for (&child, &target_child) in reordered.iter().zip(target_children) {
            if !self.is_literal(child) {
                self.plan_conversion(child, target, target_child, plan)?;
            }
        }

        plan.push((id, reordered));
        Ok(())
    }
}
