use super::expression::{ExpressionTree, NodeId};

impl ExpressionTree {
    /// Returns a new tree containing a copy of the subtree rooted at `id`.
    ///
    /// The copy has the same shape, names and [tags](super::expression::NodeTag) as the original,
    /// but shares nothing with it, so either may be modified without affecting the other. The
    /// root of the copy has no parent even if `id` did.
    pub fn deep_copy(&self, id: NodeId) -> ExpressionTree {
        let mut copy = ExpressionTree::empty(self.next_tag());
        let root = self.copy_subtree_into(id, &mut copy);
        copy.set_root(root);
        copy
    }

    /// Copies the subtree rooted at `id` into `destination`, returning the detached root of the
    /// copy.
    pub(crate) fn copy_subtree_into(&self, id: NodeId, destination: &mut ExpressionTree) -> NodeId {
        let source = self.node(id);
        let copied = destination.new_like(source);
        for &child in source.children() {
            let copied_child = self.copy_subtree_into(child, destination);
            destination.add_subexpression(copied, copied_child)
                .expect("copied a child onto a literal");
        }
        copied
    }
}
