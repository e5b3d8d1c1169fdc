use core::ops::Index;

use alloc::{vec, vec::Vec};

use crate::{error::NodeError, node::{ExpressionTree, NodeId}};

/// Describes the movements which must be taken down a node tree to reach a particular node. Each
/// entry is an index into the children of the node reached so far; an empty path is the root.
///
/// Unlike a [NodeId], a path means the same thing in a tree and in any deep copy of it, which
/// makes it useful for finding the counterpart of a node in another tree.
#[derive(PartialEq, Eq, Debug, Clone, Default)]
pub struct NodePath {
    path: Vec<usize>,
}

impl NodePath {
    pub fn new(path: Vec<usize>) -> Self { Self { path } }

    /// Returns true if this path refers to the root of the tree.
    pub fn root(&self) -> bool {
        self.path.is_empty()
    }

    /// The number of steps down the tree this path takes.
    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Removes n entries from this path.
    pub fn pop(&mut self, n: usize) {
        for _ in 0..n {
            self.path.pop();
        }
    }

    /// Adds index to this path.
    pub fn push(&mut self, index: usize) {
        self.path.push(index);
    }

    /// Adds n to the final entry of this path, moving it between siblings. Does nothing on a
    /// root path.
    pub fn offset(&mut self, n: isize) {
        if let Some(last) = self.path.last_mut() {
            *last = (*last as isize + n) as usize;
        }
    }

    /// The final entry of this path, which is the position of the node among its siblings.
    pub fn last(&self) -> Option<usize> {
        self.path.last().copied()
    }

    pub fn indices(&self) -> &[usize] {
        &self.path
    }
}

impl Index<usize> for NodePath {
    type Output = usize;

    fn index(&self, index: usize) -> &Self::Output {
        &self.path[index]
    }
}

impl ExpressionTree {
    /// Returns the path from the root of this tree to the given node.
    pub fn path_to(&self, id: NodeId) -> NodePath {
        let mut path = vec![];
        let mut current = id;
        while let Some(index) = self.position_in_parent(current) {
            path.push(index);
            current = self.parent(current).expect("positioned node has no parent");
        }
        path.reverse();
        NodePath::new(path)
    }

    /// Follows a path down from the root of this tree, and returns the node it leads to.
    pub fn node_at_path(&self, path: &NodePath) -> Result<NodeId, NodeError> {
        path.indices().iter().try_fold(self.root(), |current, &index| {
            self.children(current).get(index).copied().ok_or(NodeError::InvalidPath)
        })
    }

    /// Modifies the given path to select the next sibling to the right, if there is one.
    pub fn move_right(&self, path: &mut NodePath) -> Result<(), NodeError> {
        let current = self.node_at_path(path)?;
        if let Some(parent) = self.parent(current) {
            // Are we at the end of our siblings? If so, there's nowhere to go
            if path.last() < Some(self.children(parent).len() - 1) {
                path.offset(1);
            }
        }
        Ok(())
    }

    /// Modifies the given path to select the next sibling to the left, if there is one.
    pub fn move_left(&self, path: &mut NodePath) -> Result<(), NodeError> {
        self.node_at_path(path)?;
        if path.last() > Some(0) {
            path.offset(-1);
        }
        Ok(())
    }

    /// Modifies the given path to select the first child of the current node, if it has any.
    pub fn move_down(&self, path: &mut NodePath) -> Result<(), NodeError> {
        let current = self.node_at_path(path)?;
        if !self.children(current).is_empty() {
            path.push(0);
        }
        Ok(())
    }

    /// Modifies the given path to select the parent of the current node. Does nothing at the
    /// root.
    pub fn move_up(&self, path: &mut NodePath) -> Result<(), NodeError> {
        self.node_at_path(path)?;
        path.pop(1);
        Ok(())
    }
}
