//! Sequencing of the structural operations for a drag-and-drop editor.
//!
//! An editor which lets the user drag a node between its siblings drives the tree through the
//! same steps every time:
//!
//!   1. When the user grabs a node, take a [deep copy](ExpressionTree::deep_copy) of it to show
//!      under the pointer, and compute every
//!      [position it could be dropped in](ExpressionTree::other_possible_configurations).
//!   2. While the user drags, pick whichever position is closest to the pointer. This is purely
//!      a presentation concern, so it is left to the caller.
//!   3. When the user drops the node, [convert](ExpressionTree::convert_to) the live tree to the
//!      chosen arrangement.
//!
//! [DragSession] wraps up these steps. It never holds a borrow of the live tree, so the tree can
//! still be rendered while a drag is in progress; nothing about the live tree changes until
//! [DragSession::commit] is called.

use alloc::collections::BTreeMap;

use log::debug;

use crate::{error::NodeError, nav::NodePath, node::{ExpressionTree, NodeTag}};

/// An in-progress drag of one node among its siblings.
#[derive(Debug, Clone)]
pub struct DragSession {
    parent_path: NodePath,
    original_position: usize,
    tag: NodeTag,
    preview: ExpressionTree,
    configurations: BTreeMap<usize, ExpressionTree>,
}

impl DragSession {
    /// Starts dragging the node at `path` in `tree`.
    ///
    /// Returns [NodeError::NoParent] if `path` refers to the root, since the root has no siblings
    /// to move between.
    pub fn begin(tree: &ExpressionTree, path: &NodePath) -> Result<DragSession, NodeError> {
        let selected = tree.node_at_path(path)?;
        let configurations = tree.other_possible_configurations(selected)?;

        let mut parent_path = path.clone();
        parent_path.pop(1);
        let original_position = path.last().ok_or(NodeError::NoParent)?;

        debug!("began drag of {:?} at {:?}", tree.name(selected), path);
        Ok(DragSession {
            parent_path,
            original_position,
            tag: tree.tag(selected),
            preview: tree.deep_copy(selected),
            configurations,
        })
    }

    /// A detached copy of the node being dragged, for display under the pointer.
    pub fn preview(&self) -> &ExpressionTree {
        &self.preview
    }

    /// The arrangements of the parent which the node can be dropped into, keyed by the position
    /// the node would occupy.
    pub fn configurations(&self) -> &BTreeMap<usize, ExpressionTree> {
        &self.configurations
    }

    /// The arrangement in which the node is at `position`, if that is a valid position.
    pub fn configuration(&self, position: usize) -> Option<&ExpressionTree> {
        self.configurations.get(&position)
    }

    /// The position the node was in when the drag began.
    pub fn original_position(&self) -> usize {
        self.original_position
    }

    /// The path to the parent of the node being dragged.
    pub fn parent_path(&self) -> &NodePath {
        &self.parent_path
    }

    /// Returns whichever valid position is closest to `position`. Useful for clamping a position
    /// derived from pointer coordinates.
    pub fn nearest_position(&self, position: usize) -> usize {
        let last = self.configurations.len().saturating_sub(1);
        position.min(last)
    }

    /// Drops the node at `position`, reordering the live tree to match and ending the drag.
    ///
    /// Every node in `tree` keeps its [NodeId](crate::node::NodeId). Returns the new path to the
    /// dragged node.
    pub fn commit(self, tree: &mut ExpressionTree, position: usize) -> Result<NodePath, NodeError> {
        let configuration = self.configurations.get(&position)
            .ok_or(NodeError::InvalidPath)?;
        let parent = tree.node_at_path(&self.parent_path)?;

        tree.convert_to(parent, configuration, configuration.root())?;

        let mut new_path = self.parent_path;
        new_path.push(position);

        // The dragged node must have ended up where the configuration said it would
        let moved = tree.node_at_path(&new_path)?;
        if tree.tag(moved) != self.tag {
            return Err(NodeError::MismatchedChildren);
        }

        debug!("committed drag from position {} to {}", self.original_position, position);
        Ok(new_path)
    }
}
