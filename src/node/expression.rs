//! The definition of the expression tree itself.

use core::{fmt, str::FromStr};

use alloc::{string::String, vec, vec::Vec};
use rust_decimal::Decimal;

use crate::error::NodeError;

/// A handle to a node stored inside an [ExpressionTree]. Handles are only meaningful for the tree
/// which issued them.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Copy, Clone)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// The raw arena index of this handle.
    pub fn index(&self) -> usize {
        self.0
    }
}

/// A stable identity for a node. Tags are assigned when a node is created and are carried over
/// unchanged by [deep copies](ExpressionTree::deep_copy), so two textually identical nodes (like
/// both `x`s in `x+x`) can still be told apart when comparing a tree with a copy of itself.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Copy, Clone)]
pub struct NodeTag(pub(crate) u64);

/// The operator applied by a compound node.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Copy, Clone)]
pub enum Operator {
    /// An addition of all children.
    Add,

    /// A multiplication of all children.
    Multiply,

    /// An explicit set of parentheses around exactly one child.
    Parentheses,
}

impl Operator {
    /// Attempts to convert the given character to a binary `Operator`, or returns `None` if this
    /// is not possible. Parentheses are not binary operators, so are never returned.
    pub fn from_char(c: char) -> Option<Operator> {
        match c {
            '+' => Some(Operator::Add),
            '*' => Some(Operator::Multiply),
            _ => None,
        }
    }

    /// The name of this operator as it appears in a tree dump.
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Multiply => "*",
            Operator::Parentheses => "()",
        }
    }

    /// Returns true if nested uses of this operator can be merged into one node.
    pub fn is_associative(&self) -> bool {
        matches!(self, Operator::Add | Operator::Multiply)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a node is: either a leaf holding a single letter or numeral, or an operator applied to an
/// ordered list of children.
#[derive(PartialEq, Eq, Debug, Clone)]
pub enum NodeKind {
    Literal(String),
    Compound {
        operator: Operator,
        children: Vec<NodeId>,
    },
}

/// A single node in an [ExpressionTree].
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Node {
    pub(crate) kind: NodeKind,
    pub(crate) parent: Option<NodeId>,
    pub(crate) tag: NodeTag,
}

impl Node {
    /// Whether this is a literal or a compound node, along with its contents.
    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    /// The node which contains this one, or `None` if this is a root.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// The identity tag of this node, shared with its deep copies.
    pub fn tag(&self) -> NodeTag {
        self.tag
    }

    /// The literal value for a leaf, or the operator name for a compound node.
    pub fn name(&self) -> &str {
        match &self.kind {
            NodeKind::Literal(value) => value,
            NodeKind::Compound { operator, .. } => operator.as_str(),
        }
    }

    /// The ordered children of this node. Literals have none.
    pub fn children(&self) -> &[NodeId] {
        match &self.kind {
            NodeKind::Literal(_) => &[],
            NodeKind::Compound { children, .. } => children,
        }
    }

    /// The operator of a compound node, or `None` for a literal.
    pub fn operator(&self) -> Option<Operator> {
        match &self.kind {
            NodeKind::Literal(_) => None,
            NodeKind::Compound { operator, .. } => Some(*operator),
        }
    }

    /// Returns true if this is a leaf.
    pub fn is_literal(&self) -> bool {
        matches!(self.kind, NodeKind::Literal(_))
    }
}

/// An expression tree. Nodes live in an arena owned by the tree and refer to each other with
/// [NodeId] handles; each node holds a handle to its parent for upward traversal.
///
/// Trees are normally obtained from [parse](crate::parse) or by
/// [deep copying](ExpressionTree::deep_copy) part of another tree.
#[derive(Debug, Clone)]
pub struct ExpressionTree {
    nodes: Vec<Option<Node>>,
    root: NodeId,
    next_tag: u64,
}

impl ExpressionTree {
    /// A tree with no nodes. The root must be set before the tree is handed out.
    pub(crate) fn empty(next_tag: u64) -> Self {
        Self { nodes: vec![], root: NodeId(0), next_tag }
    }

    pub(crate) fn next_tag(&self) -> u64 {
        self.next_tag
    }

    fn allocate(&mut self, kind: NodeKind, tag: NodeTag) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Some(Node { kind, parent: None, tag }));
        id
    }

    fn fresh_tag(&mut self) -> NodeTag {
        let tag = NodeTag(self.next_tag);
        self.next_tag += 1;
        tag
    }

    /// Creates a detached literal node.
    pub(crate) fn new_literal(&mut self, value: impl Into<String>) -> NodeId {
        let tag = self.fresh_tag();
        self.allocate(NodeKind::Literal(value.into()), tag)
    }

    /// Creates a detached compound node with no children.
    pub(crate) fn new_compound(&mut self, operator: Operator) -> NodeId {
        let tag = self.fresh_tag();
        self.allocate(NodeKind::Compound { operator, children: vec![] }, tag)
    }

    /// Creates a detached node with the same kind of content as `source`, but no children, and
    /// keeping the given tag.
    pub(crate) fn new_like(&mut self, source: &Node) -> NodeId {
        let kind = match &source.kind {
            NodeKind::Literal(value) => NodeKind::Literal(value.clone()),
            NodeKind::Compound { operator, .. } => NodeKind::Compound {
                operator: *operator,
                children: vec![],
            },
        };
        self.allocate(kind, source.tag)
    }

    pub(crate) fn set_root(&mut self, id: NodeId) {
        self.node_mut(id).parent = None;
        self.root = id;
    }

    /// Vacates the arena slot of a node which is no longer reachable.
    pub(crate) fn discard(&mut self, id: NodeId) {
        self.nodes[id.0] = None;
    }

    /// The topmost node of this tree.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Returns the node for a handle, or `None` if the handle does not refer to a live node.
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0).and_then(|n| n.as_ref())
    }

    /// Returns the node for a handle.
    ///
    /// Panics if the handle does not refer to a live node of this tree.
    pub fn node(&self, id: NodeId) -> &Node {
        self.get(id).expect("node handle does not belong to this tree")
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        self.nodes
            .get_mut(id.0)
            .and_then(|n| n.as_mut())
            .expect("node handle does not belong to this tree")
    }

    pub fn name(&self, id: NodeId) -> &str {
        self.node(id).name()
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node(id).children()
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    pub fn tag(&self, id: NodeId) -> NodeTag {
        self.node(id).tag
    }

    pub fn is_literal(&self, id: NodeId) -> bool {
        self.node(id).is_literal()
    }

    /// The number of live nodes in this tree.
    pub fn len(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The index of this node among its parent's children, or `None` for a root.
    pub fn position_in_parent(&self, id: NodeId) -> Option<usize> {
        let parent = self.parent(id)?;
        self.children(parent).iter().position(|c| *c == id)
    }

    /// If this node is a numeric literal, returns its value.
    ///
    /// Returns `None` for variables, compound nodes, and numerals too large to be represented.
    pub fn numeric_value(&self, id: NodeId) -> Option<Decimal> {
        match &self.node(id).kind {
            NodeKind::Literal(value) if value.starts_with(|c: char| c.is_ascii_digit()) =>
                Decimal::from_str(value).ok(),
            _ => None,
        }
    }

    /// All nodes of the subtree rooted at `id`, in depth-first pre-order.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut result = vec![];
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            result.push(current);
            stack.extend(self.children(current).iter().rev());
        }
        result
    }

    /// Appends `child` to the children of `parent`, and points the child's parent handle back at
    /// `parent`.
    ///
    /// Literals cannot hold children, so this returns [NodeError::ChildOfLiteral] if `parent` is
    /// a literal. A node can only have one parent, so `child` must be detached: this returns
    /// [NodeError::AlreadyAttached] if it already has a parent, is the root, or is `parent` or one
    /// of its ancestors.
    pub fn add_subexpression(&mut self, parent: NodeId, child: NodeId) -> Result<(), NodeError> {
        if self.is_literal(parent) {
            return Err(NodeError::ChildOfLiteral);
        }
        if self.parent(child).is_some() || child == self.root || self.is_ancestor_or_self(child, parent) {
            return Err(NodeError::AlreadyAttached);
        }

        match &mut self.node_mut(parent).kind {
            NodeKind::Literal(_) => return Err(NodeError::ChildOfLiteral),
            NodeKind::Compound { children, .. } => children.push(child),
        }
        self.node_mut(child).parent = Some(parent);
        Ok(())
    }

    fn is_ancestor_or_self(&self, ancestor: NodeId, id: NodeId) -> bool {
        let mut current = Some(id);
        while let Some(node) = current {
            if node == ancestor {
                return true;
            }
            current = self.parent(node);
        }
        false
    }

    /// Replaces the entire child list of a compound node, updating the parent handles of every
    /// new child.
    pub(crate) fn set_children(&mut self, id: NodeId, new_children: Vec<NodeId>) -> Result<(), NodeError> {
        if self.is_literal(id) {
            return Err(NodeError::ChildOfLiteral);
        }

        for &child in &new_children {
            self.node_mut(child).parent = Some(id);
        }
        if let NodeKind::Compound { children, .. } = &mut self.node_mut(id).kind {
            *children = new_children;
        }
        Ok(())
    }
}
