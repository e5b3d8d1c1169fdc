//! Conversion of an expression tree into a flat sequence of glyphs, and the [Renderer] trait for
//! drawing them.
//!
//! The tree itself holds no presentation state; a renderer is expected to redraw from the tree
//! whenever it changes, such as after a [convert_to](crate::node::ExpressionTree::convert_to).

use alloc::{vec, vec::Vec};

use crate::node::{ExpressionTree, NodeId, NodeKind, Operator};

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Glyph<'a> {
    /// A variable or number.
    Literal(&'a str),

    /// A binary operator symbol, placed between two operands.
    Operator(Operator),

    LeftParenthesis,
    RightParenthesis,

    /// Marks the start of the focused node.
    FocusStart,

    /// Marks the end of the focused node.
    FocusEnd,
}

impl ExpressionTree {
    /// Lays out the subtree rooted at `id` as infix glyphs, left to right. If `focus` is within
    /// the subtree, its glyphs are surrounded by [Glyph::FocusStart] and [Glyph::FocusEnd].
    pub fn layout(&self, id: NodeId, focus: Option<NodeId>) -> Vec<Glyph<'_>> {
        let mut glyphs = vec![];
        self.layout_into(id, focus, &mut glyphs);
        glyphs
    }

    fn layout_into<'a>(&'a self, id: NodeId, focus: Option<NodeId>, glyphs: &mut Vec<Glyph<'a>>) {
        let focused = focus == Some(id);
        if focused {
            glyphs.push(Glyph::FocusStart);
        }

        match self.node(id).kind() {
            NodeKind::Literal(value) => glyphs.push(Glyph::Literal(value)),

            NodeKind::Compound { operator: Operator::Parentheses, children } => {
                glyphs.push(Glyph::LeftParenthesis);
                for &child in children {
                    self.layout_into(child, focus, glyphs);
                }
                glyphs.push(Glyph::RightParenthesis);
            },

            NodeKind::Compound { operator, children } => {
                for (i, &child) in children.iter().enumerate() {
                    if i > 0 {
                        glyphs.push(Glyph::Operator(*operator));
                    }
                    self.layout_into(child, focus, glyphs);
                }
            },
        }

        if focused {
            glyphs.push(Glyph::FocusEnd);
        }
    }
}

/// Implemented by types which can draw glyphs to some kind of surface.
pub trait Renderer {
    /// Prepares the surface for a new drawing, discarding anything drawn before.
    fn init(&mut self);

    /// Draws one glyph immediately after the previous one.
    fn draw(&mut self, glyph: Glyph);

    /// Initialises the surface and draws an entire tree onto it, optionally highlighting one
    /// node.
    fn draw_all(&mut self, tree: &ExpressionTree, focus: Option<NodeId>) {
        self.init();
        for glyph in tree.layout(tree.root(), focus) {
            self.draw(glyph);
        }
    }
}
