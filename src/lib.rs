//! Parsing and structural editing of simple arithmetic expressions.
//!
//! Expressions made of `+`, `*`, parentheses, single-letter variables and numerals are
//! [parsed](parse) into a flattened [ExpressionTree]. The tree supports the operations needed by a
//! drag-and-drop expression editor: deep copies, enumerating the positions a node could be dragged
//! to among its siblings, and converting the tree in place to a chosen arrangement. See
//! [editor::DragSession] for how these fit together.

#![no_std]
extern crate alloc;

pub mod error;
pub mod node;
pub mod nav;
pub mod editor;
pub mod render;
pub mod renderers;

#[cfg(test)]
mod tests;

pub use crate::{
    error::{NodeError, ParseError},
    node::{parse, ExpressionTree, Node, NodeId, NodeKind, NodeTag, Operator},
};

pub const VERSION: &'static str = env!("CARGO_PKG_VERSION");
