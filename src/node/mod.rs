//! The expression tree, and the structural operations which can be performed on it.
//!
//! Trees are built by [parsing](parse) a string, which produces a [flattened](ExpressionTree::flatten)
//! tree of [literal](NodeKind::Literal) and [compound](NodeKind::Compound) nodes. An editor can
//! then let the user rearrange the tree: it takes a [deep copy](ExpressionTree::deep_copy) of the
//! node being moved as a preview, asks for the
//! [arrangements it could move into](ExpressionTree::other_possible_configurations), and applies
//! the chosen one to the live tree with [convert_to](ExpressionTree::convert_to).

mod expression;
pub use expression::*;

mod parser;
pub use parser::*;

mod flatten;
mod copy;
mod reconfigure;
mod convert;

mod dump;
pub use dump::INDENT;
