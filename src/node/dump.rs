use core::fmt;

use alloc::string::String;

use super::expression::{ExpressionTree, NodeId};

/// Written once per indent level at the start of each line of a dump.
pub const INDENT: &str = "\t";

impl ExpressionTree {
    /// Produces a textual dump of the subtree rooted at `id`: one line per node, made of
    /// `indent_level` [INDENT]s followed by the node's operator or literal value. Children follow
    /// their parent, one level further in.
    ///
    /// ```text
    /// +
    ///     *
    ///         2
    ///         x
    ///     y
    /// ```
    ///
    /// This is intended for debugging; the output cannot be parsed back into a tree.
    pub fn convert_to_string(&self, id: NodeId, indent_level: usize) -> String {
        let mut result = String::new();
        self.write_dump(&mut result, id, indent_level)
            .expect("writing to a String cannot fail");
        result
    }

    fn write_dump(&self, f: &mut impl fmt::Write, id: NodeId, indent_level: usize) -> fmt::Result {
        for _ in 0..indent_level {
            f.write_str(INDENT)?;
        }
        writeln!(f, "{}", self.name(id))?;

        for &child in self.children(id) {
            self.write_dump(f, child, indent_level + 1)?;
        }
        Ok(())
    }
}

impl fmt::Display for ExpressionTree {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.write_dump(f, self.root(), 0)
    }
}
