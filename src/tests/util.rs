use alloc::{string::String, vec::Vec};

use crate::{node::{ExpressionTree, NodeId}, render::Renderer, renderers::AsciiRenderer};

macro_rules! parse {
    ($s:expr) => { crate::parse($s).unwrap() };
}

/// The tree dump as a list of lines, with each indent level shown as two spaces so expected
/// values line up in the source.
macro_rules! dump {
    ($t:expr) => { crate::tests::util::dump_lines(&$t, $t.root()) };
    ($t:expr, $id:expr) => { crate::tests::util::dump_lines(&$t, $id) };
}

macro_rules! render {
    ($t:expr, $focus:expr) => { crate::tests::util::render_line(&$t, $focus) };
    ($t:expr) => { render!($t, None) };
}

/// Builds a tree by hand, bypassing the parser. Items are literal values, or `[op; ...]` for a
/// compound node.
macro_rules! build {
    ($($x:tt)*) => { {
        let mut tree = crate::node::ExpressionTree::empty(0);
        let root = build_node!(tree; $($x)*);
        tree.set_root(root);
        tree
    } };
}

macro_rules! build_node {
    ($t:ident; [$op:ident; $($child:tt),* $(,)?]) => { {
        let node = $t.new_compound(crate::node::Operator::$op);
        $(
            let child = build_node!($t; $child);
            $t.add_subexpression(node, child).unwrap();
        )*
        node
    } };
    ($t:ident; $l:literal) => { $t.new_literal($l) };
}

pub fn init_test_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn dump_lines(tree: &ExpressionTree, id: NodeId) -> Vec<String> {
    tree.convert_to_string(id, 0)
        .lines()
        .map(|l| l.replace('\t', "  "))
        .collect()
}

pub fn render_line(tree: &ExpressionTree, focus: Option<NodeId>) -> String {
    let mut renderer = AsciiRenderer::default();
    renderer.draw_all(tree, focus);
    renderer.line
}

/// Checks that every node reachable from the root has its parent handle pointing at the node
/// which lists it as a child.
pub fn assert_parents_consistent(tree: &ExpressionTree) {
    assert_eq!(tree.parent(tree.root()), None);
    for id in tree.descendants(tree.root()) {
        for &child in tree.children(id) {
            assert_eq!(tree.parent(child), Some(id));
        }
    }
}

/// Every reachable node has a different tag.
pub fn assert_tags_unique(tree: &ExpressionTree) {
    let mut tags: Vec<_> = tree.descendants(tree.root())
        .into_iter()
        .map(|id| tree.tag(id))
        .collect();
    let count = tags.len();
    tags.sort();
    tags.dedup();
    assert_eq!(tags.len(), count);
}
