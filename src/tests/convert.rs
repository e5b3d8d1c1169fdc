use pretty_assertions::assert_eq;

use crate::{error::NodeError, tests::util::{assert_parents_consistent, init_test_logger}};

#[test]
fn test_convert_to_configuration() {
    init_test_logger();

    let mut tree = parse!("a+b+c");
    let root = tree.root();
    let [a, b, c] = [0, 1, 2].map(|i| tree.children(root)[i]);

    let configs = tree.other_possible_configurations(b).unwrap();
    let target = &configs[&2];
    tree.convert_to(root, target, target.root()).unwrap();

    // Same node objects, new order
    assert_eq!(tree.children(root), [a, c, b]);
    assert_eq!(render!(tree), "a+c+b");
    assert_eq!(tree.len(), 4);
    assert_parents_consistent(&tree);
}

#[test]
fn test_convert_to_recurses() {
    let mut tree = parse!("x*y+z");
    let root = tree.root();
    let [product, z] = [0, 1].map(|i| tree.children(root)[i]);
    let [x, y] = [0, 1].map(|i| tree.children(product)[i]);

    // Rearrange a copy at both levels
    let mut target = tree.deep_copy(root);
    let target_root = target.root();
    let mut top = target.children(target_root).to_vec();
    top.reverse();
    target.set_children(target_root, top).unwrap();
    let target_product = target.children(target_root)[1];
    let mut inner = target.children(target_product).to_vec();
    inner.reverse();
    target.set_children(target_product, inner).unwrap();
    assert_eq!(render!(target), "z+y*x");

    tree.convert_to(root, &target, target_root).unwrap();

    assert_eq!(render!(tree), "z+y*x");
    assert_eq!(tree.children(root), [z, product]);
    assert_eq!(tree.children(product), [y, x]);
    assert_parents_consistent(&tree);
}

#[test]
fn test_convert_to_distinguishes_identical_names() {
    let mut tree = parse!("x+x+y");
    let root = tree.root();
    let [first_x, second_x, y] = [0, 1, 2].map(|i| tree.children(root)[i]);

    // Move the first `x` to the end
    let configs = tree.other_possible_configurations(first_x).unwrap();
    let target = &configs[&2];
    tree.convert_to(root, target, target.root()).unwrap();

    assert_eq!(tree.children(root), [second_x, y, first_x]);
}

#[test]
fn test_convert_to_nested_subtree() {
    let mut tree = parse!("2*x+3*y+4*z+(7+6*z)");
    let group = tree.children(tree.root())[3];
    let sum = tree.children(group)[0];
    let seven = tree.children(sum)[0];

    let configs = tree.other_possible_configurations(seven).unwrap();
    let target = &configs[&1];
    tree.convert_to(sum, target, target.root()).unwrap();

    assert_eq!(render!(tree), "2*x+3*y+4*z+(6*z+7)");
    assert_eq!(tree.children(sum)[1], seven);
    assert_parents_consistent(&tree);
}

#[test]
fn test_convert_to_mismatch() {
    let mut tree = parse!("a+b");
    let root = tree.root();

    let other = parse!("a+c");
    assert_eq!(
        tree.convert_to(root, &other, other.root()),
        Err(NodeError::MismatchedChildren)
    );

    let other = parse!("a+b+c");
    assert_eq!(
        tree.convert_to(root, &other, other.root()),
        Err(NodeError::MismatchedChildren)
    );

    let other = parse!("a*b");
    assert_eq!(
        tree.convert_to(root, &other, other.root()),
        Err(NodeError::MismatchedChildren)
    );

    assert_eq!(render!(tree), "a+b");
}

#[test]
fn test_convert_to_mismatch_leaves_tree_unchanged() {
    let mut tree = parse!("a*b+c");
    let root = tree.root();

    // A reordered copy where one grandchild has been swapped for a different node with the same
    // name. The top level matches, but the product does not.
    let mut target = tree.deep_copy(root);
    let target_root = target.root();
    let mut top = target.children(target_root).to_vec();
    top.reverse();
    target.set_children(target_root, top).unwrap();
    let target_product = target.children(target_root)[1];
    let impostor = target.new_literal("b");
    let first = target.children(target_product)[0];
    target.set_children(target_product, alloc::vec![first, impostor]).unwrap();

    assert_eq!(
        tree.convert_to(root, &target, target_root),
        Err(NodeError::MismatchedChildren)
    );
    assert_eq!(render!(tree), "a*b+c");
    assert_parents_consistent(&tree);
}
