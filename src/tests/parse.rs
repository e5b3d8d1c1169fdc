use alloc::string::ToString;
use core::str::FromStr;

use pretty_assertions::assert_eq;
use rust_decimal::Decimal;

use crate::{node::{NodeKind, Operator}, parse, tests::util::{assert_parents_consistent, assert_tags_unique, init_test_logger}};

#[test]
fn test_parse_literals() {
    for text in ["x", "a", "z", "0", "7", "123", "3.14", "10.05"] {
        let tree = parse!(text);
        let root = tree.root();

        assert_eq!(tree.node(root).kind(), &NodeKind::Literal(text.into()));
        assert!(tree.children(root).is_empty());
        assert_eq!(tree.parent(root), None);
        assert_eq!(tree.len(), 1);
    }
}

#[test]
fn test_parse_sum_of_products() {
    init_test_logger();

    let tree = parse!("2*x+3*y");
    assert_eq!(
        dump!(tree),
        [
            "+",
            "  *",
            "    2",
            "    x",
            "  *",
            "    3",
            "    y",
        ]
    );
    assert_eq!(tree.node(tree.root()).operator(), Some(Operator::Add));
    assert_parents_consistent(&tree);
}

#[test]
fn test_parse_flattens_chains() {
    init_test_logger();

    // The left-leaning parse produces nested additions, which must end up as one node with four
    // children. The parentheses are kept as their own node rather than merged upwards.
    let tree = parse!("2*x+3*y+4*z+(7+6*z)");
    assert_eq!(
        dump!(tree),
        [
            "+",
            "  *",
            "    2",
            "    x",
            "  *",
            "    3",
            "    y",
            "  *",
            "    4",
            "    z",
            "  ()",
            "    +",
            "      7",
            "      *",
            "        6",
            "        z",
        ]
    );
    assert_eq!(tree.children(tree.root()).len(), 4);
    assert_parents_consistent(&tree);
    assert_tags_unique(&tree);
}

#[test]
fn test_parse_precedence() {
    assert_eq!(
        dump!(parse!("a+b*c")),
        ["+", "  a", "  *", "    b", "    c"]
    );

    assert_eq!(
        dump!(parse!("a*b+c")),
        ["+", "  *", "    a", "    b", "  c"]
    );

    assert_eq!(
        dump!(parse!("(a+b)*c")),
        ["*", "  ()", "    +", "      a", "      b", "  c"]
    );

    // The operator after a leading parenthetical group does not take priority over a later `+`
    assert_eq!(
        dump!(parse!("(a)*b+c")),
        ["+", "  *", "    ()", "      a", "    b", "  c"]
    );

    assert_eq!(
        dump!(parse!("a*b*c*d")),
        ["*", "  a", "  b", "  c", "  d"]
    );
}

#[test]
fn test_parse_parentheses() {
    let tree = parse!("(a)");
    assert_eq!(dump!(tree), ["()", "  a"]);
    assert_eq!(tree.node(tree.root()).operator(), Some(Operator::Parentheses));

    // Parentheses are never merged into each other
    assert_eq!(dump!(parse!("((a))")), ["()", "  ()", "    a"]);

    // A parenthetical group can be an operand of either operator
    assert_eq!(
        dump!(parse!("(a+b)+(c)")),
        ["+", "  ()", "    +", "      a", "      b", "  ()", "    c"]
    );
    assert_eq!(
        dump!(parse!("(a)*(b)")),
        ["*", "  ()", "    a", "  ()", "    b"]
    );
}

#[test]
fn test_parse_ignores_spaces() {
    assert_eq!(
        dump!(parse!(" 2 * x + 3 *y ")),
        dump!(parse!("2*x+3*y"))
    );
}

#[test]
fn test_parse_errors() {
    init_test_logger();

    for text in [
        "", " ", "2+", "+2", "2++3", "2+*3", "(2+3", "2+3)", ")(", "()", "a$b", "ab", "2x",
        "A", "2-3", "2/3", "2.", ".5", "1.2.3", "(a)(b)", "a+()",
        "a\t+b", "a\n+b", "\t",
    ] {
        assert!(parse(text).is_err(), "expected {:?} to fail", text);
    }
}

#[test]
fn test_parse_error_text() {
    let err = parse(" 2 + ").unwrap_err();
    assert_eq!(err.text, "2+");
    assert_eq!(err.to_string(), "cannot parse expression: 2+");
}

#[test]
fn test_numeric_value() {
    let tree = parse!("3.25");
    assert_eq!(tree.numeric_value(tree.root()), Some(Decimal::from_str("3.25").unwrap()));

    let tree = parse!("x+12");
    let children = tree.children(tree.root());
    assert_eq!(tree.numeric_value(children[0]), None);
    assert_eq!(tree.numeric_value(children[1]), Some(Decimal::from(12)));
    assert_eq!(tree.numeric_value(tree.root()), None);
}
