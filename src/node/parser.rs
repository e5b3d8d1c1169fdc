use alloc::{collections::BTreeMap, string::String};
use core::ops::Range;

use log::{debug, trace};

use crate::error::ParseError;

use super::expression::{ExpressionTree, NodeId, Operator};

/// Parses the given string into a flattened [ExpressionTree].
///
/// All spaces are removed before parsing; any other whitespace is invalid. The accepted grammar is:
///
/// ```text
/// E := A
/// A := M ('+' M)*
/// M := X ('*' X)*
/// X := '(' E ')' | L
/// L := [0-9]+ | [0-9]+ '.' [0-9]+ | [a-z]
/// ```
///
/// Chains of the same operator become one wide node, so `a+b+c` is a single `+` node with three
/// children. Explicit parentheses are kept as a `()` node with one child.
pub fn parse(text: &str) -> Result<ExpressionTree, ParseError> {
    let stripped: String = text.chars().filter(|c| *c != ' ').collect();
    debug!("parsing {:?}", stripped);

    let mut tree = ExpressionTree::empty(0);
    let root = Parser::new(&stripped, &mut tree)
        .parse()
        .ok_or_else(|| ParseError { text: stripped.clone() })?;

    tree.set_root(root);
    tree.flatten(root);
    Ok(tree)
}

/// Returns true if the character is one of the binary operators.
fn is_operator(c: u8) -> bool {
    c == b'+' || c == b'*'
}

/// Returns true if the whole string is a numeral: digits, optionally followed by a point and more
/// digits.
fn is_numeral(s: &[u8]) -> bool {
    let (whole, fraction) = match s.iter().position(|c| *c == b'.') {
        Some(point) => (&s[..point], Some(&s[point + 1..])),
        None => (s, None),
    };

    let all_digits = |part: &[u8]| !part.is_empty() && part.iter().all(u8::is_ascii_digit);
    all_digits(whole) && fraction.map_or(true, all_digits)
}

/// Returns true if the string is a single operand with no further structure.
fn is_literal(s: &[u8]) -> bool {
    (s.len() == 1 && s[0].is_ascii_lowercase()) || is_numeral(s)
}

/// Builds a tree out of a space-free string. Used to implement [parse].
///
/// Validity and shape are decided separately. A range of the source is valid if it is a literal,
/// a parenthesised valid range, or two valid ranges either side of an operator; those answers are
/// memoised by range. Once a range is known to be valid, the parser picks where to split it and
/// recurses into each side.
struct Parser<'a, 't> {
    source: &'a str,
    tree: &'t mut ExpressionTree,
    verified: BTreeMap<(usize, usize), bool>,
}

impl<'a, 't> Parser<'a, 't> {
    fn new(source: &'a str, tree: &'t mut ExpressionTree) -> Self {
        Self { source, tree, verified: BTreeMap::new() }
    }

    fn parse(&mut self) -> Option<NodeId> {
        self.parse_range(0..self.source.len())
    }

    fn bytes(&self, range: Range<usize>) -> &'a [u8] {
        &self.source.as_bytes()[range]
    }

    /// Returns true if the given range of the source is a valid expression.
    fn verify(&mut self, range: Range<usize>) -> bool {
        let key = (range.start, range.end);
        if let Some(&known) = self.verified.get(&key) {
            return known;
        }

        let result = self.verify_uncached(range);
        trace!("{:?} valid = {}", &self.source[key.0..key.1], result);
        self.verified.insert(key, result);
        result
    }

    fn verify_uncached(&mut self, range: Range<usize>) -> bool {
        let s = self.bytes(range.clone());
        let len = s.len();

        // L -> [a-z] | [0-9]+ | [0-9]+.[0-9]+
        if is_literal(s) {
            return true;
        }

        // X -> (E)
        if len >= 2 && s[0] == b'(' && s[len - 1] == b')'
            && self.verify(range.start + 1..range.end - 1)
        {
            return true;
        }

        // A -> M+M, M -> X*X
        (1..len.saturating_sub(1)).any(|i| {
            is_operator(s[i]) && !is_operator(s[i - 1]) && !is_operator(s[i + 1])
                && self.verify(range.start..range.start + i)
                && self.verify(range.start + i + 1..range.end)
        })
    }

    /// Finds the first occurrence of `target` at or after `start` which is not nested inside any
    /// parentheses opened after `start`. Returns an index relative to `s`.
    fn find_unnested(s: &[u8], start: usize, target: u8) -> Option<usize> {
        let mut depth = 0usize;
        for (i, c) in s.iter().enumerate().skip(start) {
            if *c == target && depth == 0 {
                return Some(i);
            }

            match c {
                b'(' => depth += 1,
                b')' => depth = depth.saturating_sub(1),
                _ => (),
            }
        }
        None
    }

    /// Parses a range of the source, returning `None` if it is not a valid expression.
    fn parse_range(&mut self, range: Range<usize>) -> Option<NodeId> {
        if !self.verify(range.clone()) {
            return None;
        }

        let s = self.bytes(range.clone());
        if is_literal(s) {
            return Some(self.tree.new_literal(&self.source[range]));
        }

        // A range starting with an opening parenthesis which is matched by the final character is
        // a parenthetical group
        if s[0] == b'(' && Self::find_unnested(s, 1, b')') == Some(s.len() - 1) {
            let top = self.tree.new_compound(Operator::Parentheses);
            let inner = self.parse_range(range.start + 1..range.end - 1)?;
            self.tree.add_subexpression(top, inner).ok()?;
            return Some(top);
        }

        // Otherwise split on the lowest-precedence operator outside of any parentheses, taking the
        // leftmost one
        let (cut, operator) = Self::find_unnested(s, 0, b'+')
            .map(|i| (i, Operator::Add))
            .or_else(|| Self::find_unnested(s, 0, b'*').map(|i| (i, Operator::Multiply)))?;
        debug!("splitting {:?} on {} at {}", &self.source[range.clone()], operator, cut);

        let top = self.tree.new_compound(operator);
        let left = self.parse_range(range.start..range.start + cut)?;
        let right = self.parse_range(range.start + cut + 1..range.end)?;
        self.tree.add_subexpression(top, left).ok()?;
        self.tree.add_subexpression(top, right).ok()?;

        self.tree.flatten(top);
        Some(top)
    }
}
