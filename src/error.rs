use alloc::string::String;

use thiserror::Error;

/// Raised when a string is not a valid expression. Carries the input after spaces were
/// stripped, since that is what the parser actually looked at.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("cannot parse expression: {text}")]
pub struct ParseError {
    pub text: String,
}

/// A structural operation was called in a way its contract forbids. These indicate a bug in the
/// calling code rather than bad user input.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeError {
    #[error("cannot add a child to a literal node")]
    ChildOfLiteral,

    #[error("node has no parent")]
    NoParent,

    #[error("node is already part of a tree")]
    AlreadyAttached,

    #[error("trees do not contain the same children")]
    MismatchedChildren,

    #[error("path does not lead to a node")]
    InvalidPath,
}
