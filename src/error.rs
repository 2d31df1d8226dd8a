//! Error types.
//!
//! [`Error`] is what callers see: precondition violations on the top-level
//! arguments and malformed macro expressions. [`AccessError`] is produced by
//! [`Graph`](crate::Graph) implementations when a member exists but cannot be
//! read; the resolver absorbs it into "not found" and it never reaches the
//! caller of [`format_with`](crate::format_with).

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The object graph argument was absent.
    #[error("argument `{0}` must not be null")]
    NullArgument(&'static str),

    /// A required string argument was empty.
    #[error("argument `{0}` must not be empty")]
    EmptyArgument(&'static str),

    /// A macro expression was empty or malformed.
    #[error("invalid expression `{expression}`: {reason}")]
    InvalidExpression { expression: String, reason: &'static str },
}

impl Error {
    pub(crate) fn invalid_expression(expression: &str, reason: &'static str) -> Self {
        Error::InvalidExpression { expression: expression.to_string(), reason }
    }
}

/// A member that exists on a graph could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot read member `{member}`: {reason}")]
pub struct AccessError {
    member: String,
    reason: String,
}

impl AccessError {
    pub fn new(member: impl Into<String>, reason: impl Into<String>) -> Self {
        AccessError { member: member.into(), reason: reason.into() }
    }

    pub fn member(&self) -> &str {
        &self.member
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}
