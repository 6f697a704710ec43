//! qfilter: typed filter-expression language.
//!
//! Filters are sequences of `<operand> <operator> <operand>` statements joined
//! by `AND`/`OR` and grouped with parentheses. Parsing is purely syntactic;
//! a separate resolution phase types every statement against a [`Registry`]
//! of declared references and operator overloads.
//!
//! # Example
//!
//! ```
//! use qfilter_lib::{Reference, Registry, Signature};
//!
//! let mut registry = Registry::new(["string", "keyword", "text"]);
//! registry.add(Reference::new("type", "keyword")).unwrap();
//! registry.add(Reference::new("content", "text")).unwrap();
//! registry.register("$keyword EQ string".parse::<Signature>().unwrap().into());
//! registry.register("$text SEARCH string".parse::<Signature>().unwrap().into());
//!
//! let group = registry
//!     .parse(r#"type EQ "doc" AND (content SEARCH "1" OR content SEARCH "2")"#)
//!     .unwrap();
//! let resolved = registry.resolve(&group).unwrap();
//! assert_eq!(resolved.statements().count(), 3);
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod builder;
pub mod diagnostics;
pub mod parser;
pub mod resolve;
pub mod schema;

#[cfg(test)]
mod builder_tests;
#[cfg(test)]
pub mod test_utils;

pub use builder::{Builder, Built};
pub use diagnostics::{ParseError, ParseErrorKind, Span};
pub use parser::{Connective, Element, Group, Literal, Operand, Statement, parse};
pub use resolve::{ResolvedStatement, Typed, resolve};
pub use schema::{
    EntityKind, Filter, Operator, Overloads, Reference, Registry, RightFilter, SchemaConfig,
    Signature, Transform, TypeToken,
};

/// Errors raised by parsing, schema declaration, and resolution.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    #[error("{kind} \"{name}\" not found")]
    NotFound { kind: EntityKind, name: String },

    #[error("reference \"{0}\" already exists")]
    AlreadyExists(String),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("no overload matches {filter}: {}", schema::describe_candidates(.candidates))]
    NoMatchingOverload {
        filter: Filter,
        candidates: Vec<Signature>,
    },

    #[error("invalid type token \"{0}\"")]
    InvalidTypeToken(String),

    #[error("invalid operator signature \"{0}\"")]
    InvalidSignature(String),

    /// Operand with no text form that parses back to the same value.
    #[error("operand `{0}` cannot be written as a filter word or literal")]
    InvalidOperand(String),

    #[error("operator `{0}` is not a bare word")]
    InvalidOperator(String),

    /// Group nesting exceeded the parser's recursion limit.
    #[error("recursion limit exceeded")]
    RecursionLimitExceeded,

    #[error("transform for `{0}` rejected the statement")]
    TransformRejected(Signature),
}

impl Error {
    pub(crate) fn not_found(kind: EntityKind, name: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            name: name.into(),
        }
    }
}

/// Result type for qfilter operations.
pub type Result<T> = std::result::Result<T, Error>;
