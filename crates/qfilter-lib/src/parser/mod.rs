//! Parser for the filter language.
//!
//! # Architecture
//!
//! - `lexer`: logos token kinds, boundaries only
//! - `scanner`: on-demand cursor decoding literals and reporting lexical errors
//! - `core` / `grammar`: recursive descent producing a nested [`Group`]
//!
//! Parsing is purely syntactic. Reference names and operator words are not
//! checked against any registry; see [`crate::resolve`] for the semantic phase.
//!
//! Whitespace is the space character only. `AND`, `OR`, `true`, `false` are
//! case-sensitive whole words.

pub mod ast;
pub mod lexer;
pub mod printer;
pub mod scanner;

mod core;
mod grammar;


pub use ast::{Connective, Element, Group, Literal, Operand, Statement};
pub use core::{DEFAULT_RECURSION_LIMIT, Parser};
pub use scanner::{Scanner, SpannedToken, Token};

use crate::Result;

/// Parses a complete filter string.
pub fn parse(source: &str) -> Result<Group> {
    let group = Parser::new(source).parse()?;
    tracing::trace!(
        statements = group.statements().count(),
        depth = group.depth(),
        "parsed filter"
    );
    Ok(group)
}
