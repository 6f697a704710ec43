//! Shared fixtures for unit tests.

use crate::diagnostics::ParseError;
use crate::parser::{Group, parse};
use crate::schema::{Reference, Registry};
use crate::Error;

/// Registry with the sample document schema:
/// `type: keyword`, `content: text`, `tags: keyword[]`.
pub fn sample_registry() -> Registry {
    let mut registry = Registry::new(["string", "number", "keyword", "text"]);
    registry.add(Reference::new("type", "keyword")).unwrap();
    registry.add(Reference::new("content", "text")).unwrap();
    registry.add(Reference::new("tags", "keyword").array()).unwrap();
    for signature in [
        "$keyword EQ string",
        "$text SEARCH string",
        "$any EXISTS",
        "$keyword[] CONTAINS string",
    ] {
        registry.register(signature.parse::<crate::Signature>().unwrap().into());
    }
    registry
}

/// Signatures of `overloads`, as text, in order.
pub fn signatures<'a, A: 'a>(
    overloads: impl IntoIterator<Item = &'a crate::Operator<A>>,
) -> Vec<String> {
    overloads
        .into_iter()
        .map(|op| op.signature().to_string())
        .collect()
}

impl Group {
    pub fn expect_valid(source: &str) -> Group {
        match parse(source) {
            Ok(group) => group,
            Err(e) => panic!("expected `{source}` to parse, got: {e}"),
        }
    }

    pub fn expect_dump(source: &str) -> String {
        Self::expect_valid(source).dump()
    }

    pub fn expect_invalid(source: &str) -> ParseError {
        match parse(source) {
            Ok(group) => panic!("expected `{source}` to fail, parsed: {}", group.dump()),
            Err(Error::Parse(e)) => e,
            Err(e) => panic!("expected a parse error for `{source}`, got: {e}"),
        }
    }
}
