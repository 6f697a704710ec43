//! Parser state and low-level token operations.

use super::ast::Group;
use super::scanner::{Scanner, SpannedToken};
use crate::diagnostics::{ParseError, ParseErrorKind, Span};
use crate::Error;

/// Default limit on parenthesis nesting.
pub const DEFAULT_RECURSION_LIMIT: u32 = 256;

/// Recursive-descent parser over a single filter string.
///
/// Parsing is fail-fast: the first malformed token aborts with a [`ParseError`].
pub struct Parser<'src> {
    pub(super) scanner: Scanner<'src>,
    peeked: Option<SpannedToken>,
    pub(super) depth: u32,
    recursion_limit: Option<u32>,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            scanner: Scanner::new(source),
            peeked: None,
            depth: 0,
            recursion_limit: Some(DEFAULT_RECURSION_LIMIT),
        }
    }

    /// `None` disables the limit.
    pub fn with_recursion_limit(mut self, limit: Option<u32>) -> Self {
        self.recursion_limit = limit;
        self
    }

    pub fn parse(mut self) -> Result<Group, Error> {
        self.parse_root()
    }

    /// Next token without consuming it.
    pub(super) fn peek(&mut self) -> Result<Option<SpannedToken>, ParseError> {
        if self.peeked.is_none() {
            self.peeked = self.scanner.next_token()?;
        }
        Ok(self.peeked.clone())
    }

    pub(super) fn bump(&mut self) -> Result<Option<SpannedToken>, ParseError> {
        match self.peeked.take() {
            Some(token) => Ok(Some(token)),
            None => self.scanner.next_token(),
        }
    }

    pub(super) fn eof_span(&self) -> Span {
        Span::empty(self.scanner.eof_offset())
    }

    /// Error for an unexpected token, or for end of input when `found` is `None`.
    pub(super) fn unexpected(
        &self,
        kind: ParseErrorKind,
        found: Option<&SpannedToken>,
    ) -> ParseError {
        match found {
            Some(t) => ParseError::new(kind, t.span).with_message(format!(
                "{}, found {}",
                kind.default_message(),
                t.token.describe()
            )),
            None => ParseError::new(kind, self.eof_span()).with_message(format!(
                "{}, found end of input",
                kind.default_message()
            )),
        }
    }

    pub(super) fn enter_recursion(&mut self) -> Result<(), Error> {
        if let Some(limit) = self.recursion_limit
            && self.depth >= limit
        {
            return Err(Error::RecursionLimitExceeded);
        }
        self.depth += 1;
        Ok(())
    }

    pub(super) fn exit_recursion(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}
