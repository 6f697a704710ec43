//! Parse errors with source spans, and their rendering.

mod printer;


use std::fmt;
use std::ops::Range;

pub use printer::ParseErrorPrinter;

/// Byte range into the filter source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn empty(offset: usize) -> Self {
        Self::new(offset, offset)
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Span covering both `self` and `other`.
    pub fn cover(self, other: Span) -> Span {
        Span::new(self.start.min(other.start), self.end.max(other.end))
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}

impl From<Span> for Range<usize> {
    fn from(span: Span) -> Self {
        span.start..span.end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// What went wrong while scanning or parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    // Lexical
    InvalidNumber,
    InvalidEscape,
    UnterminatedString,
    UnexpectedCharacter,

    // Grammar
    ExpectedOperand,
    ExpectedOperator,
    ExpectedConnective,
    UnclosedGroup,
    UnmatchedGroupEnd,
}

impl ParseErrorKind {
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::InvalidNumber => "expected valid number",
            Self::InvalidEscape => "expected backslash or quote after escape",
            Self::UnterminatedString => "unterminated string literal",
            Self::UnexpectedCharacter => "unexpected character",
            Self::ExpectedOperand => "expected literal value or reference",
            Self::ExpectedOperator => "expected operator",
            Self::ExpectedConnective => "expected logical AND or OR",
            Self::UnclosedGroup => "unclosed group",
            Self::UnmatchedGroupEnd => "unmatched `)`",
        }
    }

    pub fn is_lexical(&self) -> bool {
        matches!(
            self,
            Self::InvalidNumber
                | Self::InvalidEscape
                | Self::UnterminatedString
                | Self::UnexpectedCharacter
        )
    }
}

/// A grammar or lexical violation. One error aborts the whole parse.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message} at position {}", .span.start)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
    pub message: String,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, span: Span) -> Self {
        Self {
            kind,
            span,
            message: kind.default_message().to_string(),
        }
    }

    /// Replace the default message with a more specific one.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn printer<'s>(&self, source: &'s str) -> ParseErrorPrinter<'_, 's> {
        ParseErrorPrinter::new(self, source)
    }

    pub fn render(&self, source: &str) -> String {
        self.printer(source).render()
    }
}
