//! On-demand scanner: turns the raw logos stream into decoded tokens.

use logos::{Lexer, Logos};

use super::ast::Literal;
use super::lexer::TokenKind;
use crate::diagnostics::{ParseError, ParseErrorKind, Span};

/// Decoded token.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Literal(Literal),
    Reference(String),
    And,
    Or,
    GroupBegin,
    GroupEnd,
}

impl Token {
    pub fn is_operand(&self) -> bool {
        matches!(self, Token::Literal(_) | Token::Reference(_))
    }

    /// Human-readable token description for error messages.
    pub fn describe(&self) -> String {
        match self {
            Token::Literal(value) => format!("literal {}", value),
            Token::Reference(name) => format!("`{}`", name),
            Token::And => "`AND`".to_string(),
            Token::Or => "`OR`".to_string(),
            Token::GroupBegin => "`(`".to_string(),
            Token::GroupEnd => "`)`".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpannedToken {
    pub token: Token,
    pub span: Span,
}

pub struct Scanner<'src> {
    source: &'src str,
    lexer: Lexer<'src, TokenKind>,
}

impl<'src> Scanner<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            lexer: TokenKind::lexer(source),
        }
    }

    pub fn source(&self) -> &'src str {
        self.source
    }

    pub fn eof_offset(&self) -> usize {
        self.source.len()
    }

    /// Next token, skipping spaces. `Ok(None)` at end of input.
    pub fn next_token(&mut self) -> Result<Option<SpannedToken>, ParseError> {
        loop {
            let kind = match self.lexer.next() {
                None => return Ok(None),
                Some(Ok(kind)) => kind,
                Some(Err(())) => {
                    return Err(ParseError::new(
                        ParseErrorKind::UnexpectedCharacter,
                        self.lexer.span().into(),
                    ));
                }
            };

            let token = match kind {
                TokenKind::True => Token::Literal(Literal::Boolean(true)),
                TokenKind::False => Token::Literal(Literal::Boolean(false)),
                TokenKind::And => Token::And,
                TokenKind::Or => Token::Or,
                TokenKind::ParenOpen => Token::GroupBegin,
                TokenKind::ParenClose => Token::GroupEnd,
                TokenKind::Number => Token::Literal(self.number()?),
                TokenKind::DoubleQuote => Token::Literal(self.string('"')?),
                TokenKind::SingleQuote => Token::Literal(self.string('\'')?),
                TokenKind::Word => Token::Reference(self.lexer.slice().to_string()),
                TokenKind::Whitespace => continue,
            };

            return Ok(Some(SpannedToken {
                token,
                span: self.lexer.span().into(),
            }));
        }
    }

    /// The only token in `source`, or `None` when it scans to zero tokens,
    /// several tokens, or fails to scan.
    pub fn single(source: &'src str) -> Option<Token> {
        let mut scanner = Scanner::new(source);
        let first = scanner.next_token().ok()??;
        match scanner.next_token() {
            Ok(None) => Some(first.token),
            _ => None,
        }
    }

    fn number(&self) -> Result<Literal, ParseError> {
        let text = self.lexer.slice();
        match text.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(Literal::Number(value)),
            _ => Err(
                ParseError::new(ParseErrorKind::InvalidNumber, self.lexer.span().into())
                    .with_message(format!("expected valid number, found `{}`", text)),
            ),
        }
    }

    /// Scans a string body after its opening quote. Only `\\` and an escaped
    /// opening quote are legal escapes.
    fn string(&mut self, quote: char) -> Result<Literal, ParseError> {
        let open = self.lexer.span().start;
        let body_start = self.lexer.span().end;
        let rest = self.lexer.remainder();

        let mut value = String::new();
        let mut chars = rest.char_indices();
        while let Some((i, c)) = chars.next() {
            if c == quote {
                self.lexer.bump(i + c.len_utf8());
                return Ok(Literal::String(value));
            }
            if c != '\\' {
                value.push(c);
                continue;
            }
            match chars.next() {
                Some((_, escaped)) if escaped == '\\' || escaped == quote => value.push(escaped),
                Some((j, escaped)) => {
                    let span = Span::new(body_start + i, body_start + j + escaped.len_utf8());
                    return Err(ParseError::new(ParseErrorKind::InvalidEscape, span)
                        .with_message(format!(
                            "expected backslash or quote after escape, found `{}`",
                            escaped
                        )));
                }
                None => break,
            }
        }

        Err(ParseError::new(
            ParseErrorKind::UnterminatedString,
            Span::new(open, self.source.len()),
        ))
    }
}
