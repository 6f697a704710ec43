//! Grammar productions.
//!
//! ```text
//! Group     := Element (Connective Element)*
//! Element   := Statement | "(" Group ")"
//! Statement := Operand Word Operand?
//! ```
//!
//! A statement is unary when its operator is followed by a connective, `)`,
//! or end of input.

use super::ast::{Connective, Element, Group, Operand, Statement};
use super::core::Parser;
use super::scanner::{SpannedToken, Token};
use crate::diagnostics::{ParseError, ParseErrorKind, Span};
use crate::Error;

impl Parser<'_> {
    pub(super) fn parse_root(&mut self) -> Result<Group, Error> {
        match self.peek()? {
            None => return Ok(Group::new()),
            Some(SpannedToken {
                token: Token::GroupEnd,
                span,
            }) => {
                return Err(ParseError::new(ParseErrorKind::UnmatchedGroupEnd, span).into());
            }
            Some(_) => {}
        }

        let group = self.parse_group()?;
        match self.bump()? {
            None => Ok(group),
            Some(t) => Err(ParseError::new(ParseErrorKind::UnmatchedGroupEnd, t.span).into()),
        }
    }

    /// Stops, without consuming, at `)` or end of input.
    fn parse_group(&mut self) -> Result<Group, Error> {
        let mut group = Group::new();
        loop {
            group.push(self.parse_element()?);

            let Some(next) = self.peek()? else {
                break;
            };
            let connective = match next.token {
                Token::And => Connective::And,
                Token::Or => Connective::Or,
                Token::GroupEnd => break,
                _ => {
                    return Err(self
                        .unexpected(ParseErrorKind::ExpectedConnective, Some(&next))
                        .into());
                }
            };
            self.bump()?;
            group.push(Element::Connective(connective));
        }
        Ok(group)
    }

    fn parse_element(&mut self) -> Result<Element, Error> {
        match self.peek()? {
            Some(SpannedToken {
                token: Token::GroupBegin,
                span,
            }) => {
                self.bump()?;
                Ok(Element::Group(self.parse_nested(span)?))
            }
            Some(t) if t.token.is_operand() => Ok(Element::Statement(self.parse_statement()?)),
            found => Err(self
                .unexpected(ParseErrorKind::ExpectedOperand, found.as_ref())
                .into()),
        }
    }

    /// Parses the inside of `( ... )`; the opening paren is already consumed.
    fn parse_nested(&mut self, open: Span) -> Result<Group, Error> {
        self.enter_recursion()?;
        let group = self.parse_group()?;
        match self.bump()? {
            Some(SpannedToken {
                token: Token::GroupEnd,
                ..
            }) => {}
            _ => {
                let span = Span::new(open.start, self.scanner.eof_offset());
                return Err(ParseError::new(ParseErrorKind::UnclosedGroup, span)
                    .with_message("unclosed group, expected `)`")
                    .into());
            }
        }
        self.exit_recursion();
        Ok(group)
    }

    fn parse_statement(&mut self) -> Result<Statement, ParseError> {
        let left = self.expect_operand()?;
        let operator = self.expect_operator()?;

        let unary = match self.peek()? {
            None => true,
            Some(t) => matches!(t.token, Token::And | Token::Or | Token::GroupEnd),
        };
        if unary {
            return Ok(Statement::unary(left, operator));
        }

        let right = self.expect_operand()?;
        Ok(Statement::binary(left, operator, right))
    }

    fn expect_operand(&mut self) -> Result<Operand, ParseError> {
        match self.bump()? {
            Some(SpannedToken {
                token: Token::Literal(value),
                ..
            }) => Ok(Operand::Literal { value }),
            Some(SpannedToken {
                token: Token::Reference(name),
                ..
            }) => Ok(Operand::Reference { name }),
            found => Err(self.unexpected(ParseErrorKind::ExpectedOperand, found.as_ref())),
        }
    }

    fn expect_operator(&mut self) -> Result<String, ParseError> {
        match self.bump()? {
            Some(SpannedToken {
                token: Token::Reference(name),
                ..
            }) => Ok(name),
            found => Err(self.unexpected(ParseErrorKind::ExpectedOperator, found.as_ref())),
        }
    }
}
