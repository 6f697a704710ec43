//! Fluent construction of resolved filters.
//!
//! ```
//! use qfilter_lib::{Operand, Reference, Registry, Signature};
//!
//! let mut registry = Registry::new(["string", "keyword"]);
//! registry.add(Reference::new("type", "keyword")).unwrap();
//! registry.register("$keyword EQ string".parse::<Signature>().unwrap().into());
//!
//! let built = registry
//!     .create()
//!     .and(Operand::reference("type"), "EQ", "doc")
//!     .or(Operand::reference("type"), "EQ", "page")
//!     .build()
//!     .unwrap();
//! assert_eq!(built.group.to_string(), r#"type EQ "doc" OR type EQ "page""#);
//! ```

use crate::parser::{Connective, Element, Group, Operand, Scanner, Statement, Token};
use crate::resolve::{self, ResolvedStatement};
use crate::schema::Registry;
use crate::{Error, Result};

/// Output of [`Builder::build`].
#[derive(Debug, Clone)]
pub struct Built<A> {
    pub group: Group<ResolvedStatement>,
    pub accumulator: A,
}

/// Appends statements to a flat group, resolving each one and running its
/// transform as soon as it is added.
///
/// The first failure is kept; statements added after it are ignored.
pub struct Builder<'r, A> {
    registry: &'r Registry<A>,
    group: Group<ResolvedStatement>,
    accumulator: A,
    error: Option<Error>,
}

impl<'r, A> Builder<'r, A> {
    pub fn new(registry: &'r Registry<A>, accumulator: A) -> Self {
        Self {
            registry,
            group: Group::new(),
            accumulator,
            error: None,
        }
    }

    pub fn and(
        self,
        left: impl Into<Operand>,
        operator: impl Into<String>,
        right: impl Into<Operand>,
    ) -> Self {
        let statement = Statement::binary(left.into(), operator, right.into());
        self.push(Connective::And, statement)
    }

    pub fn or(
        self,
        left: impl Into<Operand>,
        operator: impl Into<String>,
        right: impl Into<Operand>,
    ) -> Self {
        let statement = Statement::binary(left.into(), operator, right.into());
        self.push(Connective::Or, statement)
    }

    pub fn and_unary(self, left: impl Into<Operand>, operator: impl Into<String>) -> Self {
        self.push(Connective::And, Statement::unary(left.into(), operator))
    }

    pub fn or_unary(self, left: impl Into<Operand>, operator: impl Into<String>) -> Self {
        self.push(Connective::Or, Statement::unary(left.into(), operator))
    }

    /// Accumulator state after the statements added so far.
    pub fn accumulator(&self) -> &A {
        &self.accumulator
    }

    pub fn build(self) -> Result<Built<A>> {
        if let Some(error) = self.error {
            return Err(error);
        }
        Ok(Built {
            group: self.group,
            accumulator: self.accumulator,
        })
    }

    fn push(mut self, connective: Connective, statement: Statement) -> Self {
        if self.error.is_some() {
            return self;
        }
        match self.add(statement) {
            Ok(resolved) => {
                if !self.group.is_empty() {
                    self.group.push(Element::Connective(connective));
                }
                self.group.push(Element::Statement(resolved));
            }
            Err(error) => self.error = Some(error),
        }
        self
    }

    fn add(&mut self, statement: Statement) -> Result<ResolvedStatement> {
        check_expressible(&statement)?;
        let resolved = resolve::resolve_statement(self.registry, &statement)?;
        resolve::apply(self.registry, &resolved, &mut self.accumulator)?;
        Ok(resolved)
    }
}

/// Rejects statements whose text form would parse to a different tree:
/// negative or non-finite numbers, keywords as names, names with spaces or
/// parentheses.
fn check_expressible(statement: &Statement) -> Result<()> {
    check_operand(&statement.left)?;
    if let Some(right) = &statement.right {
        check_operand(right)?;
    }
    match Scanner::single(&statement.operator) {
        Some(Token::Reference(word)) if word == statement.operator => Ok(()),
        _ => Err(Error::InvalidOperator(statement.operator.clone())),
    }
}

fn check_operand(operand: &Operand) -> Result<()> {
    let text = operand.to_string();
    let same = match (Scanner::single(&text), operand) {
        (Some(Token::Literal(scanned)), Operand::Literal { value }) => scanned == *value,
        (Some(Token::Reference(scanned)), Operand::Reference { name }) => scanned == *name,
        _ => false,
    };
    if same {
        Ok(())
    } else {
        Err(Error::InvalidOperand(text))
    }
}
