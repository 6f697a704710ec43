//! Resolution: types every parsed statement against a registry and picks the
//! overload it uses.
//!
//! A reference operand of declared type `T` is typed `$T` (`$T[]` for array
//! references). A literal takes its intrinsic type: `number`, `string`, or
//! `boolean`. The first matching overload in registration order wins.

use std::fmt;

use serde::Serialize;

use crate::parser::{Group, Operand, Statement};
use crate::schema::{Filter, Registry, RightFilter, Signature, TypeToken};
use crate::{Error, Result};

/// Operand together with its inferred type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Typed {
    pub operand: Operand,
    #[serde(rename = "type")]
    pub ty: TypeToken,
}

impl fmt::Display for Typed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.operand, self.ty)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedStatement {
    pub left: Typed,
    pub operator: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<Typed>,
    /// Index of the chosen overload in [`Registry::overloads`].
    pub overload: usize,
    pub signature: Signature,
}

impl ResolvedStatement {
    /// The statement as written, without type information.
    pub fn statement(&self) -> Statement {
        Statement {
            left: self.left.operand.clone(),
            operator: self.operator.clone(),
            right: self.right.as_ref().map(|r| r.operand.clone()),
        }
    }
}

impl fmt::Display for ResolvedStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.left.operand, self.operator)?;
        if let Some(right) = &self.right {
            write!(f, " {}", right.operand)?;
        }
        Ok(())
    }
}

/// Resolves every statement of `group`, keeping its shape.
pub fn resolve<A>(
    group: &Group<Statement>,
    registry: &Registry<A>,
) -> Result<Group<ResolvedStatement>> {
    group.try_map(&mut |statement| resolve_statement(registry, statement))
}

pub(crate) fn resolve_statement<A>(
    registry: &Registry<A>,
    statement: &Statement,
) -> Result<ResolvedStatement> {
    let left = type_operand(registry, &statement.left)?;
    let right = statement
        .right
        .as_ref()
        .map(|operand| type_operand(registry, operand))
        .transpose()?;

    let mut filter = Filter::new()
        .left(left.ty.clone())
        .operator(statement.operator.clone());
    filter = match &right {
        Some(right) => filter.right(right.ty.clone()),
        None => filter.unary(),
    };

    let overloads = registry.narrow_strict(&filter)?;
    let Some((overload, operator)) = overloads.first() else {
        return Err(Error::NoMatchingOverload {
            filter,
            candidates: Vec::new(),
        });
    };
    tracing::debug!(%statement, signature = %operator.signature(), "resolved statement");

    Ok(ResolvedStatement {
        left,
        operator: statement.operator.clone(),
        right,
        overload,
        signature: operator.signature().clone(),
    })
}

fn type_operand<A>(registry: &Registry<A>, operand: &Operand) -> Result<Typed> {
    let ty = match operand {
        Operand::Reference { name } => registry.reference(name)?.token(),
        Operand::Literal { value } => TypeToken::named(value.type_name()),
    };
    Ok(Typed {
        operand: operand.clone(),
        ty,
    })
}

/// Runs the transform of the statement's overload.
pub(crate) fn apply<A>(
    registry: &Registry<A>,
    statement: &ResolvedStatement,
    accumulator: &mut A,
) -> Result<()> {
    // Statements resolved against another registry may point anywhere.
    let operator = registry
        .overloads()
        .get(statement.overload)
        .filter(|op| *op.signature() == statement.signature);
    let Some(operator) = operator else {
        let mut filter = Filter::new()
            .left(statement.signature.left.clone())
            .operator(statement.signature.operator.clone());
        filter.right = match &statement.signature.right {
            Some(right) => RightFilter::Is(right.clone()),
            None => RightFilter::Unary,
        };
        return Err(Error::NoMatchingOverload {
            filter,
            candidates: registry
                .overloads()
                .iter()
                .map(|op| op.signature().clone())
                .collect(),
        });
    };
    if operator.apply(statement, accumulator) {
        Ok(())
    } else {
        Err(Error::TransformRejected(statement.signature.clone()))
    }
}
