//! Overload narrowing.
//!
//! A narrowed set is a view over its parent registry: it stores the indices of
//! the overloads it kept and shares references and vocabulary by borrowing.

use std::fmt;

use super::operator::{Operator, Signature};
use super::registry::Registry;
use super::types::TypeToken;
use crate::{Error, Result};

/// Constraint on the right-hand side of a signature.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum RightFilter {
    #[default]
    Unconstrained,
    /// Only unary overloads.
    Unary,
    Is(TypeToken),
}

/// Query over overload signatures. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Filter {
    pub left: Option<TypeToken>,
    pub operator: Option<String>,
    pub right: RightFilter,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn left(mut self, token: TypeToken) -> Self {
        self.left = Some(token);
        self
    }

    pub fn operator(mut self, name: impl Into<String>) -> Self {
        self.operator = Some(name.into());
        self
    }

    pub fn right(mut self, token: TypeToken) -> Self {
        self.right = RightFilter::Is(token);
        self
    }

    pub fn unary(mut self) -> Self {
        self.right = RightFilter::Unary;
        self
    }

    pub fn matches(&self, signature: &Signature) -> bool {
        if let Some(left) = &self.left
            && !left.matches(&signature.left)
        {
            return false;
        }

        if let Some(operator) = &self.operator
            && *operator != signature.operator
        {
            return false;
        }

        match (&self.right, &signature.right) {
            (RightFilter::Unconstrained, _) => true,
            (RightFilter::Unary, right) => right.is_none(),
            // A binary query accepts unary overloads only through `$any`.
            (RightFilter::Is(want), None) => *want == TypeToken::universal(),
            (RightFilter::Is(want), Some(right)) => want.matches(right),
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        let mut sep = "";
        if let Some(left) = &self.left {
            write!(f, "left: {}", left)?;
            sep = ", ";
        }
        if let Some(operator) = &self.operator {
            write!(f, "{}operator: {}", sep, operator)?;
            sep = ", ";
        }
        match &self.right {
            RightFilter::Unconstrained => {}
            RightFilter::Unary => write!(f, "{}right: null", sep)?,
            RightFilter::Is(right) => write!(f, "{}right: {}", sep, right)?,
        }
        f.write_str("}")
    }
}

/// Overloads retained by a narrowing, borrowed from their registry.
pub struct Overloads<'r, A = ()> {
    registry: &'r Registry<A>,
    indices: Vec<usize>,
}

impl<'r, A> Overloads<'r, A> {
    pub fn registry(&self) -> &'r Registry<A> {
        self.registry
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Indices into [`Registry::overloads`].
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn iter(&self) -> impl Iterator<Item = &'r Operator<A>> + '_ {
        let registry = self.registry;
        self.indices.iter().map(move |&i| &registry.operators[i])
    }

    /// First retained overload with its index, in registration order.
    pub fn first(&self) -> Option<(usize, &'r Operator<A>)> {
        let i = *self.indices.first()?;
        Some((i, &self.registry.operators[i]))
    }

    pub fn signatures(&self) -> Vec<Signature> {
        self.iter().map(|op| op.signature().clone()).collect()
    }

    pub fn narrow(&self, filter: &Filter) -> Overloads<'r, A> {
        narrow_indices(self.registry, self.indices.iter().copied(), filter)
    }

    pub fn narrow_strict(&self, filter: &Filter) -> Result<Overloads<'r, A>> {
        ensure_matched(self.narrow(filter), self.signatures(), filter)
    }
}

impl<'r, A> Clone for Overloads<'r, A> {
    fn clone(&self) -> Self {
        Self {
            registry: self.registry,
            indices: self.indices.clone(),
        }
    }
}

impl<A> fmt::Debug for Overloads<'_, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.iter().map(|op| op.signature().to_string()))
            .finish()
    }
}

impl<A> Registry<A> {
    /// Overloads matching `filter`.
    pub fn narrow(&self, filter: &Filter) -> Overloads<'_, A> {
        narrow_indices(self, 0..self.operators.len(), filter)
    }

    /// Like [`Registry::narrow`], but an empty result is an error listing
    /// every candidate.
    pub fn narrow_strict(&self, filter: &Filter) -> Result<Overloads<'_, A>> {
        let candidates = self.operators.iter().map(|op| op.signature().clone());
        ensure_matched(self.narrow(filter), candidates.collect(), filter)
    }
}

fn narrow_indices<'r, A>(
    registry: &'r Registry<A>,
    candidates: impl Iterator<Item = usize>,
    filter: &Filter,
) -> Overloads<'r, A> {
    let mut considered = 0;
    let indices: Vec<usize> = candidates
        .inspect(|_| considered += 1)
        .filter(|&i| filter.matches(registry.operators[i].signature()))
        .collect();
    tracing::debug!(%filter, considered, retained = indices.len(), "narrowed overloads");
    Overloads { registry, indices }
}

fn ensure_matched<'r, A>(
    narrowed: Overloads<'r, A>,
    candidates: Vec<Signature>,
    filter: &Filter,
) -> Result<Overloads<'r, A>> {
    if !narrowed.is_empty() {
        return Ok(narrowed);
    }
    tracing::debug!(
        %filter,
        candidates = %describe_candidates(&candidates),
        "no matching overload"
    );
    Err(Error::NoMatchingOverload {
        filter: filter.clone(),
        candidates,
    })
}

/// `"expected one of: a, b"`, or a note that nothing was registered.
pub fn describe_candidates(candidates: &[Signature]) -> String {
    if candidates.is_empty() {
        return "no overloads registered".to_string();
    }
    let list: Vec<String> = candidates.iter().map(|s| s.to_string()).collect();
    format!("expected one of: {}", list.join(", "))
}
