//! Schema catalog: declared references, token vocabulary, and operator overloads.

use std::fmt;

use indexmap::{IndexMap, IndexSet};

use super::operator::Operator;
use super::types::TypeToken;
use crate::builder::Builder;
use crate::parser::{self, Group, Statement};
use crate::resolve::{self, ResolvedStatement};
use crate::{Error, Result};

/// What a failed lookup was looking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Reference,
    Type,
    Token,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EntityKind::Reference => "reference",
            EntityKind::Type => "type",
            EntityKind::Token => "token",
        })
    }
}

/// A declared, named, typed field usable as an operand.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Reference {
    pub name: String,
    pub ty: String,
    pub array: bool,
}

impl Reference {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            array: false,
        }
    }

    /// Marks the reference as array-valued.
    pub fn array(mut self) -> Self {
        self.array = true;
        self
    }

    /// Type token of this reference when used as an operand: `$T` or `$T[]`.
    pub fn token(&self) -> TypeToken {
        let token = TypeToken::named(self.ty.clone()).reference();
        if self.array { token.array() } else { token }
    }
}

/// Registry of references and operator overloads.
///
/// Declaration (`add`, `register`) takes `&mut self`; every read, including
/// narrowing, borrows immutably, so narrowed views cannot outlive a
/// subsequent declaration.
pub struct Registry<A = ()> {
    types: IndexSet<String>,
    references: IndexMap<String, Reference>,
    tokens: IndexSet<TypeToken>,
    pub(super) operators: Vec<Operator<A>>,
    accumulator: A,
}

impl Registry {
    pub fn new<I, S>(types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_accumulator(types, ())
    }
}

impl<A> Registry<A> {
    /// Registry whose builders start from a copy of `accumulator`.
    pub fn with_accumulator<I, S>(types: I, accumulator: A) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            types: types.into_iter().map(Into::into).collect(),
            references: IndexMap::new(),
            tokens: TypeToken::wildcards().into_iter().collect(),
            operators: Vec::new(),
            accumulator,
        }
    }

    pub fn types(&self) -> impl Iterator<Item = &str> {
        self.types.iter().map(String::as_str)
    }

    pub fn references(&self) -> impl Iterator<Item = &Reference> {
        self.references.values()
    }

    /// Token vocabulary: the wildcards plus `T`, `$T`, `T[]` per added type.
    pub fn tokens(&self) -> impl Iterator<Item = &TypeToken> {
        self.tokens.iter()
    }

    pub fn overloads(&self) -> &[Operator<A>] {
        &self.operators
    }

    /// Distinct operator names in first-registration order.
    pub fn operator_names(&self) -> Vec<&str> {
        let names: IndexSet<&str> = self.operators.iter().map(|op| op.name()).collect();
        names.into_iter().collect()
    }

    pub fn accumulator(&self) -> &A {
        &self.accumulator
    }

    /// Declares a reference. Fails without changing the registry if the name
    /// is taken or the type is not one of the declared types.
    pub fn add(&mut self, reference: Reference) -> Result<()> {
        if self.references.contains_key(&reference.name) {
            return Err(Error::AlreadyExists(reference.name));
        }
        if !self.types.contains(&reference.ty) {
            return Err(Error::not_found(EntityKind::Type, reference.ty));
        }

        tracing::trace!(name = %reference.name, ty = %reference.ty, "adding reference");
        let base = TypeToken::named(reference.ty.clone());
        self.tokens.insert(base.clone());
        self.tokens.insert(base.clone().reference());
        self.tokens.insert(base.array());
        self.references.insert(reference.name.clone(), reference);
        Ok(())
    }

    /// Appends an overload. Several overloads may share an operator name.
    pub fn register(&mut self, operator: Operator<A>) {
        tracing::trace!(signature = %operator.signature(), "registering operator");
        self.operators.push(operator);
    }

    /// Same as [`Registry::reference`].
    pub fn get(&self, name: &str) -> Result<&Reference> {
        self.reference(name)
    }

    pub fn reference(&self, name: &str) -> Result<&Reference> {
        self.references
            .get(name)
            .ok_or_else(|| Error::not_found(EntityKind::Reference, name))
    }

    /// Looks up a textual type pattern in the vocabulary.
    pub fn token(&self, pattern: &str) -> Result<&TypeToken> {
        let token: TypeToken = pattern
            .parse()
            .map_err(|_| Error::not_found(EntityKind::Token, pattern))?;
        self.tokens
            .get(&token)
            .ok_or_else(|| Error::not_found(EntityKind::Token, pattern))
    }

    pub fn parse(&self, text: &str) -> Result<Group> {
        parser::parse(text)
    }

    pub fn resolve(&self, group: &Group<Statement>) -> Result<Group<ResolvedStatement>> {
        resolve::resolve(group, self)
    }

    /// Runs the transform of every statement's overload against `accumulator`,
    /// in source order.
    pub fn apply(&self, group: &Group<ResolvedStatement>, accumulator: &mut A) -> Result<()> {
        group
            .statements()
            .try_for_each(|statement| resolve::apply(self, statement, accumulator))
    }

    /// Builder bound to a copy of the registry's accumulator.
    pub fn create(&self) -> Builder<'_, A>
    where
        A: Clone,
    {
        Builder::new(self, self.accumulator.clone())
    }
}

impl<A> fmt::Debug for Registry<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("types", &self.types)
            .field("references", &self.references)
            .field("operators", &self.operators)
            .finish_non_exhaustive()
    }
}
