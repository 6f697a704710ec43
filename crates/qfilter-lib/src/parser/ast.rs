//! Parse tree: statements, connectives, and nested groups.
//!
//! `Group` is generic over its statement type so the same shape carries both
//! parsed ([`Statement`]) and resolved statements.

use std::fmt;

use serde::ser::{SerializeSeq, Serializer};
use serde::Serialize;

/// Literal operand value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Literal {
    Number(f64),
    String(String),
    Boolean(bool),
}

impl Literal {
    /// Intrinsic type name used during resolution.
    pub fn type_name(&self) -> &'static str {
        match self {
            Literal::Number(_) => "number",
            Literal::String(_) => "string",
            Literal::Boolean(_) => "boolean",
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Number(n) => write!(f, "{}", n),
            Literal::Boolean(b) => write!(f, "{}", b),
            Literal::String(s) => {
                f.write_str("\"")?;
                for c in s.chars() {
                    if matches!(c, '"' | '\\') {
                        f.write_str("\\")?;
                    }
                    write!(f, "{}", c)?;
                }
                f.write_str("\"")
            }
        }
    }
}

/// Statement operand: a literal value or the name of a reference.
///
/// The parser does not check that referenced names exist.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Operand {
    #[serde(rename = "LITERAL_VALUE")]
    Literal { value: Literal },
    #[serde(rename = "REFERENCE")]
    Reference { name: String },
}

impl Operand {
    pub fn literal(value: impl Into<Literal>) -> Self {
        Operand::Literal {
            value: value.into(),
        }
    }

    pub fn reference(name: impl Into<String>) -> Self {
        Operand::Reference { name: name.into() }
    }

    pub fn as_reference(&self) -> Option<&str> {
        match self {
            Operand::Reference { name } => Some(name),
            Operand::Literal { .. } => None,
        }
    }

    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Operand::Literal { value } => Some(value),
            Operand::Reference { .. } => None,
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Literal { value } => write!(f, "{}", value),
            Operand::Reference { name } => f.write_str(name),
        }
    }
}

impl From<f64> for Literal {
    fn from(value: f64) -> Self {
        Literal::Number(value)
    }
}

impl From<i32> for Literal {
    fn from(value: i32) -> Self {
        Literal::Number(value.into())
    }
}

impl From<bool> for Literal {
    fn from(value: bool) -> Self {
        Literal::Boolean(value)
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Literal::String(value.to_string())
    }
}

impl From<String> for Literal {
    fn from(value: String) -> Self {
        Literal::String(value)
    }
}

macro_rules! operand_from_literal {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Operand {
                fn from(value: $ty) -> Self {
                    Operand::literal(value)
                }
            }
        )*
    };
}

operand_from_literal!(Literal, f64, i32, bool, &str, String);

/// One `left operator right` comparison. `right` is absent for unary operators.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statement {
    pub left: Operand,
    pub operator: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<Operand>,
}

impl Statement {
    pub fn binary(left: Operand, operator: impl Into<String>, right: Operand) -> Self {
        Self {
            left,
            operator: operator.into(),
            right: Some(right),
        }
    }

    pub fn unary(left: Operand, operator: impl Into<String>) -> Self {
        Self {
            left,
            operator: operator.into(),
            right: None,
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.left, self.operator)?;
        if let Some(right) = &self.right {
            write!(f, " {}", right)?;
        }
        Ok(())
    }
}

/// Logical connective between two group elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Connective {
    And,
    Or,
}

impl Connective {
    pub fn as_str(&self) -> &'static str {
        match self {
            Connective::And => "AND",
            Connective::Or => "OR",
        }
    }
}

impl fmt::Display for Connective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Element<S = Statement> {
    Statement(S),
    Connective(Connective),
    Group(Group<S>),
}

/// Ordered sequence of statements, connectives, and nested groups.
///
/// Groups produced by the parser alternate element and connective, with no
/// leading or trailing connective.
#[derive(Debug, Clone, PartialEq)]
pub struct Group<S = Statement> {
    elements: Vec<Element<S>>,
}

impl<S> Default for Group<S> {
    fn default() -> Self {
        Self {
            elements: Vec::new(),
        }
    }
}

impl<S> Group<S> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, element: Element<S>) {
        self.elements.push(element);
    }

    pub fn elements(&self) -> &[Element<S>] {
        &self.elements
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Element<S>> {
        self.elements.iter()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Nesting depth: 0 for an empty group, 1 for a flat one.
    pub fn depth(&self) -> usize {
        if self.elements.is_empty() {
            return 0;
        }
        let nested = self
            .elements
            .iter()
            .filter_map(|e| match e {
                Element::Group(g) => Some(g.depth()),
                _ => None,
            })
            .max()
            .unwrap_or(0);
        nested + 1
    }

    /// Statements in source order, descending into nested groups.
    pub fn statements(&self) -> Statements<'_, S> {
        Statements {
            stack: vec![self.elements.iter()],
        }
    }

    /// Converts every statement, keeping the group shape. Stops at the first error.
    pub fn try_map<T, E>(&self, f: &mut impl FnMut(&S) -> Result<T, E>) -> Result<Group<T>, E> {
        let mut out = Group::new();
        for element in &self.elements {
            out.push(match element {
                Element::Statement(s) => Element::Statement(f(s)?),
                Element::Connective(c) => Element::Connective(*c),
                Element::Group(g) => Element::Group(g.try_map(f)?),
            });
        }
        Ok(out)
    }
}

impl<S> FromIterator<Element<S>> for Group<S> {
    fn from_iter<I: IntoIterator<Item = Element<S>>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<'a, S> IntoIterator for &'a Group<S> {
    type Item = &'a Element<S>;
    type IntoIter = std::slice::Iter<'a, Element<S>>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

pub struct Statements<'a, S> {
    stack: Vec<std::slice::Iter<'a, Element<S>>>,
}

impl<'a, S> Iterator for Statements<'a, S> {
    type Item = &'a S;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let top = self.stack.last_mut()?;
            match top.next() {
                Some(Element::Statement(s)) => return Some(s),
                Some(Element::Group(g)) => self.stack.push(g.elements.iter()),
                Some(Element::Connective(_)) => {}
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

/// Canonical text form; parsing it yields an equal tree.
impl<S: fmt::Display> fmt::Display for Group<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, element) in self.elements.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match element {
                Element::Statement(s) => write!(f, "{}", s)?,
                Element::Connective(c) => write!(f, "{}", c)?,
                Element::Group(g) => write!(f, "({})", g)?,
            }
        }
        Ok(())
    }
}

impl<S: Serialize> Serialize for Element<S> {
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        match self {
            Element::Statement(s) => s.serialize(serializer),
            Element::Connective(c) => serializer.serialize_str(c.as_str()),
            Element::Group(g) => g.serialize(serializer),
        }
    }
}

impl<S: Serialize> Serialize for Group<S> {
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        let mut seq = serializer.serialize_seq(Some(self.elements.len()))?;
        for element in &self.elements {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}
