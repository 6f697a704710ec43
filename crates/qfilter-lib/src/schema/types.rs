//! Operand type tokens and wildcard matching.
//!
//! A token is a base type (`any` or a declared type tag) with two shape flags:
//! `$` marks an operand that comes from a declared reference, `[]` marks an
//! array. Wildcards:
//!
//! | token    | pattern                                  |
//! |----------|------------------------------------------|
//! | `$any`   | universal: matches every token           |
//! | `any`    | any literal scalar                       |
//! | `any[]`  | any literal array                        |
//! | `$any[]` | any array reference                      |

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::Error;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Base {
    Any,
    Named(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeToken {
    base: Base,
    reference: bool,
    array: bool,
}

/// How a token compares against others.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern<'t> {
    Universal,
    Wildcard { reference: bool, array: bool },
    Exact(&'t TypeToken),
}

impl TypeToken {
    /// Literal scalar of the given type: `T`.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            base: Base::Named(name.into()),
            reference: false,
            array: false,
        }
    }

    /// `any`
    pub fn any() -> Self {
        Self {
            base: Base::Any,
            reference: false,
            array: false,
        }
    }

    /// `$any`, the universal wildcard.
    pub fn universal() -> Self {
        Self::any().reference()
    }

    /// The fixed wildcard vocabulary: `any`, `any[]`, `$any`, `$any[]`.
    pub fn wildcards() -> [TypeToken; 4] {
        [
            Self::any(),
            Self::any().array(),
            Self::universal(),
            Self::universal().array(),
        ]
    }

    /// Same token with the `$` (reference) flag set.
    pub fn reference(mut self) -> Self {
        self.reference = true;
        self
    }

    /// Same token with the `[]` (array) flag set.
    pub fn array(mut self) -> Self {
        self.array = true;
        self
    }

    pub fn base(&self) -> &Base {
        &self.base
    }

    pub fn name(&self) -> Option<&str> {
        match &self.base {
            Base::Named(name) => Some(name),
            Base::Any => None,
        }
    }

    pub fn is_reference(&self) -> bool {
        self.reference
    }

    pub fn is_array(&self) -> bool {
        self.array
    }

    pub fn is_wildcard(&self) -> bool {
        self.base == Base::Any
    }

    pub fn pattern(&self) -> Pattern<'_> {
        match (&self.base, self.reference, self.array) {
            (Base::Any, true, false) => Pattern::Universal,
            (Base::Any, reference, array) => Pattern::Wildcard { reference, array },
            (Base::Named(_), ..) => Pattern::Exact(self),
        }
    }

    /// Symmetric wildcard-aware comparison, used for both signature sides.
    pub fn matches(&self, other: &TypeToken) -> bool {
        match (self.pattern(), other.pattern()) {
            (Pattern::Universal, _) | (_, Pattern::Universal) => true,
            (Pattern::Wildcard { reference, array }, _)
            | (_, Pattern::Wildcard { reference, array }) => {
                self.reference == reference
                    && other.reference == reference
                    && self.array == array
                    && other.array == array
            }
            (Pattern::Exact(a), Pattern::Exact(b)) => a == b,
        }
    }
}

impl fmt::Display for TypeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.reference {
            f.write_str("$")?;
        }
        match &self.base {
            Base::Any => f.write_str("any")?,
            Base::Named(name) => f.write_str(name)?,
        }
        if self.array {
            f.write_str("[]")?;
        }
        Ok(())
    }
}

impl FromStr for TypeToken {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (reference, rest) = match s.strip_prefix('$') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let (array, base) = match rest.strip_suffix("[]") {
            Some(base) => (true, base),
            None => (false, rest),
        };

        let valid = !base.is_empty()
            && base
                .chars()
                .all(|c| c.is_alphanumeric() || c == '_' || c == '-' || c == '.');
        if !valid {
            return Err(Error::InvalidTypeToken(s.to_string()));
        }

        let base = match base {
            "any" => Base::Any,
            name => Base::Named(name.to_string()),
        };
        Ok(Self {
            base,
            reference,
            array,
        })
    }
}

impl Serialize for TypeToken {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
