//! Operator overloads.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize, Serializer};

use super::types::TypeToken;
use crate::Error;
use crate::resolve::ResolvedStatement;

/// `(left, operator, right?)` type signature of one overload.
///
/// Textual form is `"<left> <operator>"` for unary overloads and
/// `"<left> <operator> <right>"` for binary ones, e.g. `"$keyword EQ string"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct Signature {
    pub left: TypeToken,
    pub operator: String,
    pub right: Option<TypeToken>,
}

impl Signature {
    pub fn binary(left: TypeToken, operator: impl Into<String>, right: TypeToken) -> Self {
        Self {
            left,
            operator: operator.into(),
            right: Some(right),
        }
    }

    pub fn unary(left: TypeToken, operator: impl Into<String>) -> Self {
        Self {
            left,
            operator: operator.into(),
            right: None,
        }
    }

    pub fn is_unary(&self) -> bool {
        self.right.is_none()
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.left, self.operator)?;
        if let Some(right) = &self.right {
            write!(f, " {}", right)?;
        }
        Ok(())
    }
}

impl FromStr for Signature {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(' ').filter(|p| !p.is_empty()).collect();
        let invalid = || Error::InvalidSignature(s.to_string());
        match parts.as_slice() {
            [left, operator] => Ok(Self::unary(left.parse().map_err(|_| invalid())?, *operator)),
            [left, operator, right] => Ok(Self::binary(
                left.parse().map_err(|_| invalid())?,
                *operator,
                right.parse().map_err(|_| invalid())?,
            )),
            _ => Err(invalid()),
        }
    }
}

impl TryFrom<String> for Signature {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl Serialize for Signature {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Callback run against the accumulator for every statement resolved to the
/// overload. Returning `false` rejects the statement.
pub type Transform<A> = Arc<dyn Fn(&ResolvedStatement, &mut A) -> bool + Send + Sync>;

/// A registered operator overload.
pub struct Operator<A = ()> {
    signature: Signature,
    transform: Option<Transform<A>>,
}

impl<A> Operator<A> {
    pub fn new(signature: Signature) -> Self {
        Self {
            signature,
            transform: None,
        }
    }

    pub fn with_transform(
        mut self,
        transform: impl Fn(&ResolvedStatement, &mut A) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.transform = Some(Arc::new(transform));
        self
    }

    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    pub fn left(&self) -> &TypeToken {
        &self.signature.left
    }

    pub fn name(&self) -> &str {
        &self.signature.operator
    }

    pub fn right(&self) -> Option<&TypeToken> {
        self.signature.right.as_ref()
    }

    pub fn has_transform(&self) -> bool {
        self.transform.is_some()
    }

    /// Runs the transform, if any. Overloads without one accept everything.
    pub fn apply(&self, statement: &ResolvedStatement, accumulator: &mut A) -> bool {
        match &self.transform {
            Some(transform) => transform(statement, accumulator),
            None => true,
        }
    }
}

impl<A> From<Signature> for Operator<A> {
    fn from(signature: Signature) -> Self {
        Self::new(signature)
    }
}

impl<A> Clone for Operator<A> {
    fn clone(&self) -> Self {
        Self {
            signature: self.signature.clone(),
            transform: self.transform.clone(),
        }
    }
}

impl<A> fmt::Debug for Operator<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Operator")
            .field("signature", &self.signature.to_string())
            .field("transform", &self.transform.is_some())
            .finish()
    }
}
