//! Schema: declared types, references, operator overloads, and narrowing.

pub mod config;
pub mod narrow;
pub mod operator;
pub mod registry;
pub mod types;

#[cfg(test)]
mod config_tests;
#[cfg(test)]
mod narrow_tests;

pub use config::{ReferenceConfig, SchemaConfig};
pub use narrow::{Filter, Overloads, RightFilter, describe_candidates};
pub use operator::{Operator, Signature, Transform};
pub use registry::{EntityKind, Reference, Registry};
pub use types::{Base, Pattern, TypeToken};
