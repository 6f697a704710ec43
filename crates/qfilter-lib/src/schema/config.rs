//! Declarative schema description, deserialized from JSON by the CLI.

use serde::Deserialize;

use super::operator::Signature;
use super::registry::{Reference, Registry};
use crate::Result;

/// ```json
/// {
///   "types": ["string", "keyword"],
///   "references": [{ "name": "type", "type": "keyword" }],
///   "operators": ["$keyword EQ string", "$any EXISTS"]
/// }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SchemaConfig {
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub references: Vec<ReferenceConfig>,
    #[serde(default)]
    pub operators: Vec<Signature>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReferenceConfig {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(default)]
    pub array: bool,
}

impl From<ReferenceConfig> for Reference {
    fn from(config: ReferenceConfig) -> Self {
        let reference = Reference::new(config.name, config.ty);
        if config.array { reference.array() } else { reference }
    }
}

impl SchemaConfig {
    /// Builds a registry, declaring references and overloads in file order.
    pub fn into_registry(self) -> Result<Registry> {
        let mut registry = Registry::new(self.types);
        for reference in self.references {
            registry.add(reference.into())?;
        }
        for signature in self.operators {
            registry.register(signature.into());
        }
        Ok(registry)
    }
}
