//! Loading filter text and schema files.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use qfilter_lib::{Registry, SchemaConfig};

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("filter is required: use a positional argument or -q/--query")]
    MissingFilter,

    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),

    #[error("failed to read '{path}': {source}")]
    Read { path: String, source: io::Error },

    #[error("invalid schema '{path}': {source}")]
    Schema {
        path: String,
        source: serde_json::Error,
    },

    #[error("invalid schema '{path}': {source}")]
    Registry {
        path: String,
        source: qfilter_lib::Error,
    },
}

/// Filter text and where it came from.
pub struct FilterSource {
    /// File path for diagnostics; `None` for inline text.
    pub name: Option<String>,
    pub text: String,
}

pub fn load_filter(path: Option<&Path>, text: Option<&str>) -> Result<FilterSource, LoadError> {
    if let Some(text) = text {
        return Ok(FilterSource {
            name: None,
            text: text.to_string(),
        });
    }

    let Some(path) = path else {
        return Err(LoadError::MissingFilter);
    };

    let (name, content) = if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(LoadError::Stdin)?;
        ("<stdin>".to_string(), buf)
    } else {
        (path.to_string_lossy().into_owned(), read(path)?)
    };

    // Only spaces separate tokens, so a trailing newline would stick to the
    // last word.
    let text = content.trim_end_matches(['\n', '\r']).to_string();
    Ok(FilterSource {
        name: Some(name),
        text,
    })
}

pub fn load_schema(path: &Path) -> Result<Registry, LoadError> {
    let content = read(path)?;
    let name = || path.to_string_lossy().into_owned();

    let config: SchemaConfig =
        serde_json::from_str(&content).map_err(|source| LoadError::Schema {
            path: name(),
            source,
        })?;
    let registry = config
        .into_registry()
        .map_err(|source| LoadError::Registry {
            path: name(),
            source,
        })?;

    tracing::debug!(
        schema = %path.display(),
        references = registry.references().count(),
        overloads = registry.overloads().len(),
        "loaded schema"
    );
    Ok(registry)
}

fn read(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_string_lossy().into_owned(),
        source,
    })
}
