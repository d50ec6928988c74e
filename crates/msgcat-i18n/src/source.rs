//! One backing message file, flattened to dotted paths.

use crate::error::{CatalogError, CatalogResult};
use serde_yaml::Value;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Raw message strings of a single file, keyed by dotted path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageSource {
    origin: String,
    entries: HashMap<String, String>,
}

impl MessageSource {
    /// A source holding no messages.
    pub fn empty(origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            entries: HashMap::new(),
        }
    }

    /// Parses YAML text. Nested mappings become dotted paths; `null`
    /// values are left out so lookups fall through to the next source.
    /// Merge keys (`<<: *anchor`) are resolved before flattening.
    pub fn from_yaml_str(origin: impl Into<String>, yaml: &str) -> CatalogResult<Self> {
        let origin = origin.into();
        let parse_error = |source| CatalogError::Parse {
            origin: origin.clone(),
            source,
        };
        let mut root: Value = serde_yaml::from_str(yaml).map_err(parse_error)?;
        root.apply_merge().map_err(parse_error)?;

        let mut entries = HashMap::new();
        match root {
            Value::Null => {}
            Value::Mapping(_) => flatten("", &root, &mut entries),
            _ => return Err(CatalogError::InvalidRoot { origin }),
        }

        debug!("Loaded {} messages from {}", entries.len(), origin);
        Ok(Self { origin, entries })
    }

    /// Reads and parses a YAML file.
    pub fn from_path(path: &Path) -> CatalogResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(path.display().to_string(), &content)
    }

    /// Builds a source from path/value pairs.
    pub fn from_entries<I, K, V>(origin: impl Into<String>, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            origin: origin.into(),
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Raw value stored under `path`. An empty string is a real value.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&str> {
        self.entries.get(path).map(String::as_str)
    }

    /// Whether `path` has a value.
    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    /// File or resource name this source was read from.
    #[must_use]
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Number of messages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the source has no messages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn flatten(prefix: &str, value: &Value, out: &mut HashMap<String, String>) {
    match value {
        Value::Mapping(mapping) => {
            for (key, child) in mapping {
                let Some(segment) = scalar_text(key) else {
                    debug!("Skipping non-scalar key under '{}'", prefix);
                    continue;
                };
                let path = if prefix.is_empty() {
                    segment
                } else {
                    format!("{prefix}.{segment}")
                };
                flatten(&path, child, out);
            }
        }
        Value::Null => {}
        Value::Tagged(tagged) => flatten(prefix, &tagged.value, out),
        other => match scalar_text(other) {
            Some(text) => {
                out.insert(prefix.to_string(), text);
            }
            None => debug!("Skipping non-scalar value at '{}'", prefix),
        },
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
