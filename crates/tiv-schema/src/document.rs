//! # Schema Document Loading
//!
//! Reads the Swagger-style schema document and turns its `Message`
//! definition into a self-contained JSON Schema.
//!
//! ## Resolution
//!
//! The document keeps every named schema under a top-level `definitions`
//! mapping, and definitions point at each other with `#/definitions/<name>`.
//! Once `Message` is lifted out to become the root, those pointers would
//! dangle, so every *other* definition is copied under a `definitions` key
//! on the root. `Message` itself is left out of the copy.
//!
//! A `definitions` key that the `Message` definition already carries is
//! replaced, not merged. A warning is logged when that happens.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::error::SchemaError;
use crate::validate::{MessageValidator, SchemaDraft};

/// Name of the definition used as the root schema for validated input.
pub const ROOT_DEFINITION: &str = "Message";

/// Key under which named definitions live, both in the document and on the
/// resolved root.
const DEFINITIONS_KEY: &str = "definitions";

/// Text format of a schema document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Yaml,
    Json,
}

impl DocumentFormat {
    /// Pick the format from a file extension. Anything that is not `.json`
    /// is read as YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Yaml,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Yaml => "YAML",
            Self::Json => "JSON",
        }
    }
}

/// A parsed schema document.
///
/// Holds the whole document, not just `definitions`, so the documentation
/// endpoint can render it as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaDocument {
    value: Value,
}

impl SchemaDocument {
    /// Wrap an already-parsed document.
    pub fn from_value(value: Value) -> Self {
        Self { value }
    }

    /// Parse document text in the given format.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Parse`] if the text is not valid for `format`.
    pub fn parse(content: &str, format: DocumentFormat) -> Result<Self, SchemaError> {
        Self::parse_named(content, format, "<inline>")
    }

    /// Read and parse the document at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Io`] if the file cannot be read and
    /// [`SchemaError::Parse`] if it is not valid YAML/JSON.
    pub fn from_path(path: &Path) -> Result<Self, SchemaError> {
        let content = std::fs::read_to_string(path).map_err(|source| SchemaError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse_named(
            &content,
            DocumentFormat::from_path(path),
            &path.display().to_string(),
        )
    }

    fn parse_named(content: &str, format: DocumentFormat, name: &str) -> Result<Self, SchemaError> {
        let parse_err = |reason: String| SchemaError::Parse {
            path: name.to_string(),
            format: format.name(),
            reason,
        };

        let value = match format {
            DocumentFormat::Json => {
                serde_json::from_str(content).map_err(|e| parse_err(e.to_string()))?
            }
            DocumentFormat::Yaml => {
                let yaml: serde_yaml::Value =
                    serde_yaml::from_str(content).map_err(|e| parse_err(e.to_string()))?;
                yaml_to_json_value(&yaml).map_err(parse_err)?
            }
        };

        Ok(Self { value })
    }

    /// The full document as JSON.
    pub fn as_value(&self) -> &Value {
        &self.value
    }

    /// Consume the document, returning the JSON value.
    pub fn into_value(self) -> Value {
        self.value
    }

    /// The top-level `definitions` mapping.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::MissingDefinitions`] if the document has no
    /// `definitions` key or it is not a mapping.
    pub fn definitions(&self) -> Result<&Map<String, Value>, SchemaError> {
        self.value
            .get(DEFINITIONS_KEY)
            .and_then(Value::as_object)
            .ok_or(SchemaError::MissingDefinitions)
    }

    /// Resolve the `Message` definition into a standalone schema.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::MissingDefinitions`] / [`SchemaError::MissingRoot`]
    /// if the document lacks the mapping or the `Message` entry, and
    /// [`SchemaError::RootNotObject`] if `Message` is not a schema object.
    pub fn resolve(&self) -> Result<ResolvedSchema, SchemaError> {
        let definitions = self.definitions()?;

        let mut root = definitions
            .get(ROOT_DEFINITION)
            .cloned()
            .ok_or_else(|| SchemaError::MissingRoot(ROOT_DEFINITION.to_string()))?;

        let siblings: Map<String, Value> = definitions
            .iter()
            .filter(|(name, _)| name.as_str() != ROOT_DEFINITION)
            .map(|(name, schema)| (name.clone(), schema.clone()))
            .collect();

        let root_obj = root
            .as_object_mut()
            .ok_or_else(|| SchemaError::RootNotObject(ROOT_DEFINITION.to_string()))?;

        if root_obj.contains_key(DEFINITIONS_KEY) {
            tracing::warn!(
                root = ROOT_DEFINITION,
                "root definition carries its own 'definitions'; replacing them with the document's"
            );
        }
        root_obj.insert(DEFINITIONS_KEY.to_string(), Value::Object(siblings));

        Ok(ResolvedSchema { schema: root })
    }
}

/// The `Message` schema with every sibling definition attached.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedSchema {
    schema: Value,
}

impl ResolvedSchema {
    /// The resolved schema as JSON.
    pub fn as_value(&self) -> &Value {
        &self.schema
    }

    /// Names of the definitions attached to the root, in document order.
    pub fn definition_names(&self) -> Vec<&str> {
        self.schema
            .get(DEFINITIONS_KEY)
            .and_then(Value::as_object)
            .map(|defs| defs.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }
}

/// Where the schema document lives and how to compile it.
///
/// Nothing is cached: every call re-reads the file, so edits on disk are
/// picked up by the next request without a restart.
#[derive(Debug, Clone)]
pub struct SchemaSource {
    path: PathBuf,
    draft: SchemaDraft,
}

impl SchemaSource {
    /// Create a source for the document at `path`, compiled with `draft`.
    pub fn new(path: impl Into<PathBuf>, draft: SchemaDraft) -> Self {
        Self {
            path: path.into(),
            draft,
        }
    }

    /// Path of the schema document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Draft used for compilation.
    pub fn draft(&self) -> SchemaDraft {
        self.draft
    }

    /// Read and parse the document.
    pub fn load_document(&self) -> Result<SchemaDocument, SchemaError> {
        SchemaDocument::from_path(&self.path)
    }

    /// Read the document and resolve its `Message` definition.
    pub fn load_resolved(&self) -> Result<ResolvedSchema, SchemaError> {
        self.load_document()?.resolve()
    }

    /// Read, resolve and compile the document into a validator.
    pub fn compile(&self) -> Result<MessageValidator, SchemaError> {
        let resolved = self.load_resolved()?;
        MessageValidator::compile(&resolved, self.draft)
    }
}

/// Convert a `serde_yaml::Value` to a `serde_json::Value`.
///
/// Swagger documents routinely use bare numbers as mapping keys (HTTP
/// status codes under `responses`), which JSON cannot represent, so scalar
/// keys are stringified. Tags are dropped.
fn yaml_to_json_value(yaml: &serde_yaml::Value) -> Result<Value, String> {
    match yaml {
        serde_yaml::Value::Null => Ok(Value::Null),
        serde_yaml::Value::Bool(b) => Ok(Value::Bool(*b)),
        serde_yaml::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::Number(serde_json::Number::from(i)))
            } else if let Some(u) = n.as_u64() {
                Ok(Value::Number(serde_json::Number::from(u)))
            } else if let Some(f) = n.as_f64() {
                serde_json::Number::from_f64(f)
                    .map(Value::Number)
                    .ok_or_else(|| format!("cannot represent float {f} in JSON"))
            } else {
                Err(format!("unsupported YAML number: {n:?}"))
            }
        }
        serde_yaml::Value::String(s) => Ok(Value::String(s.clone())),
        serde_yaml::Value::Sequence(seq) => seq
            .iter()
            .map(yaml_to_json_value)
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        serde_yaml::Value::Mapping(map) => {
            let mut json_map = Map::new();
            for (k, v) in map {
                let key = match k {
                    serde_yaml::Value::String(s) => s.clone(),
                    serde_yaml::Value::Number(n) => n.to_string(),
                    serde_yaml::Value::Bool(b) => b.to_string(),
                    other => return Err(format!("unsupported YAML map key: {other:?}")),
                };
                json_map.insert(key, yaml_to_json_value(v)?);
            }
            Ok(Value::Object(json_map))
        }
        serde_yaml::Value::Tagged(tagged) => yaml_to_json_value(&tagged.value),
    }
}
