//! # Message Validation
//!
//! Checks a JSON document against a [`ResolvedSchema`] using the
//! `jsonschema` crate. Validation stops at the first violation, which is
//! reported with its instance path, the schema constraint it broke, and
//! the offending value.

use std::fmt;
use std::str::FromStr;

use jsonschema::{Draft, Validator};
use serde_json::Value;

use crate::document::{ResolvedSchema, ROOT_DEFINITION};
use crate::error::SchemaError;

/// JSON Schema dialect used to compile the resolved schema.
///
/// Swagger 2 documents are written against draft 4 keywords; draft 7 reads
/// them the same way and is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SchemaDraft {
    Draft4,
    Draft6,
    #[default]
    Draft7,
    Draft201909,
    Draft202012,
}

impl SchemaDraft {
    fn as_jsonschema(self) -> Draft {
        match self {
            Self::Draft4 => Draft::Draft4,
            Self::Draft6 => Draft::Draft6,
            Self::Draft7 => Draft::Draft7,
            Self::Draft201909 => Draft::Draft201909,
            Self::Draft202012 => Draft::Draft202012,
        }
    }
}

impl fmt::Display for SchemaDraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Draft4 => "draft4",
            Self::Draft6 => "draft6",
            Self::Draft7 => "draft7",
            Self::Draft201909 => "draft2019-09",
            Self::Draft202012 => "draft2020-12",
        };
        f.write_str(name)
    }
}

impl FromStr for SchemaDraft {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "draft4" | "4" => Ok(Self::Draft4),
            "draft6" | "6" => Ok(Self::Draft6),
            "draft7" | "7" => Ok(Self::Draft7),
            "draft2019-09" | "2019-09" => Ok(Self::Draft201909),
            "draft2020-12" | "2020-12" => Ok(Self::Draft202012),
            _ => Err(SchemaError::UnknownDraft(s.to_string())),
        }
    }
}

/// The first constraint a document violated.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationFailure {
    /// JSON Pointer to the offending value in the input (empty for the root).
    pub instance_path: String,
    /// JSON Pointer to the schema keyword that rejected it.
    pub schema_path: String,
    /// The offending value.
    pub instance: Value,
    /// Human-readable description of the mismatch.
    pub message: String,
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = if self.instance_path.is_empty() {
            "(root)"
        } else {
            self.instance_path.as_str()
        };
        writeln!(f, "{}", self.message)?;
        writeln!(f, "  instance path: {path}")?;
        writeln!(f, "  schema path: {}", self.schema_path)?;
        write!(f, "  instance: {}", self.instance)
    }
}

impl std::error::Error for ValidationFailure {}

/// Result of validating one document.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationOutcome {
    Success,
    Failure(ValidationFailure),
}

impl ValidationOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// The failure, if validation failed.
    pub fn failure(&self) -> Option<&ValidationFailure> {
        match self {
            Self::Success => None,
            Self::Failure(failure) => Some(failure),
        }
    }
}

/// A resolved `Message` schema compiled for repeated validation.
///
/// `Send + Sync`; one instance can serve concurrent validations.
pub struct MessageValidator {
    validator: Validator,
    draft: SchemaDraft,
}

impl fmt::Debug for MessageValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageValidator")
            .field("draft", &self.draft)
            .finish_non_exhaustive()
    }
}

impl MessageValidator {
    /// Compile a resolved schema.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Compile`] if the schema is invalid for `draft`
    /// or contains a `$ref` that does not resolve.
    pub fn compile(schema: &ResolvedSchema, draft: SchemaDraft) -> Result<Self, SchemaError> {
        let validator = jsonschema::options()
            .with_draft(draft.as_jsonschema())
            .build(schema.as_value())
            .map_err(|e| SchemaError::Compile {
                root: ROOT_DEFINITION.to_string(),
                reason: e.to_string(),
            })?;
        Ok(Self { validator, draft })
    }

    /// Draft this validator was compiled with.
    pub fn draft(&self) -> SchemaDraft {
        self.draft
    }

    /// Validate `instance`, reporting only the first violation.
    pub fn validate(&self, instance: &Value) -> ValidationOutcome {
        match self.validator.iter_errors(instance).next() {
            None => ValidationOutcome::Success,
            Some(error) => ValidationOutcome::Failure(ValidationFailure {
                instance_path: error.instance_path.to_string(),
                schema_path: error.schema_path.to_string(),
                instance: error.instance.clone().into_owned(),
                message: error.to_string(),
            }),
        }
    }
}

/// Validate `instance` against `schema` with the default draft.
///
/// Compiles the schema on every call. Use [`MessageValidator`] directly to
/// validate many documents against the same schema.
///
/// # Errors
///
/// Returns [`SchemaError::Compile`] if the schema itself is broken. A
/// non-conforming document is not an error; it yields
/// [`ValidationOutcome::Failure`].
pub fn validate(schema: &ResolvedSchema, instance: &Value) -> Result<ValidationOutcome, SchemaError> {
    let validator = MessageValidator::compile(schema, SchemaDraft::default())?;
    Ok(validator.validate(instance))
}
