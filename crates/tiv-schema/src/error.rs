//! # Configuration Errors
//!
//! Everything that can go wrong before a message is ever looked at: the
//! schema document is missing, unparseable, lacks the `Message` definition,
//! or does not compile into a validator. None of these are the caller's
//! fault, and no validation request can succeed while one is present.

use thiserror::Error;

/// Error raised while loading, resolving or compiling the schema document.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// The schema document could not be read from disk.
    #[error("cannot read schema document '{path}': {source}")]
    Io {
        /// Path that was read.
        path: String,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The schema document is not valid YAML/JSON.
    #[error("schema document '{path}' is not valid {format}: {reason}")]
    Parse {
        /// Path (or `<inline>`) of the document.
        path: String,
        /// Format the document was parsed as.
        format: &'static str,
        /// Parser message.
        reason: String,
    },

    /// The document parsed, but has no top-level `definitions` mapping.
    #[error("schema document has no top-level 'definitions' mapping")]
    MissingDefinitions,

    /// The `definitions` mapping has no `Message` entry.
    #[error("schema document defines no '{0}' schema")]
    MissingRoot(String),

    /// The root definition exists but is not a schema object, so no
    /// `definitions` can be attached to it.
    #[error("'{0}' definition is not a schema object")]
    RootNotObject(String),

    /// The resolved schema was rejected by the JSON Schema compiler
    /// (unresolvable `$ref`, keyword with an invalid value, ...).
    #[error("resolved '{root}' schema does not compile: {reason}")]
    Compile {
        /// Name of the root definition.
        root: String,
        /// Compiler message.
        reason: String,
    },

    /// Unknown JSON Schema draft name.
    #[error("unknown schema draft '{0}' (expected one of: draft4, draft6, draft7, draft2019-09, draft2020-12)")]
    UnknownDraft(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_root_names_the_definition() {
        let err = SchemaError::MissingRoot("Message".to_string());
        assert_eq!(err.to_string(), "schema document defines no 'Message' schema");
    }

    #[test]
    fn io_error_keeps_source() {
        let err = SchemaError::Io {
            path: "translator_interchange.yaml".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.to_string().contains("translator_interchange.yaml"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
