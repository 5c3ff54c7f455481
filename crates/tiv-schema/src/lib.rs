//! # tiv-schema — Schema Loading & Message Validation
//!
//! Loads the Translator Interchange schema document and validates messages
//! against its `Message` definition.
//!
//! ## Loading (`document`)
//!
//! [`SchemaDocument`] parses the Swagger-style YAML/JSON document.
//! [`SchemaDocument::resolve`] lifts `Message` out of `definitions` and
//! re-attaches every other definition under the root's own `definitions`
//! key, so `#/definitions/<name>` references keep resolving.
//! [`SchemaSource`] ties a document path to a draft and re-reads the file
//! on every call.
//!
//! ## Validation (`validate`)
//!
//! [`MessageValidator`] compiles a [`ResolvedSchema`] with the `jsonschema`
//! crate and reports the first violation as a [`ValidationFailure`].
//!
//! ## Crate Policy
//!
//! - No HTTP, no global state. Callers pass a [`SchemaSource`] around.
//! - Every problem with the schema document itself is a [`SchemaError`];
//!   a non-conforming message is a [`ValidationOutcome::Failure`], never
//!   an error.

pub mod document;
pub mod error;
pub mod validate;

pub use document::{DocumentFormat, ResolvedSchema, SchemaDocument, SchemaSource, ROOT_DEFINITION};
pub use error::SchemaError;
pub use validate::{validate, MessageValidator, SchemaDraft, ValidationFailure, ValidationOutcome};
