//! Integration test: load the repository's `translator_interchange.yaml`,
//! resolve its `Message` definition, and validate representative messages.
//! Also checks that a `SchemaSource` sees on-disk edits without being rebuilt.

use std::io::Write;
use std::path::PathBuf;

use serde_json::json;
use tiv_schema::{SchemaDraft, SchemaError, SchemaSource, ValidationOutcome};

/// Find the repository root.
fn repo_root() -> PathBuf {
    let mut dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    dir.pop(); // crates/
    dir.pop(); // repo root
    dir
}

fn interchange_source() -> SchemaSource {
    SchemaSource::new(
        repo_root().join("translator_interchange.yaml"),
        SchemaDraft::default(),
    )
}

fn sample_message() -> serde_json::Value {
    json!({
        "context": "https://raw.githubusercontent.com/biolink/biolink-model/master/context.jsonld",
        "reasoner_id": "RTX",
        "n_results": 1,
        "question_graph": {
            "nodes": [
                { "id": "n00", "curie": "OMIM:603903", "type": "disease" },
                { "id": "n01", "type": "protein" }
            ],
            "edges": [
                { "id": "e00", "source_id": "n00", "target_id": "n01" }
            ]
        },
        "knowledge_graph": {
            "nodes": [
                { "id": "OMIM:603903", "name": "Sickle cell anemia", "type": ["disease"] },
                { "id": "UniProtKB:P00738", "name": "Haptoglobin", "type": ["protein"] }
            ],
            "edges": [
                {
                    "id": "553903",
                    "source_id": "OMIM:603903",
                    "target_id": "UniProtKB:P00738",
                    "type": "affects",
                    "confidence": 0.99
                }
            ]
        },
        "results": [
            {
                "node_bindings": { "n00": "OMIM:603903", "n01": "UniProtKB:P00738" },
                "edge_bindings": { "e00": ["553903"] }
            }
        ]
    })
}

#[test]
fn test_interchange_document_resolves() {
    let resolved = interchange_source().load_resolved().unwrap();
    let names = resolved.definition_names();
    for expected in ["QueryGraph", "QNode", "KnowledgeGraph", "Edge", "Result"] {
        assert!(names.contains(&expected), "missing {expected} in {names:?}");
    }
    assert!(!names.contains(&"Message"));
}

#[test]
fn test_interchange_document_compiles_under_every_draft() {
    for draft in [
        SchemaDraft::Draft4,
        SchemaDraft::Draft6,
        SchemaDraft::Draft7,
        SchemaDraft::Draft201909,
        SchemaDraft::Draft202012,
    ] {
        let source = SchemaSource::new(repo_root().join("translator_interchange.yaml"), draft);
        let validator = source.compile();
        assert!(validator.is_ok(), "{draft}: {:?}", validator.err());
    }
}

#[test]
fn test_sample_message_validates() {
    let validator = interchange_source().compile().unwrap();
    assert_eq!(validator.validate(&sample_message()), ValidationOutcome::Success);
}

#[test]
fn test_empty_message_names_missing_field() {
    let validator = interchange_source().compile().unwrap();
    let outcome = validator.validate(&json!({}));
    let failure = outcome.failure().expect("empty message must fail");
    assert!(failure.message.contains("question_graph"), "{failure}");
}

#[test]
fn test_bad_confidence_reports_nested_path() {
    let validator = interchange_source().compile().unwrap();
    let mut message = sample_message();
    message["knowledge_graph"]["edges"][0]["confidence"] = json!(7);
    let outcome = validator.validate(&message);
    let failure = outcome.failure().expect("confidence above 1 must fail");
    assert_eq!(failure.instance_path, "/knowledge_graph/edges/0/confidence");
}

#[test]
fn test_wrong_typed_binding_is_rejected() {
    let validator = interchange_source().compile().unwrap();
    let mut message = sample_message();
    message["results"][0]["edge_bindings"]["e00"] = json!("553903");
    let outcome = validator.validate(&message);
    let failure = outcome.failure().expect("edge binding must be an array");
    assert_eq!(failure.instance_path, "/results/0/edge_bindings/e00");
    assert!(failure.message.contains("array"), "{failure}");
}

#[test]
fn test_source_sees_edits_without_rebuild() {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    write!(
        file,
        "definitions:\n  Message:\n    type: object\n    required: [alpha]\n"
    )
    .unwrap();
    file.flush().unwrap();

    let source = SchemaSource::new(file.path(), SchemaDraft::default());
    let before = source.compile().unwrap().validate(&json!({ "beta": 1 }));
    assert!(!before.is_success());

    std::fs::write(
        file.path(),
        "definitions:\n  Message:\n    type: object\n    required: [beta]\n",
    )
    .unwrap();

    let after = source.compile().unwrap().validate(&json!({ "beta": 1 }));
    assert!(after.is_success());
}

#[test]
fn test_json_document_is_accepted() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(
        file,
        r##"{{"definitions": {{"Message": {{"type": "object", "required": ["id"], "properties": {{"id": {{"$ref": "#/definitions/Id"}}}}}}, "Id": {{"type": "string"}}}}}}"##
    )
    .unwrap();
    file.flush().unwrap();

    let validator = SchemaSource::new(file.path(), SchemaDraft::default())
        .compile()
        .unwrap();
    assert!(validator.validate(&json!({ "id": "x" })).is_success());
    assert!(!validator.validate(&json!({ "id": 1 })).is_success());
}

#[test]
fn test_document_without_message_is_a_configuration_error() {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    write!(file, "definitions:\n  Query:\n    type: object\n").unwrap();
    file.flush().unwrap();

    let err = SchemaSource::new(file.path(), SchemaDraft::default())
        .compile()
        .unwrap_err();
    assert!(matches!(err, SchemaError::MissingRoot(_)), "{err}");
}
