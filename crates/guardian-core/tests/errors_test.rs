use guardian_core::errors::*;

#[test]
fn persistence_unavailable_carries_operation_and_reason() {
    let err = GuardianError::persistence("upsert_event", "database is locked");
    let msg = err.to_string();
    assert!(msg.contains("upsert_event"));
    assert!(msg.contains("database is locked"));
}

#[test]
fn malformed_pattern_carries_id() {
    let err = GuardianError::MalformedPattern {
        pattern_id: "abc123".into(),
        reason: "bad rule".into(),
    };
    assert!(err.to_string().contains("abc123"));
}

// --- From impls ---

#[test]
fn storage_error_converts_to_guardian_error() {
    let storage_err = StorageError::SqliteError {
        message: "disk full".into(),
    };
    let err: GuardianError = storage_err.into();
    assert!(matches!(err, GuardianError::StorageError(_)));
}

#[test]
fn validation_error_converts_to_guardian_error() {
    let err: GuardianError = ValidationError::MissingDocumentId.into();
    assert!(matches!(err, GuardianError::ValidationError(_)));
}

#[test]
fn config_error_converts_to_guardian_error() {
    let err: GuardianError = ConfigError::FileNotFound {
        path: "/nope.toml".into(),
    }
    .into();
    assert!(matches!(err, GuardianError::ConfigError(_)));
    assert!(err.to_string().contains("/nope.toml"));
}

#[test]
fn serialization_error_converts_to_guardian_error() {
    let json_err = serde_json::from_str::<String>("not valid json").unwrap_err();
    let err: GuardianError = json_err.into();
    assert!(matches!(err, GuardianError::SerializationError(_)));
}

// --- Sub-error variants carry context ---

#[test]
fn storage_error_migration_failed_carries_version() {
    let err = StorageError::MigrationFailed {
        version: 2,
        reason: "syntax error".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains('2'));
    assert!(msg.contains("syntax error"));
}

#[test]
fn validation_error_names_offending_field() {
    let err = ValidationError::NonStringField {
        map: "verified".into(),
        field: "topic".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("verified"));
    assert!(msg.contains("topic"));
}
