//! Runtime wiring: every operation through one context object.

use std::collections::HashMap;
use std::io::Write;

use guardian_core::errors::{ConfigError, GuardianError, ValidationError};
use guardian_core::models::{CorrectionRequest, Metadata};
use guardian_runtime::{GuardianRuntime, RuntimeOptions};

const AI_POLICY: &str = "This policy addresses artificial intelligence risks across agencies. \
     Responsible artificial intelligence governance requires human oversight.";

fn meta(pairs: &[(&str, &str)]) -> Metadata {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn topic_request() -> CorrectionRequest {
    CorrectionRequest {
        document_id: "d1".to_string(),
        original: meta(&[("topic", "General")]),
        verified: meta(&[("topic", "AI")]),
        content: AI_POLICY.to_string(),
        document_type: "policy".to_string(),
        source_type: "upload".to_string(),
    }
}

fn in_memory() -> GuardianRuntime {
    GuardianRuntime::new(RuntimeOptions::default()).unwrap()
}

// ── Construction ────────────────────────────────────────────────────────────

#[test]
fn defaults_are_in_memory() {
    let rt = in_memory();
    assert!(!rt.is_persistent());
    assert_eq!(rt.config().optimizer.alpha, 0.1);
}

#[test]
fn toml_config_applied() {
    let rt = GuardianRuntime::new(RuntimeOptions {
        config_toml: Some("[optimizer]\nalpha = 0.5\n".to_string()),
        ..RuntimeOptions::default()
    })
    .unwrap();
    assert_eq!(rt.q_update("s", "a", 1.0, "s2"), 0.5);
}

#[test]
fn invalid_config_rejected() {
    let err = GuardianRuntime::new(RuntimeOptions {
        config_toml: Some("[optimizer]\ngamma = 2.0\n".to_string()),
        ..RuntimeOptions::default()
    })
    .err()
    .expect("gamma out of range");
    assert!(matches!(
        err,
        GuardianError::ConfigError(ConfigError::ValidationFailed { .. })
    ));
}

#[test]
fn configured_db_path_is_persistent() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("configured.db");
    let rt = GuardianRuntime::new(RuntimeOptions {
        config_toml: Some(format!("[storage]\ndb_path = {:?}\n", db.display().to_string())),
        ..RuntimeOptions::default()
    })
    .unwrap();
    assert!(rt.is_persistent());
    assert!(db.exists());
}

#[test]
fn explicit_db_path_wins_over_config() {
    let dir = tempfile::tempdir().unwrap();
    let configured = dir.path().join("configured.db");
    let explicit = dir.path().join("explicit.db");
    let rt = GuardianRuntime::new(RuntimeOptions {
        db_path: Some(explicit.clone()),
        config_toml: Some(format!(
            "[storage]\ndb_path = {:?}\n",
            configured.display().to_string()
        )),
        ..RuntimeOptions::default()
    })
    .unwrap();
    assert!(rt.is_persistent());
    assert!(explicit.exists());
    assert!(!configured.exists());
}

#[test]
fn config_file_with_env_overrides() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("guardian.toml");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "[optimizer]\nalpha = 0.5").unwrap();
    drop(file);
    let db = dir.path().join("from-env.db").display().to_string();
    let env: HashMap<&str, String> = HashMap::from([
        ("GUARDIAN_OPTIMIZER_ALPHA", "0.25".to_string()),
        ("GUARDIAN_DB_PATH", db.clone()),
    ]);

    let opts = RuntimeOptions {
        config_path: Some(path),
        ..RuntimeOptions::default()
    };
    let config = opts
        .resolve_config_with(|key| env.get(key).cloned())
        .unwrap();
    assert_eq!(config.optimizer.alpha, 0.25);
    assert_eq!(config.storage.db_path.as_deref(), Some(db.as_str()));

    let rt = GuardianRuntime::with_config(config).unwrap();
    assert!(rt.is_persistent());
    assert_eq!(rt.q_update("s", "a", 1.0, "end"), 0.25);
    assert!(std::path::Path::new(&db).exists());
}

#[test]
fn missing_config_file_rejected() {
    let err = GuardianRuntime::new(RuntimeOptions {
        config_path: Some("/definitely/not/here.toml".into()),
        ..RuntimeOptions::default()
    })
    .err()
    .expect("missing file");
    assert!(matches!(
        err,
        GuardianError::ConfigError(ConfigError::FileNotFound { .. })
    ));
}

#[test]
fn overrides_apply_to_inline_toml() {
    let opts = RuntimeOptions {
        config_toml: Some("[optimizer]\nalpha = 0.5\n".to_string()),
        ..RuntimeOptions::default()
    };
    let config = opts
        .resolve_config_with(|key| (key == "GUARDIAN_OPTIMIZER_GAMMA").then(|| "0.5".to_string()))
        .unwrap();
    assert_eq!(config.optimizer.alpha, 0.5);
    assert_eq!(config.optimizer.gamma, 0.5);
    assert_eq!(config.storage.db_path, None);
}

// ── Operations ──────────────────────────────────────────────────────────────

#[test]
fn assess_returns_bounded_scores() {
    let rt = in_memory();
    let scores = rt.assess(AI_POLICY, "AI Policy");
    assert!(scores.ai_cybersecurity_score <= 100);
    assert!((1..=5).contains(&scores.quantum_cybersecurity_score));
    assert!((0.0..=1.0).contains(&scores.policy_gap));

    let batch = rt.assess_batch(&[
        (AI_POLICY.to_string(), "AI Policy".to_string()),
        (String::new(), String::new()),
    ]);
    assert_eq!(batch.len(), 2);
    assert_eq!(batch[0], scores);
}

#[test]
fn correction_then_application() {
    let rt = in_memory();
    let pattern_id = rt.record_correction(&topic_request()).unwrap();
    let adjusted = rt.apply_patterns(
        "Guidance for artificial intelligence procurement.",
        &meta(&[("topic", "General")]),
    );
    assert_eq!(adjusted, meta(&[("topic", "AI")]));

    assert!(rt.report_outcome(&pattern_id, true).unwrap());
    let stats = rt.learning_stats().unwrap();
    assert_eq!(stats.event_count, 1);
    assert_eq!(stats.eligible_pattern_count, 1);
}

#[test]
fn json_correction_payload() {
    let rt = in_memory();
    let payload = serde_json::json!({
        "document_id": "d9",
        "original": {"organization": ""},
        "verified": {"organization": "NIST"},
        "content": "NIST guidance on zero trust architecture."
    })
    .to_string();
    let id = rt.record_correction_json(&payload).unwrap();
    assert_eq!(id.len(), 64);

    let err = rt.record_correction_json(r#"{"verified": {}}"#).unwrap_err();
    assert!(matches!(
        err,
        GuardianError::ValidationError(ValidationError::MissingDocumentId)
    ));
    assert!(matches!(
        rt.record_correction_json("not json").unwrap_err(),
        GuardianError::SerializationError(_)
    ));
}

#[test]
fn q_update_and_recommend() {
    let rt = in_memory();
    assert!((rt.q_update("s", "tighten", 1.0, "end") - 0.1).abs() < 1e-12);
    assert!((rt.q_update("s", "tighten", 1.0, "end") - 0.19).abs() < 1e-12);
    rt.q_update("s", "relax", -1.0, "end");
    assert_eq!(rt.recommend("s").as_deref(), Some("tighten"));
    assert_eq!(rt.recommend("unseen"), None);
}

// ── Persistence ─────────────────────────────────────────────────────────────

#[test]
fn file_backed_runtime_restores_state() {
    let dir = tempfile::tempdir().unwrap();
    let opts = RuntimeOptions {
        db_path: Some(dir.path().join("guardian.db")),
        ..RuntimeOptions::default()
    };
    {
        let rt = GuardianRuntime::new(opts.clone()).unwrap();
        assert!(rt.is_persistent());
        rt.record_correction(&topic_request()).unwrap();
        rt.q_update("s", "tighten", 1.0, "end");
    }

    let rt = GuardianRuntime::new(opts).unwrap();
    assert!((rt.optimizer().q_value("s", "tighten") - 0.1).abs() < 1e-12);
    assert_eq!(rt.recommend("s").as_deref(), Some("tighten"));
    let adjusted = rt.apply_patterns(AI_POLICY, &Metadata::new());
    assert_eq!(adjusted.get("topic").map(String::as_str), Some("AI"));
}

#[test]
fn tracing_init_is_idempotent() {
    guardian_runtime::tracing_setup::init_tracing();
    guardian_runtime::tracing_setup::init_tracing();
    guardian_runtime::tracing_setup::init_tracing_json();
    let rt = in_memory();
    rt.assess("short", "");
}
