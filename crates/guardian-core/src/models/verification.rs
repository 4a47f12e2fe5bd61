use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::ValidationError;

/// Extracted document metadata: field name to value.
pub type Metadata = BTreeMap<String, String>;

/// How a verified field differs from the originally extracted one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CorrectionKind {
    MissingFieldAdded,
    IncorrectFieldRemoved,
    FieldExpanded,
    FieldTruncated,
    FieldReformatted,
    FieldReplaced,
}

impl CorrectionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MissingFieldAdded => "missing_field_added",
            Self::IncorrectFieldRemoved => "incorrect_field_removed",
            Self::FieldExpanded => "field_expanded",
            Self::FieldTruncated => "field_truncated",
            Self::FieldReformatted => "field_reformatted",
            Self::FieldReplaced => "field_replaced",
        }
    }
}

impl fmt::Display for CorrectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One field-level difference between original and verified metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldCorrection {
    pub field: String,
    pub kind: CorrectionKind,
    pub original: String,
    pub corrected: String,
}

/// One human correction of extracted metadata, upserted by `content_hash`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationEvent {
    /// Assigned on first capture and kept across re-submissions.
    pub event_id: String,
    pub document_id: String,
    pub original: Metadata,
    pub verified: Metadata,
    pub corrections: Vec<FieldCorrection>,
    pub content_sample: String,
    pub content_hash: String,
    pub confidence_per_field: BTreeMap<String, f64>,
    pub document_type: String,
    pub source_type: String,
    pub timestamp: DateTime<Utc>,
}

/// Whether an event upsert inserted a new row or overwrote an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventUpsert {
    Inserted,
    Overwritten,
}

/// Input to `record_correction`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrectionRequest {
    pub document_id: String,
    #[serde(default)]
    pub original: Metadata,
    pub verified: Metadata,
    #[serde(default)]
    pub content: String,
    #[serde(default = "unknown")]
    pub document_type: String,
    #[serde(default = "unknown")]
    pub source_type: String,
}

fn unknown() -> String {
    "unknown".to_string()
}

impl CorrectionRequest {
    /// Check the structural requirements that typed construction cannot enforce.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.document_id.trim().is_empty() {
            return Err(ValidationError::MissingDocumentId);
        }
        Ok(())
    }

    /// Build a request from an untyped JSON payload.
    ///
    /// `verified` must be an object; `original` may be absent or null.
    /// Null field values are read as empty strings.
    pub fn from_value(value: &Value) -> Result<Self, ValidationError> {
        let obj = value.as_object().ok_or_else(|| ValidationError::NotAnObject {
            found: json_kind(value).to_string(),
        })?;

        let document_id = match obj.get("document_id") {
            Some(Value::String(s)) if !s.trim().is_empty() => s.clone(),
            _ => return Err(ValidationError::MissingDocumentId),
        };

        let verified = match obj.get("verified") {
            Some(v @ Value::Object(_)) => metadata_from_value("verified", v)?,
            other => {
                return Err(ValidationError::VerifiedNotAMap {
                    found: other.map(json_kind).unwrap_or("nothing").to_string(),
                })
            }
        };

        let original = match obj.get("original") {
            None | Some(Value::Null) => Metadata::new(),
            Some(v) => metadata_from_value("original", v)?,
        };

        let text = |key: &str, fallback: &str| {
            obj.get(key)
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| fallback.to_string())
        };

        Ok(Self {
            document_id,
            original,
            verified,
            content: text("content", ""),
            document_type: text("document_type", "unknown"),
            source_type: text("source_type", "unknown"),
        })
    }
}

fn metadata_from_value(map: &str, value: &Value) -> Result<Metadata, ValidationError> {
    let obj = value.as_object().ok_or_else(|| ValidationError::NonStringField {
        map: map.to_string(),
        field: "<root>".to_string(),
    })?;
    obj.iter()
        .map(|(k, v)| match v {
            Value::String(s) => Ok((k.clone(), s.clone())),
            Value::Null => Ok((k.clone(), String::new())),
            _ => Err(ValidationError::NonStringField {
                map: map.to_string(),
                field: k.clone(),
            }),
        })
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
