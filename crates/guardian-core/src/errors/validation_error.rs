/// Rejections of malformed correction payloads.
///
/// Raised before any hashing or storage takes place.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("document_id is missing or empty")]
    MissingDocumentId,

    #[error("verified must be a map of field names to strings, found {found}")]
    VerifiedNotAMap { found: String },

    #[error("field {field} in {map} must be a string")]
    NonStringField { map: String, field: String },

    #[error("payload must be a JSON object, found {found}")]
    NotAnObject { found: String },
}
