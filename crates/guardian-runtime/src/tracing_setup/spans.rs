//! Spans for the hot operations.

/// Create an assessment span.
#[macro_export]
macro_rules! assess_span {
    ($content_chars:expr) => {
        tracing::info_span!("guardian.assess", content_chars = $content_chars)
    };
}

/// Create a learning span.
#[macro_export]
macro_rules! learning_span {
    ($document_id:expr) => {
        tracing::info_span!("guardian.learning", document_id = %$document_id)
    };
}

/// Create a Q-update span.
#[macro_export]
macro_rules! q_update_span {
    ($state:expr, $action:expr) => {
        tracing::debug_span!("guardian.q_update", state = %$state, action = %$action)
    };
}
