use thiserror::Error;

/// Errors raised while ingesting a persisted theme record
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("theme record must be a JSON object, got {found}")]
    NotAnObject { found: &'static str },

    #[error("malformed JSON in token group `{group}`: {source}")]
    MalformedGroup {
        group: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("token group `{group}` must be an object, got {found}")]
    GroupNotObject {
        group: &'static str,
        found: &'static str,
    },

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
