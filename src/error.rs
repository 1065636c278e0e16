use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Everything that can go wrong turning a JSON payload into one of our
/// resources, or turning a resource back into JSON.
#[derive(Debug, Error)]
pub enum Error {
    /// A required key was absent (or `null`) in a JSON object
    #[error("missing field `{field}` in {type_name}")]
    MissingField {
        field: &'static str,
        type_name: &'static str,
    },

    /// A key was present but held the wrong kind of JSON value
    #[error("field `{field}` has the wrong type, expected {expected}")]
    TypeMismatch {
        field: &'static str,
        expected: &'static str,
    },

    /// Media metadata carried neither a `photo` nor a `video` object
    #[error("media metadata has neither photo nor video details")]
    UnrecognizedMediaType,

    #[error("malformed RFC3339 timestamp {0:?}")]
    MalformedTimestamp(String),

    #[error("invalid duration {0:?}")]
    InvalidDuration(String),

    #[error("unrecognized {enum_name} value {raw:?}")]
    UnrecognizedEnumValue {
        raw: String,
        enum_name: &'static str,
    },

    /// The input was not JSON at all, or a value failed to encode
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
