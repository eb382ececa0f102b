use thiserror::Error;

/// Errors that can occur at the JSON boundary of the codec.
///
/// The encode/decode transforms themselves never fail; only whole-shape
/// (de)serialization does.
#[derive(Error, Debug, Clone)]
pub enum CodecError {
    #[error("Failed to parse editor shape JSON: {0}")]
    Json(String),
}

impl From<serde_json::Error> for CodecError {
    fn from(error: serde_json::Error) -> Self {
        CodecError::Json(error.to_string())
    }
}
