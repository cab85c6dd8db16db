use std::fmt::Display;

pub type ModelResult<T> = Result<T, InvalidDataError>;

/// The single failure kind of the model layer.
///
/// Shape mismatches, missing required fields, unrecognized enum values and
/// unmatched variants all surface as this error; the message tells them apart.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid data: {message}")]
pub struct InvalidDataError {
    message: String,
}

impl InvalidDataError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn missing_field(key: &str) -> Self {
        Self::new(format!("missing required field `{key}`"))
    }

    pub fn shape(key: &str, err: impl Display) -> Self {
        Self::new(format!("field `{key}` has unexpected shape: {err}"))
    }

    pub fn serialize(key: &str, err: impl Display) -> Self {
        Self::new(format!("field `{key}` could not be serialized: {err}"))
    }

    pub fn unknown_enum(type_name: &str, raw: impl std::fmt::Debug) -> Self {
        Self::new(format!("{raw:?} is not a known {type_name} value"))
    }

    pub fn no_variant(type_name: &str) -> Self {
        Self::new(format!("value did not match any {type_name} variant"))
    }

    pub fn missing_path_param(name: &str) -> Self {
        Self::new(format!("missing path parameter `{name}`"))
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
