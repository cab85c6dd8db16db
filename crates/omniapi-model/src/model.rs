use serde_json::Value;

use crate::error::{InvalidDataError, ModelResult};
use crate::raw::RawData;
use crate::validate::Validate;

/// A response-direction model backed by a single raw container.
pub trait ApiModel: Sized + Validate {
    /// Wraps raw data without checking it; call [`Validate::validate`] to check.
    fn from_raw_unchecked(raw: RawData) -> Self;

    fn raw(&self) -> &RawData;

    fn to_wire_value(&self) -> Value {
        self.raw().to_wire_value()
    }

    /// Parses a JSON object. Only the top-level shape is checked here.
    fn from_json_str(text: &str) -> ModelResult<Self> {
        serde_json::from_str::<RawData>(text)
            .map(Self::from_raw_unchecked)
            .map_err(|err| InvalidDataError::new(format!("expected a JSON object: {err}")))
    }
}
