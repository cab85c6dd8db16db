use omniapi_model::api_variant;
use serde_json::Value;

api_variant! {
    /// A stored secret: an opaque string, or a JSON document.
    pub enum SecretValue {
        Text(String) => as_text,
        Json(Value) => as_json,
    }
}
