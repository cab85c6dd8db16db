use omniapi_model::api_model;

use crate::formatting::types::Diagnostic;

api_model! {
    pub struct FormatResult builder FormatResultBuilder {
        required formatted: String => "formatted",
        /// False when the input was already formatted.
        required changed: bool => "changed",
        optional diagnostics: Vec<Diagnostic> => "diagnostics",
    }
}

pub type FormatResponse = FormatResult;
