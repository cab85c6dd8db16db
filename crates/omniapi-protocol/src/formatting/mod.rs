pub mod request;
pub mod response;
pub mod types;

pub use request::{FormatParams, FormatParamsBuilder};
pub use response::{FormatResponse, FormatResult, FormatResultBuilder};
pub use types::{Diagnostic, FormatOptions, IndentStyle, IndentToken, Severity, SourceLanguage};
