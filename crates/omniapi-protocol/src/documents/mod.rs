pub mod request;
pub mod response;
pub mod types;

pub use request::{
    ConvertDocumentParams, ConvertDocumentParamsBuilder, GetConversionParams,
    GetConversionParamsBuilder,
};
pub use response::{Conversion, ConversionBuilder, ConvertDocumentResponse, GetConversionResponse};
pub use types::{ConversionError, ConversionStatus, DocumentFormat, DocumentSource, InlineDocument};
