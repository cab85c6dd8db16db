pub mod request;
pub mod response;
pub mod types;

pub use request::{ExtractTextParams, ExtractTextParamsBuilder};
pub use response::{ExtractTextResponse, OcrResult, OcrResultBuilder};
pub use types::{BlockKind, BoundingBox, OcrBlock, OcrPage};
