use omniapi_model::api_model;

use crate::ocr::types::OcrPage;

api_model! {
    pub struct OcrResult builder OcrResultBuilder {
        required id: String => "id",
        required pages: Vec<OcrPage> => "pages",
        optional text: String => "text",
        /// Detected dominant language.
        optional language: String => "language",
    }
}

pub type ExtractTextResponse = OcrResult;
