use omniapi_model::{Variant, api_params};

use crate::documents::types::DocumentSource;

api_params! {
    pub struct ExtractTextParams builder ExtractTextParamsBuilder {
        endpoint: "ocr.extract",
        method: Post,
        path: "/v1/ocr/extract",
        path_params {}
        headers {}
        query {
            /// Return only the concatenated text, without page blocks.
            optional text_only: bool => "text_only",
        }
        body {
            required document: Variant<DocumentSource> => "document",
            /// ISO 639-1 hints, tried in order.
            optional languages: Vec<String> => "languages",
            optional detect_layout: bool => "detect_layout",
        }
    }
}
