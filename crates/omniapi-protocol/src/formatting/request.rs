use omniapi_model::{ApiEnum, api_params};

use crate::formatting::types::{FormatOptions, SourceLanguage};

api_params! {
    pub struct FormatParams builder FormatParamsBuilder {
        endpoint: "formatting.format",
        method: Post,
        path: "/v1/format",
        path_params {}
        headers {}
        query {}
        body {
            required content: String => "content",
            required language: ApiEnum<SourceLanguage> => "language",
            optional options: FormatOptions => "options",
        }
    }
}
