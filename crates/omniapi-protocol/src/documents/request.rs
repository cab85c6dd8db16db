use omniapi_model::{ApiEnum, Variant, api_params};

use crate::documents::types::{DocumentFormat, DocumentSource};

api_params! {
    /// Starts an asynchronous document conversion.
    pub struct ConvertDocumentParams builder ConvertDocumentParamsBuilder {
        endpoint: "documents.convert",
        method: Post,
        path: "/v1/documents/convert",
        path_params {}
        headers {
            optional idempotency_key: String => "Idempotency-Key",
        }
        query {}
        body {
            required source: Variant<DocumentSource> => "source",
            required target_format: ApiEnum<DocumentFormat> => "target_format",
            /// Detected from the file when omitted.
            optional source_format: ApiEnum<DocumentFormat> => "source_format",
            /// e.g. `1-3,7`.
            optional page_range: String => "page_range",
            optional webhook_url: String => "webhook_url",
        }
    }
}

api_params! {
    pub struct GetConversionParams builder GetConversionParamsBuilder {
        endpoint: "documents.get_conversion",
        method: Get,
        path: "/v1/documents/conversions/{conversion_id}",
        path_params { conversion_id => "conversion_id" }
        headers {}
        query {}
        body {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use omniapi_model::{ApiParams, HttpMethod};
    use serde_json::json;

    #[test]
    fn convert_params_put_fields_in_body() {
        let params = ConvertDocumentParams::builder()
            .source(Variant::new("https://files.example/report.docx".to_string()))
            .target_format(ApiEnum::from(DocumentFormat::Pdf))
            .page_range(None)
            .idempotency_key("conv-1".to_string())
            .build()
            .expect("build params");

        assert_eq!(ConvertDocumentParams::METHOD, HttpMethod::Post);
        assert_eq!(
            params.body().to_wire_value(),
            json!({
                "source": "https://files.example/report.docx",
                "target_format": "pdf"
            })
        );
        assert_eq!(
            params.headers().to_wire_value(),
            json!({ "Idempotency-Key": "conv-1" })
        );
        assert!(params.query().is_empty());
    }

    #[test]
    fn get_conversion_exposes_path_param() {
        let params = GetConversionParams::builder()
            .conversion_id("conv_123")
            .build()
            .expect("build params");
        assert_eq!(params.path_params(), vec![("conversion_id", "conv_123")]);
        assert!(params.body().is_empty());
    }
}
