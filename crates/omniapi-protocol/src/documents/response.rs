use omniapi_model::{ApiEnum, Timestamp, api_model};

use crate::documents::types::{ConversionError, ConversionStatus, DocumentFormat};

api_model! {
    pub struct Conversion builder ConversionBuilder {
        required id: String => "id",
        required status: ApiEnum<ConversionStatus> => "status",
        required target_format: ApiEnum<DocumentFormat> => "target_format",
        /// Set once the conversion succeeded.
        optional output_url: String => "output_url",
        optional page_count: i64 => "page_count",
        optional error: ConversionError => "error",
        required created_at: Timestamp => "created_at",
        optional completed_at: Timestamp => "completed_at",
    }
}

pub type ConvertDocumentResponse = Conversion;
pub type GetConversionResponse = Conversion;

#[cfg(test)]
mod tests {
    use super::*;
    use omniapi_model::Validate;

    #[test]
    fn deserializes_failed_conversion() {
        let json = r#"
        {
          "id": "conv_1",
          "status": "failed",
          "target_format": "pdf",
          "error": { "code": "unsupported_input", "message": "encrypted file" },
          "created_at": "2025-03-08T10:15:30Z"
        }
        "#;

        let parsed: Conversion = serde_json::from_str(json).expect("deserialize conversion");
        assert_eq!(parsed.status().unwrap(), ConversionStatus::Failed);
        assert_eq!(parsed.error().unwrap().unwrap().code().unwrap(), "unsupported_input");
        assert_eq!(parsed.output_url().unwrap(), None);
        assert!(parsed.validate().is_ok());
    }

    #[test]
    fn new_status_value_is_tolerated_until_validate() {
        let json = r#"
        {
          "id": "conv_2",
          "status": "throttled",
          "target_format": "epub",
          "created_at": "2025-03-08T10:15:30Z"
        }
        "#;

        let parsed: Conversion = serde_json::from_str(json).expect("deserialize conversion");
        assert_eq!(parsed.status().unwrap().raw(), "throttled");
        assert!(parsed.validate().is_err());
        assert_eq!(
            serde_json::to_value(&parsed).unwrap()["target_format"],
            "epub"
        );
    }
}
