use omniapi_model::{ApiEnum, api_model, wire_enum};

wire_enum! {
    pub enum BlockKind {
        Paragraph => "paragraph",
        Line => "line",
        Word => "word",
        Table => "table",
    }
}

api_model! {
    /// Page-relative box, all values in `0.0..=1.0`.
    pub struct BoundingBox builder BoundingBoxBuilder {
        required x: f64 => "x",
        required y: f64 => "y",
        required width: f64 => "width",
        required height: f64 => "height",
    }
}

api_model! {
    pub struct OcrBlock builder OcrBlockBuilder {
        required text: String => "text",
        required confidence: f64 => "confidence",
        optional kind: ApiEnum<BlockKind> => "kind",
        optional bbox: BoundingBox => "bbox",
    }
}

api_model! {
    pub struct OcrPage builder OcrPageBuilder {
        /// 1-based.
        required page_number: i64 => "page_number",
        required blocks: Vec<OcrBlock> => "blocks",
        optional width: i64 => "width",
        optional height: i64 => "height",
    }
}
