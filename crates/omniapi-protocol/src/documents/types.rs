use omniapi_model::{api_model, api_variant, wire_enum};

wire_enum! {
    pub enum DocumentFormat {
        Pdf => "pdf",
        Docx => "docx",
        Html => "html",
        Markdown => "markdown",
        Txt => "txt",
    }
}

wire_enum! {
    pub enum ConversionStatus {
        Queued => "queued",
        Processing => "processing",
        Succeeded => "succeeded",
        Failed => "failed",
    }
}

api_model! {
    /// A document uploaded inline instead of by URL.
    pub struct InlineDocument builder InlineDocumentBuilder {
        /// Base64-encoded file content.
        required content: String => "content",
        required filename: String => "filename",
        optional mime_type: String => "mime_type",
    }
}

api_variant! {
    /// Where the input document comes from. A bare string is a URL.
    pub enum DocumentSource {
        Url(String) => as_url,
        Inline(InlineDocument) => as_inline,
    }
}

api_model! {
    pub struct ConversionError builder ConversionErrorBuilder {
        required code: String => "code",
        required message: String => "message",
    }
}
