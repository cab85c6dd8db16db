use omniapi_model::{ApiEnum, Variant, api_model, api_variant, wire_enum};

wire_enum! {
    pub enum SourceLanguage {
        Json => "json",
        Yaml => "yaml",
        Toml => "toml",
        Markdown => "markdown",
        Sql => "sql",
        Rust => "rust",
        Python => "python",
        TypeScript => "typescript",
    }
}

wire_enum! {
    pub enum IndentToken {
        Tab => "tab",
    }
}

api_variant! {
    /// Either a number of spaces or the `"tab"` token.
    pub enum IndentStyle {
        Spaces(i64) => as_spaces,
        Token(ApiEnum<IndentToken>) => as_token,
    }
}

wire_enum! {
    pub enum Severity {
        Error => "error",
        Warning => "warning",
        Info => "info",
    }
}

api_model! {
    pub struct FormatOptions builder FormatOptionsBuilder {
        optional indent: Variant<IndentStyle> => "indent",
        optional line_width: i64 => "line_width",
        optional trailing_newline: bool => "trailing_newline",
    }
}

api_model! {
    pub struct Diagnostic builder DiagnosticBuilder {
        required message: String => "message",
        optional severity: ApiEnum<Severity> => "severity",
        optional line: i64 => "line",
        optional column: i64 => "column",
    }
}
