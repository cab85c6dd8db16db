use omniapi_model::{ApiEnum, Variant, api_model, api_variant, wire_enum};

wire_enum! {
    pub enum Role {
        System => "system",
        User => "user",
        Assistant => "assistant",
        Tool => "tool",
    }
}

wire_enum! {
    pub enum FinishReason {
        Stop => "stop",
        Length => "length",
        ToolCalls => "tool_calls",
        ContentFilter => "content_filter",
    }
}

wire_enum! {
    pub enum PartKind {
        Text => "text",
        ImageUrl => "image_url",
    }
}

api_model! {
    pub struct ContentPart builder ContentPartBuilder {
        required kind: ApiEnum<PartKind> => "type",
        optional text: String => "text",
        optional image_url: String => "image_url",
    }
}

api_variant! {
    pub enum MessageContent {
        Text(String) => as_text,
        Parts(Vec<ContentPart>) => as_parts,
    }
}

api_model! {
    pub struct Message builder MessageBuilder {
        required role: ApiEnum<Role> => "role",
        required content: Variant<MessageContent> => "content",
        optional name: String => "name",
    }
}

api_variant! {
    pub enum StopSequence {
        Single(String) => as_single,
        Many(Vec<String>) => as_many,
    }
}

impl Message {
    /// A plain-text message.
    pub fn text(role: Role, content: impl Into<String>) -> omniapi_model::ModelResult<Self> {
        Message::builder()
            .role(ApiEnum::from(role))
            .content(Variant::new(content.into()))
            .build()
    }
}
