pub mod request;
pub mod response;
pub mod types;

pub use request::{CompleteParams, CompleteParamsBuilder};
pub use response::{
    Choice, ChoiceBuilder, CompleteResponse, Completion, CompletionBuilder, TokenUsage,
    TokenUsageBuilder,
};
pub use types::{
    ContentPart, ContentPartBuilder, FinishReason, Message, MessageBuilder, MessageContent,
    PartKind, Role, StopSequence,
};
