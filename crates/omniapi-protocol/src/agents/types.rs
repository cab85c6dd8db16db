use omniapi_model::{ApiEnum, api_model, api_variant, wire_enum};
use serde_json::Value;

wire_enum! {
    pub enum RunStatus {
        Queued => "queued",
        Running => "running",
        Completed => "completed",
        Failed => "failed",
        Cancelled => "cancelled",
    }
}

api_variant! {
    /// Agent input: plain text, or any JSON payload the agent accepts.
    /// A JSON string is always `Text`.
    pub enum AgentInput {
        Text(String) => as_text,
        Structured(Value) => as_structured,
    }
}

api_variant! {
    pub enum AgentOutput {
        Text(String) => as_text,
        Structured(Value) => as_structured,
    }
}

api_model! {
    pub struct RunStep builder RunStepBuilder {
        required name: String => "name",
        required status: ApiEnum<RunStatus> => "status",
        optional tool: String => "tool",
        optional duration_ms: i64 => "duration_ms",
    }
}

api_model! {
    pub struct Usage builder UsageBuilder {
        required input_tokens: i64 => "input_tokens",
        required output_tokens: i64 => "output_tokens",
    }
}
