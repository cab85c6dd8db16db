use omniapi_model::{Variant, api_params};

use crate::llm::types::{Message, StopSequence};

api_params! {
    pub struct CompleteParams builder CompleteParamsBuilder {
        endpoint: "llm.complete",
        method: Post,
        path: "/v1/llm/completions",
        path_params {}
        headers {
            /// Pins the upstream provider instead of letting the router pick.
            optional provider: String => "X-Provider",
        }
        query {}
        body {
            required model: String => "model",
            required messages: Vec<Message> => "messages",
            optional temperature: f64 => "temperature",
            optional max_tokens: i64 => "max_tokens",
            optional stop: Variant<StopSequence> => "stop",
            optional user: String => "user",
        }
    }
}
