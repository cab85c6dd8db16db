use omniapi_model::{ApiEnum, api_model};

use crate::llm::types::{FinishReason, Message};

api_model! {
    pub struct Choice builder ChoiceBuilder {
        required index: i64 => "index",
        required message: Message => "message",
        optional finish_reason: ApiEnum<FinishReason> => "finish_reason",
    }
}

api_model! {
    pub struct TokenUsage builder TokenUsageBuilder {
        required prompt_tokens: i64 => "prompt_tokens",
        required completion_tokens: i64 => "completion_tokens",
        optional total_tokens: i64 => "total_tokens",
    }
}

api_model! {
    pub struct Completion builder CompletionBuilder {
        required id: String => "id",
        required model: String => "model",
        required choices: Vec<Choice> => "choices",
        optional usage: TokenUsage => "usage",
        /// Provider that actually served the request.
        optional provider: String => "provider",
    }
}

pub type CompleteResponse = Completion;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::types::{MessageContent, Role};
    use omniapi_model::Validate;

    #[test]
    fn deserializes_completion() {
        let json = r#"
        {
          "id": "cmpl_1",
          "model": "claude-sonnet",
          "choices": [
            {
              "index": 0,
              "message": { "role": "assistant", "content": "Hello!" },
              "finish_reason": "stop"
            }
          ],
          "usage": { "prompt_tokens": 9, "completion_tokens": 3, "total_tokens": 12 }
        }
        "#;

        let completion: Completion = serde_json::from_str(json).expect("deserialize completion");
        let choices = completion.choices().expect("choices");
        let message = choices[0].message().expect("message");
        assert_eq!(message.role().unwrap(), Role::Assistant);
        let content = message.content().expect("content");
        assert_eq!(
            content.try_pick(MessageContent::as_text).map(String::as_str),
            Some("Hello!")
        );
        assert_eq!(choices[0].finish_reason().unwrap().unwrap(), FinishReason::Stop);
        assert!(completion.validate().is_ok());
    }

    #[test]
    fn new_finish_reason_survives() {
        let completion: Completion = serde_json::from_str(
            r#"{"id":"c","model":"m","choices":[{"index":0,"message":{"role":"assistant","content":""},"finish_reason":"pause_turn"}]}"#,
        )
        .expect("deserialize completion");
        let choices = completion.choices().unwrap();
        let reason = choices[0].finish_reason().unwrap().unwrap();
        assert!(!reason.is_known());
        assert_eq!(reason.raw(), "pause_turn");
        assert!(completion.validate().is_err());
    }
}
