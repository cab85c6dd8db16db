use std::collections::BTreeMap;

use omniapi_model::{Variant, api_params};

use crate::agents::types::AgentInput;

api_params! {
    pub struct RunAgentParams builder RunAgentParamsBuilder {
        endpoint: "agents.run",
        method: Post,
        path: "/v1/agents/{agent_id}/runs",
        path_params { agent_id => "agent_id" }
        headers {
            optional idempotency_key: String => "Idempotency-Key",
        }
        query {
            /// Return immediately with a queued run instead of waiting.
            optional async_run: bool => "async",
        }
        body {
            required input: Variant<AgentInput> => "input",
            optional tools: Vec<String> => "tools",
            optional max_steps: i64 => "max_steps",
            optional metadata: BTreeMap<String, String> => "metadata",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use omniapi_model::{ApiParams, HttpMethod};
    use serde_json::json;

    #[test]
    fn run_params_split_containers() {
        let params = RunAgentParams::builder()
            .agent_id("support bot")
            .async_run(true)
            .input(Variant::new(json!({ "ticket": 42 })))
            .tools(vec!["search".to_string()])
            .build()
            .expect("build params");

        assert_eq!(RunAgentParams::METHOD, HttpMethod::Post);
        assert_eq!(params.path_params(), vec![("agent_id", "support bot")]);
        assert_eq!(params.query().to_wire_value(), json!({ "async": true }));
        assert_eq!(
            params.body().to_wire_value(),
            json!({ "input": { "ticket": 42 }, "tools": ["search"] })
        );
    }

    #[test]
    fn agent_id_is_required() {
        let err = RunAgentParams::builder()
            .input(Variant::new("hello".to_string()))
            .build()
            .unwrap_err();
        assert!(err.message().contains("`agent_id`"));
    }
}
