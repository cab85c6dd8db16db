use omniapi_model::{ApiEnum, Timestamp, Variant, api_model};

use crate::agents::types::{AgentOutput, RunStatus, RunStep, Usage};

api_model! {
    pub struct AgentRun builder AgentRunBuilder {
        required id: String => "id",
        required agent_id: String => "agent_id",
        required status: ApiEnum<RunStatus> => "status",
        optional output: Variant<AgentOutput> => "output",
        optional steps: Vec<RunStep> => "steps",
        optional usage: Usage => "usage",
        optional error: String => "error",
        required created_at: Timestamp => "created_at",
        optional completed_at: Timestamp => "completed_at",
    }
}

pub type RunAgentResponse = AgentRun;
