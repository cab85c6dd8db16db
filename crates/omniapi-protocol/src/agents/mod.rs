pub mod request;
pub mod response;
pub mod types;

pub use request::{RunAgentParams, RunAgentParamsBuilder};
pub use response::{AgentRun, AgentRunBuilder, RunAgentResponse};
pub use types::{AgentInput, AgentOutput, RunStatus, RunStep, RunStepBuilder, Usage, UsageBuilder};
