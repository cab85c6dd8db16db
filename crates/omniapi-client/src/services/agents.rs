use omniapi_protocol::agents::{RunAgentParams, RunAgentResponse};

use crate::client::OmniClient;
use crate::error::ApiError;

#[derive(Clone, Copy)]
pub struct AgentsService<'a> {
    client: &'a OmniClient,
}

impl<'a> AgentsService<'a> {
    pub(crate) fn new(client: &'a OmniClient) -> Self {
        Self { client }
    }

    /// Waits for the run to finish unless `async_run` is set.
    pub async fn run(&self, params: &RunAgentParams) -> Result<RunAgentResponse, ApiError> {
        self.client.execute(params).await
    }
}
