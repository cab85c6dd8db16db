use omniapi_protocol::llm::{CompleteParams, CompleteResponse};

use crate::client::OmniClient;
use crate::error::ApiError;

#[derive(Clone, Copy)]
pub struct LlmService<'a> {
    client: &'a OmniClient,
}

impl<'a> LlmService<'a> {
    pub(crate) fn new(client: &'a OmniClient) -> Self {
        Self { client }
    }

    pub async fn complete(&self, params: &CompleteParams) -> Result<CompleteResponse, ApiError> {
        self.client.execute(params).await
    }
}
