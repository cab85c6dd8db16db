use omniapi_protocol::formatting::{FormatParams, FormatResponse};

use crate::client::OmniClient;
use crate::error::ApiError;

#[derive(Clone, Copy)]
pub struct FormattingService<'a> {
    client: &'a OmniClient,
}

impl<'a> FormattingService<'a> {
    pub(crate) fn new(client: &'a OmniClient) -> Self {
        Self { client }
    }

    pub async fn format(&self, params: &FormatParams) -> Result<FormatResponse, ApiError> {
        self.client.execute(params).await
    }
}
