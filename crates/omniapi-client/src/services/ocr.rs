use omniapi_protocol::ocr::{ExtractTextParams, ExtractTextResponse};

use crate::client::OmniClient;
use crate::error::ApiError;

#[derive(Clone, Copy)]
pub struct OcrService<'a> {
    client: &'a OmniClient,
}

impl<'a> OcrService<'a> {
    pub(crate) fn new(client: &'a OmniClient) -> Self {
        Self { client }
    }

    pub async fn extract(
        &self,
        params: &ExtractTextParams,
    ) -> Result<ExtractTextResponse, ApiError> {
        self.client.execute(params).await
    }
}
