use omniapi_protocol::voice::{
    ListVoicesParams, ListVoicesResponse, SynthesizeSpeechParams, SynthesizeSpeechResponse,
};

use crate::client::OmniClient;
use crate::error::ApiError;

#[derive(Clone, Copy)]
pub struct VoiceService<'a> {
    client: &'a OmniClient,
}

impl<'a> VoiceService<'a> {
    pub(crate) fn new(client: &'a OmniClient) -> Self {
        Self { client }
    }

    pub async fn synthesize(
        &self,
        params: &SynthesizeSpeechParams,
    ) -> Result<SynthesizeSpeechResponse, ApiError> {
        self.client.execute(params).await
    }

    pub async fn list_voices(
        &self,
        params: &ListVoicesParams,
    ) -> Result<ListVoicesResponse, ApiError> {
        self.client.execute(params).await
    }
}
