use omniapi_protocol::documents::{
    ConvertDocumentParams, ConvertDocumentResponse, GetConversionParams, GetConversionResponse,
};

use crate::client::OmniClient;
use crate::error::ApiError;

#[derive(Clone, Copy)]
pub struct DocumentsService<'a> {
    client: &'a OmniClient,
}

impl<'a> DocumentsService<'a> {
    pub(crate) fn new(client: &'a OmniClient) -> Self {
        Self { client }
    }

    /// Conversions run asynchronously; poll with [`Self::get_conversion`]
    /// until the status is terminal.
    pub async fn convert(
        &self,
        params: &ConvertDocumentParams,
    ) -> Result<ConvertDocumentResponse, ApiError> {
        self.client.execute(params).await
    }

    pub async fn get_conversion(
        &self,
        params: &GetConversionParams,
    ) -> Result<GetConversionResponse, ApiError> {
        self.client.execute(params).await
    }
}
