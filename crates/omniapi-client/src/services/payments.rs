use omniapi_protocol::payments::{
    CreatePaymentParams, CreatePaymentResponse, GetPaymentParams, GetPaymentResponse,
};

use crate::client::OmniClient;
use crate::error::ApiError;

#[derive(Clone, Copy)]
pub struct PaymentsService<'a> {
    client: &'a OmniClient,
}

impl<'a> PaymentsService<'a> {
    pub(crate) fn new(client: &'a OmniClient) -> Self {
        Self { client }
    }

    pub async fn create(
        &self,
        params: &CreatePaymentParams,
    ) -> Result<CreatePaymentResponse, ApiError> {
        self.client.execute(params).await
    }

    pub async fn retrieve(
        &self,
        params: &GetPaymentParams,
    ) -> Result<GetPaymentResponse, ApiError> {
        self.client.execute(params).await
    }
}
