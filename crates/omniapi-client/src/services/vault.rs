use omniapi_protocol::vault::{
    DeleteSecretParams, DeleteSecretResponse, GetSecretParams, GetSecretResponse, PutSecretParams,
    PutSecretResponse,
};

use crate::client::OmniClient;
use crate::error::ApiError;

#[derive(Clone, Copy)]
pub struct VaultService<'a> {
    client: &'a OmniClient,
}

impl<'a> VaultService<'a> {
    pub(crate) fn new(client: &'a OmniClient) -> Self {
        Self { client }
    }

    pub async fn put_secret(
        &self,
        params: &PutSecretParams,
    ) -> Result<PutSecretResponse, ApiError> {
        self.client.execute(params).await
    }

    /// Reads the latest version unless `version` is set.
    pub async fn get_secret(
        &self,
        params: &GetSecretParams,
    ) -> Result<GetSecretResponse, ApiError> {
        self.client.execute(params).await
    }

    pub async fn delete_secret(
        &self,
        params: &DeleteSecretParams,
    ) -> Result<DeleteSecretResponse, ApiError> {
        self.client.execute(params).await
    }
}
