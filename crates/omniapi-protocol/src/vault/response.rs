use std::collections::BTreeMap;

use omniapi_model::{Timestamp, Variant, api_model};

use crate::vault::types::SecretValue;

api_model! {
    pub struct Secret builder SecretBuilder {
        required name: String => "name",
        required version: i64 => "version",
        optional value: Variant<SecretValue> => "value",
        optional labels: BTreeMap<String, String> => "labels",
        required created_at: Timestamp => "created_at",
        optional expires_at: Timestamp => "expires_at",
    }
}

api_model! {
    pub struct SecretDeleted builder SecretDeletedBuilder {
        required name: String => "name",
        required deleted: bool => "deleted",
    }
}

/// `put_secret` echoes the stored metadata without the value.
pub type PutSecretResponse = Secret;
pub type GetSecretResponse = Secret;
pub type DeleteSecretResponse = SecretDeleted;
