pub mod request;
pub mod response;
pub mod types;

pub use request::{
    DeleteSecretParams, DeleteSecretParamsBuilder, GetSecretParams, GetSecretParamsBuilder,
    PutSecretParams, PutSecretParamsBuilder,
};
pub use response::{
    DeleteSecretResponse, GetSecretResponse, PutSecretResponse, Secret, SecretBuilder,
    SecretDeleted, SecretDeletedBuilder,
};
pub use types::SecretValue;
