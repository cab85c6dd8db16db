use std::collections::BTreeMap;

use omniapi_model::{Variant, api_params};

use crate::vault::types::SecretValue;

api_params! {
    pub struct PutSecretParams builder PutSecretParamsBuilder {
        endpoint: "vault.put_secret",
        method: Put,
        path: "/v1/vault/secrets/{name}",
        path_params { name => "name" }
        headers {}
        query {}
        body {
            required value: Variant<SecretValue> => "value",
            optional labels: BTreeMap<String, String> => "labels",
            /// Seconds until the secret expires.
            optional ttl: i64 => "ttl",
        }
    }
}

api_params! {
    pub struct GetSecretParams builder GetSecretParamsBuilder {
        endpoint: "vault.get_secret",
        method: Get,
        path: "/v1/vault/secrets/{name}",
        path_params { name => "name" }
        headers {}
        query {
            /// Latest version when unset.
            optional version: i64 => "version",
        }
        body {}
    }
}

api_params! {
    pub struct DeleteSecretParams builder DeleteSecretParamsBuilder {
        endpoint: "vault.delete_secret",
        method: Delete,
        path: "/v1/vault/secrets/{name}",
        path_params { name => "name" }
        headers {}
        query {}
        body {}
    }
}
