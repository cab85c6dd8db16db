use std::collections::BTreeMap;

use omniapi_model::{ApiEnum, Variant, api_params};

use crate::payments::types::{Currency, PaymentMethod};

api_params! {
    pub struct CreatePaymentParams builder CreatePaymentParamsBuilder {
        endpoint: "payments.create",
        method: Post,
        path: "/v1/payments",
        path_params {}
        headers {
            /// Replays of the same key return the original payment.
            optional idempotency_key: String => "Idempotency-Key",
        }
        query {}
        body {
            /// Minor units (cents for USD).
            required amount: i64 => "amount",
            required currency: ApiEnum<Currency> => "currency",
            required payment_method: Variant<PaymentMethod> => "payment_method",
            optional description: String => "description",
            optional metadata: BTreeMap<String, String> => "metadata",
            /// Defaults to true server-side.
            optional capture: bool => "capture",
        }
    }
}

api_params! {
    pub struct GetPaymentParams builder GetPaymentParamsBuilder {
        endpoint: "payments.retrieve",
        method: Get,
        path: "/v1/payments/{payment_id}",
        path_params { payment_id => "payment_id" }
        headers {}
        query {
            optional expand: Vec<String> => "expand",
        }
        body {}
    }
}
