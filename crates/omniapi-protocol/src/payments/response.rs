use std::collections::BTreeMap;

use omniapi_model::{ApiEnum, Timestamp, api_model};

use crate::payments::types::{Currency, PaymentStatus};

api_model! {
    pub struct Payment builder PaymentBuilder {
        required id: String => "id",
        required amount: i64 => "amount",
        required currency: ApiEnum<Currency> => "currency",
        required status: ApiEnum<PaymentStatus> => "status",
        optional failure_reason: String => "failure_reason",
        optional metadata: BTreeMap<String, String> => "metadata",
        required created_at: Timestamp => "created_at",
    }
}

pub type CreatePaymentResponse = Payment;
pub type GetPaymentResponse = Payment;
