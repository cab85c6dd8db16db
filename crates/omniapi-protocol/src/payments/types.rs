use omniapi_model::{api_model, api_variant, wire_enum};

wire_enum! {
    pub enum Currency {
        Usd => "usd",
        Eur => "eur",
        Gbp => "gbp",
        Jpy => "jpy",
    }
}

wire_enum! {
    pub enum PaymentStatus {
        RequiresAction => "requires_action",
        Processing => "processing",
        Succeeded => "succeeded",
        Failed => "failed",
        Canceled => "canceled",
    }
}

api_model! {
    pub struct CardDetails builder CardDetailsBuilder {
        required number: String => "number",
        required exp_month: i64 => "exp_month",
        required exp_year: i64 => "exp_year",
        optional cvc: String => "cvc",
    }
}

api_variant! {
    /// A saved payment-method token or raw card details.
    pub enum PaymentMethod {
        Token(String) => as_token,
        Card(CardDetails) => as_card,
    }
}
