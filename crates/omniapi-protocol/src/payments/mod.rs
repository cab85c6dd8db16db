pub mod request;
pub mod response;
pub mod types;

pub use request::{
    CreatePaymentParams, CreatePaymentParamsBuilder, GetPaymentParams, GetPaymentParamsBuilder,
};
pub use response::{CreatePaymentResponse, GetPaymentResponse, Payment, PaymentBuilder};
pub use types::{CardDetails, Currency, PaymentMethod, PaymentStatus};
