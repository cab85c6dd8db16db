//! Raw-backed model primitives shared by every omniapi endpoint.
//!
//! Models keep the JSON they were built from (or received) in a frozen raw
//! container and compute typed fields on read. Unknown fields, unknown enum
//! values and unmatched union shapes all survive a round trip; validation is a
//! separate, opt-in step.

pub mod enums;
pub mod error;
mod macros;
pub mod model;
pub mod params;
pub mod raw;
pub mod timestamp;
pub mod validate;
pub mod variant;

pub use enums::{ApiEnum, WireEnum};
pub use error::{InvalidDataError, ModelResult};
pub use model::ApiModel;
pub use params::{ApiParams, HttpMethod};
pub use raw::{RawBuilder, RawData, RawMap};
pub use timestamp::Timestamp;
pub use validate::Validate;
pub use variant::{Variant, VariantSet};

#[doc(hidden)]
pub mod __private {
    pub use serde;
    pub use serde_json;
}
