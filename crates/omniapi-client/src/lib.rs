//! Async HTTP client for the omniapi services.
//!
//! `OmniClient` turns any `ApiParams` value into an HTTP request, sends it
//! through an [`HttpTransport`] and decodes the response into the matching
//! raw-backed model. Per-service facades live in [`services`].

pub mod client;
pub mod error;
pub mod headers;
pub mod request;
pub mod services;
pub mod transport;

pub use client::OmniClient;
pub use error::{ApiError, TransportError, TransportErrorKind};
pub use headers::{Headers, header_get, header_remove, header_set};
pub use request::{HttpRequest, build_request};
pub use transport::{HttpResponse, HttpTransport, WreqTransport};

pub use omniapi_common::ClientConfig;
