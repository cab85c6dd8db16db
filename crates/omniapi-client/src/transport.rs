use async_trait::async_trait;
use bytes::Bytes;
use http::StatusCode;
use omniapi_common::ClientConfig;
use omniapi_model::HttpMethod;
use wreq::{Client, Method, Proxy};

use crate::error::{TransportError, TransportErrorKind};
use crate::headers::Headers;
use crate::request::HttpRequest;

#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub headers: Headers,
    pub body: Bytes,
}

#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse, TransportError>;
}

#[derive(Clone)]
pub struct WreqTransport {
    client: Client,
}

impl WreqTransport {
    pub fn new(config: &ClientConfig) -> Result<Self, TransportError> {
        build_client(config)
            .map(|client| Self { client })
            .map_err(map_wreq_error)
    }
}

fn normalize_proxy(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|item| !item.is_empty())
}

fn build_client(config: &ClientConfig) -> Result<Client, wreq::Error> {
    let mut builder = Client::builder()
        .connect_timeout(config.connect_timeout())
        .timeout(config.request_timeout());

    if let Some(proxy) = normalize_proxy(config.proxy.as_deref()) {
        builder = builder.proxy(Proxy::all(proxy)?);
    }

    builder.build()
}

#[async_trait]
impl HttpTransport for WreqTransport {
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = self
            .client
            .request(http_method_to_wreq(req.method), &req.url);

        for (k, v) in &req.headers {
            builder = builder.header(k, v);
        }

        if let Some(body) = req.body {
            builder = builder.body(body);
        }

        let resp = builder.send().await.map_err(map_wreq_error)?;
        let status = StatusCode::from_u16(resp.status().as_u16()).map_err(|err| {
            TransportError::new(TransportErrorKind::Other, err.to_string())
        })?;
        let headers = headers_from_wreq(resp.headers());
        let body = resp.bytes().await.map_err(map_wreq_error)?;
        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

fn http_method_to_wreq(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Patch => Method::PATCH,
        HttpMethod::Delete => Method::DELETE,
    }
}

fn headers_from_wreq(map: &wreq::header::HeaderMap) -> Headers {
    let mut out = Vec::new();
    for (k, v) in map {
        if let Ok(s) = v.to_str() {
            out.push((k.as_str().to_string(), s.to_string()));
        }
    }
    out
}

fn map_wreq_error(err: wreq::Error) -> TransportError {
    TransportError::new(classify_wreq_error(&err), err.to_string())
}

fn classify_wreq_error(err: &wreq::Error) -> TransportErrorKind {
    let message = err.to_string().to_ascii_lowercase();
    if err.is_timeout() {
        return TransportErrorKind::Timeout;
    }
    if err.is_connect() {
        if message.contains("dns") || message.contains("resolve") {
            return TransportErrorKind::Dns;
        }
        if message.contains("tls") || message.contains("ssl") {
            return TransportErrorKind::Tls;
        }
        return TransportErrorKind::Connect;
    }
    if err.is_connection_reset() {
        return TransportErrorKind::Connect;
    }
    if message.contains("tls") || message.contains("ssl") {
        return TransportErrorKind::Tls;
    }
    TransportErrorKind::Other
}
