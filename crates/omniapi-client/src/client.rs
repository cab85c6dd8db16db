use std::sync::Arc;
use std::time::{Duration, Instant, SystemTime};

use http::header::RETRY_AFTER;
use omniapi_common::ClientConfig;
use omniapi_model::ApiParams;
use serde::de::DeserializeOwned;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::ApiError;
use crate::headers::{Headers, header_get};
use crate::request::{HttpRequest, build_request};
use crate::services::{
    AgentsService, DocumentsService, FormattingService, LlmService, OcrService, PaymentsService,
    VaultService, VoiceService,
};
use crate::transport::{HttpResponse, HttpTransport, WreqTransport};

#[derive(Clone)]
pub struct OmniClient {
    config: Arc<ClientConfig>,
    transport: Arc<dyn HttpTransport>,
}

impl OmniClient {
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let transport = WreqTransport::new(&config)?;
        Ok(Self::with_transport(config, transport))
    }

    pub fn with_transport(config: ClientConfig, transport: impl HttpTransport + 'static) -> Self {
        Self {
            config: Arc::new(config),
            transport: Arc::new(transport),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Sends `params` and decodes a 2xx body as `R`. The response is not
    /// validated; call `Validate::validate` on it when strictness is needed.
    pub async fn execute<P, R>(&self, params: &P) -> Result<R, ApiError>
    where
        P: ApiParams,
        R: DeserializeOwned,
    {
        let request = build_request(&self.config, params)?;
        let response = self.send(P::ENDPOINT, P::PATH, request).await?;
        decode_body(P::ENDPOINT, &response.body)
    }

    async fn send(
        &self,
        endpoint: &'static str,
        path: &'static str,
        request: HttpRequest,
    ) -> Result<HttpResponse, ApiError> {
        let trace_id = Uuid::new_v4();
        let method = request.method.as_str();
        info!(
            event = "api_request",
            trace_id = %trace_id,
            endpoint = %endpoint,
            method = %method,
            path = %path
        );
        let started_at = Instant::now();

        let response = match self.transport.send(request).await {
            Ok(response) => response,
            Err(err) => {
                warn!(
                    event = "api_response",
                    trace_id = %trace_id,
                    endpoint = %endpoint,
                    status = "error",
                    elapsed_ms = started_at.elapsed().as_millis(),
                    error = %err
                );
                return Err(err.into());
            }
        };

        let elapsed_ms = started_at.elapsed().as_millis();
        if !response.status.is_success() {
            warn!(
                event = "api_response",
                trace_id = %trace_id,
                endpoint = %endpoint,
                status = %response.status.as_u16(),
                elapsed_ms = elapsed_ms
            );
            return Err(ApiError::Status {
                status: response.status,
                body: String::from_utf8_lossy(&response.body).into_owned(),
                retry_after: retry_after(&response.headers),
            });
        }

        info!(
            event = "api_response",
            trace_id = %trace_id,
            endpoint = %endpoint,
            status = %response.status.as_u16(),
            elapsed_ms = elapsed_ms
        );
        Ok(response)
    }

    pub fn documents(&self) -> DocumentsService<'_> {
        DocumentsService::new(self)
    }

    pub fn ocr(&self) -> OcrService<'_> {
        OcrService::new(self)
    }

    pub fn formatting(&self) -> FormattingService<'_> {
        FormattingService::new(self)
    }

    pub fn payments(&self) -> PaymentsService<'_> {
        PaymentsService::new(self)
    }

    pub fn voice(&self) -> VoiceService<'_> {
        VoiceService::new(self)
    }

    pub fn agents(&self) -> AgentsService<'_> {
        AgentsService::new(self)
    }

    pub fn vault(&self) -> VaultService<'_> {
        VaultService::new(self)
    }

    pub fn llm(&self) -> LlmService<'_> {
        LlmService::new(self)
    }
}

/// An empty body decodes as `{}`.
fn decode_body<R: DeserializeOwned>(endpoint: &'static str, body: &[u8]) -> Result<R, ApiError> {
    let body: &[u8] = if body.iter().all(u8::is_ascii_whitespace) {
        b"{}"
    } else {
        body
    };
    serde_json::from_slice(body).map_err(|source| ApiError::Decode { endpoint, source })
}

fn retry_after(headers: &Headers) -> Option<Duration> {
    header_get(headers, RETRY_AFTER.as_str()).and_then(|value| {
        let value = value.trim();
        if let Ok(seconds) = value.parse::<u64>() {
            return Some(Duration::from_secs(seconds));
        }
        if let Ok(when) = httpdate::parse_http_date(value) {
            return when.duration_since(SystemTime::now()).ok();
        }
        None
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn retry_after_accepts_seconds_and_dates() {
        let headers = vec![("Retry-After".to_string(), " 12 ".to_string())];
        assert_eq!(retry_after(&headers), Some(Duration::from_secs(12)));

        let later = SystemTime::now() + Duration::from_secs(120);
        let headers = vec![("retry-after".to_string(), httpdate::fmt_http_date(later))];
        let wait = retry_after(&headers).expect("date parsed");
        assert!(wait <= Duration::from_secs(120));
        assert!(wait >= Duration::from_secs(100));

        let headers = vec![("retry-after".to_string(), "soon".to_string())];
        assert_eq!(retry_after(&headers), None);
    }

    #[test]
    fn empty_body_is_an_empty_object() {
        let value: Value = decode_body("test.empty", b"  ").unwrap();
        assert_eq!(value, serde_json::json!({}));
    }

    #[test]
    fn non_json_body_is_decode_error() {
        let err = decode_body::<Value>("test.html", b"<html>").unwrap_err();
        assert!(matches!(err, ApiError::Decode { endpoint: "test.html", .. }));
    }
}
