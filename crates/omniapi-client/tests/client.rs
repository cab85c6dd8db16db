use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use http::StatusCode;
use omniapi_client::{
    ApiError, ClientConfig, HttpRequest, HttpResponse, HttpTransport, OmniClient, TransportError,
    TransportErrorKind, header_get,
};
use omniapi_model::{ApiEnum, HttpMethod, Validate, Variant};
use omniapi_protocol::agents::{AgentInput, AgentOutput, RunAgentParams, RunStatus};
use omniapi_protocol::documents::{ConversionStatus, ConvertDocumentParams, DocumentFormat};
use omniapi_protocol::llm::{CompleteParams, FinishReason, Message, Role};
use omniapi_protocol::payments::{CreatePaymentParams, Currency, PaymentMethod, PaymentStatus};
use omniapi_protocol::vault::{DeleteSecretParams, GetSecretParams};
use omniapi_protocol::voice::ListVoicesParams;
use serde_json::{Value, json};

#[derive(Clone, Default)]
struct ScriptedTransport {
    responses: Arc<Mutex<VecDeque<Result<HttpResponse, TransportError>>>>,
    seen: Arc<Mutex<Vec<HttpRequest>>>,
}

impl ScriptedTransport {
    fn reply(self, status: u16, headers: &[(&str, &str)], body: &str) -> Self {
        self.responses.lock().unwrap().push_back(Ok(HttpResponse {
            status: StatusCode::from_u16(status).unwrap(),
            headers: headers
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            body: Bytes::from(body.to_string()),
        }));
        self
    }

    fn fail(self, kind: TransportErrorKind) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(TransportError::new(kind, "scripted failure")));
        self
    }

    fn requests(&self) -> Vec<HttpRequest> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpTransport for ScriptedTransport {
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.seen.lock().unwrap().push(req);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("no scripted response left")
    }
}

fn client(transport: &ScriptedTransport) -> OmniClient {
    let config = ClientConfig {
        base_url: "https://api.test".to_string(),
        api_key: Some("sk_test".to_string()),
        ..ClientConfig::default()
    };
    OmniClient::with_transport(config, transport.clone())
}

fn body_json(request: &HttpRequest) -> Value {
    serde_json::from_slice(request.body.as_deref().expect("request body")).unwrap()
}

#[tokio::test]
async fn convert_document_round_trip() {
    let transport = ScriptedTransport::default().reply(
        202,
        &[("content-type", "application/json")],
        r#"{"id":"conv_1","status":"queued","source_format":"docx","target_format":"pdf","created_at":"2025-03-08T10:15:30Z"}"#,
    );
    let client = client(&transport);

    let params = ConvertDocumentParams::builder()
        .source(Variant::new("https://files.test/a.docx".to_string()))
        .target_format(ApiEnum::from(DocumentFormat::Pdf))
        .idempotency_key("conv-key".to_string())
        .build()
        .unwrap();
    let conversion = client.documents().convert(&params).await.unwrap();

    assert_eq!(conversion.id().unwrap(), "conv_1");
    assert_eq!(conversion.status().unwrap(), ConversionStatus::Queued);

    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.method, HttpMethod::Post);
    assert_eq!(request.url, "https://api.test/v1/documents/convert");
    assert_eq!(header_get(&request.headers, "idempotency-key"), Some("conv-key"));
    assert_eq!(header_get(&request.headers, "authorization"), Some("Bearer sk_test"));
    assert_eq!(
        body_json(request),
        json!({ "source": "https://files.test/a.docx", "target_format": "pdf" })
    );
}

#[tokio::test]
async fn create_payment_decodes_unknown_status_without_failing() {
    let transport = ScriptedTransport::default().reply(
        200,
        &[],
        r#"{"id":"pay_1","amount":500,"currency":"usd","status":"disputed","created_at":"2025-03-08T10:15:30Z"}"#,
    );
    let client = client(&transport);

    let params = CreatePaymentParams::builder()
        .amount(500_i64)
        .currency(ApiEnum::from(Currency::Usd))
        .payment_method(Variant::<PaymentMethod>::new("tok_visa".to_string()))
        .build()
        .unwrap();
    let payment = client.payments().create(&params).await.unwrap();

    let status = payment.status().unwrap();
    assert!(!status.is_known());
    assert_ne!(status, PaymentStatus::Succeeded);
    assert!(payment.validate().is_err());
}

#[tokio::test]
async fn rate_limit_maps_to_status_error() {
    let transport = ScriptedTransport::default().reply(
        429,
        &[("Retry-After", "7")],
        r#"{"error":"rate_limited"}"#,
    );
    let client = client(&transport);

    let params = GetSecretParams::builder().name("token").build().unwrap();
    let err = client.vault().get_secret(&params).await.unwrap_err();

    assert!(err.is_rate_limited());
    assert!(err.is_client_error());
    assert_eq!(err.retry_after(), Some(Duration::from_secs(7)));
    match err {
        ApiError::Status { body, .. } => assert!(body.contains("rate_limited")),
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn server_error_and_transport_failure() {
    let transport = ScriptedTransport::default()
        .reply(503, &[], "upstream down")
        .fail(TransportErrorKind::Timeout);
    let client = client(&transport);
    let params = ListVoicesParams::builder().build().unwrap();

    let err = client.voice().list_voices(&params).await.unwrap_err();
    assert!(err.is_server_error());
    assert_eq!(err.retry_after(), None);

    let err = client.voice().list_voices(&params).await.unwrap_err();
    assert!(matches!(
        err,
        ApiError::Transport(TransportError {
            kind: TransportErrorKind::Timeout,
            ..
        })
    ));
}

#[tokio::test]
async fn empty_delete_response_is_an_empty_model() {
    let transport = ScriptedTransport::default().reply(204, &[], "");
    let client = client(&transport);

    let params = DeleteSecretParams::builder().name("old").build().unwrap();
    let ack = client.vault().delete_secret(&params).await.unwrap();

    assert!(ack.deleted().is_err());
    let request = &transport.requests()[0];
    assert_eq!(request.method, HttpMethod::Delete);
    assert!(request.body.is_none());
}

#[tokio::test]
async fn non_object_body_is_a_decode_error() {
    let transport = ScriptedTransport::default().reply(200, &[], "[1,2]");
    let client = client(&transport);

    let params = DeleteSecretParams::builder().name("x").build().unwrap();
    let err = client.vault().delete_secret(&params).await.unwrap_err();
    assert!(matches!(
        err,
        ApiError::Decode {
            endpoint: "vault.delete_secret",
            ..
        }
    ));
}

#[tokio::test]
async fn agent_run_with_text_input() {
    let transport = ScriptedTransport::default().reply(
        200,
        &[],
        r#"{"id":"run_1","agent_id":"helper","status":"completed","output":{"answer":42},"created_at":"2025-03-08T10:15:30Z"}"#,
    );
    let client = client(&transport);

    let params = RunAgentParams::builder()
        .agent_id("helper")
        .input(Variant::<AgentInput>::new("what is the answer?".to_string()))
        .build()
        .unwrap();
    let run = client.agents().run(&params).await.unwrap();

    assert_eq!(run.status().unwrap(), RunStatus::Completed);
    let output = run.output().unwrap().expect("output");
    assert_eq!(
        output.try_pick(AgentOutput::as_structured),
        Some(&json!({ "answer": 42 }))
    );

    let request = &transport.requests()[0];
    assert_eq!(request.url, "https://api.test/v1/agents/helper/runs");
    assert_eq!(body_json(request), json!({ "input": "what is the answer?" }));
}

#[tokio::test]
async fn llm_completion_with_provider_header() {
    let transport = ScriptedTransport::default().reply(
        200,
        &[],
        r#"{"id":"c1","model":"m","choices":[{"index":0,"message":{"role":"assistant","content":"pong"},"finish_reason":"stop"}]}"#,
    );
    let client = client(&transport);

    let params = CompleteParams::builder()
        .provider("openai".to_string())
        .model("m".to_string())
        .messages(vec![Message::text(Role::User, "ping").unwrap()])
        .build()
        .unwrap();
    let completion = client.llm().complete(&params).await.unwrap();

    let choices = completion.choices().unwrap();
    assert_eq!(choices[0].finish_reason().unwrap().unwrap(), FinishReason::Stop);
    assert!(completion.validate().is_ok());

    let request = &transport.requests()[0];
    assert_eq!(header_get(&request.headers, "x-provider"), Some("openai"));
    assert_eq!(header_get(&request.headers, "content-type"), Some("application/json"));
}
