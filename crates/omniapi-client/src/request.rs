use bytes::Bytes;
use omniapi_common::ClientConfig;
use omniapi_model::{ApiParams, HttpMethod, InvalidDataError, RawData};
use serde_json::Value;

use crate::error::ApiError;
use crate::headers::{Headers, header_set};

#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Headers,
    pub body: Option<Bytes>,
}

/// Assembles the HTTP request for `params` against `config.base_url`.
pub fn build_request<P: ApiParams>(
    config: &ClientConfig,
    params: &P,
) -> Result<HttpRequest, ApiError> {
    let path = render_path(P::PATH, &params.path_params())?;
    let mut url = format!("{}{}", config.base_url.trim_end_matches('/'), path);
    let query = encode_query(params.query());
    if !query.is_empty() {
        url.push('?');
        url.push_str(&query);
    }

    let mut headers = Headers::new();
    header_set(&mut headers, "accept", "application/json");
    header_set(&mut headers, "user-agent", config.user_agent.as_str());
    if let Some(api_key) = config.api_key.as_deref() {
        header_set(&mut headers, "authorization", format!("Bearer {api_key}"));
    }
    for (name, value) in params.headers().iter() {
        if let Some(value) = scalar_text(value) {
            header_set(&mut headers, name.as_str(), value);
        }
    }

    let body = if P::METHOD.expects_body() || !params.body().is_empty() {
        let bytes = serde_json::to_vec(params.body().as_map())
            .map_err(|err| InvalidDataError::serialize("body", err))?;
        header_set(&mut headers, "content-type", "application/json");
        Some(Bytes::from(bytes))
    } else {
        None
    };

    Ok(HttpRequest {
        method: P::METHOD,
        url,
        headers,
        body,
    })
}

fn render_path(template: &str, params: &[(&'static str, &str)]) -> Result<String, InvalidDataError> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start + 1..];
        let Some(end) = tail.find('}') else {
            return Err(InvalidDataError::new(format!(
                "unterminated path placeholder in `{template}`"
            )));
        };
        let name = &tail[..end];
        let value = params
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| *value)
            .ok_or_else(|| InvalidDataError::missing_path_param(name))?;
        out.push_str(&urlencoding::encode(value));
        rest = &tail[end + 1..];
    }
    out.push_str(rest);
    Ok(out)
}

fn encode_query(query: &RawData) -> String {
    let mut pairs = Vec::new();
    for (key, value) in query.iter() {
        match value {
            Value::Array(items) => {
                pairs.extend(items.iter().filter_map(scalar_text).map(|item| (key, item)));
            }
            other => {
                if let Some(text) = scalar_text(other) {
                    pairs.push((key, text));
                }
            }
        }
    }
    pairs
        .into_iter()
        .map(|(key, value)| format!("{}={}", urlencoding::encode(key), urlencoding::encode(&value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Strings verbatim, nulls skipped, everything else as JSON text.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}
