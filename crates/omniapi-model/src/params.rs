use crate::raw::RawData;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }

    /// Methods that carry a JSON body even when the body container is empty.
    pub fn expects_body(&self) -> bool {
        matches!(self, HttpMethod::Post | HttpMethod::Put | HttpMethod::Patch)
    }
}

/// A request-direction model.
///
/// Headers, query and body are three independent frozen containers; path
/// parameters are typed and required. URL and request assembly happen in the
/// client crate.
pub trait ApiParams {
    const METHOD: HttpMethod;
    /// Path with `{name}` placeholders for each path parameter.
    const PATH: &'static str;
    /// Stable endpoint id used in logs, e.g. `payments.create`.
    const ENDPOINT: &'static str;

    fn path_params(&self) -> Vec<(&'static str, &str)>;

    fn headers(&self) -> &RawData;

    fn query(&self) -> &RawData;

    fn body(&self) -> &RawData;
}
