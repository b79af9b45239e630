use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Method, RequestBuilder};
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

pub const JSON_CONTENT_TYPE: &str = "application/json";

#[derive(Clone, Debug, PartialEq)]
pub struct ReqBody {
    pub value: Option<Value>,
}

impl ReqBody {
    pub fn empty() -> Self {
        ReqBody { value: None }
    }

    pub fn new(value: Value) -> Self {
        Self { value: Some(value) }
    }
}

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    GET,
    POST,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpMethod::GET => write!(f, "GET"),
            HttpMethod::POST => write!(f, "POST"),
        }
    }
}

pub struct Endpoint {
    pub method: HttpMethod,
    pub path: String,
}

impl Endpoint {
    pub fn new(method: HttpMethod, path: String) -> Endpoint {
        Endpoint { method, path }
    }

    pub fn to_url(&self, base_url: &str) -> String {
        join_url(base_url, &self.path)
    }
}

/// Joins a base URL and a relative path with exactly one `/` between them.
pub fn join_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

pub struct HttpRequest {
    pub endpoint: Endpoint,
    pub req_body: ReqBody,
    pub content_type: String,
}

impl HttpRequest {
    pub fn new(endpoint: Endpoint, req_body: ReqBody, content_type: String) -> HttpRequest {
        HttpRequest {
            endpoint,
            req_body,
            content_type,
        }
    }
}

/// A captured response body: parsed JSON when possible, the raw text otherwise.
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum Payload {
    Json(Value),
    Text(String),
}

impl Payload {
    pub fn from_text(text: String) -> Self {
        match serde_json::from_str::<Value>(&text) {
            Ok(value) => Payload::Json(value),
            Err(_) => Payload::Text(text),
        }
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Payload::Json(value) => Some(value),
            Payload::Text(_) => None,
        }
    }

    /// Pretty JSON for parsed bodies, the raw text otherwise.
    pub fn render(&self) -> String {
        match self {
            Payload::Json(value) => {
                serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
            }
            Payload::Text(text) => text.clone(),
        }
    }
}

pub struct HttpResult {
    pub res_body: Payload,
    pub status_code: u16,
}

impl HttpResult {
    pub fn new(res_body: Payload, status_code: u16) -> Self {
        Self {
            res_body,
            status_code,
        }
    }
}

/// Failure of the request/response cycle itself. A response with an
/// unexpected status is not an `HttpError`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HttpError {
    #[error("request timed out: {0}")]
    Timeout(String),
    #[error("{0}")]
    Io(String),
}

impl From<reqwest::Error> for HttpError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            HttpError::Timeout(error.to_string())
        } else {
            HttpError::Io(error.to_string())
        }
    }
}

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: String, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url_for(&self, endpoint: &Endpoint) -> String {
        endpoint.to_url(&self.base_url)
    }

    pub async fn execute(&self, request: HttpRequest) -> Result<HttpResult, HttpError> {
        let req = self.build_reqwest(request);
        let response = req.send().await.map_err(|error| {
            info!("http request failed: {}", error);
            HttpError::from(error)
        })?;
        let status_code = response.status();
        info!("http request executed, status_code: {}", status_code);
        let text = response.text().await.map_err(|error| {
            warn!("could not read response body: {}", error);
            HttpError::from(error)
        })?;
        Ok(HttpResult::new(Payload::from_text(text), status_code.as_u16()))
    }

    fn build_reqwest(&self, request: HttpRequest) -> RequestBuilder {
        let endpoint = request.endpoint;
        let url = self.url_for(&endpoint);
        debug!("url: {}", url);
        debug!("content type: {}", request.content_type);
        debug!("method: {}", endpoint.method);
        let library_method = match &endpoint.method {
            HttpMethod::GET => Method::GET,
            HttpMethod::POST => Method::POST,
        };

        let mut headers = HeaderMap::new();
        match HeaderValue::from_str(&request.content_type) {
            Ok(value) => {
                headers.insert(CONTENT_TYPE, value);
            }
            Err(_) => warn!("invalid content type: {}", request.content_type),
        }

        let mut req = self.client.request(library_method, url).headers(headers);

        if endpoint.method == HttpMethod::POST {
            if let Some(body) = &request.req_body.value {
                debug!("request body: {}", body);
                req = req.json(body);
            }
        }
        req
    }
}
