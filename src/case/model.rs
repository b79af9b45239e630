use crate::http::{Endpoint, HttpMethod, HttpRequest, ReqBody, JSON_CONTENT_TYPE};
use bon::Builder;
use serde_json::Value;

/// One request/expectation pair.
#[derive(Clone, Debug, PartialEq, Builder)]
pub struct TestCase {
    #[builder(into)]
    pub name: String,
    pub method: HttpMethod,
    #[builder(into)]
    pub endpoint: String,
    pub expected_status: u16,
    pub body: Option<Value>,
}

impl TestCase {
    pub fn to_endpoint(&self) -> Endpoint {
        Endpoint::new(self.method, self.endpoint.clone())
    }

    pub fn to_http_request(&self) -> HttpRequest {
        let req_body = match &self.body {
            None => ReqBody::empty(),
            Some(value) => ReqBody::new(value.clone()),
        };
        HttpRequest::new(self.to_endpoint(), req_body, JSON_CONTENT_TYPE.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn builds_post_request_with_json_body() {
        let case = TestCase::builder()
            .name("Create Lead")
            .method(HttpMethod::POST)
            .endpoint("api/leads")
            .expected_status(200)
            .body(json!({"name": "n"}))
            .build();
        let request = case.to_http_request();
        assert_eq!(request.endpoint.method, HttpMethod::POST);
        assert_eq!(request.endpoint.path, "api/leads");
        assert_eq!(request.req_body.value, Some(json!({"name": "n"})));
        assert_eq!(request.content_type, "application/json");
    }

    #[test]
    fn body_is_optional() {
        let case = TestCase::builder()
            .name("Root API Endpoint")
            .method(HttpMethod::GET)
            .endpoint("api/")
            .expected_status(200)
            .build();
        assert_eq!(case.body, None);
        assert_eq!(case.to_http_request().req_body, ReqBody::empty());
    }
}
