use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, Url};
use serde_json::Value;

use crate::client::{DEFAULT_BASE_URL, decode_response, join_route, parse_base_url};
use crate::request::{ContentType, PreparedRequest, RequestBody, build_request};
use crate::{ClientError, Credentials};

/// Generic blocking Aircall transport.
///
/// This is the synchronous counterpart of [`crate::ApiClient`].
#[derive(Debug)]
pub struct BlockingApiClient {
    base_url: Url,
    credentials: Credentials,
    content_type: ContentType,
    http: reqwest::blocking::Client,
}

impl BlockingApiClient {
    /// Creates a client targeting [`DEFAULT_BASE_URL`].
    pub fn new(credentials: Credentials) -> Result<Self, ClientError> {
        Ok(Self {
            base_url: parse_base_url(DEFAULT_BASE_URL)?,
            credentials,
            content_type: ContentType::default(),
            http: reqwest::blocking::Client::new(),
        })
    }

    /// Returns a new client sending requests to `base_url` instead.
    pub fn with_base_url(mut self, base_url: impl AsRef<str>) -> Result<Self, ClientError> {
        self.base_url = parse_base_url(base_url.as_ref())?;
        Ok(self)
    }

    /// Returns a new client encoding non-`GET` bodies as `content_type`.
    #[must_use]
    pub fn with_content_type(mut self, content_type: ContentType) -> Self {
        self.content_type = content_type;
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn content_type(&self) -> ContentType {
        self.content_type
    }

    /// Shapes `params` for `method` on `route` with this client's content type.
    pub fn prepare(
        &self,
        method: Method,
        route: &str,
        params: &Value,
    ) -> Result<PreparedRequest, ClientError> {
        build_request(method, route, params, self.content_type)
    }

    /// Builds and sends a request, returning the decoded JSON response.
    pub fn request_json(
        &self,
        method: Method,
        route: &str,
        params: &Value,
    ) -> Result<Value, ClientError> {
        let prepared = self.prepare(method, route, params)?;
        self.execute(prepared)
    }

    /// Sends a prepared request and normalizes the response.
    ///
    /// Returns [`Value::Null`] for successful responses with an empty body and
    /// [`ClientError::Response`] for statuses outside `200..300`.
    pub fn execute(&self, prepared: PreparedRequest) -> Result<Value, ClientError> {
        let url = join_route(&self.base_url, &prepared.route)?;
        tracing::debug!(method = %prepared.method, route = %prepared.route, "sending Aircall request");

        let mut request = self
            .http
            .request(prepared.method.clone(), url)
            .header(ACCEPT, "application/json")
            .header(AUTHORIZATION, self.credentials.authorization_header());

        if !prepared.query.is_empty() {
            request = request.query(&prepared.query);
        }

        match prepared.body {
            Some(RequestBody::Json(json_body)) => {
                request = request.json(&json_body);
            }
            Some(RequestBody::Form(form_body)) => {
                request = request
                    .header(CONTENT_TYPE, ContentType::Form.header_value())
                    .body(form_body);
            }
            None => {}
        }

        let response = request.send()?;
        let status = response.status();
        let payload = response.text()?;
        tracing::debug!(status = status.as_u16(), route = %prepared.route, "received Aircall response");

        decode_response(status, &payload)
    }
}
