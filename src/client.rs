use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, Url};
use serde_json::Value;

use crate::request::{ContentType, PreparedRequest, RequestBody, build_request, is_status_ok};
use crate::{ClientError, Credentials};

/// Base URL of the Aircall v1 REST API.
pub const DEFAULT_BASE_URL: &str = "https://api.aircall.io/v1";

/// Generic async Aircall transport.
///
/// Sends [`PreparedRequest`]s with Basic authentication and normalizes
/// responses. For one method per endpoint, use [`crate::AircallClient`].
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: Url,
    credentials: Credentials,
    content_type: ContentType,
    http: reqwest::Client,
}

impl ApiClient {
    /// Creates a client targeting [`DEFAULT_BASE_URL`].
    pub fn new(credentials: Credentials) -> Result<Self, ClientError> {
        Ok(Self {
            base_url: parse_base_url(DEFAULT_BASE_URL)?,
            credentials,
            content_type: ContentType::default(),
            http: reqwest::Client::new(),
        })
    }

    /// Returns a new client sending requests to `base_url` instead.
    ///
    /// The URL is normalized to include a trailing slash, so routes join
    /// correctly.
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
    pub async fn request_json(
        &self,
        method: Method,
        route: &str,
        params: &Value,
    ) -> Result<Value, ClientError> {
        let prepared = self.prepare(method, route, params)?;
        self.execute(prepared).await
    }

    /// Sends a prepared request and normalizes the response.
    ///
    /// Returns [`Value::Null`] for successful responses with an empty body and
    /// [`ClientError::Response`] for statuses outside `200..300`.
    pub async fn execute(&self, prepared: PreparedRequest) -> Result<Value, ClientError> {
        let url = self.build_url(&prepared.route)?;
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

        let response = request.send().await?;
        let status = response.status();
        let payload = response.text().await?;
        tracing::debug!(status = status.as_u16(), route = %prepared.route, "received Aircall response");

        decode_response(status, &payload)
    }

    fn build_url(&self, route: &str) -> Result<Url, ClientError> {
        join_route(&self.base_url, route)
    }
}

pub(crate) fn parse_base_url(base_url: &str) -> Result<Url, ClientError> {
    let parsed =
        Url::parse(base_url).map_err(|_| ClientError::InvalidBaseUrl(base_url.to_owned()))?;
    Ok(ensure_trailing_slash(parsed))
}

pub(crate) fn join_route(base_url: &Url, route: &str) -> Result<Url, ClientError> {
    let relative = route.trim_start_matches('/');
    base_url
        .join(relative)
        .map_err(|_| ClientError::InvalidPath(route.to_owned()))
}

/// Classifies a response by status and decodes its body.
pub(crate) fn decode_response(
    status: reqwest::StatusCode,
    payload: &str,
) -> Result<Value, ClientError> {
    if !is_status_ok(status.as_u16()) {
        tracing::warn!(status = status.as_u16(), "Aircall request failed");
        return Err(ClientError::Response {
            status,
            body: decode_error_body(payload),
        });
    }

    if payload.trim().is_empty() {
        Ok(Value::Null)
    } else {
        Ok(serde_json::from_str(payload)?)
    }
}

fn decode_error_body(payload: &str) -> Value {
    if payload.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(payload).unwrap_or_else(|_| Value::String(payload.to_owned()))
}

fn ensure_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let mut path = url.path().to_owned();
        path.push('/');
        url.set_path(&path);
    }
    url
}

#[cfg(test)]
mod tests {
    use reqwest::StatusCode;
    use serde_json::{Value, json};

    use super::{ApiClient, decode_response};
    use crate::{ClientError, Credentials};

    fn client() -> ApiClient {
        ApiClient::new(Credentials::new("id", "token")).expect("default url is valid")
    }

    #[test]
    fn default_base_url_keeps_version_prefix() {
        let resolved = client().build_url("/users/42").expect("valid route");
        assert_eq!(resolved.as_str(), "https://api.aircall.io/v1/users/42");
    }

    #[test]
    fn joins_routes_from_custom_base_with_nested_prefix() {
        let client = client()
            .with_base_url("https://example.com/api/v1")
            .expect("valid url");
        let resolved = client.build_url("contacts/7").expect("valid route");
        assert_eq!(resolved.as_str(), "https://example.com/api/v1/contacts/7");
    }

    #[test]
    fn rejects_relative_base_url() {
        let error = client().with_base_url("not a url").expect_err("invalid url");
        assert!(matches!(error, ClientError::InvalidBaseUrl(_)));
    }

    #[test]
    fn success_with_empty_body_is_null() {
        let value = decode_response(StatusCode::NO_CONTENT, "").expect("2xx is success");
        assert_eq!(value, Value::Null);
    }

    #[test]
    fn success_decodes_json() {
        let value = decode_response(StatusCode::OK, r#"{"ping":"pong"}"#).expect("2xx is success");
        assert_eq!(value, json!({"ping": "pong"}));
    }

    #[test]
    fn failure_carries_status_and_decoded_body() {
        let error = decode_response(StatusCode::NOT_FOUND, r#"{"error":"Not found"}"#)
            .expect_err("404 is an error");
        match error {
            ClientError::Response { status, body } => {
                assert_eq!(status, StatusCode::NOT_FOUND);
                assert_eq!(body, json!({"error": "Not found"}));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn failure_keeps_non_json_body_as_text() {
        let error = decode_response(StatusCode::BAD_GATEWAY, "upstream down")
            .expect_err("502 is an error");
        assert_eq!(error.status(), Some(StatusCode::BAD_GATEWAY));
        assert!(matches!(
            error,
            ClientError::Response { body: Value::String(text), .. } if text == "upstream down"
        ));
    }

    #[test]
    fn redirect_status_is_an_error() {
        let error = decode_response(StatusCode::MULTIPLE_CHOICES, "").expect_err("300 is an error");
        assert!(matches!(error, ClientError::Response { body: Value::Null, .. }));
    }
}
