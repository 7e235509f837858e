use reqwest::Method;
use serde_json::{Map, Value};
use url::form_urlencoded;

use crate::ClientError;

/// Encoding used for the body of non-`GET` requests.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ContentType {
    /// `application/json`: parameters are sent as a JSON document.
    #[default]
    Json,
    /// `application/x-www-form-urlencoded`: top-level parameters are sent as form pairs.
    Form,
}

impl ContentType {
    /// Header value sent as `Content-Type`.
    pub fn header_value(self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Form => "application/x-www-form-urlencoded",
        }
    }
}

/// Encoded request body.
#[derive(Clone, Debug, PartialEq)]
pub enum RequestBody {
    Json(Value),
    Form(String),
}

/// A fully shaped request, ready to be sent by a transport client.
#[derive(Clone, Debug, PartialEq)]
pub struct PreparedRequest {
    pub method: Method,
    pub route: String,
    pub query: Vec<(String, String)>,
    pub body: Option<RequestBody>,
}

/// Returns `true` when `code` is a success status (`200..300`).
pub fn is_status_ok(code: u16) -> bool {
    (200..300).contains(&code)
}

/// Shapes `params` for `method` on `route`.
///
/// `GET` parameters go to the query string with null entries dropped. Other
/// verbs carry them as a body encoded according to `content_type`.
/// `Value::Null` means no parameters at all.
pub fn build_request(
    method: Method,
    route: &str,
    params: &Value,
    content_type: ContentType,
) -> Result<PreparedRequest, ClientError> {
    let mut prepared = PreparedRequest {
        method,
        route: route.to_owned(),
        query: Vec::new(),
        body: None,
    };

    if params.is_null() {
        return Ok(prepared);
    }

    if prepared.method == Method::GET {
        prepared.query = flatten_pairs(params)?;
    } else {
        prepared.body = Some(match content_type {
            ContentType::Json => RequestBody::Json(params.clone()),
            ContentType::Form => {
                let pairs = flatten_pairs(params)?;
                RequestBody::Form(encode_form(&pairs))
            }
        });
    }

    Ok(prepared)
}

fn flatten_pairs(params: &Value) -> Result<Vec<(String, String)>, ClientError> {
    let object = params.as_object().ok_or_else(|| {
        ClientError::InvalidParameters(format!("expected a JSON object, got {params}"))
    })?;
    Ok(object_pairs(object))
}

fn object_pairs(object: &Map<String, Value>) -> Vec<(String, String)> {
    let mut pairs = Vec::with_capacity(object.len());
    for (key, value) in object {
        match value {
            Value::Null => {}
            Value::Array(items) => {
                let array_key = format!("{key}[]");
                pairs.extend(
                    items
                        .iter()
                        .filter(|item| !item.is_null())
                        .map(|item| (array_key.clone(), render_scalar(item))),
                );
            }
            other => pairs.push((key.clone(), render_scalar(other))),
        }
    }
    pairs
}

fn render_scalar(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn encode_form(pairs: &[(String, String)]) -> String {
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish()
}

#[cfg(test)]
mod tests {
    use reqwest::Method;
    use serde_json::{Value, json};

    use super::{ContentType, RequestBody, build_request, is_status_ok};
    use crate::ClientError;

    #[test]
    fn status_ok_covers_exactly_the_2xx_range() {
        assert!(is_status_ok(200));
        assert!(is_status_ok(204));
        assert!(is_status_ok(299));
        assert!(!is_status_ok(199));
        assert!(!is_status_ok(300));
        assert!(!is_status_ok(404));
        assert!(!is_status_ok(500));
        assert!(!is_status_ok(0));
    }

    #[test]
    fn get_drops_null_parameters() {
        let prepared = build_request(
            Method::GET,
            "/users",
            &json!({"a": 1, "b": null}),
            ContentType::Json,
        )
        .expect("valid params");
        assert_eq!(prepared.query, vec![("a".to_owned(), "1".to_owned())]);
        assert!(prepared.body.is_none());
    }

    #[test]
    fn get_renders_strings_raw_and_arrays_as_repeated_keys() {
        let prepared = build_request(
            Method::GET,
            "/calls/search",
            &json!({"phone_number": "+33 1", "tags": [1, null, 2], "archived": false}),
            ContentType::Json,
        )
        .expect("valid params");
        let mut query = prepared.query;
        query.sort();
        assert_eq!(
            query,
            vec![
                ("archived".to_owned(), "false".to_owned()),
                ("phone_number".to_owned(), "+33 1".to_owned()),
                ("tags[]".to_owned(), "1".to_owned()),
                ("tags[]".to_owned(), "2".to_owned()),
            ]
        );
    }

    #[test]
    fn get_rejects_non_object_parameters() {
        let error = build_request(Method::GET, "/users", &json!([1, 2]), ContentType::Json)
            .expect_err("arrays cannot become a query string");
        assert!(matches!(error, ClientError::InvalidParameters(_)));
    }

    #[test]
    fn json_body_is_passed_through_unchanged() {
        let params = json!({
            "first_name": "Ada",
            "emails": [{"label": "work", "value": "ada@example.com"}],
            "nested": {"flag": true, "empty": null}
        });
        let prepared = build_request(Method::POST, "/contacts", &params, ContentType::Json)
            .expect("valid params");
        assert!(prepared.query.is_empty());
        assert_eq!(prepared.body, Some(RequestBody::Json(params)));
    }

    #[test]
    fn form_body_encodes_top_level_pairs() {
        let prepared = build_request(
            Method::PUT,
            "/numbers/3",
            &json!({"name": "Front desk", "priority": null, "open": true}),
            ContentType::Form,
        )
        .expect("valid params");
        assert_eq!(
            prepared.body,
            Some(RequestBody::Form("name=Front+desk&open=true".to_owned()))
        );
    }

    #[test]
    fn null_params_produce_bare_request() {
        let prepared = build_request(
            Method::DELETE,
            "/contacts/7",
            &Value::Null,
            ContentType::Json,
        )
        .expect("null is accepted");
        assert_eq!(prepared.method, Method::DELETE);
        assert_eq!(prepared.route, "/contacts/7");
        assert!(prepared.query.is_empty());
        assert!(prepared.body.is_none());
    }
}
