use std::fmt;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Aircall API credentials.
///
/// Requests authenticate with HTTP Basic auth built from the API id and
/// token, as issued in the Aircall dashboard.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    api_id: String,
    api_token: String,
}

impl Credentials {
    pub fn new(api_id: impl Into<String>, api_token: impl Into<String>) -> Self {
        Self {
            api_id: api_id.into(),
            api_token: api_token.into(),
        }
    }

    pub fn api_id(&self) -> &str {
        &self.api_id
    }

    /// Returns the `Authorization` header value: `Basic base64(id:token)`.
    pub fn authorization_header(&self) -> String {
        let raw = format!("{}:{}", self.api_id, self.api_token);
        format!("Basic {}", STANDARD.encode(raw))
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_id", &self.api_id)
            .field("api_token", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::Credentials;

    #[test]
    fn authorization_header_encodes_id_and_token() {
        let credentials = Credentials::new("id", "token");
        // base64("id:token")
        assert_eq!(credentials.authorization_header(), "Basic aWQ6dG9rZW4=");
    }

    #[test]
    fn authorization_header_pads_short_input() {
        let credentials = Credentials::new("a", "b");
        assert_eq!(credentials.authorization_header(), "Basic YTpi");

        let credentials = Credentials::new("ab", "c");
        assert_eq!(credentials.authorization_header(), "Basic YWI6Yw==");
    }

    #[test]
    fn debug_output_hides_token() {
        let rendered = format!("{:?}", Credentials::new("my-id", "s3cret"));
        assert!(rendered.contains("my-id"));
        assert!(!rendered.contains("s3cret"));
    }
}
