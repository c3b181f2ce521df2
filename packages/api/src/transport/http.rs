use serde_json::Value;

use super::{ApiRequest, ApiResponse, Method, Transport};
use crate::ApiError;

/// `reqwest`-backed Transport.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    base_url: String,
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let url = self.url(&request.path);
        let mut builder = match request.method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
            Method::Delete => self.client.delete(&url),
        };
        if let Some(token) = &request.bearer {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(ApiResponse::new(status, parse_body(text)))
    }
}

/// JSON body, or `Null` when the body is empty or not JSON.
///
/// Proxies answer with HTML pages; those never reach an error message.
fn parse_body(text: String) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    match serde_json::from_str(&text) {
        Ok(value) => value,
        Err(e) => {
            tracing::debug!(error = %e, body = %text, "response body is not JSON");
            Value::Null
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_without_double_slash() {
        let transport = HttpTransport::new("http://localhost:3001/");
        assert_eq!(transport.base_url(), "http://localhost:3001");
        assert_eq!(transport.url("/api/login"), "http://localhost:3001/api/login");
    }

    #[test]
    fn test_parse_body() {
        assert_eq!(parse_body(String::new()), Value::Null);
        assert_eq!(parse_body("{\"msg\":\"ok\"}".into())["msg"], "ok");
        assert_eq!(parse_body("\"Not Found\"".into()), Value::String("Not Found".into()));
        assert_eq!(parse_body("<html>502</html>".into()), Value::Null);
    }

    #[test]
    fn test_html_error_page_uses_fallback() {
        let body = parse_body("<html><body>502 Bad Gateway</body></html>".into());
        let err = ApiError::from_status(502, &body);

        assert_eq!(err.message_or("Error al iniciar sesión"), "Error al iniciar sesión");
        assert!(err.is_status());
    }
}
