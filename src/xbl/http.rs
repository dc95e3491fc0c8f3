//! HTTP transport for OpenXBL REST calls

use super::api;
use crate::error::{Result, XblError};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::sync::OnceLock;
use url::Url;

/// Maximum length of response body to log
const MAX_LOG_BODY_LENGTH: usize = 200;

/// Process-wide connection, built on first use and never torn down
static GLOBAL_CONNECTION: OnceLock<Connection> = OnceLock::new();

/// Sanitize response body for logging
/// Truncates long responses and drops control characters
fn sanitize_for_log(body: &str) -> String {
    let truncated = if body.chars().count() > MAX_LOG_BODY_LENGTH {
        let head: String = body.chars().take(MAX_LOG_BODY_LENGTH).collect();
        format!("{}... [truncated, {} bytes total]", head, body.len())
    } else {
        body.to_string()
    };

    truncated.replace(|c: char| !c.is_ascii_graphic() && c != ' ', "")
}

/// Outbound connection pool shared by every client.
///
/// Holds no per-client state: headers and the API key live on
/// [`HttpService`] and are layered onto each request.
#[derive(Debug, Clone)]
pub struct Connection {
    client: Client,
}

impl Connection {
    /// Build an independent connection pool
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(api::USER_AGENT)
            .build()
            .map_err(|e| XblError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    /// The process-wide connection, initialized on first call
    pub fn global() -> Result<&'static Connection> {
        if let Some(connection) = GLOBAL_CONNECTION.get() {
            return Ok(connection);
        }

        let connection = Self::new()?;
        Ok(GLOBAL_CONNECTION.get_or_init(|| connection))
    }
}

/// Per-client HTTP service: base URL and default headers on top of a shared [`Connection`]
pub struct HttpService {
    connection: Connection,
    base_url: String,
    headers: HeaderMap,
}

impl HttpService {
    /// Create a service rooted at `base_url`
    pub fn new(connection: &Connection, base_url: &str) -> Result<Self> {
        Url::parse(base_url)
            .map_err(|e| XblError::Configuration(format!("Invalid base URL '{}': {}", base_url, e)))?;

        Ok(Self {
            connection: connection.clone(),
            base_url: base_url.trim_end_matches('/').to_string(),
            headers: HeaderMap::new(),
        })
    }

    /// Add a default header sent with every request
    pub(crate) fn add_header(&mut self, key: &str, value: &str) -> Result<()> {
        let name = HeaderName::from_bytes(key.as_bytes())
            .map_err(|_| XblError::Configuration(format!("Invalid header name: {}", key)))?;
        let mut value = HeaderValue::from_str(value)
            .map_err(|_| XblError::Configuration(format!("Invalid value for header {}", key)))?;

        if name.as_str() == api::AUTH_HEADER.to_ascii_lowercase() {
            value.set_sensitive(true);
        }

        self.headers.insert(name, value);
        Ok(())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for an endpoint path such as `/account`
    pub fn endpoint_url(&self, endpoint: &str) -> Result<Url> {
        let raw = format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'));
        Url::parse(&raw)
            .map_err(|e| XblError::Configuration(format!("Invalid endpoint URL '{}': {}", raw, e)))
    }

    /// Make a GET request and deserialize the JSON body into `T`
    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let url = self.endpoint_url(endpoint)?;
        tracing::debug!("GET {}", url);

        let response = self
            .connection
            .client
            .get(url)
            .headers(self.headers.clone())
            .send()
            .await
            .map_err(|e| XblError::transport(e.status().map(|s| s.as_u16()), format!("Failed to send request: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| XblError::transport(Some(status.as_u16()), format!("Failed to read response body: {}", e)))?;

        if !status.is_success() {
            tracing::debug!("API error: {} - {}", status, sanitize_for_log(&body));
            return Err(XblError::transport(
                Some(status.as_u16()),
                format!("API request failed: {}", status),
            ));
        }

        serde_json::from_str(&body).map_err(|e| XblError::Deserialization(e.to_string()))
    }
}

/// Format an OpenXBL error for display
/// Maps failures to short messages that do not repeat wire details
pub fn format_xbl_error(error: &XblError) -> String {
    match error {
        XblError::Transport { status: Some(401), .. } => {
            "Authentication failed. Check your OpenXBL API key.".to_string()
        },
        XblError::Transport { status: Some(403), .. } => {
            "Permission denied for this API key.".to_string()
        },
        XblError::Transport { status: Some(404), .. } => "Resource not found.".to_string(),
        XblError::Transport { status: Some(429), .. } => {
            "Rate limit exceeded. Please try again later.".to_string()
        },
        XblError::Transport { status: Some(code), .. } if *code >= 500 => {
            "OpenXBL service temporarily unavailable. Please try again.".to_string()
        },
        XblError::Transport { .. } => {
            "Request failed. Check your network connection and try again.".to_string()
        },
        XblError::Deserialization(_) => {
            "Unexpected response from OpenXBL. The API contract may have changed.".to_string()
        },
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_truncates_long_bodies() {
        let body = "x".repeat(500);
        let sanitized = sanitize_for_log(&body);
        assert!(sanitized.starts_with(&"x".repeat(MAX_LOG_BODY_LENGTH)));
        assert!(sanitized.ends_with("[truncated, 500 bytes total]"));
    }

    #[test]
    fn test_sanitize_drops_control_characters() {
        assert_eq!(sanitize_for_log("bad\r\nrequest\t!"), "badrequest!");
    }

    #[test]
    fn test_endpoint_url_joins_paths() {
        let connection = Connection::new().unwrap();
        let http = HttpService::new(&connection, "https://xbl.io/api/v2/").unwrap();
        assert_eq!(http.base_url(), "https://xbl.io/api/v2");
        assert_eq!(
            http.endpoint_url("/account").unwrap().as_str(),
            "https://xbl.io/api/v2/account"
        );
        assert_eq!(
            http.endpoint_url("achievements").unwrap().as_str(),
            "https://xbl.io/api/v2/achievements"
        );
    }

    #[test]
    fn test_invalid_base_url_is_configuration_error() {
        let connection = Connection::new().unwrap();
        let result = HttpService::new(&connection, "not a url");
        assert!(matches!(result, Err(XblError::Configuration(_))));
    }

    #[test]
    fn test_invalid_header_value_is_rejected() {
        let connection = Connection::new().unwrap();
        let mut http = HttpService::new(&connection, api::BASE_URL).unwrap();
        let result = http.add_header(api::AUTH_HEADER, "key\nwith newline");
        assert!(matches!(result, Err(XblError::Configuration(_))));
    }

    #[test]
    fn test_auth_header_is_marked_sensitive() {
        let connection = Connection::new().unwrap();
        let mut http = HttpService::new(&connection, api::BASE_URL).unwrap();
        http.add_header(api::AUTH_HEADER, "ABC123").unwrap();
        http.add_header(api::ACCEPT_HEADER, api::ACCEPT_JSON).unwrap();
        assert!(http.headers[api::AUTH_HEADER].is_sensitive());
        assert!(!http.headers[api::ACCEPT_HEADER].is_sensitive());
    }

    #[test]
    fn test_global_connection_is_shared() {
        let first = Connection::global().unwrap();
        let second = Connection::global().unwrap();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_format_xbl_error_messages() {
        assert!(format_xbl_error(&XblError::transport(Some(401), "x")).contains("API key"));
        assert!(format_xbl_error(&XblError::transport(Some(503), "x")).contains("unavailable"));
        assert!(format_xbl_error(&XblError::transport(None, "x")).contains("network"));
        assert_eq!(
            format_xbl_error(&XblError::PrefetchNotReady),
            XblError::PrefetchNotReady.to_string()
        );
    }
}
