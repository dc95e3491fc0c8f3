//! Dispatcher
//!
//! Every typed OpenXBL call goes through [`request`]: resolve the endpoint,
//! pick the transport operation for the verb, return the typed result.

use super::registry::{resolve, XblDto};
use crate::error::{Result, XblError};
use crate::xbl::http::HttpService;
use std::fmt;

/// HTTP verbs a request can name. Only [`HttpMethod::Get`] is implemented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        };
        f.write_str(name)
    }
}

/// Fetch `T` from its declared endpoint
pub async fn request<T: XblDto>(http: &HttpService, method: HttpMethod) -> Result<T> {
    let descriptor = resolve::<T>()?;
    tracing::debug!(
        "request: resource={}, method={}, endpoint={}",
        descriptor.resource_type,
        method,
        descriptor.endpoint_path
    );

    match method {
        HttpMethod::Get => http.get::<T>(descriptor.endpoint_path).await,
        // Write verbs need a request body and content type
        _ => Err(XblError::UnsupportedOperation(method)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::AccountDto;
    use crate::xbl::http::Connection;

    #[test]
    fn test_method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "GET");
        assert_eq!(HttpMethod::Put.to_string(), "PUT");
    }

    #[tokio::test]
    async fn test_write_verbs_are_rejected_without_io() {
        let connection = Connection::new().unwrap();
        // Port 9 (discard) would fail at the socket if a request were sent.
        let http = HttpService::new(&connection, "http://127.0.0.1:9").unwrap();

        for method in [HttpMethod::Post, HttpMethod::Put, HttpMethod::Delete] {
            let result = request::<AccountDto>(&http, method).await;
            assert_eq!(result.unwrap_err(), XblError::UnsupportedOperation(method));
        }
    }
}
