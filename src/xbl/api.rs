//! Fixed values of the OpenXBL API contract

/// Base URL of the OpenXBL v2 API
pub const BASE_URL: &str = "https://xbl.io/api/v2";

pub const ACCEPT_HEADER: &str = "Accept";
pub const ACCEPT_JSON: &str = "application/json";

/// Contract version header required by every OpenXBL endpoint
pub const CONTRACT_HEADER: &str = "x-contract";
pub const CONTRACT_HEADER_VALUE: &str = "100";

/// Header carrying the raw API key (no scheme prefix)
pub const AUTH_HEADER: &str = "X-Authorization";

/// User agent sent on the shared connection
pub const USER_AGENT: &str = concat!("openxbl/", env!("CARGO_PKG_VERSION"));
