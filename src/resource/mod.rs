//! Typed resource layer
//!
//! # Architecture
//!
//! - [`registry`] - Endpoint metadata attached to each DTO type
//! - [`dispatch`] - Single funnel mapping a DTO type and verb to a transport call
//! - [`account`] / [`titles`] - Wire shapes of the supported endpoints
//!
//! # Example
//!
//! ```ignore
//! use openxbl::resource::{request, AccountDto, HttpMethod};
//!
//! async fn account(http: &openxbl::xbl::http::HttpService) -> openxbl::Result<AccountDto> {
//!     request::<AccountDto>(http, HttpMethod::Get).await
//! }
//! ```

pub mod account;
pub mod dispatch;
pub mod registry;
pub mod titles;

pub use account::AccountDto;
pub use dispatch::{request, HttpMethod};
pub use registry::{resolve, ResourceDescriptor, XblDto};
pub use titles::{TitleDto, TitleHistoryDto};
