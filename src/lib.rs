//! Typed client for the OpenXBL Xbox Live API.
//!
//! Resource types declare their endpoint with [`xbl_endpoint!`], every call
//! is funneled through [`resource::request`], and [`LiveClient`] pulls the
//! key holder's [`GamerProfile`] in the background at construction.

pub mod config;
pub mod error;
pub mod profile;
pub mod resource;
pub mod xbl;

pub use error::{Result, XblError};
pub use profile::{AccountReputation, AccountTier, GamerProfile, PlayedGame};
pub use resource::{HttpMethod, XblDto};
pub use xbl::client::LiveClient;
pub use xbl::http::{format_xbl_error, Connection};
pub use xbl::prefetch::{FetchState, PendingFetch};
