//! OpenXBL API interaction module
//!
//! # Module Structure
//!
//! - [`api`] - Fixed URLs and header values of the OpenXBL contract
//! - [`client`] - [`LiveClient`](client::LiveClient), the public facade
//! - [`http`] - Shared connection and per-client HTTP service
//! - [`prefetch`] - Handle for the background profile pull
//!
//! # Example
//!
//! ```ignore
//! use openxbl::LiveClient;
//!
//! async fn example() -> openxbl::Result<()> {
//!     let client = LiveClient::new("my-api-key", false)?;
//!     if let Some(profile) = client.wait_current().await? {
//!         println!("{} has {} gamerscore", profile.gamertag, profile.gamerscore);
//!     }
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod client;
pub mod http;
pub mod prefetch;
