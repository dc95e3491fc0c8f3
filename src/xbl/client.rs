//! OpenXBL Client
//!
//! Main client for the OpenXBL API, combining the per-client HTTP service
//! with the background pull of the key holder's gamer profile.

use super::api;
use super::http::{Connection, HttpService};
use super::prefetch::{FetchState, PendingFetch};
use crate::error::{Result, XblError};
use crate::profile::GamerProfile;
use crate::resource::{self, AccountDto, HttpMethod, XblDto};
use std::sync::Arc;

/// Main OpenXBL client
#[derive(Clone)]
pub struct LiveClient {
    http: Arc<HttpService>,
    current_task: Option<PendingFetch<GamerProfile>>,
}

impl LiveClient {
    /// Create a client on the process-wide connection and the public API.
    ///
    /// `api_key` is a personal token from xbl.io or one issued to an app on
    /// behalf of a user.
    ///
    /// The default profile pull starts before this returns **only when
    /// `begin_gamer_profile_pull` is false**. Passing `true` leaves
    /// [`current_task`](Self::current_task) unset.
    pub fn new(api_key: &str, begin_gamer_profile_pull: bool) -> Result<Self> {
        Self::with_connection(Connection::global()?, api_key, api::BASE_URL, begin_gamer_profile_pull)
    }

    /// Create a client on an explicit connection and base URL
    pub fn with_connection(
        connection: &Connection,
        api_key: &str,
        base_url: &str,
        begin_gamer_profile_pull: bool,
    ) -> Result<Self> {
        let mut http = HttpService::new(connection, base_url)?;
        http.add_header(api::ACCEPT_HEADER, api::ACCEPT_JSON)?;
        http.add_header(api::CONTRACT_HEADER, api::CONTRACT_HEADER_VALUE)?;
        http.add_header(api::AUTH_HEADER, api_key)?;

        // Headers are fixed from here on
        let http = Arc::new(http);

        let current_task = if !begin_gamer_profile_pull {
            tracing::info!("Starting default gamer profile pull from {}", http.base_url());
            Some(PendingFetch::spawn(fetch_default_gamer_profile(Arc::clone(&http)))?)
        } else {
            None
        };

        Ok(Self { http, current_task })
    }

    /// Handle of the background profile pull, if one was started
    pub fn current_task(&self) -> Option<&PendingFetch<GamerProfile>> {
        self.current_task.as_ref()
    }

    /// The key holder's profile, without waiting.
    ///
    /// Returns `Ok(None)` when no pull was started and
    /// [`XblError::PrefetchNotReady`] while it is still running. A failed pull
    /// returns its error on every call.
    pub fn current(&self) -> Result<Option<GamerProfile>> {
        let Some(task) = &self.current_task else {
            return Ok(None);
        };

        match task.peek() {
            FetchState::Pending => Err(XblError::PrefetchNotReady),
            FetchState::Completed(profile) => Ok(Some(profile)),
            FetchState::Failed(e) => Err(e),
        }
    }

    /// The key holder's profile, waiting for the background pull to finish
    pub async fn wait_current(&self) -> Result<Option<GamerProfile>> {
        match &self.current_task {
            Some(task) => task.wait().await.map(Some),
            None => Ok(None),
        }
    }

    /// Fetch any declared resource type
    pub async fn request<T: XblDto>(&self, method: HttpMethod) -> Result<T> {
        resource::request::<T>(&self.http, method).await
    }

    /// Basic profile information about the holder of the API key
    pub async fn get_default_gamer_profile(&self) -> Result<GamerProfile> {
        fetch_default_gamer_profile(Arc::clone(&self.http)).await
    }
}

async fn fetch_default_gamer_profile(http: Arc<HttpService>) -> Result<GamerProfile> {
    let account = resource::request::<AccountDto>(&http, HttpMethod::Get).await?;
    let profile = GamerProfile::from_account_dto(account);
    tracing::info!("Fetched gamer profile for {}", profile.gamertag);
    Ok(profile)
}
