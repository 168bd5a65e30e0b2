//! Public client surface + builder.
//! Cookie/crumb handling lives in `auth`, default endpoints in `constants`.

mod auth;
mod constants;

use crate::core::YfError;
use constants::{DEFAULT_BASE_QUOTE_API, DEFAULT_COOKIE_URL, DEFAULT_CRUMB_URL, USER_AGENT};
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, RwLock};
use url::Url;

#[derive(Debug, Default)]
struct CredentialState {
    cookie: Option<String>,
    crumb: Option<String>,
}

/// Yahoo Finance quoteSummary client.
///
/// Cheap to clone; clones share the HTTP connection pool and the cached
/// cookie/crumb pair.
#[derive(Debug, Clone)]
pub struct YfClient {
    http: Client,
    base_quote_api: Url,
    cookie_url: Url,
    crumb_url: Url,

    state: Arc<RwLock<CredentialState>>,
    credential_fetch_lock: Arc<Mutex<()>>,
}

impl YfClient {
    /// Create a new builder.
    pub fn builder() -> YfClientBuilder {
        YfClientBuilder::default()
    }

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    pub(crate) fn base_quote_api(&self) -> &Url {
        &self.base_quote_api
    }
}

/* ----------------------- Builder ----------------------- */

/// Builder for [`YfClient`]. Every endpoint defaults to Yahoo's public host.
#[derive(Debug, Default)]
pub struct YfClientBuilder {
    user_agent: Option<String>,
    base_quote_api: Option<Url>,
    cookie_url: Option<Url>,
    crumb_url: Option<Url>,

    preauth_cookie: Option<String>,
    preauth_crumb: Option<String>,

    timeout: Option<Duration>,
}

impl YfClientBuilder {
    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the quoteSummary API base (e.g., `https://query1.finance.yahoo.com/v10/finance/quoteSummary/`).
    #[must_use]
    pub fn base_quote_api(mut self, url: Url) -> Self {
        self.base_quote_api = Some(url);
        self
    }

    /// Override the cookie bootstrap URL.
    #[must_use]
    pub fn cookie_url(mut self, url: Url) -> Self {
        self.cookie_url = Some(url);
        self
    }

    /// Override the crumb URL.
    #[must_use]
    pub fn crumb_url(mut self, url: Url) -> Self {
        self.crumb_url = Some(url);
        self
    }

    /// Start with a known cookie/crumb pair instead of fetching one.
    #[must_use]
    pub fn preauth(mut self, cookie: impl Into<String>, crumb: impl Into<String>) -> Self {
        self.preauth_cookie = Some(cookie.into());
        self.preauth_crumb = Some(crumb.into());
        self
    }

    /// Set an overall request timeout. Default: none.
    #[must_use]
    pub const fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Returns an error if a default URL fails to parse or the HTTP client cannot be built.
    pub fn build(self) -> Result<YfClient, YfError> {
        let base_quote_api = match self.base_quote_api {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_QUOTE_API)?,
        };
        let cookie_url = match self.cookie_url {
            Some(u) => u,
            None => Url::parse(DEFAULT_COOKIE_URL)?,
        };
        let crumb_url = match self.crumb_url {
            Some(u) => u,
            None => Url::parse(DEFAULT_CRUMB_URL)?,
        };

        let mut httpb = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT))
            .cookie_store(true);

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }

        let http = httpb.build()?;

        Ok(YfClient {
            http,
            base_quote_api,
            cookie_url,
            crumb_url,
            state: Arc::new(RwLock::new(CredentialState {
                cookie: self.preauth_cookie,
                crumb: self.preauth_crumb,
            })),
            credential_fetch_lock: Arc::new(Mutex::new(())),
        })
    }
}
