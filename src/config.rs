//! Process configuration read from the environment.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use thiserror::Error;
use url::Url;

use crate::core::{YfClient, YfClientBuilder, YfError};

/// Port used when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 5000;

/// A configuration value that could not be parsed.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} is not a valid {expected}: {value:?}")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Server and upstream settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub base_quote_api: Option<Url>,
    pub cookie_url: Option<Url>,
    pub crumb_url: Option<Url>,
    pub upstream_timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            base_quote_api: None,
            cookie_url: None,
            crumb_url: None,
            upstream_timeout: None,
        }
    }
}

impl Config {
    /// Reads `PORT`, `HOST`, `YF_BASE_QUOTE_API`, `YF_COOKIE_URL`, `YF_CRUMB_URL`
    /// and `YF_TIMEOUT_SECS` from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Same as [`Config::from_env`], reading variables through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let port = get("PORT")
            .map(|v| parse(v, "PORT", "port number"))
            .transpose()?
            .unwrap_or(defaults.port);
        let host = get("HOST")
            .map(|v| parse(v, "HOST", "IP address"))
            .transpose()?
            .unwrap_or(defaults.host);
        let upstream_timeout = get("YF_TIMEOUT_SECS")
            .map(|v| parse::<u64>(v, "YF_TIMEOUT_SECS", "number of seconds"))
            .transpose()?
            .map(Duration::from_secs);

        Ok(Self {
            host,
            port,
            base_quote_api: get("YF_BASE_QUOTE_API")
                .map(|v| parse(v, "YF_BASE_QUOTE_API", "URL"))
                .transpose()?,
            cookie_url: get("YF_COOKIE_URL")
                .map(|v| parse(v, "YF_COOKIE_URL", "URL"))
                .transpose()?,
            crumb_url: get("YF_CRUMB_URL")
                .map(|v| parse(v, "YF_CRUMB_URL", "URL"))
                .transpose()?,
            upstream_timeout,
        })
    }

    /// Socket address to bind.
    #[must_use]
    pub const fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Builds the upstream client with any configured overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn client(&self) -> Result<YfClient, YfError> {
        let mut builder: YfClientBuilder = YfClient::builder();
        if let Some(u) = &self.base_quote_api {
            builder = builder.base_quote_api(u.clone());
        }
        if let Some(u) = &self.cookie_url {
            builder = builder.cookie_url(u.clone());
        }
        if let Some(u) = &self.crumb_url {
            builder = builder.crumb_url(u.clone());
        }
        if let Some(t) = self.upstream_timeout {
            builder = builder.timeout(t);
        }
        builder.build()
    }
}

fn parse<T: std::str::FromStr>(
    value: String,
    var: &'static str,
    expected: &'static str,
) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid {
            var,
            expected,
            value,
        })
}
