//! Cookie & crumb acquisition for Yahoo endpoints.

use crate::core::{error::YfError, net};
use reqwest::header::SET_COOKIE;

impl super::YfClient {
    pub(crate) async fn ensure_credentials(&self) -> Result<(), YfError> {
        if self.state.read().await.crumb.is_some() {
            return Ok(());
        }

        // Only one task bootstraps; the rest wait here and re-check.
        let _guard = self.credential_fetch_lock.lock().await;

        if self.state.read().await.crumb.is_some() {
            return Ok(());
        }

        self.get_cookie().await?;
        self.get_crumb_internal().await?;

        Ok(())
    }

    pub(crate) async fn clear_crumb(&self) {
        self.state.write().await.crumb = None;
    }

    pub(crate) async fn crumb(&self) -> Option<String> {
        self.state.read().await.crumb.clone()
    }

    async fn get_cookie(&self) -> Result<(), YfError> {
        tracing::debug!(url = %self.cookie_url, "fetching yahoo cookie");
        let resp = self.http.get(self.cookie_url.clone()).send().await?;

        let cookie = resp
            .headers()
            .get(SET_COOKIE)
            .ok_or_else(|| YfError::Auth("No cookie received from consent endpoint".into()))?
            .to_str()
            .map_err(|_| YfError::Auth("Invalid cookie header format".into()))?
            .to_string();

        self.state.write().await.cookie = Some(cookie);
        Ok(())
    }

    async fn get_crumb_internal(&self) -> Result<(), YfError> {
        if self.state.read().await.cookie.is_none() {
            return Err(YfError::Auth("Cookie is missing, cannot get crumb".into()));
        }

        tracing::debug!(url = %self.crumb_url, "fetching yahoo crumb");
        let resp = self.http.get(self.crumb_url.clone()).send().await?;
        let crumb = net::get_text(resp).await?;

        if crumb.is_empty() || crumb.contains('{') || crumb.contains('<') {
            return Err(YfError::Auth(format!("Received invalid crumb: {crumb}")));
        }

        self.state.write().await.crumb = Some(crumb);
        Ok(())
    }
}
