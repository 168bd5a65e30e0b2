use crate::core::{YfClient, YfError, net};
use serde::Deserialize;

#[derive(Deserialize)]
pub(crate) struct V10Envelope {
    #[serde(rename = "quoteSummary")]
    pub(crate) quote_summary: Option<V10QuoteSummary>,
}

#[derive(Deserialize)]
pub(crate) struct V10QuoteSummary {
    pub(crate) result: Option<Vec<serde_json::Value>>,
    pub(crate) error: Option<V10Error>,
}

#[derive(Deserialize)]
pub(crate) struct V10Error {
    pub(crate) description: String,
}

/// Outcome of one quoteSummary request.
enum Attempt {
    Envelope(V10Envelope),
    /// 401/403: Yahoo rejected the crumb.
    Unauthorized { status: u16, url: String },
}

async fn attempt_fetch(
    client: &YfClient,
    symbol: &str,
    modules: &str,
) -> Result<Attempt, YfError> {
    client.ensure_credentials().await?;

    let crumb = client
        .crumb()
        .await
        .ok_or_else(|| YfError::Auth("Crumb is not set".into()))?;

    // Pushed as a segment so the symbol is percent-encoded.
    let mut url = client.base_quote_api().clone();
    url.path_segments_mut()
        .map_err(|()| YfError::Data("quoteSummary base URL cannot take a path".into()))?
        .pop_if_empty()
        .push(symbol);
    url.query_pairs_mut()
        .append_pair("modules", modules)
        .append_pair("crumb", &crumb);

    let resp = client.http().get(url).send().await?;
    let status = resp.status().as_u16();
    if status == 401 || status == 403 {
        return Ok(Attempt::Unauthorized {
            status,
            url: resp.url().to_string(),
        });
    }
    let text = net::get_text(resp).await?;

    serde_json::from_str(&text)
        .map(Attempt::Envelope)
        .map_err(|e| YfError::Data(format!("quoteSummary json parse: {e}")))
}

/// Calls quoteSummary for `symbol` and returns the raw envelope.
///
/// A stale crumb (401/403, or an "Invalid Crumb" error body) is cleared and the
/// call repeated once with fresh credentials. Any other Yahoo error is surfaced
/// as [`YfError::Data`].
pub(crate) async fn fetch(
    client: &YfClient,
    symbol: &str,
    modules: &str,
) -> Result<V10Envelope, YfError> {
    for attempt in 0..=1 {
        let env = match attempt_fetch(client, symbol, modules).await? {
            Attempt::Envelope(env) => env,
            Attempt::Unauthorized { status, url } => {
                if attempt == 0 {
                    tracing::debug!(symbol, status, "crumb rejected; refreshing credentials");
                    client.clear_crumb().await;
                    continue;
                }
                return Err(YfError::Status { status, url });
            }
        };

        if let Some(error) = env.quote_summary.as_ref().and_then(|qs| qs.error.as_ref()) {
            let desc = error.description.to_ascii_lowercase();
            if desc.contains("invalid crumb") && attempt == 0 {
                tracing::debug!(symbol, "invalid crumb; refreshing credentials");
                client.clear_crumb().await;
                continue;
            }
            return Err(YfError::Data(format!("yahoo error: {}", error.description)));
        }

        return Ok(env);
    }

    Err(YfError::Data("quoteSummary call failed after crumb refresh".into()))
}

/// Fetches `modules` for `symbol` and returns the first (only) result object.
pub(crate) async fn fetch_result(
    client: &YfClient,
    symbol: &str,
    modules: &str,
) -> Result<serde_json::Value, YfError> {
    let env = fetch(client, symbol, modules).await?;

    env.quote_summary
        .and_then(|qs| qs.result)
        .and_then(|mut v| v.pop())
        .ok_or_else(|| YfError::Data("empty quoteSummary result".into()))
}
