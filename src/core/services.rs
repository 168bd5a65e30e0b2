use crate::core::{YfClient, YfError, quotesummary};

/// Boxed future returned by [`QuoteSummaryService`].
pub type SummaryFuture<'a> = std::pin::Pin<
    Box<dyn std::future::Future<Output = Result<serde_json::Value, YfError>> + Send + 'a>,
>;

/// A source of quoteSummary results.
///
/// The HTTP layer depends on this trait rather than on [`YfClient`] directly,
/// so handlers can be exercised against an in-memory provider.
pub trait QuoteSummaryService: Send + Sync {
    /// Fetches the given quoteSummary `modules` for `symbol`.
    ///
    /// # Arguments
    /// * `symbol` - The ticker symbol, already normalized by the caller.
    /// * `modules` - Module names to request in a single call.
    ///
    /// # Returns
    /// A `Future` resolving to the first result object, keyed by module name.
    fn quote_summary<'a>(&'a self, symbol: &'a str, modules: &'a [&'a str]) -> SummaryFuture<'a>;
}

impl QuoteSummaryService for YfClient {
    fn quote_summary<'a>(&'a self, symbol: &'a str, modules: &'a [&'a str]) -> SummaryFuture<'a> {
        Box::pin(async move {
            let modules = modules.join(",");
            quotesummary::fetch_result(self, symbol, &modules).await
        })
    }
}
