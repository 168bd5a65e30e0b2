//! Default upstream endpoints and UA.

/// Desktop UA; Yahoo rejects obvious bot agents on the crumb endpoint.
pub(crate) const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (X11; Linux x86_64) ",
    "AppleWebKit/537.36 (KHTML, like Gecko) ",
    "Chrome/122.0.0.0 Safari/537.36"
);

/// Yahoo quoteSummary API base (symbol is appended).
pub(crate) const DEFAULT_BASE_QUOTE_API: &str =
    "https://query1.finance.yahoo.com/v10/finance/quoteSummary/";

/// Returns a Set-Cookie header for Yahoo domains.
pub(crate) const DEFAULT_COOKIE_URL: &str = "https://fc.yahoo.com/consent";

/// Crumb endpoint (needs the cookie from `DEFAULT_COOKIE_URL`).
pub(crate) const DEFAULT_CRUMB_URL: &str = "https://query1.finance.yahoo.com/v1/test/getcrumb";
