//! Symbol → [`FinancialReport`] transformation.

mod fields;
mod model;
mod wire;

pub use fields::{FIELDS, FieldSpec, Module, TREND_FIELDS, build_report};
pub use model::FinancialReport;

use crate::core::{QuoteSummaryService, YfError};

/// Module names requested for every report, in one upstream call.
pub const REPORT_MODULES: [&str; 6] = [
    Module::Price.as_str(),
    Module::SummaryProfile.as_str(),
    Module::FinancialData.as_str(),
    Module::DefaultKeyStatistics.as_str(),
    Module::SummaryDetail.as_str(),
    Module::RecommendationTrend.as_str(),
];

/// Trims and uppercases a ticker. Returns `None` when nothing is left.
///
/// Whitespace-only input is treated the same as an empty symbol.
#[must_use]
pub fn normalize_symbol(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_uppercase())
}

/// Fetches every report module for an already-normalized `symbol` and flattens the result.
///
/// # Errors
///
/// Returns an error if the upstream call fails or the result cannot be mapped.
#[tracing::instrument(skip(service), err(level = "warn"))]
pub async fn load_report(
    service: &dyn QuoteSummaryService,
    symbol: &str,
) -> Result<FinancialReport, YfError> {
    let result = service.quote_summary(symbol, &REPORT_MODULES).await?;
    build_report(&result)
}
