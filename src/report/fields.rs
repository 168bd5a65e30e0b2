//! Output key → upstream module/field mapping and the extractor that applies it.

use serde_json::Value;

use super::{
    model::FinancialReport,
    wire::{field_value, module_node},
};
use crate::core::YfError;

/// A quoteSummary module the report draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Module {
    Price,
    SummaryProfile,
    FinancialData,
    DefaultKeyStatistics,
    SummaryDetail,
    RecommendationTrend,
}

impl Module {
    /// Every module, in request order.
    pub const ALL: [Self; 6] = [
        Self::Price,
        Self::SummaryProfile,
        Self::FinancialData,
        Self::DefaultKeyStatistics,
        Self::SummaryDetail,
        Self::RecommendationTrend,
    ];

    /// Wire name as used in the `modules` query parameter and the result object.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Price => "price",
            Self::SummaryProfile => "summaryProfile",
            Self::FinancialData => "financialData",
            Self::DefaultKeyStatistics => "defaultKeyStatistics",
            Self::SummaryDetail => "summaryDetail",
            Self::RecommendationTrend => "recommendationTrend",
        }
    }
}

/// One string-defaulted report field.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Key in the output JSON.
    pub key: &'static str,
    /// Module the value comes from.
    pub module: Module,
    /// Field name inside that module.
    pub field: &'static str,
}

const fn spec(key: &'static str, module: Module, field: &'static str) -> FieldSpec {
    FieldSpec { key, module, field }
}

/// Fields that default to `""` when absent, in output order.
pub const FIELDS: &[FieldSpec] = &[
    spec("name", Module::Price, "shortName"),
    spec("sector", Module::SummaryProfile, "sector"),
    spec("employee", Module::SummaryProfile, "fullTimeEmployees"),
    spec("marketCap", Module::Price, "marketCap"),
    spec("totalRevenue", Module::FinancialData, "totalRevenue"),
    spec("profitMargin", Module::FinancialData, "profitMargins"),
    spec("revenueGrowth", Module::FinancialData, "revenueGrowth"),
    spec("revenuePerShare", Module::FinancialData, "revenuePerShare"),
    spec("debtToEquityRatio", Module::FinancialData, "debtToEquity"),
    spec("priceEarningRatio", Module::SummaryDetail, "trailingPE"),
    spec("forwardPriceEarningRatio", Module::SummaryDetail, "forwardPE"),
    spec("earningPerShare", Module::DefaultKeyStatistics, "trailingEps"),
    spec("forwardEarningPerShare", Module::DefaultKeyStatistics, "forwardEps"),
    spec("bookValue", Module::DefaultKeyStatistics, "bookValue"),
    spec("priceToBook", Module::DefaultKeyStatistics, "priceToBook"),
    spec("currentPrice", Module::FinancialData, "currentPrice"),
    spec("targetPriceHigh", Module::FinancialData, "targetHighPrice"),
    spec("targetPriceAverage", Module::FinancialData, "targetMeanPrice"),
    spec("targetPriceLow", Module::FinancialData, "targetLowPrice"),
    spec("priceLowestLastYear", Module::SummaryDetail, "fiftyTwoWeekLow"),
    spec("priceHighestLastYear", Module::SummaryDetail, "fiftyTwoWeekHigh"),
    spec("priceChangeLastYear", Module::DefaultKeyStatistics, "52WeekChange"),
];

/// Fields read from `recommendationTrend.trend[0]`, as (output key, trend field).
/// These are not string-defaulted; a missing value is `null`.
pub const TREND_FIELDS: &[(&str, &str)] = &[
    ("reconStrongBuy", "strongBuy"),
    ("reconBuy", "buy"),
    ("reconHold", "hold"),
    ("reconSell", "sell"),
    ("reconStrongSell", "strongSell"),
];

/// Extracts one string-defaulted field. Only absence yields `""`; `0` and `false` are kept.
pub(crate) fn extract(result: &Value, spec: &FieldSpec) -> Result<Value, YfError> {
    let node = module_node(result, spec.module.as_str())?;
    Ok(field_value(node, spec.field).unwrap_or_else(|| Value::String(String::new())))
}

/// Extracts the latest recommendation counts.
///
/// An absent module yields all-`null` counts. A present module whose `trend`
/// list is missing or empty is malformed and fails the whole report.
fn extract_trend(result: &Value) -> Result<Vec<(&'static str, Value)>, YfError> {
    let Some(node) = module_node(result, Module::RecommendationTrend.as_str())? else {
        return Ok(TREND_FIELDS
            .iter()
            .map(|(key, _)| (*key, Value::Null))
            .collect());
    };

    let latest = node
        .get("trend")
        .and_then(Value::as_array)
        .and_then(|t| t.first())
        .ok_or_else(|| YfError::Data("recommendationTrend.trend is missing or empty".into()))?
        .as_object()
        .ok_or_else(|| YfError::Data("recommendationTrend.trend[0] is not an object".into()))?;

    Ok(TREND_FIELDS
        .iter()
        .map(|(key, field)| (*key, field_value(Some(latest), field).unwrap_or(Value::Null)))
        .collect())
}

/// Builds the full report from a quoteSummary result object.
///
/// # Errors
///
/// Returns [`YfError::Data`] when the result is not an object, a module is not
/// an object, or the recommendation trend is malformed.
pub fn build_report(result: &Value) -> Result<FinancialReport, YfError> {
    let mut entries = Vec::with_capacity(FIELDS.len() + TREND_FIELDS.len());
    for spec in FIELDS {
        entries.push((spec.key, extract(result, spec)?));
    }
    entries.extend(extract_trend(result)?);
    Ok(FinancialReport::from_entries(entries))
}
