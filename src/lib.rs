//! ticker-report: one HTTP endpoint that flattens Yahoo Finance quoteSummary
//! modules into a fixed-shape financial report per ticker.
//!
//! The crate is split into:
//! - [`core`]: the Yahoo client ([`YfClient`]) and the [`QuoteSummaryService`] seam.
//! - [`report`]: the table-driven mapping into a [`FinancialReport`].
//! - [`server`]: the axum router and handlers.
//! - [`config`]: environment-driven settings.

pub mod config;
pub mod core;
pub mod report;
pub mod server;

pub use config::{Config, ConfigError};
pub use crate::core::{QuoteSummaryService, SummaryFuture, YfClient, YfClientBuilder, YfError};
pub use report::{FinancialReport, REPORT_MODULES, load_report};
pub use server::{ApiError, AppState, NO_CACHE_CONTROL, PUBLIC_CACHE_CONTROL, router};
