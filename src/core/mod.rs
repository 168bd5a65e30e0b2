//! Upstream side of the service: the Yahoo Finance client.
//!
//! - [`YfClient`] and its builder, with cookie/crumb bootstrap.
//! - [`YfError`], the error type for every upstream failure.
//! - [`QuoteSummaryService`], the seam the HTTP layer depends on.

/// The client (`YfClient`), builder, and credential handling.
pub mod client;
/// The upstream error type (`YfError`).
pub mod error;
pub(crate) mod net;
pub(crate) mod quotesummary;
/// Service trait abstracting quoteSummary retrieval.
pub mod services;

pub use client::{YfClient, YfClientBuilder};
pub use error::YfError;
pub use services::{QuoteSummaryService, SummaryFuture};
