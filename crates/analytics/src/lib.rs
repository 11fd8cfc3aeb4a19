//! # 13F Insights Analytics Engine
//!
//! This crate derives all performance statistics for a fund from its ordered
//! history of quarterly 13F filings. It is the only part of the system with
//! real numeric semantics; everything around it is transport and presentation.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of
//!   external systems. It depends only on `core-types` (Layer 0).
//! - **Stateless Calculation:** The `StatsEngine` is a stateless calculator.
//!   It takes a filing history as input and produces a `FundStats` report as
//!   output. Nothing is cached between requests, so concurrent invocations
//!   for different funds need no coordination.
//!
//! ## Public API
//!
//! - `StatsEngine`: The main struct that contains the calculation logic.
//! - `FundStats`: The summary report consumed by the dashboard's stats panel.
//! - `ChangePoint`: One entry of the quarter-over-quarter change series.
//! - `AnalyticsError`: The specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod engine;
pub mod error;
pub mod report;

// Re-export the key components to create a clean, public-facing API.
pub use engine::StatsEngine;
pub use error::AnalyticsError;
pub use report::{ChangePoint, FundStats};
