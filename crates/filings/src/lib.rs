//! # 13F Insights Filings Crate
//!
//! This crate is the boundary to the filings store: the per-fund documents
//! that the out-of-scope ingestion pipeline writes, one JSON file per CIK,
//! already ordered ascending by filing period.
//!
//! ## Architectural Principles
//!
//! - **Adapter:** This crate encapsulates all storage-format knowledge. The
//!   rest of the application asks for "the filing history of CIK X" and gets
//!   back validated `FundFiling` values or a specific error.
//! - **Reject, Don't Coerce:** A malformed document is an upstream defect and
//!   is reported as such; nothing here papers over bad data.
//!
//! ## Public API
//!
//! - `FilingsProvider`: The async trait the web server and CLI consume.
//! - `FileStore`: The directory-backed implementation of that trait.
//! - `ProviderError`: The specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod error;
pub mod provider;

// Re-export the key components to create a clean, public-facing API.
pub use error::ProviderError;
pub use provider::{FileStore, FilingsProvider};
