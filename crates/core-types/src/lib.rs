//! # 13F Insights Core Types
//!
//! This crate defines the shared domain vocabulary of the system: the quarterly
//! filing observation every other crate computes over, and the fund registry
//! entry that maps a display name to its SEC CIK identifier.
//!
//! ## Architectural Principles
//!
//! - **Layer 0:** This crate sits at the bottom of the dependency graph. It has
//!   no knowledge of providers, engines, or transport; everything else depends
//!   on it.
//! - **Validated at the Boundary:** Upstream payloads are deserialized into
//!   these strongly-typed structs and checked once, so the analytical layers
//!   never see an "N/A"-like string flowing through arithmetic.
//!
//! ## Public API
//!
//! - `FundFiling`: One quarterly AUM observation for a fund.
//! - `Fund`: A registry entry (display name + CIK).
//! - `CoreError`: Invariant violations detectable on a single filing.

pub mod error;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use error::CoreError;
pub use structs::{Fund, FundFiling};
