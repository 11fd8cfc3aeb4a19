use crate::error::CoreError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single quarterly 13F observation for one fund.
///
/// A fund's history is an ordered sequence of these, ascending by filing
/// period, with at most one entry per quarter label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundFiling {
    /// Opaque quarter label as reported upstream (e.g. "2023Q4").
    ///
    /// Used for display and identity only. Chronological order is whatever
    /// order the provider delivered; it is never re-derived from this text.
    pub quarter: String,

    /// Total reported assets under management, in USD.
    ///
    /// Kept as an exact decimal on the wire (upstream serializes it as a
    /// string); converted to a float only inside the stats engine.
    pub value_usd: Decimal,
}

impl FundFiling {
    pub fn new(quarter: impl Into<String>, value_usd: Decimal) -> Self {
        Self {
            quarter: quarter.into(),
            value_usd,
        }
    }

    /// Checks the single-filing invariant: AUM must be non-negative.
    ///
    /// Sequence-level invariants (duplicate quarter labels) are checked by
    /// the stats engine, which sees the whole history.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.value_usd.is_sign_negative() && !self.value_usd.is_zero() {
            return Err(CoreError::NegativeAum {
                quarter: self.quarter.clone(),
                value: self.value_usd,
            });
        }
        Ok(())
    }
}

/// A fund registry entry: maps a human-readable name to its SEC CIK.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fund {
    /// Display name shown in the dashboard's fund selector.
    pub name: String,
    /// SEC Central Index Key, as a string of decimal digits.
    pub cik: String,
}
