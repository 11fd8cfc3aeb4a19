use crate::error::AnalyticsError;
use crate::report::{ChangePoint, FundStats};
use core_types::{CoreError, FundFiling};
use rust_decimal::prelude::ToPrimitive;
use std::collections::HashSet;

/// A stateless calculator for deriving performance metrics from a fund's
/// quarterly filing history.
#[derive(Debug, Clone, Default)]
pub struct StatsEngine {}

impl StatsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Computes the quarter-over-quarter change series.
    ///
    /// Each point is anchored to the later quarter of the pair, so the output
    /// has length `len - 1` (or 0 for an empty or single-filing history) and
    /// preserves the input order. A prior quarter with zero AUM makes that one
    /// point undefined (`value: None`); it never aborts the series.
    pub fn change_series(
        &self,
        filings: &[FundFiling],
    ) -> Result<Vec<ChangePoint>, AnalyticsError> {
        let values = self.validate(filings)?;
        Ok(build_change_series(filings, &values))
    }

    /// Computes the full summary report over one fund's filing history.
    ///
    /// Short histories degrade to the documented sentinels rather than
    /// failing: ratios that need more history become `None` ("N/A" on the
    /// wire) and aggregates stay 0. The only hard failures are invariant
    /// violations in the input itself.
    pub fn summarize(&self, filings: &[FundFiling]) -> Result<FundStats, AnalyticsError> {
        let values = self.validate(filings)?;
        let mut stats = FundStats::new();

        let (Some(last_filing), Some(&last_value)) = (filings.last(), values.last()) else {
            return Ok(stats);
        };
        stats.aum = last_value;
        stats.quarter = last_filing.quarter.clone();

        let series = build_change_series(filings, &values);
        stats.qoq_change = series.last().and_then(|point| point.value);

        // YoY compares against the filing four positions earlier, so it needs
        // at least five filings.
        if values.len() >= 5 {
            stats.yoy_growth = percentage_change(values[values.len() - 5], last_value);
        }

        if values.len() >= 2 {
            stats.total_appreciation = percentage_change(values[0], last_value).unwrap_or(0.0);
        }

        // Aggregates run over the defined change points only; a zero prior
        // AUM invalidates that single point, not the whole series.
        let defined: Vec<f64> = series.iter().filter_map(|point| point.value).collect();
        if !defined.is_empty() {
            stats.max_growth = defined.iter().copied().fold(f64::MIN, f64::max);
            stats.max_decline = defined.iter().copied().fold(f64::MAX, f64::min);

            let non_negative = defined.iter().filter(|value| **value >= 0.0).count();
            stats.growth_consistency = 100.0 * non_negative as f64 / defined.len() as f64;
            stats.volatility = population_std_dev(&defined);
        }

        tracing::debug!(
            filings = filings.len(),
            quarter = %stats.quarter,
            "Computed fund summary."
        );
        Ok(stats)
    }

    /// Checks the sequence invariants and converts the AUM values into the
    /// floats all percentage math runs on.
    ///
    /// Rejected inputs indicate an upstream defect: a negative AUM, a value
    /// outside the finite float range, or two filings sharing a quarter
    /// label. Input order is trusted as filing-period order and never
    /// re-derived from the label text.
    fn validate(&self, filings: &[FundFiling]) -> Result<Vec<f64>, AnalyticsError> {
        let mut seen = HashSet::with_capacity(filings.len());
        let mut values = Vec::with_capacity(filings.len());

        for filing in filings {
            filing.validate()?;
            if !seen.insert(filing.quarter.as_str()) {
                return Err(AnalyticsError::DuplicateQuarter {
                    quarter: filing.quarter.clone(),
                });
            }
            let value = filing
                .value_usd
                .to_f64()
                .filter(|value| value.is_finite())
                .ok_or_else(|| CoreError::NonFiniteAum {
                    quarter: filing.quarter.clone(),
                })?;
            values.push(value);
        }

        Ok(values)
    }
}

/// Percentage change from `prior` to `current`, or `None` when the prior
/// value is zero and the ratio is undefined.
fn percentage_change(prior: f64, current: f64) -> Option<f64> {
    (prior != 0.0).then(|| (current / prior - 1.0) * 100.0)
}

fn build_change_series(filings: &[FundFiling], values: &[f64]) -> Vec<ChangePoint> {
    (1..values.len())
        .map(|i| ChangePoint {
            quarter: filings[i].quarter.clone(),
            value: percentage_change(values[i - 1], values[i]),
        })
        .collect()
}

/// Population standard deviation (divide by N, not N-1).
fn population_std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    let variance = values
        .iter()
        .map(|value| (value - mean) * (value - mean))
        .sum::<f64>()
        / values.len() as f64;
    variance.sqrt()
}
