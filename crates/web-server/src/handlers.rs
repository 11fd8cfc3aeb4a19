use crate::{error::AppError, AppState};
use analytics::ChangePoint;
use axum::{
    extract::{Path, State},
    Json,
};
use core_types::{Fund, FundFiling};
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    pub funds: Vec<Fund>,
}

#[derive(Debug, Serialize)]
pub struct FilingsResponse {
    pub filings: Vec<FundFiling>,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub stats: analytics::FundStats,
}

#[derive(Debug, Serialize)]
pub struct VolatilityResponse {
    pub volatility: Vec<VolatilityEntry>,
}

/// One charted QoQ change point, percentage fixed to 2 decimal places.
#[derive(Debug, PartialEq, Serialize)]
pub struct VolatilityEntry {
    pub quarter: String,
    pub value: String,
}

/// # GET /api/config
/// Returns the fund registry the dashboard's selector is built from.
pub async fn get_config(State(state): State<Arc<AppState>>) -> Json<ConfigResponse> {
    Json(ConfigResponse {
        funds: state.funds.clone(),
    })
}

/// # GET /api/funds/:cik/filings
/// Returns one fund's complete filing history, ascending by filing period.
pub async fn get_fund_filings(
    Path(cik): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<FilingsResponse>, AppError> {
    let filings = state.provider.fund_filings(&cik).await?;
    Ok(Json(FilingsResponse { filings }))
}

/// # GET /api/funds/:cik/stats
/// Returns the derived summary statistics for one fund.
pub async fn get_fund_stats(
    Path(cik): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<StatsResponse>, AppError> {
    let filings = state.provider.fund_filings(&cik).await?;
    let stats = state.engine.summarize(&filings)?;
    Ok(Json(StatsResponse { stats }))
}

/// # GET /api/funds/:cik/volatility
/// Returns the quarter-over-quarter change series for charting.
pub async fn get_fund_volatility(
    Path(cik): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<VolatilityResponse>, AppError> {
    let filings = state.provider.fund_filings(&cik).await?;
    let series = state.engine.change_series(&filings)?;
    Ok(Json(VolatilityResponse {
        volatility: volatility_payload(&series),
    }))
}

/// Maps the engine's change series onto the chart payload. Points left
/// undefined by a zero prior AUM carry no chartable value and are omitted.
fn volatility_payload(series: &[ChangePoint]) -> Vec<VolatilityEntry> {
    series
        .iter()
        .filter_map(|point| {
            point.value.map(|value| VolatilityEntry {
                quarter: point.quarter.clone(),
                value: format!("{value:.2}"),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn volatility_payload_formats_and_skips_undefined_points() {
        let series = vec![
            ChangePoint {
                quarter: "2023Q2".to_string(),
                value: None,
            },
            ChangePoint {
                quarter: "2023Q3".to_string(),
                value: Some(10.0),
            },
            ChangePoint {
                quarter: "2023Q4".to_string(),
                value: Some(-2.0 / 3.0),
            },
        ];

        let payload = volatility_payload(&series);
        assert_eq!(
            payload,
            vec![
                VolatilityEntry {
                    quarter: "2023Q3".to_string(),
                    value: "10.00".to_string(),
                },
                VolatilityEntry {
                    quarter: "2023Q4".to_string(),
                    value: "-0.67".to_string(),
                },
            ]
        );
    }

    #[test]
    fn filings_response_keeps_the_upstream_wire_shape() {
        use rust_decimal::Decimal;
        use std::str::FromStr;

        let response = FilingsResponse {
            filings: vec![FundFiling::new(
                "2023Q4",
                Decimal::from_str("1234.56").unwrap(),
            )],
        };
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "filings": [ { "quarter": "2023Q4", "value_usd": "1234.56" } ]
            })
        );
    }
}
