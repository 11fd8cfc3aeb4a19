use analytics::AnalyticsError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use filings::ProviderError;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),
    #[error("Analytics error: {0}")]
    Analytics(#[from] AnalyticsError),
}

/// Converts our custom `AppError` into an HTTP response.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::Provider(ProviderError::NotFound(cik)) => {
                tracing::debug!(cik, "No filing data for requested fund.");
                (
                    StatusCode::NOT_FOUND,
                    "No filing data found for this fund".to_string(),
                )
            }
            AppError::Provider(ProviderError::InvalidCik(cik)) => {
                tracing::debug!(cik, "Rejected non-numeric CIK.");
                (StatusCode::NOT_FOUND, "Unknown fund identifier".to_string())
            }
            AppError::Provider(provider_err) => {
                tracing::error!(error = ?provider_err, "Filings provider error.");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred while loading filings".to_string(),
                )
            }
            // A filing history that violates its own invariants is an
            // ingestion defect; the dashboard just sees missing data.
            AppError::Analytics(analytics_err) => {
                tracing::error!(error = ?analytics_err, "Rejected filing history.");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "data unavailable for this fund".to_string(),
                )
            }
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fund_maps_to_404() {
        let response =
            AppError::Provider(ProviderError::NotFound("123".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn invariant_violation_maps_to_422() {
        let err = AnalyticsError::DuplicateQuarter {
            quarter: "2023Q4".to_string(),
        };
        let response = AppError::Analytics(err).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn io_failure_maps_to_500() {
        let err = ProviderError::Io(std::io::Error::other("disk on fire"));
        let response = AppError::Provider(err).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
