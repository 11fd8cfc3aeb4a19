use core_types::CoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyticsError {
    #[error("Invalid filing: {0}")]
    InvalidFiling(#[from] CoreError),

    #[error("Duplicate quarter label '{quarter}' in filing history")]
    DuplicateQuarter { quarter: String },
}
