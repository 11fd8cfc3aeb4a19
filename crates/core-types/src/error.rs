use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Negative AUM in filing for quarter '{quarter}': {value}")]
    NegativeAum { quarter: String, value: Decimal },

    #[error("AUM in filing for quarter '{quarter}' is not representable as a finite number")]
    NonFiniteAum { quarter: String },
}
