use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("No filing data found for CIK {0}")]
    NotFound(String),

    #[error("Invalid CIK '{0}': expected a string of decimal digits")]
    InvalidCik(String),

    #[error("Malformed filing document for CIK {cik}: {source}")]
    Malformed {
        cik: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to read filing document: {0}")]
    Io(#[from] std::io::Error),
}
