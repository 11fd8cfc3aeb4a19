use crate::error::ProviderError;
use async_trait::async_trait;
use core_types::FundFiling;
use serde::Deserialize;
use std::io::ErrorKind;
use std::path::PathBuf;

/// The filings-provider boundary.
///
/// Implementations return one fund's complete filing history, ascending by
/// filing period, exactly as the ingestion pipeline stored it.
#[async_trait]
pub trait FilingsProvider: Send + Sync {
    async fn fund_filings(&self, cik: &str) -> Result<Vec<FundFiling>, ProviderError>;
}

/// The stored document format: `{ "filings": [ ... ] }`.
#[derive(Debug, Deserialize)]
struct FilingsDocument {
    filings: Vec<FundFiling>,
}

/// A `FilingsProvider` backed by a directory of per-fund JSON documents,
/// one `<cik>.json` file per fund.
#[derive(Debug, Clone)]
pub struct FileStore {
    data_dir: PathBuf,
}

impl FileStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    fn document_path(&self, cik: &str) -> PathBuf {
        self.data_dir.join(format!("{cik}.json"))
    }
}

#[async_trait]
impl FilingsProvider for FileStore {
    async fn fund_filings(&self, cik: &str) -> Result<Vec<FundFiling>, ProviderError> {
        // CIKs are numeric identifiers; anything else never touches the
        // filesystem (it would also be a path-traversal vector).
        if cik.is_empty() || !cik.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ProviderError::InvalidCik(cik.to_string()));
        }

        let path = self.document_path(cik);
        let raw = tokio::fs::read(&path).await.map_err(|err| {
            if err.kind() == ErrorKind::NotFound {
                ProviderError::NotFound(cik.to_string())
            } else {
                ProviderError::Io(err)
            }
        })?;

        let document: FilingsDocument =
            serde_json::from_slice(&raw).map_err(|source| ProviderError::Malformed {
                cik: cik.to_string(),
                source,
            })?;

        tracing::debug!(
            cik,
            filings = document.filings.len(),
            "Loaded filing history."
        );
        Ok(document.filings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn store_with_document(name: &str, contents: &str) -> FileStore {
        let dir = std::env::temp_dir().join(format!(
            "filings-store-test-{}-{name}",
            std::process::id()
        ));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(format!("{name}.json")), contents).unwrap();
        FileStore::new(dir)
    }

    #[tokio::test]
    async fn reads_a_stored_filing_history_in_order() {
        let store = store_with_document(
            "1000001",
            r#"{"filings":[
                {"quarter":"2023Q3","value_usd":"100.50"},
                {"quarter":"2023Q4","value_usd":"110"}
            ]}"#,
        );
        let filings = store.fund_filings("1000001").await.unwrap();
        assert_eq!(filings.len(), 2);
        assert_eq!(filings[0].quarter, "2023Q3");
        assert_eq!(filings[0].value_usd, Decimal::from_str("100.50").unwrap());
        assert_eq!(filings[1].quarter, "2023Q4");
    }

    #[tokio::test]
    async fn missing_document_maps_to_not_found() {
        let store = FileStore::new(std::env::temp_dir().join("filings-store-test-empty"));
        let err = store.fund_filings("999").await.unwrap_err();
        assert!(matches!(err, ProviderError::NotFound(ref cik) if cik == "999"));
    }

    #[tokio::test]
    async fn non_numeric_cik_is_rejected_before_any_io() {
        let store = FileStore::new("does-not-exist");
        let err = store.fund_filings("../etc/passwd").await.unwrap_err();
        assert!(matches!(err, ProviderError::InvalidCik(_)));
    }

    #[tokio::test]
    async fn malformed_document_is_reported_not_coerced() {
        let store = store_with_document("1000002", r#"{"filings": "oops"}"#);
        let err = store.fund_filings("1000002").await.unwrap_err();
        assert!(matches!(err, ProviderError::Malformed { ref cik, .. } if cik == "1000002"));
    }
}
