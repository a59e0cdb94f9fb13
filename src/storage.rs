use crate::errors::AppError;
use crate::models::SalesRecord;
use std::path::Path;
use tokio::fs;
use tracing::{error, info};

/// Reads the dataset, a JSON array of order records.
pub async fn load_records(path: &Path) -> Result<Vec<SalesRecord>, AppError> {
    let bytes = fs::read(path).await?;
    let records: Vec<SalesRecord> = serde_json::from_slice(&bytes)?;
    info!(path = %path.display(), records = records.len(), "dataset loaded");
    Ok(records)
}

/// Startup variant: a missing or broken file leaves the charts empty.
pub async fn load_records_or_default(path: &Path) -> Vec<SalesRecord> {
    match load_records(path).await {
        Ok(records) => records,
        Err(err) => {
            error!(path = %path.display(), "failed to load dataset: {}", err.message);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("sales_charts_{}_{}.json", std::process::id(), name));
        path
    }

    #[tokio::test]
    async fn loads_records_from_json() {
        let path = temp_path("ok");
        fs::write(
            &path,
            r#"[{"Category": "Technology", "Sales": 12.5, "Order Date": "01-01-2014"}]"#,
        )
        .await
        .unwrap();

        let records = load_records(&path).await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].category, "Technology");
        let _ = fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn malformed_file_is_an_error() {
        let path = temp_path("bad");
        fs::write(&path, "{ not json").await.unwrap();

        let err = load_records(&path).await.unwrap_err();
        assert!(err.message.starts_with("invalid dataset"));
        assert!(load_records_or_default(&path).await.is_empty());
        let _ = fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn missing_file_defaults_to_empty() {
        let path = temp_path("missing");
        assert!(load_records(&path).await.is_err());
        assert!(load_records_or_default(&path).await.is_empty());
    }
}
