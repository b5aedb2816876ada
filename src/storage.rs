use crate::errors::AppError;
use crate::models::AppData;
use std::path::Path;
use tokio::fs;
use tracing::error;

/// Reads the whole aggregate. A missing or unreadable file yields an empty one.
pub async fn load_data(path: &Path) -> AppData {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(data) => data,
            Err(err) => {
                error!("failed to parse data file: {err}");
                AppData::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => AppData::default(),
        Err(err) => {
            error!("failed to read data file: {err}");
            AppData::default()
        }
    }
}

pub async fn persist_data(path: &Path, data: &AppData) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(data).map_err(AppError::internal)?;
    fs::write(path, payload).await.map_err(AppError::internal)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Subject, Theme};
    use std::path::PathBuf;

    fn temp_path(tag: &str) -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        std::env::temp_dir().join(format!("attendance_{tag}_{}_{nanos}.json", std::process::id()))
    }

    #[tokio::test]
    async fn missing_file_loads_empty() {
        let data = load_data(&temp_path("missing")).await;
        assert!(data.subjects.is_empty());
        assert_eq!(data.theme, Theme::Light);
    }

    #[tokio::test]
    async fn corrupt_file_loads_empty() {
        let path = temp_path("corrupt");
        fs::write(&path, b"{ not json").await.unwrap();
        let data = load_data(&path).await;
        assert!(data.subjects.is_empty());
        let _ = fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn persisted_data_reloads() {
        let path = temp_path("persist");
        let data = AppData {
            subjects: vec![Subject {
                name: "History".to_string(),
                start_date: "2024-01-01".to_string(),
                total_days: 12,
                class_days: vec!["Friday".to_string()],
                holidays: vec!["2024-01-12".to_string()],
                attended_dates: vec!["2024-01-05".to_string()],
            }],
            theme: Theme::Dark,
        };

        persist_data(&path, &data).await.unwrap();
        let raw = fs::read_to_string(&path).await.unwrap();
        assert!(raw.contains("\"attendedDates\""));

        let loaded = load_data(&path).await;
        assert_eq!(loaded.subjects, data.subjects);
        assert_eq!(loaded.theme, Theme::Dark);
        let _ = fs::remove_file(&path).await;
    }
}
