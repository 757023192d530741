use crate::config::ListingConfig;
use crate::error::AppError;
use crate::models::dir_entry::EntryInfo;
use crate::services::listing_service;

pub fn get_dir_listing(
    path: Option<String>,
    hidden: Option<bool>,
) -> Result<Vec<EntryInfo>, AppError> {
    get_dir_listing_with(&ListingConfig::default(), path, hidden)
}

pub fn get_dir_listing_with(
    config: &ListingConfig,
    path: Option<String>,
    hidden: Option<bool>,
) -> Result<Vec<EntryInfo>, AppError> {
    let (path, hidden) = config.resolve(path, hidden);
    tracing::info!(path = %path.display(), hidden, "directory listing requested");
    listing_service::list(&path, hidden)
}

/// Runs the blocking listing on tokio's blocking pool.
pub async fn get_dir_listing_async(
    config: ListingConfig,
    path: Option<String>,
    hidden: Option<bool>,
) -> Result<Vec<EntryInfo>, AppError> {
    tokio::task::spawn_blocking(move || get_dir_listing_with(&config, path, hidden))
        .await
        .map_err(|e| AppError::General(format!("listing task failed: {e}")))?
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn sample_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), "0123456789").unwrap();
        fs::write(dir.path().join(".secret"), "12345").unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        dir
    }

    #[test]
    fn hidden_defaults_to_false() {
        let dir = sample_dir();
        let path = dir.path().to_string_lossy().to_string();

        let result = get_dir_listing(Some(path.clone()), None).unwrap();
        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|e| !e.is_hidden));

        let result = get_dir_listing(Some(path), Some(true)).unwrap();
        assert_eq!(result.len(), 3);
    }

    #[test]
    fn absent_path_lists_configured_default() {
        let dir = sample_dir();
        let config = ListingConfig {
            default_path: dir.path().to_path_buf(),
            default_hidden: true,
        };
        let result = get_dir_listing_with(&config, None, None).unwrap();
        assert_eq!(result.len(), 3);
    }

    #[test]
    fn invalid_path_is_query_error() {
        let result = get_dir_listing(Some("/nonexistent/path/1234567890".to_string()), None);
        let err = result.unwrap_err();
        assert!(err.is_enumeration());
        let message = serde_json::to_value(&err).unwrap();
        assert!(message
            .as_str()
            .unwrap()
            .starts_with("cannot list directory '/nonexistent/path/1234567890'"));
    }

    #[test]
    fn result_serializes_to_wire_shape() {
        let dir = sample_dir();
        let result = get_dir_listing(Some(dir.path().to_string_lossy().to_string()), None).unwrap();
        let json = serde_json::to_value(&result).unwrap();
        let sub = json
            .as_array()
            .unwrap()
            .iter()
            .find(|e| e["isDirectory"] == true)
            .unwrap();
        assert_eq!(sub["itemsCount"], 0);
        assert!(sub["permission"]["read"].is_boolean());
        assert!(sub["sizeInBytes"].is_u64());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_listings_are_independent() {
        let dir = sample_dir();
        let path = dir.path().to_string_lossy().to_string();

        let mut handles = Vec::new();
        for i in 0..16 {
            let hidden = Some(i % 2 == 0);
            handles.push(tokio::spawn(get_dir_listing_async(
                ListingConfig::default(),
                Some(path.clone()),
                hidden,
            )));
        }
        for (i, handle) in handles.into_iter().enumerate() {
            let entries = handle.await.unwrap().unwrap();
            let expected = if i % 2 == 0 { 3 } else { 2 };
            assert_eq!(entries.len(), expected);
        }
    }

    #[tokio::test]
    async fn async_listing_propagates_enumeration_error() {
        let missing = PathBuf::from("/nonexistent/path/1234567890");
        let err = get_dir_listing_async(
            ListingConfig::default(),
            Some(missing.to_string_lossy().to_string()),
            None,
        )
        .await
        .unwrap_err();
        assert!(err.is_enumeration());
    }
}
