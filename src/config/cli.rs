use crate::core::Storage;
use crate::utils::error::{Result, ZooError};
use std::path::{Path, PathBuf};

/// File-system storage rooted at `base_path`; absolute paths bypass the root.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        Path::new(&self.base_path).join(path)
    }
}

impl Storage for LocalStorage {
    async fn exists(&self, path: &str) -> bool {
        tokio::fs::metadata(self.resolve(path))
            .await
            .map(|meta| meta.is_file())
            .unwrap_or(false)
    }

    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        tokio::fs::read(self.resolve(path))
            .await
            .map_err(|source| ZooError::ReadError {
                path: path.to_string(),
                source,
            })
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.resolve(path);
        let write_error = |source: std::io::Error| ZooError::WriteError {
            path: path.to_string(),
            source,
        };

        if let Some(parent) = full_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(write_error)?;
        }

        tokio::fs::write(&full_path, data).await.map_err(write_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_round_trip_under_base_path() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(dir.path().to_string_lossy().into_owned());

        assert!(!storage.exists("nested/report.txt").await);
        storage.write_file("nested/report.txt", b"Lion: 1 animals\n").await.unwrap();
        assert!(storage.exists("nested/report.txt").await);
        assert_eq!(
            storage.read_file("nested/report.txt").await.unwrap(),
            b"Lion: 1 animals\n"
        );
    }

    #[tokio::test]
    async fn test_directory_is_not_an_input_file() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("animals")).unwrap();
        let storage = LocalStorage::new(dir.path().to_string_lossy().into_owned());
        assert!(!storage.exists("animals").await);
    }

    #[tokio::test]
    async fn test_read_failure_is_a_read_error() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(dir.path().to_string_lossy().into_owned());
        let err = storage.read_file("missing.txt").await.unwrap_err();
        assert!(err.user_friendly_message().starts_with("Error reading the file: "));
    }
}
