use crate::core::{interfaces::FileSystemService, models::WriteOutcome};
use crate::utils::{KataError, Result};
use std::path::Path;
use tokio::fs;

pub struct TokioFileSystemService;

#[async_trait::async_trait]
impl FileSystemService for TokioFileSystemService {
    async fn write_if_absent(&self, path: &Path, content: &str) -> Result<WriteOutcome> {
        if path.exists() {
            return Ok(WriteOutcome::Skipped);
        }

        self.write_file(path, content).await?;
        Ok(WriteOutcome::Written)
    }

    async fn read_file(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).await.map_err(KataError::Io)
    }

    async fn write_file(&self, path: &Path, content: &str) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            self.create_directory(parent).await?;
        }

        fs::write(path, content).await.map_err(KataError::Io)
    }

    async fn create_directory(&self, path: &Path) -> Result<()> {
        fs::create_dir_all(path).await.map_err(KataError::Io)
    }

    fn file_exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    use tokio;

    #[tokio::test]
    async fn test_file_operations() {
        let fs_service = TokioFileSystemService;
        let temp_dir = tempdir().unwrap();
        let test_file = temp_dir.path().join("test.txt");

        // Test write and read
        let content = "Hello, Kata!";
        fs_service.write_file(&test_file, content).await.unwrap();

        let read_content = fs_service.read_file(&test_file).await.unwrap();
        assert_eq!(content, read_content);

        assert!(fs_service.file_exists(&test_file));
    }

    #[tokio::test]
    async fn test_write_if_absent_creates_fresh_file() {
        let fs_service = TokioFileSystemService;
        let temp_dir = tempdir().unwrap();
        let test_file = temp_dir.path().join("src/index.js");

        let outcome = fs_service
            .write_if_absent(&test_file, "console.log('hi');")
            .await
            .unwrap();

        assert_eq!(outcome, WriteOutcome::Written);
        assert_eq!(
            fs_service.read_file(&test_file).await.unwrap(),
            "console.log('hi');"
        );
    }

    #[tokio::test]
    async fn test_write_if_absent_preserves_existing_content() {
        let fs_service = TokioFileSystemService;
        let temp_dir = tempdir().unwrap();
        let test_file = temp_dir.path().join("index.js");

        fs_service.write_file(&test_file, "// custom").await.unwrap();

        let outcome = fs_service
            .write_if_absent(&test_file, "console.log('hi');")
            .await
            .unwrap();

        assert_eq!(outcome, WriteOutcome::Skipped);
        assert_eq!(fs_service.read_file(&test_file).await.unwrap(), "// custom");
    }

    #[tokio::test]
    async fn test_create_directory_is_idempotent() {
        let fs_service = TokioFileSystemService;
        let temp_dir = tempdir().unwrap();
        let dir = temp_dir.path().join("dist");

        fs_service.create_directory(&dir).await.unwrap();
        fs_service.create_directory(&dir).await.unwrap();

        assert!(dir.is_dir());
    }
}
