use crate::core::models::*;
use crate::utils::Result;
use async_trait::async_trait;
use std::path::Path;

/// File system operations interface
#[async_trait]
pub trait FileSystemService: Send + Sync {
    /// Write `content` to `path` only if the path does not exist yet.
    /// Existing files are never touched.
    async fn write_if_absent(&self, path: &Path, content: &str) -> Result<WriteOutcome>;
    async fn read_file(&self, path: &Path) -> Result<String>;
    async fn write_file(&self, path: &Path, content: &str) -> Result<()>;
    async fn create_directory(&self, path: &Path) -> Result<()>;
    fn file_exists(&self, path: &Path) -> bool;
}

/// External package manager interface
#[async_trait]
pub trait PackageManager: Send + Sync {
    /// Initialize a default manifest in `root` (e.g. `npm init -y`).
    async fn init_manifest(&self, root: &Path) -> Result<()>;
    /// Install `packages` as development-only dependencies of `root`.
    async fn add_dev_dependencies(&self, root: &Path, packages: &[&str]) -> Result<()>;
}

/// Operator confirmation interface
pub trait ConfirmationProvider: Send + Sync {
    fn confirm(&self, prompt: &str) -> Result<bool>;
}
