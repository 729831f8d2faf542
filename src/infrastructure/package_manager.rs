use crate::core::interfaces::PackageManager;
use crate::utils::{KataError, Logger, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;
use tokio::process::Command;

/// Package manager backed by the `npm` binary, invoked with the project root
/// as working directory.
pub struct NpmPackageManager;

impl NpmPackageManager {
    pub fn new() -> Self {
        Self
    }

    async fn run_npm(&self, root: &Path, args: &[&str]) -> Result<()> {
        Logger::debug(&format!("Running: npm {}", args.join(" ")));

        let output = Command::new("npm")
            .args(args)
            .current_dir(root)
            .output()
            .await
            .map_err(|e| KataError::package_manager(format!("failed to execute npm: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(KataError::package_manager(format!(
                "npm {} failed: {}",
                args.first().unwrap_or(&"<none>"),
                stderr.trim()
            )));
        }

        Ok(())
    }
}

#[async_trait::async_trait]
impl PackageManager for NpmPackageManager {
    async fn init_manifest(&self, root: &Path) -> Result<()> {
        self.run_npm(root, &["init", "-y"]).await
    }

    async fn add_dev_dependencies(&self, root: &Path, packages: &[&str]) -> Result<()> {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("  {spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.enable_steady_tick(Duration::from_millis(100));
        spinner.set_message(format!(
            "npm install --save-dev ({} packages)",
            packages.len()
        ));

        let mut args = vec!["install", "--save-dev"];
        args.extend_from_slice(packages);

        let result = self.run_npm(root, &args).await;
        spinner.finish_and_clear();

        result
    }
}

impl Default for NpmPackageManager {
    fn default() -> Self {
        Self::new()
    }
}
