use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetupConfig {
    #[serde(default = "default_root")]
    pub root: PathBuf,
    /// Include the test runner toolchain (jest + babel bridge)
    #[serde(default = "default_true")]
    pub include_testing: bool,
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_true() -> bool {
    true
}

impl Default for SetupConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            include_testing: true,
        }
    }
}

/// Outcome of an idempotent write: either the file was created, or it
/// already existed and was left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Written,
    Skipped,
}

impl WriteOutcome {
    pub fn is_written(self) -> bool {
        matches!(self, WriteOutcome::Written)
    }
}

/// A starter file scaffolded into a fresh project, path relative to the
/// project root.
#[derive(Debug, Clone)]
pub struct StarterFile {
    pub path: &'static str,
    pub content: &'static str,
}

#[derive(Debug, Default)]
pub struct SetupReport {
    pub manifest_initialized: bool,
    pub installed_packages: Vec<String>,
    pub created_dirs: Vec<PathBuf>,
    pub written_files: Vec<PathBuf>,
    pub skipped_files: Vec<PathBuf>,
    pub scripts_added: Vec<(String, String)>,
    pub setup_time: std::time::Duration,
}
