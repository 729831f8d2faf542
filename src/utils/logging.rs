use std::time::Instant;
use tracing::{debug, error, info, warn};

pub struct Logger;

impl Logger {
    pub fn init() {
        tracing_subscriber::fmt()
            .with_env_filter("kata=debug")
            .with_target(false)
            .init();
    }

    pub fn setup_start(root: &str) {
        info!("🔨 Kata - Project Setup");
        info!("═══════════════════════════════════════");
        info!("📁 Target: {}", root);
    }

    pub fn manifest_found(path: &str) {
        info!("📦 Existing manifest found: {}", path);
    }

    pub fn manifest_init() {
        info!("📦 Initializing package manifest...");
    }

    pub fn installing(count: usize) {
        info!("⬇️  Installing {} dev dependencies...", count);
    }

    pub fn creating_directories() {
        info!("📁 Creating directory skeleton...");
    }

    pub fn writing_starters() {
        info!("📝 Writing starter files...");
    }

    pub fn starter_written(name: &str) {
        debug!("📝 Created: {}", name);
    }

    pub fn starter_skipped(name: &str) {
        debug!("⏭️  Exists, skipped: {}", name);
    }

    pub fn patching_scripts(count: usize) {
        info!("🔧 Merging {} run scripts into manifest...", count);
    }

    pub fn setup_complete(written: usize, skipped: usize, elapsed: std::time::Duration) {
        info!("");
        info!("📊 Setup Statistics:");
        info!("  • Starter files written: {}", written);
        info!("  • Starter files skipped: {}", skipped);
        info!("  • Setup time: {:.2?}", elapsed);
        info!("");
        info!("✅ Project scaffolded successfully!");
    }

    pub fn error(msg: &str) {
        error!("❌ {}", msg);
    }

    #[allow(dead_code)] // Kept alongside error() for parity
    pub fn warn(msg: &str) {
        warn!("⚠️  {}", msg);
    }

    pub fn debug(msg: &str) {
        debug!("{}", msg);
    }
}

pub struct Timer {
    start: Instant,
    name: String,
}

impl Timer {
    pub fn start(name: &str) -> Self {
        debug!("⏱️  Starting: {}", name);
        Self {
            start: Instant::now(),
            name: name.to_string(),
        }
    }

    pub fn elapsed(&self) -> std::time::Duration {
        self.start.elapsed()
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        debug!("⏱️  Completed: {} in {:.2?}", self.name, self.elapsed());
    }
}
