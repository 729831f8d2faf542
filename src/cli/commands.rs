use crate::core::{interfaces::*, models::*, services::*};
use crate::infrastructure::{
    AssumeYes, NpmPackageManager, TerminalConfirmation, TokioFileSystemService,
};
use crate::utils::{Logger, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "kata")]
#[command(about = "Kata - webpack project scaffolding for modern web development")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scaffold a webpack project in the target directory
    Setup {
        /// Root directory
        #[arg(short, long, default_value = ".")]
        root: String,
        /// Skip the test runner toolchain (jest + babel)
        #[arg(long)]
        no_testing: bool,
        /// Answer yes to the existing-manifest prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Show scaffolder information
    Info,
}

pub struct CliHandler;

impl CliHandler {
    pub fn new() -> Self {
        Self
    }

    pub async fn run(&self) -> Result<()> {
        // Initialize logging
        Logger::init();

        let cli = Cli::parse();

        match cli.command {
            Commands::Setup {
                root,
                no_testing,
                yes,
            } => self.handle_setup_command(&root, !no_testing, yes).await,
            Commands::Info => self.handle_info_command().await,
        }
    }

    async fn handle_setup_command(
        &self,
        root: &str,
        include_testing: bool,
        assume_yes: bool,
    ) -> Result<()> {
        let config = SetupConfig {
            root: PathBuf::from(root),
            include_testing,
        };

        // Create services
        let fs_service: Arc<dyn FileSystemService> = Arc::new(TokioFileSystemService);
        let package_manager: Arc<dyn PackageManager> = Arc::new(NpmPackageManager::new());
        let confirmation: Arc<dyn ConfirmationProvider> = if assume_yes {
            Arc::new(AssumeYes)
        } else {
            Arc::new(TerminalConfirmation::new())
        };

        let setup_service = KataSetupService::new(fs_service, package_manager, confirmation);

        setup_service.setup(&config).await?;

        Ok(())
    }

    async fn handle_info_command(&self) -> Result<()> {
        tracing::info!("🥋 Kata v0.2.0");
        tracing::info!("══════════════════════════════════════");
        tracing::info!("📦 Webpack project scaffolding in one command");
        tracing::info!("");
        tracing::info!("🏗️  What gets set up:");
        tracing::info!("  • package.json (npm init -y when missing)");
        tracing::info!("  • webpack, webpack-cli, html-webpack-plugin");
        tracing::info!("  • style-loader, css-loader, html-loader");
        tracing::info!("  • webpack-dev-server");
        tracing::info!("  • jest + @babel/preset-env + babel-jest (default profile)");
        tracing::info!("  • src/, dist/, tests/ directory skeleton");
        tracing::info!("  • starter template, entry point and sample test");
        tracing::info!("");
        tracing::info!("🔧 Run scripts merged into the manifest:");
        tracing::info!("  • build / dev / start / watch");
        tracing::info!("  • test / test:watch / test:watchAll / test:coverage");
        tracing::info!("");
        tracing::info!("🎯 Guarantees:");
        tracing::info!("  • Existing files are never overwritten");
        tracing::info!("  • Existing manifest scripts are preserved on merge");
        tracing::info!("  • Existing manifests need explicit confirmation");

        Ok(())
    }
}

impl Default for CliHandler {
    fn default() -> Self {
        Self::new()
    }
}
