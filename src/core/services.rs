use crate::core::{interfaces::*, manifest::PackageManifest, models::*, starter};
use crate::utils::{KataError, KataUI, Logger, Result, SummaryStats, Timer};
use std::path::PathBuf;
use std::sync::Arc;

/// Main setup service implementation.
///
/// Runs the scaffolding procedure as a fixed sequence of precondition-gated
/// side effects. Any failing step aborts the whole run; there is no rollback
/// and no retry.
pub struct KataSetupService {
    fs_service: Arc<dyn FileSystemService>,
    package_manager: Arc<dyn PackageManager>,
    confirmation: Arc<dyn ConfirmationProvider>,
    ui: KataUI,
}

impl KataSetupService {
    pub fn new(
        fs_service: Arc<dyn FileSystemService>,
        package_manager: Arc<dyn PackageManager>,
        confirmation: Arc<dyn ConfirmationProvider>,
    ) -> Self {
        Self {
            fs_service,
            package_manager,
            confirmation,
            ui: KataUI::new(),
        }
    }

    pub async fn setup(&self, config: &SetupConfig) -> Result<SetupReport> {
        let timer = Timer::start("Project setup");
        let mut report = SetupReport::default();

        self.ui.show_banner();
        Logger::setup_start(&config.root.display().to_string());

        let manifest_path = config.root.join("package.json");

        // Step 1/2: existing manifest needs operator sign-off, a missing one
        // is initialized by the package manager.
        if self.fs_service.file_exists(&manifest_path) {
            Logger::manifest_found(&manifest_path.display().to_string());
            let proceed = self
                .confirmation
                .confirm("A package.json already exists here. Continue and update it?")?;
            if !proceed {
                return Err(KataError::Aborted);
            }
        } else {
            Logger::manifest_init();
            self.package_manager.init_manifest(&config.root).await?;
            report.manifest_initialized = true;
        }

        // Step 3: install the build/test toolchain as dev dependencies.
        let packages = starter::dev_dependencies(config.include_testing);
        Logger::installing(packages.len());
        self.package_manager
            .add_dev_dependencies(&config.root, &packages)
            .await?;
        report.installed_packages = packages.iter().map(|p| p.to_string()).collect();

        // Step 4: directory skeleton, no error if already present.
        Logger::creating_directories();
        for dir in starter::project_directories(config.include_testing) {
            self.fs_service
                .create_directory(&config.root.join(dir))
                .await?;
            report.created_dirs.push(PathBuf::from(dir));
        }

        // Step 5: starter files, written only where absent.
        Logger::writing_starters();
        for file in starter::starter_files(config.include_testing) {
            let path = config.root.join(file.path);
            match self.fs_service.write_if_absent(&path, file.content).await? {
                WriteOutcome::Written => {
                    Logger::starter_written(file.path);
                    report.written_files.push(PathBuf::from(file.path));
                }
                WriteOutcome::Skipped => {
                    Logger::starter_skipped(file.path);
                    report.skipped_files.push(PathBuf::from(file.path));
                }
            }
        }

        // Step 6: merge run scripts into the manifest, additions win on
        // collision, everything else passes through untouched.
        let scripts = starter::run_scripts(config.include_testing);
        Logger::patching_scripts(scripts.len());

        let content = self.fs_service.read_file(&manifest_path).await?;
        let mut manifest = PackageManifest::parse(&content, &manifest_path)?;
        manifest.merge_scripts(&scripts);
        self.fs_service
            .write_file(&manifest_path, &manifest.to_pretty_string()?)
            .await?;

        if let Some(name) = manifest.name() {
            Logger::debug(&format!("Patched script table of '{}'", name));
        }
        report.scripts_added = scripts
            .iter()
            .map(|(name, command)| (name.to_string(), command.to_string()))
            .collect();

        // Step 7: human-readable summary.
        report.setup_time = timer.elapsed();
        Logger::setup_complete(
            report.written_files.len(),
            report.skipped_files.len(),
            report.setup_time,
        );
        self.ui.show_completion(SummaryStats {
            installed_packages: report.installed_packages.clone(),
            created_dirs: report
                .created_dirs
                .iter()
                .map(|d| d.display().to_string())
                .collect(),
            written_files: report
                .written_files
                .iter()
                .map(|f| f.display().to_string())
                .collect(),
            skipped_files: report
                .skipped_files
                .iter()
                .map(|f| f.display().to_string())
                .collect(),
            scripts: report.scripts_added.clone(),
        });

        Ok(report)
    }
}
