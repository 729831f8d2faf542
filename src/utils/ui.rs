use colored::*;
use std::time::Instant;

pub struct KataUI {
    start_time: Instant,
}

impl KataUI {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
        }
    }

    pub fn show_banner(&self) {
        // Simple, clean output like Vite
        println!("\n  {} {}", "KATA".bright_cyan().bold(), "v0.2.0".bright_white());
        println!();
    }

    pub fn show_completion(&self, stats: SummaryStats) {
        let elapsed = self.start_time.elapsed();

        if !stats.installed_packages.is_empty() {
            println!();
            println!("  {} dev dependencies", "installed".bright_black());
            for pkg in &stats.installed_packages {
                println!("    {} {}", "+".bright_green(), pkg.bright_cyan());
            }
        }

        if !stats.created_dirs.is_empty() {
            println!();
            println!("  {} directories", "ensured".bright_black());
            for dir in &stats.created_dirs {
                println!("    {} {}/", "•".bright_black(), dir.bright_cyan());
            }
        }

        println!();
        for file in &stats.written_files {
            println!("  {} {}", "create".bright_green(), file.bright_cyan());
        }
        for file in &stats.skipped_files {
            println!(
                "  {} {} {}",
                "skip".bright_yellow(),
                file.bright_cyan(),
                "(exists)".bright_black()
            );
        }

        if !stats.scripts.is_empty() {
            println!();
            println!("  {} run scripts", "available".bright_black());
            for (name, command) in &stats.scripts {
                println!(
                    "    {} {} {}",
                    "npm run".bright_black(),
                    name.bright_cyan().bold(),
                    format!("({})", command).bright_black()
                );
            }
        }

        println!();
        println!(
            "  {} scaffolded in {}",
            "✓".bright_green(),
            format!("{:.0}ms", elapsed.as_secs_f64() * 1000.0)
                .bright_white()
                .bold()
        );
    }
}

#[derive(Clone, Default)]
pub struct SummaryStats {
    pub installed_packages: Vec<String>,
    pub created_dirs: Vec<String>,
    pub written_files: Vec<String>,
    pub skipped_files: Vec<String>,
    pub scripts: Vec<(String, String)>,
}

impl Default for KataUI {
    fn default() -> Self {
        Self::new()
    }
}
