use std::path::PathBuf;

/// Process-wide configuration for a pipeline run, resolved from environment
/// variables by [`crate::config::load_app_config`].
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Path to the YAML sources manifest listing marketplaces and their
    /// raw-listing fixture files.
    pub sources_path: PathBuf,
    /// Where the JSON report is written after a run.
    pub report_path: PathBuf,
    pub log_level: String,
    /// How many ranked categories the CLI summary prints.
    pub summary_top_categories: usize,
}
