use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// One marketplace entry in the sources manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Source id used in the report (`"tokopedia"`, `"shopee"`).
    pub marketplace: String,
    /// Path to the collector's raw-listing JSON for this source.
    pub listings_path: PathBuf,
    pub notes: Option<String>,
}

/// Parsed sources manifest. Entry order in the file is the concatenation
/// order of the run.
#[derive(Debug, Deserialize)]
pub struct SourcesFile {
    pub sources: Vec<SourceConfig>,
}

/// Load and validate the sources manifest from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails
/// validation (empty or duplicate marketplace ids).
pub fn load_sources(path: &Path) -> Result<SourcesFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::SourcesFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let sources_file: SourcesFile =
        serde_yaml::from_str(&content).map_err(ConfigError::SourcesFileParse)?;

    validate_sources(&sources_file)?;

    Ok(sources_file)
}

fn validate_sources(sources_file: &SourcesFile) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();

    for source in &sources_file.sources {
        if source.marketplace.trim().is_empty() {
            return Err(ConfigError::Validation(
                "marketplace id must be non-empty".to_string(),
            ));
        }

        let lower = source.marketplace.to_lowercase();
        if !seen.insert(lower) {
            return Err(ConfigError::Validation(format!(
                "duplicate marketplace id: '{}'",
                source.marketplace
            )));
        }
    }

    Ok(())
}
