use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod analyze;

#[derive(Debug, Parser)]
#[command(name = "laris-cli")]
#[command(about = "Marketplace trend analysis: normalize, categorize, rank")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run the full pipeline over all configured sources and write the report.
    Analyze {
        /// Report output path; overrides LARIS_REPORT_PATH.
        #[arg(long)]
        output: Option<PathBuf>,
        /// Use the legacy randomized growth signal instead of the neutral
        /// constant. Demo output only; breaks run-to-run determinism.
        #[arg(long)]
        simulated_growth: bool,
    },
    /// Validate the sources manifest and list its entries.
    Sources,
}

/// Builds the subscriber filter. An explicit `RUST_LOG` wins; otherwise the
/// configured level applies.
fn build_env_filter(rust_log: Option<&str>, log_level: &str) -> anyhow::Result<EnvFilter> {
    let directives = rust_log.unwrap_or(log_level);
    Ok(EnvFilter::try_new(directives)?)
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = laris_core::load_app_config()?;
    let env_filter = build_env_filter(
        std::env::var("RUST_LOG").ok().as_deref(),
        &config.log_level,
    )?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            output,
            simulated_growth,
        } => analyze::run_analyze(&config, output, simulated_growth),
        Commands::Sources => analyze::list_sources(&config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_falls_back_to_configured_level() {
        let filter = build_env_filter(None, "debug").expect("filter should build");
        assert_eq!(filter.to_string(), "debug");
    }

    #[test]
    fn rust_log_overrides_configured_level() {
        let filter = build_env_filter(Some("warn"), "debug").expect("filter should build");
        assert_eq!(filter.to_string(), "warn");
    }

    #[test]
    fn invalid_configured_level_is_an_error() {
        let result = build_env_filter(None, "laris=notalevel");
        assert!(result.is_err(), "expected Err, got: {result:?}");
    }
}
