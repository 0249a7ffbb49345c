//! Shared data model and configuration for the laris trend-analysis pipeline.
//!
//! Raw listing shapes (as delivered by marketplace collectors), normalized
//! listings, category summaries, the final report type, and the environment
//! and sources-manifest configuration loaders live here so that the pipeline
//! and CLI crates agree on one schema.

pub mod app_config;
pub mod config;
pub mod listing;
pub mod report;
pub mod sources;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env, ConfigError};
pub use listing::{Listing, RawListing, SourceBatch, UNKNOWN_SHOP};
pub use report::{CategorySummary, CompetitionLevel, Report};
pub use sources::{load_sources, SourceConfig, SourcesFile};
