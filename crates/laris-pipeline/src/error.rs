use thiserror::Error;

/// Invariant violations inside the pipeline.
///
/// Data-quality problems (missing names, digitless prices, unparsable
/// ratings) never surface here; they are handled by dropping the listing or
/// defaulting the field during normalization. These variants only fire on
/// programming errors, e.g. feeding the aggregator listings that never went
/// through categorization.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("listing \"{name}\" reached aggregation without a category")]
    Uncategorized { name: String },

    #[error("category group \"{category}\" was formed with zero members")]
    EmptyCategoryGroup { category: String },
}
