use thiserror::Error;

/// Failure taxonomy for the pipeline. Everything except
/// [`WatchError::ConfigurationMissing`] is recovered locally by the layer
/// that observes it; a run prefers partial degradation over total failure.
#[derive(Debug, Error)]
pub enum WatchError {
    #[error("Ranked source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("Malformed record: {0}")]
    MalformedRecord(String),

    #[error("No price data for {0}")]
    SymbolDataMissing(String),

    #[error("Auxiliary signal unavailable: {0}")]
    AuxiliarySignalUnavailable(String),

    #[error("Dispatch failed: {0}")]
    DispatchFailure(String),

    #[error("Missing configuration: {0}")]
    ConfigurationMissing(String),

    #[error("Parse error: {0}")]
    Parse(String),
}
