use thiserror::Error;

use identikit_config::ConfigError;
use identikit_core::DocFormat;

/// Errors emitted by the generation engine.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// Configuration rejected at engine construction.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    /// The value provider failed to supply a required value. Aborts only
    /// the affected record; the batch loop retries with fresh draws.
    #[error("provider failed for field '{field}': {message}")]
    Provider { field: String, message: String },
    /// A recorded entity span no longer matches the final text. Always
    /// fatal; never swallowed or retried.
    #[error("position invariant violated in {format} record ({slots} slots): {detail}")]
    PositionInvariant {
        format: DocFormat,
        slots: usize,
        detail: String,
    },
}

impl GenerationError {
    pub fn provider(field: impl Into<String>, message: impl Into<String>) -> Self {
        GenerationError::Provider {
            field: field.into(),
            message: message.into(),
        }
    }
}
