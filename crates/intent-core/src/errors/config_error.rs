/// Configuration loading and validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse config: {reason}")]
    ParseFailed { reason: String },

    #[error("invalid value for {field}: {value} (expected {expected})")]
    InvalidValue {
        field: String,
        value: String,
        expected: String,
    },
}
