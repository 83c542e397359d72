//! Library error types.

/// Errors raised while reading an overlay view into a closed type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum OverlayError {
    /// The ownership byte has no named [`Ownership`](crate::overlay::Ownership) value.
    #[error("ownership byte {0:#04x} has no named value")]
    UnknownOwnership(u8),
}

/// Errors raised while loading or validating a [`SamplesConfig`](crate::config::SamplesConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
