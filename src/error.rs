//! Error types for millipede configuration.

use thiserror::Error;

/// Errors raised while configuring a millipede.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MillipedeError {
    /// A head or skin pattern did not resolve to exactly one character.
    #[error("the {part} pattern must be a single character, got `{input}`")]
    InvalidCharacter { part: &'static str, input: String },
}

/// Result type for millipede operations.
pub type Result<T> = std::result::Result<T, MillipedeError>;
