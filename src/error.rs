//! Error types for MindTrace Core

use thiserror::Error;

/// Errors that can occur at the crate's fallible seams.
///
/// The decision engines themselves never fail: missing or malformed upstream
/// signals degrade to conservative defaults instead of erroring. These
/// variants cover serialization, screening-graph validation, and strict
/// input handling in callers such as the CLI.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Unknown screening question: {0}")]
    UnknownQuestion(String),

    #[error("Question '{question}' has no option '{option}'")]
    UnknownOption { question: String, option: String },

    #[error("Screening question not reachable from start: {0}")]
    UnreachableQuestion(String),

    #[error("Screening already completed; cannot apply option '{0}'")]
    ScreeningCompleted(String),
}
