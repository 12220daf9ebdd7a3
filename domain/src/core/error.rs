//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unknown discussion phase: {0}")]
    UnknownPhase(String),

    #[error("Agent identifier cannot be empty")]
    EmptyAgentId,
}
