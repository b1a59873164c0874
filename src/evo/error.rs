//! Error type for the evolutionary engine.

/// Errors surfaced by the engine.
///
/// Panics raised inside objectives or agents are not converted into
/// `EvoError`; they unwind through the run and abort it.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EvoError {
    #[error("at least one objective must be registered")]
    NoObjectives,
    #[error("at least one agent must be registered to evolve")]
    NoAgents,
    #[error("unknown agent: {0}")]
    UnknownAgent(String),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("objective `{objective}` produced a non-finite score ({value})")]
    NonFiniteScore { objective: String, value: f64 },
}
