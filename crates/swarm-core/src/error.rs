/// Errors raised at the boundaries of the swarm core.
///
/// The per-tick update never fails; these only come from converting raw
/// collaborator data or from rejecting a configuration up front.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SwarmError {
    #[error("expected {expected} hand landmarks, got {got}")]
    LandmarkCount { expected: usize, got: usize },

    #[error("hand landmark {index} has a non-finite coordinate")]
    NonFiniteLandmark { index: usize },

    #[error("invalid swarm config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, SwarmError>;
