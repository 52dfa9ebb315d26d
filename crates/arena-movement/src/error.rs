use arena_core::AgentId;
use arena_world::WorldError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MovementError {
    #[error("agent {0} does not exist")]
    UnknownAgent(AgentId),

    #[error("agent {0} is no longer active and cannot move")]
    Inactive(AgentId),

    #[error("world update failed: {0}")]
    World(#[from] WorldError),
}

pub type MovementResult<T> = Result<T, MovementError>;
