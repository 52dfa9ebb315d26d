use arena_core::{AgentId, AgentKind, Coord, CoreError};
use arena_movement::MovementError;
use arena_world::WorldError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] CoreError),

    #[error("agent {agent} cannot start at {at}: {reason}")]
    InvalidPlacement {
        agent:  AgentId,
        at:     Coord,
        reason: &'static str,
    },

    #[error("agents {first} and {second} both start at {at}")]
    Overlap {
        first:  AgentId,
        second: AgentId,
        at:     Coord,
    },

    #[error("{kind} spawn area has {free} free tiles but {wanted} agents were requested")]
    SpawnAreaFull {
        kind:   AgentKind,
        wanted: usize,
        free:   usize,
    },

    #[error("could not build thread pool: {0}")]
    ThreadPool(String),

    #[error("world error: {0}")]
    World(#[from] WorldError),

    #[error("movement error: {0}")]
    Movement(#[from] MovementError),
}

pub type SimResult<T> = Result<T, SimError>;
