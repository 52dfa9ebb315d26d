use arena_core::Coord;
use arena_world::WorldError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BehaviorError {
    #[error("no goal: nothing to pursue and nothing left to explore")]
    NoGoal,

    #[error("no known path from {from} to {to}")]
    NoPath { from: Coord, to: Coord },

    #[error("agent's own tile {0} is missing from its belief map")]
    Unobserved(Coord),

    #[error(transparent)]
    World(#[from] WorldError),
}

pub type BehaviorResult<T> = Result<T, BehaviorError>;
