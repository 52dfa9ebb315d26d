//! World-subsystem error type.

use thiserror::Error;

use arena_core::{AgentId, Coord};

/// Errors produced by `arena-world`.
///
/// `OutOfBounds` is the recoverable "no tile here" answer to a lookup.  The
/// portal and dimension variants are scenario-structure errors and are only
/// returned from [`TileMapBuilder::build`][crate::TileMapBuilder::build],
/// before any tick runs.
#[derive(Debug, Error)]
pub enum WorldError {
    #[error("coordinate {coord} is outside the {width}x{height} map")]
    OutOfBounds { coord: Coord, width: i32, height: i32 },

    #[error("map dimensions {width}x{height} are empty")]
    EmptyMap { width: i32, height: i32 },

    #[error("portal tile {0} has no configured target")]
    UnresolvedPortal(Coord),

    #[error("portal link at {0} does not sit on a portal tile")]
    DanglingPortalLink(Coord),

    #[error("portal {portal} targets {target}, which is outside the map")]
    PortalTargetOutOfBounds { portal: Coord, target: Coord },

    #[error("portal {portal} targets {target}, which is not walkable")]
    PortalTargetBlocked { portal: Coord, target: Coord },

    #[error("map layout error: {0}")]
    Layout(String),

    #[error("invalid pheromone configuration: {0}")]
    Pheromone(String),

    #[error("tile {0} is a wall")]
    Blocked(Coord),

    #[error("tile {coord} is already occupied by {by}")]
    Occupied { coord: Coord, by: AgentId },

    #[error("{0} is not registered on the map")]
    UnknownAgent(AgentId),
}

pub type WorldResult<T> = Result<T, WorldError>;
