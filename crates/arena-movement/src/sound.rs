//! Ambient hearing check.

use arena_core::{AgentId, AgentKind, Coord};
use arena_world::TileMap;

/// Every agent other than `agent` within Chebyshev distance `radius` of
/// `pos`, ascending by id.
///
/// Purely informational: nothing in the tick loop reacts to it beyond
/// reporting it to the observer.  Walls do not muffle sound.
pub fn agents_within_earshot(
    map:    &TileMap,
    agent:  AgentId,
    pos:    Coord,
    radius: u32,
) -> Vec<(AgentId, AgentKind, Coord)> {
    map.agents()
        .filter(|&(id, _, at)| id != agent && pos.chebyshev(at) <= radius)
        .collect()
}
