//! Read-only state passed to every planning call.

use arena_agent::{BeliefMap, TileNode};
use arena_core::{AgentId, AgentKind, Pose, Tick};
use arena_world::TileMap;

use crate::{BehaviorError, BehaviorResult};

/// A read-only snapshot of one agent's situation at the start of a tick.
///
/// Built by arena-sim for each agent during the intent phase.  `map` is the
/// start-of-tick ground truth; algorithms should plan through `belief` and
/// only consult `map` for facts every agent is assumed to know (bounds and
/// the portal table).
///
/// # Lifetimes
///
/// All borrows live for the duration of one tick's intent phase.  arena-sim
/// never allows mutable access to these structures while a context is live.
pub struct PlanContext<'a> {
    pub tick:   Tick,
    pub agent:  AgentId,
    pub kind:   AgentKind,
    pub pose:   Pose,
    /// Maximum tiles per forward move.
    pub speed:  u32,
    pub belief: &'a BeliefMap,
    pub map:    &'a TileMap,
}

impl<'a> PlanContext<'a> {
    #[inline]
    pub fn new(
        tick:   Tick,
        agent:  AgentId,
        kind:   AgentKind,
        pose:   Pose,
        speed:  u32,
        belief: &'a BeliefMap,
        map:    &'a TileMap,
    ) -> Self {
        Self { tick, agent, kind, pose, speed, belief, map }
    }

    /// The node for the tile the agent stands on.
    ///
    /// Fails with `World(OutOfBounds)` if the pose is off the map and with
    /// `Unobserved` if the agent has not sensed its own tile yet.
    pub fn here(&self) -> BehaviorResult<&'a TileNode> {
        let at = self.pose.coord;
        self.map.tile(at)?;
        self.belief.node(at).ok_or(BehaviorError::Unobserved(at))
    }
}
