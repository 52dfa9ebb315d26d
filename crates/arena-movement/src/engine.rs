//! The collision resolver: applies one `Move` to the map and agent store.

use arena_agent::{AgentStatus, AgentStore};
use arena_behavior::{Action, Move};
use arena_core::{AgentId, AgentKind, AgentRng, Coord};
use arena_world::{TileKind, TileMap};
use tracing::debug;

use crate::{BlockCause, MoveOutcome, MovementError, MovementResult};

/// Running totals over every move the engine has resolved.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveTotals {
    pub moved:      u64,
    pub blocked:    u64,
    pub teleported: u64,
    pub captures:   u64,
}

/// Resolves moves one at a time against the live map.
///
/// The engine keeps no per-agent state; callers run it sequentially in
/// ascending `AgentId` order so that two agents heading for the same tile
/// are settled first come, first served.
#[derive(Debug, Default)]
pub struct MovementEngine {
    pub totals: MoveTotals,
}

impl MovementEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply `mv` for `mv.agent`.
    ///
    /// Turns set the heading at once.  A forward move travels
    /// `min(magnitude, speed)` tiles; each tile on the way is checked in
    /// this order and the first hit decides the outcome:
    ///
    /// 1. off the map or a wall: abort, agent stays put and should veer;
    /// 2. another agent: same as 1, and a guard captures an intruder;
    /// 3. a portal: jump to its exit and take its facing, ending the move;
    /// 4. a target tile, for intruders: stop there and report the win.
    ///
    /// If nothing hits, the agent ends on the last tile of the path.
    ///
    /// `rng` is the moving agent's own generator and is only drawn from to
    /// pick a veer direction.
    pub fn resolve(
        &mut self,
        map:    &mut TileMap,
        agents: &mut AgentStore,
        mv:     Move,
        rng:    &mut AgentRng,
    ) -> MovementResult<MoveOutcome> {
        let agent = mv.agent;
        if agent.index() >= agents.count {
            return Err(MovementError::UnknownAgent(agent));
        }
        if !agents.is_active(agent) {
            return Err(MovementError::Inactive(agent));
        }

        let outcome = match mv.action {
            Action::Nothing => MoveOutcome::Idle,
            Action::MoveForward => self.forward(map, agents, agent, mv.magnitude, rng)?,
            turn => match turn.facing() {
                Some(heading) => {
                    agents.heading[agent.index()] = heading;
                    MoveOutcome::Turned { heading }
                }
                None => MoveOutcome::Idle,
            },
        };
        debug!(%agent, %outcome, "move resolved");
        Ok(outcome)
    }

    fn forward(
        &mut self,
        map:       &mut TileMap,
        agents:    &mut AgentStore,
        agent:     AgentId,
        magnitude: u32,
        rng:       &mut AgentRng,
    ) -> MovementResult<MoveOutcome> {
        let i = agent.index();
        let kind = agents.kind[i];
        let heading = agents.heading[i];
        let from = agents.position[i];
        let tiles = magnitude.min(agents.speed[i]);
        if tiles == 0 {
            return Ok(MoveOutcome::Idle);
        }

        let mut at = from;
        for _ in 0..tiles {
            let next = at.step(heading, 1);

            if let Some(cause) = self.obstacle(map, agent, next) {
                return Ok(self.block(map, agents, agent, from, cause, rng));
            }

            if let Some(link) = map.portal(next).copied() {
                if let Some((id, other)) = map.agent_at(link.target).filter(|&(id, _)| id != agent) {
                    let cause = BlockCause::Agent { id, kind: other, at: link.target };
                    return Ok(self.block(map, agents, agent, from, cause, rng));
                }
                self.commit(map, agents, agent, link.target)?;
                agents.heading[i] = link.facing;
                self.totals.teleported += 1;
                return Ok(MoveOutcome::Teleported { from, portal: next, to: link.target, facing: link.facing });
            }

            at = next;
            if kind == AgentKind::Intruder && map.kind_at(at) == Some(TileKind::Target) {
                self.commit(map, agents, agent, at)?;
                agents.status[i] = AgentStatus::Escaped;
                self.totals.moved += 1;
                return Ok(MoveOutcome::ReachedTarget { from, at });
            }
        }

        self.commit(map, agents, agent, at)?;
        self.totals.moved += 1;
        Ok(MoveOutcome::Moved { from, to: at })
    }

    /// Why `agent` cannot step onto `c`, if it cannot.
    fn obstacle(&self, map: &TileMap, agent: AgentId, c: Coord) -> Option<BlockCause> {
        if !map.in_bounds(c) {
            return Some(BlockCause::Edge(c));
        }
        if map.is_wall(c) {
            return Some(BlockCause::Wall(c));
        }
        match map.agent_at(c) {
            Some((id, kind)) if id != agent => Some(BlockCause::Agent { id, kind, at: c }),
            _ => None,
        }
    }

    fn block(
        &mut self,
        map:    &mut TileMap,
        agents: &mut AgentStore,
        agent:  AgentId,
        at:     Coord,
        cause:  BlockCause,
        rng:    &mut AgentRng,
    ) -> MoveOutcome {
        self.totals.blocked += 1;
        let veer = rng.veer(agents.heading[agent.index()]);

        let captured = match cause {
            BlockCause::Agent { id, kind: AgentKind::Intruder, .. }
                if agents.kind[agent.index()] == AgentKind::Guard =>
            {
                map.remove_agent(id);
                agents.status[id.index()] = AgentStatus::Captured;
                self.totals.captures += 1;
                debug!(guard = %agent, intruder = %id, "intruder captured");
                Some(id)
            }
            _ => None,
        };

        MoveOutcome::Blocked { at, cause, veer, captured }
    }

    fn commit(&mut self, map: &mut TileMap, agents: &mut AgentStore, agent: AgentId, to: Coord) -> MovementResult<()> {
        map.move_agent(agent, to)?;
        agents.position[agent.index()] = to;
        Ok(())
    }
}
