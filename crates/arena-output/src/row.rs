//! Plain data row types written by output backends.

use arena_agent::AgentStore;
use arena_core::{AgentId, Tick};
use arena_sim::TickSummary;

/// One agent's pose and status at a given tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgentSnapshotRow {
    pub agent_id: u32,
    pub tick:     u64,
    pub kind:     &'static str,
    pub x:        i32,
    pub y:        i32,
    pub heading:  &'static str,
    pub status:   &'static str,
}

impl AgentSnapshotRow {
    pub fn from_store(agents: &AgentStore, agent: AgentId, tick: Tick) -> Self {
        let i = agent.index();
        let at = agents.position[i];
        Self {
            agent_id: agent.0,
            tick:     tick.0,
            kind:     agents.kind[i].as_str(),
            x:        at.x,
            y:        at.y,
            heading:  agents.heading[i].as_str(),
            status:   agents.status[i].as_str(),
        }
    }
}

/// Movement counters and exploration coverage for one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickSummaryRow {
    pub tick:              u64,
    pub moved:             u64,
    pub blocked:           u64,
    pub teleported:        u64,
    /// Fraction of walkable tiles seen by any guard so far.
    pub guard_coverage:    f64,
    pub intruder_coverage: f64,
}

impl From<&TickSummary> for TickSummaryRow {
    fn from(s: &TickSummary) -> Self {
        Self {
            tick:              s.tick.0,
            moved:             s.moved as u64,
            blocked:           s.blocked as u64,
            teleported:        s.teleported as u64,
            guard_coverage:    s.guard_coverage,
            intruder_coverage: s.intruder_coverage,
        }
    }
}
