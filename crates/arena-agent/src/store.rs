//! Core agent storage: `AgentStore` (SoA data) and `AgentRngs` (per-agent RNG).
//!
//! # Why two structs?
//!
//! The intent phase needs `&mut AgentRng` for every agent (tie-breaks and
//! veers draw randomness) while also reading every agent's state through
//! `&AgentStore`.  Keeping the RNGs in their own struct lets the simulation
//! hold both borrows at once:
//!
//! ```ignore
//! let store: &AgentStore = &sim.agents;
//! let decisions = sim.rngs.inner
//!     .iter_mut()
//!     .enumerate()
//!     .map(|(i, rng)| plan(AgentId(i as u32), store, rng))
//!     .collect::<Vec<_>>();
//! ```

use std::fmt;

use arena_core::{AgentId, AgentKind, AgentRng, Coord, Heading, Pose};

use crate::BeliefMap;

// ── AgentRngs ─────────────────────────────────────────────────────────────────

/// Per-agent deterministic RNG state, separated from [`AgentStore`].
pub struct AgentRngs {
    pub inner: Vec<AgentRng>,
}

impl AgentRngs {
    /// Allocate and seed `count` per-agent RNGs from `global_seed`.
    pub(crate) fn new(count: usize, global_seed: u64) -> Self {
        let inner = (0..count as u32)
            .map(|i| AgentRng::new(global_seed, AgentId(i)))
            .collect();
        Self { inner }
    }

    #[inline]
    pub fn get_mut(&mut self, agent: AgentId) -> &mut AgentRng {
        &mut self.inner[agent.index()]
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

// ── AgentStatus ───────────────────────────────────────────────────────────────

/// Whether an agent still takes part in the run.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AgentStatus {
    #[default]
    Active,
    /// Intruder caught by a guard.  Removed from the map.
    Captured,
    /// Intruder that reached a target tile.
    Escaped,
}

impl AgentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            AgentStatus::Active   => "active",
            AgentStatus::Captured => "captured",
            AgentStatus::Escaped  => "escaped",
        }
    }
}

impl fmt::Display for AgentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── AgentStore ────────────────────────────────────────────────────────────────

/// Structure-of-Arrays storage for all agent state.
///
/// Every `Vec` field has exactly `count` elements and `AgentId` is the index
/// into all of them:
///
/// ```ignore
/// let at = store.position[agent.index()];
/// ```
///
/// `position` mirrors the map's agent registry.  The simulation writes both
/// in the same apply step.
pub struct AgentStore {
    /// Number of agents.  Equals the length of every SoA `Vec`.
    pub count: usize,

    pub kind: Vec<AgentKind>,

    // ── Pose ──────────────────────────────────────────────────────────────
    pub position: Vec<Coord>,
    pub heading:  Vec<Heading>,

    /// Maximum tiles covered by one forward move.
    pub speed: Vec<u32>,

    pub status: Vec<AgentStatus>,

    // ── Knowledge ─────────────────────────────────────────────────────────
    /// What each agent has observed so far.
    pub belief: Vec<BeliefMap>,
}

impl AgentStore {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterator over all `AgentId`s in ascending index order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.count as u32).map(AgentId)
    }

    /// Agents still taking part, ascending.
    pub fn active_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        self.agent_ids().filter(|&a| self.is_active(a))
    }

    #[inline]
    pub fn is_active(&self, agent: AgentId) -> bool {
        self.status[agent.index()] == AgentStatus::Active
    }

    #[inline]
    pub fn pose(&self, agent: AgentId) -> Pose {
        Pose::new(self.position[agent.index()], self.heading[agent.index()])
    }

    /// Number of agents of `kind` with `status`.
    pub fn count_where(&self, kind: AgentKind, status: AgentStatus) -> usize {
        self.kind
            .iter()
            .zip(&self.status)
            .filter(|&(&k, &s)| k == kind && s == status)
            .count()
    }

    pub(crate) fn with_capacity(n: usize) -> Self {
        Self {
            count:    0,
            kind:     Vec::with_capacity(n),
            position: Vec::with_capacity(n),
            heading:  Vec::with_capacity(n),
            speed:    Vec::with_capacity(n),
            status:   Vec::with_capacity(n),
            belief:   Vec::with_capacity(n),
        }
    }

    pub(crate) fn push(&mut self, kind: AgentKind, pose: Pose, speed: u32) -> AgentId {
        let id = AgentId(self.count as u32);
        self.kind.push(kind);
        self.position.push(pose.coord);
        self.heading.push(pose.heading);
        self.speed.push(speed);
        self.status.push(AgentStatus::Active);
        self.belief.push(BeliefMap::new(kind));
        self.count += 1;
        id
    }
}
