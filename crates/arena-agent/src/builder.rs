//! Fluent builder for constructing `AgentStore` + `AgentRngs` in one step.
//!
//! # Usage
//!
//! ```rust
//! use arena_agent::AgentStoreBuilder;
//! use arena_core::{AgentKind, Coord, Heading, Pose};
//!
//! let (store, rngs) = AgentStoreBuilder::new(/*seed=*/ 42)
//!     .agent(AgentKind::Guard, Pose::new(Coord::new(1, 1), Heading::North), 3)
//!     .agent(AgentKind::Intruder, Pose::new(Coord::new(8, 8), Heading::West), 1)
//!     .build();
//!
//! assert_eq!(store.count, 2);
//! assert_eq!(rngs.len(),  2);
//! ```

use arena_core::{AgentKind, Pose};

use crate::{AgentRngs, AgentStore};

/// Speed given to agents added without one.
pub const DEFAULT_SPEED: u32 = 1;

/// Fluent builder for [`AgentStore`] + [`AgentRngs`].
///
/// Agents get ids in insertion order.  Placement on a map is validated later
/// by the simulation builder, which knows the map.
pub struct AgentStoreBuilder {
    seed:   u64,
    agents: Vec<(AgentKind, Pose, u32)>,
}

impl AgentStoreBuilder {
    pub fn new(seed: u64) -> Self {
        Self { seed, agents: Vec::new() }
    }

    /// Add an agent.  A speed of 0 is raised to 1.
    pub fn agent(mut self, kind: AgentKind, pose: Pose, speed: u32) -> Self {
        self.agents.push((kind, pose, speed.max(1)));
        self
    }

    pub fn guard(self, pose: Pose) -> Self {
        self.agent(AgentKind::Guard, pose, DEFAULT_SPEED)
    }

    pub fn intruder(self, pose: Pose) -> Self {
        self.agent(AgentKind::Intruder, pose, DEFAULT_SPEED)
    }

    /// Construct `AgentStore` and `AgentRngs`.  Every agent starts active
    /// with an empty belief map.
    pub fn build(self) -> (AgentStore, AgentRngs) {
        let mut store = AgentStore::with_capacity(self.agents.len());
        for (kind, pose, speed) in self.agents {
            store.push(kind, pose, speed);
        }
        let rngs = AgentRngs::new(store.count, self.seed);
        (store, rngs)
    }
}
