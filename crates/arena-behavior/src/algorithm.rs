//! `AgentAlgorithm`: the closed set of policies an agent can be built with.

use std::fmt;
use std::str::FromStr;

use arena_core::{AgentId, AgentRng, Heading};

use crate::{AStarPursuit, Algorithm, BehaviorResult, Decision, PheromonePatrol, PlanContext, RandomWalk};

/// Which policy to build.  Carried by agent specs and written to output.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AlgorithmKind {
    #[default]
    PheromonePatrol,
    AStarPursuit,
    RandomWalk,
}

impl AlgorithmKind {
    /// Fresh state for this policy.
    pub fn build(self) -> AgentAlgorithm {
        match self {
            AlgorithmKind::PheromonePatrol => AgentAlgorithm::PheromonePatrol(PheromonePatrol::new()),
            AlgorithmKind::AStarPursuit    => AgentAlgorithm::AStarPursuit(AStarPursuit::new()),
            AlgorithmKind::RandomWalk      => AgentAlgorithm::RandomWalk(RandomWalk::new()),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AlgorithmKind::PheromonePatrol => "pheromone_patrol",
            AlgorithmKind::AStarPursuit    => "astar_pursuit",
            AlgorithmKind::RandomWalk      => "random_walk",
        }
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AlgorithmKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pheromone_patrol" | "patrol" => Ok(AlgorithmKind::PheromonePatrol),
            "astar_pursuit" | "astar" | "pursuit" => Ok(AlgorithmKind::AStarPursuit),
            "random_walk" | "random" => Ok(AlgorithmKind::RandomWalk),
            other => Err(format!("unknown algorithm '{other}'")),
        }
    }
}

/// One agent's policy together with its state.
#[derive(Clone, Debug)]
pub enum AgentAlgorithm {
    PheromonePatrol(PheromonePatrol),
    AStarPursuit(AStarPursuit),
    RandomWalk(RandomWalk),
}

impl AgentAlgorithm {
    pub fn kind(&self) -> AlgorithmKind {
        match self {
            AgentAlgorithm::PheromonePatrol(_) => AlgorithmKind::PheromonePatrol,
            AgentAlgorithm::AStarPursuit(_)    => AlgorithmKind::AStarPursuit,
            AgentAlgorithm::RandomWalk(_)      => AlgorithmKind::RandomWalk,
        }
    }
}

impl From<AlgorithmKind> for AgentAlgorithm {
    fn from(kind: AlgorithmKind) -> Self {
        kind.build()
    }
}

impl Algorithm for AgentAlgorithm {
    fn next_move(&mut self, ctx: &PlanContext<'_>, rng: &mut AgentRng) -> BehaviorResult<Decision> {
        match self {
            AgentAlgorithm::PheromonePatrol(a) => a.next_move(ctx, rng),
            AgentAlgorithm::AStarPursuit(a)    => a.next_move(ctx, rng),
            AgentAlgorithm::RandomWalk(a)      => a.next_move(ctx, rng),
        }
    }

    fn interrupt(&mut self, agent: AgentId, veer: Heading) {
        match self {
            AgentAlgorithm::PheromonePatrol(a) => a.interrupt(agent, veer),
            AgentAlgorithm::AStarPursuit(a)    => a.interrupt(agent, veer),
            AgentAlgorithm::RandomWalk(a)      => a.interrupt(agent, veer),
        }
    }

    fn pending(&self) -> usize {
        match self {
            AgentAlgorithm::PheromonePatrol(a) => a.pending(),
            AgentAlgorithm::AStarPursuit(a)    => a.pending(),
            AgentAlgorithm::RandomWalk(a)      => a.pending(),
        }
    }
}
