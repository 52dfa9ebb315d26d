//! `AgentSpec`: everything needed to put one agent into a run.

use arena_agent::DEFAULT_SPEED;
use arena_behavior::AlgorithmKind;
use arena_core::{AgentKind, Pose};
use arena_vision::VisionModel;

/// One agent's starting pose, speed, and the policy and vision model it is
/// built with.
///
/// Guards default to pheromone patrol and intruders to A* pursuit; both
/// default to rectangle vision and speed 1.
///
/// ```rust
/// use arena_behavior::AlgorithmKind;
/// use arena_core::{Coord, Heading, Pose};
/// use arena_sim::AgentSpec;
/// use arena_vision::VisionModel;
///
/// let spec = AgentSpec::guard(Pose::new(Coord::new(2, 2), Heading::East))
///     .algorithm(AlgorithmKind::AStarPursuit)
///     .vision(VisionModel::Cone)
///     .speed(2);
/// assert_eq!(spec.speed, 2);
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct AgentSpec {
    pub kind:      AgentKind,
    pub pose:      Pose,
    pub speed:     u32,
    pub algorithm: AlgorithmKind,
    pub vision:    VisionModel,
}

impl AgentSpec {
    pub fn new(kind: AgentKind, pose: Pose) -> Self {
        let algorithm = match kind {
            AgentKind::Guard    => AlgorithmKind::PheromonePatrol,
            AgentKind::Intruder => AlgorithmKind::AStarPursuit,
        };
        Self { kind, pose, speed: DEFAULT_SPEED, algorithm, vision: VisionModel::default() }
    }

    pub fn guard(pose: Pose) -> Self {
        Self::new(AgentKind::Guard, pose)
    }

    pub fn intruder(pose: Pose) -> Self {
        Self::new(AgentKind::Intruder, pose)
    }

    /// Maximum tiles per forward move.  0 is raised to 1.
    pub fn speed(mut self, speed: u32) -> Self {
        self.speed = speed.max(1);
        self
    }

    pub fn algorithm(mut self, algorithm: AlgorithmKind) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn vision(mut self, vision: VisionModel) -> Self {
        self.vision = vision;
        self
    }
}
