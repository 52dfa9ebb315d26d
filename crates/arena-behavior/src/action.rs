//! Moves: what an agent asks to do on one tick.

use std::fmt;

use arena_core::{AgentId, Coord, Heading};

/// One primitive step.
///
/// Turns are absolute: `TurnUp` faces north, `TurnRight` faces east, and so
/// on, whatever the current heading.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    #[default]
    Nothing,
    TurnUp,
    TurnDown,
    TurnLeft,
    TurnRight,
    MoveForward,
}

impl Action {
    /// The turn that faces `heading`.
    pub fn turn_towards(heading: Heading) -> Self {
        match heading {
            Heading::North => Action::TurnUp,
            Heading::East  => Action::TurnRight,
            Heading::South => Action::TurnDown,
            Heading::West  => Action::TurnLeft,
        }
    }

    /// Heading a turn action leaves the agent facing.  `None` for
    /// `Nothing` and `MoveForward`.
    pub fn facing(self) -> Option<Heading> {
        match self {
            Action::TurnUp    => Some(Heading::North),
            Action::TurnRight => Some(Heading::East),
            Action::TurnDown  => Some(Heading::South),
            Action::TurnLeft  => Some(Heading::West),
            Action::Nothing | Action::MoveForward => None,
        }
    }

    #[inline]
    pub fn is_turn(self) -> bool {
        self.facing().is_some()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Action::Nothing     => "nothing",
            Action::TurnUp      => "turn_up",
            Action::TurnDown    => "turn_down",
            Action::TurnLeft    => "turn_left",
            Action::TurnRight   => "turn_right",
            Action::MoveForward => "move_forward",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An action with its magnitude, tagged with the agent that issued it.
///
/// `magnitude` only matters for `MoveForward`: the number of tiles asked
/// for.  The movement resolver caps it at the agent's speed.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    pub action:    Action,
    pub magnitude: u32,
    pub agent:     AgentId,
}

impl Move {
    pub fn nothing(agent: AgentId) -> Self {
        Self { action: Action::Nothing, magnitude: 0, agent }
    }

    pub fn turn(agent: AgentId, heading: Heading) -> Self {
        Self { action: Action::turn_towards(heading), magnitude: 0, agent }
    }

    pub fn forward(agent: AgentId, tiles: u32) -> Self {
        Self { action: Action::MoveForward, magnitude: tiles, agent }
    }

    #[inline]
    pub fn is_nothing(&self) -> bool {
        self.action == Action::Nothing
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.action {
            Action::MoveForward => write!(f, "{} {} x{}", self.agent, self.action, self.magnitude),
            _ => write!(f, "{} {}", self.agent, self.action),
        }
    }
}

/// What an algorithm hands back for one tick: exactly one move, plus an
/// optional tile to refresh with pheromone.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Decision {
    pub mv:             Move,
    pub pheromone_drop: Option<Coord>,
}

impl Decision {
    pub fn idle(agent: AgentId) -> Self {
        Self { mv: Move::nothing(agent), pheromone_drop: None }
    }

    pub fn new(mv: Move) -> Self {
        Self { mv, pheromone_drop: None }
    }

    pub fn with_drop(mut self, at: Coord) -> Self {
        self.pheromone_drop = Some(at);
        self
    }
}
