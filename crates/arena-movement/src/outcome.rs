//! What happened to one move.

use std::fmt;

use arena_core::{AgentId, AgentKind, Coord, Heading};

/// Why a forward move was aborted.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum BlockCause {
    /// The next tile is off the map.
    Edge(Coord),
    Wall(Coord),
    /// Another agent stands on the next tile (or on a portal's exit).
    Agent { id: AgentId, kind: AgentKind, at: Coord },
}

impl BlockCause {
    /// The tile the agent could not enter.
    pub fn coord(self) -> Coord {
        match self {
            BlockCause::Edge(c) | BlockCause::Wall(c) => c,
            BlockCause::Agent { at, .. } => at,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BlockCause::Edge(_)      => "edge",
            BlockCause::Wall(_)      => "wall",
            BlockCause::Agent { .. } => "agent",
        }
    }
}

/// Result of resolving one `Move`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum MoveOutcome {
    /// `Nothing`, or a forward move of zero tiles.
    Idle,
    Turned { heading: Heading },
    Moved { from: Coord, to: Coord },
    /// The translation was aborted; the agent stays at `at`.  `veer` is the
    /// quarter turn it should make next.  `captured` is set when a guard ran
    /// into an intruder.
    Blocked {
        at:       Coord,
        cause:    BlockCause,
        veer:     Heading,
        captured: Option<AgentId>,
    },
    /// Stepped onto `portal` and came out at `to` facing `facing`.
    Teleported { from: Coord, portal: Coord, to: Coord, facing: Heading },
    /// An intruder stepped onto a target tile.
    ReachedTarget { from: Coord, at: Coord },
}

impl MoveOutcome {
    /// Where the agent ends up, if the move changed its tile.
    pub fn destination(&self) -> Option<Coord> {
        match *self {
            MoveOutcome::Moved { to, .. }
            | MoveOutcome::Teleported { to, .. }
            | MoveOutcome::ReachedTarget { at: to, .. } => Some(to),
            _ => None,
        }
    }

    #[inline]
    pub fn is_blocked(&self) -> bool {
        matches!(self, MoveOutcome::Blocked { .. })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MoveOutcome::Idle                 => "idle",
            MoveOutcome::Turned { .. }        => "turned",
            MoveOutcome::Moved { .. }         => "moved",
            MoveOutcome::Blocked { .. }       => "blocked",
            MoveOutcome::Teleported { .. }    => "teleported",
            MoveOutcome::ReachedTarget { .. } => "reached_target",
        }
    }
}

impl fmt::Display for MoveOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            MoveOutcome::Idle => f.write_str("idle"),
            MoveOutcome::Turned { heading } => write!(f, "turned {heading}"),
            MoveOutcome::Moved { from, to } => write!(f, "moved {from} -> {to}"),
            MoveOutcome::Blocked { at, cause, veer, .. } => {
                write!(f, "blocked at {at} by {} {}, veering {veer}", cause.as_str(), cause.coord())
            }
            MoveOutcome::Teleported { from, portal, to, facing } => {
                write!(f, "teleported {from} -> {portal} => {to} facing {facing}")
            }
            MoveOutcome::ReachedTarget { at, .. } => write!(f, "reached target {at}"),
        }
    }
}
