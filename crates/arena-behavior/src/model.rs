//! The `Algorithm` trait and the move queue its implementations share.

use std::collections::VecDeque;

use arena_core::{AgentId, AgentRng, Heading};

use crate::{BehaviorResult, Decision, Move, PlanContext};

/// Pluggable agent decision policy.
///
/// Each agent exclusively owns one algorithm, which may keep state across
/// ticks (typically a short queue of pending moves).  `next_move` is called
/// once per tick with a read-only [`PlanContext`] and the agent's own
/// [`AgentRng`], so results do not depend on the order agents are planned
/// in.
///
/// # Thread safety
///
/// With the `parallel` feature arena-sim plans agents on a rayon pool, each
/// task holding `&mut` to a different algorithm.  Implementations must be
/// `Send`.
///
/// # Example
///
/// ```rust,ignore
/// struct AlwaysForward;
///
/// impl Algorithm for AlwaysForward {
///     fn next_move(&mut self, ctx: &PlanContext<'_>, _rng: &mut AgentRng) -> BehaviorResult<Decision> {
///         Ok(Decision::new(Move::forward(ctx.agent, 1)))
///     }
/// }
/// ```
pub trait Algorithm: Send {
    /// Produce this tick's move.
    ///
    /// An error means the agent could not decide.  The caller treats the
    /// tick as `Nothing` and reports the error; the algorithm stays usable.
    fn next_move(&mut self, ctx: &PlanContext<'_>, rng: &mut AgentRng) -> BehaviorResult<Decision>;

    /// The movement resolver blocked the agent and picked `veer` as its new
    /// heading.  Pending moves are dropped and the turn is queued instead.
    ///
    /// Default: nothing is queued.
    fn interrupt(&mut self, _agent: AgentId, _veer: Heading) {}

    /// Moves still waiting to be returned.
    fn pending(&self) -> usize {
        0
    }
}

// ── MoveQueue ─────────────────────────────────────────────────────────────────

/// FIFO of pending moves.  Planners refill it only when it is empty, and
/// every refill is at most one turn followed by one forward move.
#[derive(Clone, Debug, Default)]
pub struct MoveQueue {
    moves: VecDeque<Move>,
}

impl MoveQueue {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn pop(&mut self) -> Option<Move> {
        self.moves.pop_front()
    }

    pub fn clear(&mut self) {
        self.moves.clear();
    }

    /// Queue the moves that take an agent facing `current` one run of
    /// `tiles` towards `towards`: a turn if the headings differ, then the
    /// forward move.
    pub fn push_route(&mut self, agent: AgentId, current: Heading, towards: Heading, tiles: u32) {
        if current != towards {
            self.moves.push_back(Move::turn(agent, towards));
        }
        self.moves.push_back(Move::forward(agent, tiles.max(1)));
    }

    /// Replace everything with a single turn.
    pub fn replace_with_turn(&mut self, agent: AgentId, heading: Heading) {
        self.moves.clear();
        self.moves.push_back(Move::turn(agent, heading));
    }
}
