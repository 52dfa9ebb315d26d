//! How a run ended, and what one tick did.

use std::fmt;

use arena_core::{AgentId, Tick};

/// Why `Sim::run` stopped.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum SimOutcome {
    /// An intruder stepped onto a target tile.
    IntruderReachedTarget(AgentId),
    /// Every intruder has been captured.
    AllIntrudersCaught,
    /// `total_ticks` elapsed with neither side winning.
    TimeLimit,
}

impl SimOutcome {
    pub fn as_str(self) -> &'static str {
        match self {
            SimOutcome::IntruderReachedTarget(_) => "intruder_reached_target",
            SimOutcome::AllIntrudersCaught       => "all_intruders_caught",
            SimOutcome::TimeLimit                => "time_limit",
        }
    }
}

impl fmt::Display for SimOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimOutcome::IntruderReachedTarget(agent) => write!(f, "intruder {agent} reached the target"),
            SimOutcome::AllIntrudersCaught => f.write_str("all intruders caught"),
            SimOutcome::TimeLimit => f.write_str("time limit"),
        }
    }
}

/// Counters for one tick, handed to `SimObserver::on_tick_end`.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
pub struct TickSummary {
    pub tick:              Tick,
    /// Agents that planned this tick.
    pub active:            usize,
    pub moved:             usize,
    pub blocked:           usize,
    pub teleported:        usize,
    pub captured:          usize,
    /// Agents whose algorithm could not decide.
    pub errors:            usize,
    pub guard_coverage:    f64,
    pub intruder_coverage: f64,
}
