//! Simulation observer trait for progress reporting and data collection.

use arena_agent::AgentStore;
use arena_behavior::{BehaviorError, Move};
use arena_core::{AgentId, AgentKind, Coord, Tick};
use arena_movement::MoveOutcome;
use arena_world::TileMap;

use crate::{SimOutcome, TickSummary};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.  The sim never renders; a UI is just
/// another observer.
///
/// # Example — capture logger
///
/// ```rust,ignore
/// struct Captures(Vec<AgentId>);
///
/// impl SimObserver for Captures {
///     fn on_move(&mut self, _tick: Tick, _mv: &Move, outcome: &MoveOutcome) {
///         if let MoveOutcome::Blocked { captured: Some(id), .. } = outcome {
///             self.0.push(*id);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each tick with its counters.
    fn on_tick_end(&mut self, _summary: &TickSummary) {}

    /// Called for every resolved move, in ascending agent order.
    fn on_move(&mut self, _tick: Tick, _mv: &Move, _outcome: &MoveOutcome) {}

    /// An agent's algorithm failed to decide this tick.  The agent idles.
    fn on_agent_error(&mut self, _tick: Tick, _agent: AgentId, _error: &BehaviorError) {}

    /// `listener` can hear the agents in `heard` at the end of the tick.
    fn on_sound(&mut self, _tick: Tick, _listener: AgentId, _heard: &[(AgentId, AgentKind, Coord)]) {}

    /// Called at snapshot intervals (every `config.output_interval_ticks`
    /// ticks) with read-only access to agents and map.
    fn on_snapshot(&mut self, _tick: Tick, _agents: &AgentStore, _map: &TileMap) {}

    /// Called once when `run` returns.
    fn on_sim_end(&mut self, _final_tick: Tick, _outcome: SimOutcome) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
