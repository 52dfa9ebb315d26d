//! The `Sim` struct and its tick loop.

use arena_agent::{AgentRngs, AgentStatus, AgentStore};
use arena_behavior::{AgentAlgorithm, Algorithm, BehaviorResult, Decision, PlanContext};
use arena_core::{AgentId, AgentKind, AgentRng, Coord, SimClock, SimConfig, Tick};
use arena_movement::{MoveOutcome, MovementEngine, agents_within_earshot};
use arena_vision::{Vision, VisionModel, effective_distance};
use arena_world::{MarkerKind, TileMap};
use tracing::{debug, info, warn};

use crate::{SimObserver, SimOutcome, SimResult, TickSummary};

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// `Sim` holds all simulation state and drives the tick loop:
///
/// 1. **Perception**: every active agent looks out over the start-of-tick
///    map with its vision model.
/// 2. **Belief**: each agent folds its touch range and sight into its own
///    belief map.
/// 3. **Intent** (optionally parallel with the `parallel` feature): every
///    active agent's algorithm picks a [`Decision`] from a read-only
///    [`PlanContext`].
/// 4. **Apply** (sequential, ascending `AgentId`):
///    - pheromones decay, then seen tiles are flagged as explored;
///    - each decision's pheromone drop lands and its move is resolved;
///    - a blocked move queues the veer on the agent's algorithm.
///
/// Nothing an agent does in apply is visible to any other agent's
/// perception or planning until the next tick.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// Global configuration (total ticks, seed, view distance, …).
    pub config: SimConfig,

    pub clock: SimClock,

    /// Ground truth: tiles, pheromones, markers, and who stands where.
    pub map: TileMap,

    /// Agent state (SoA arrays) including every agent's belief map.
    pub agents: AgentStore,

    /// Per-agent deterministic RNGs, separated for the split-borrow pattern.
    pub rngs: AgentRngs,

    /// One algorithm per agent, indexed by `AgentId`.
    pub algorithms: Vec<AgentAlgorithm>,

    /// One vision model per agent, indexed by `AgentId`.
    pub visions: Vec<VisionModel>,

    pub movement: MovementEngine,

    pub(crate) outcome: Option<SimOutcome>,

    #[cfg(feature = "parallel")]
    pub(crate) pool: Option<rayon::ThreadPool>,
}

impl Sim {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run until an intruder escapes, every intruder is caught, or
    /// `config.end_tick()` is reached.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<SimOutcome> {
        let outcome = loop {
            if let Some(outcome) = self.outcome {
                break outcome;
            }
            if self.clock.current_tick >= self.config.end_tick() {
                self.outcome = Some(SimOutcome::TimeLimit);
                break SimOutcome::TimeLimit;
            }
            self.step(observer)?;
        };

        let final_tick = self.clock.current_tick;
        observer.on_sim_end(final_tick, outcome);
        info!(%final_tick, %outcome, captures = self.movement.totals.captures, "simulation finished");
        Ok(outcome)
    }

    /// Run up to `n` ticks from the current position, ignoring `end_tick`.
    /// Stops early once the run has an outcome and returns it.
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<Option<SimOutcome>> {
        for _ in 0..n {
            if self.outcome.is_some() {
                break;
            }
            self.step(observer)?;
        }
        Ok(self.outcome)
    }

    /// How the run ended, once it has.
    pub fn outcome(&self) -> Option<SimOutcome> {
        self.outcome
    }

    #[inline]
    pub fn tick(&self) -> Tick {
        self.clock.current_tick
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let now = self.clock.current_tick;
        observer.on_tick_start(now);
        let summary = self.process_tick(now, observer)?;
        observer.on_tick_end(&summary);
        if now.is_every(self.config.output_interval_ticks) {
            observer.on_snapshot(now, &self.agents, &self.map);
        }
        self.clock.advance();
        Ok(())
    }

    fn process_tick<O: SimObserver>(&mut self, now: Tick, observer: &mut O) -> SimResult<TickSummary> {
        let mut summary = TickSummary { tick: now, ..TickSummary::default() };

        // ── Phase 1: perception ───────────────────────────────────────────
        //
        // Pure reads of the start-of-tick map.  Inactive agents see nothing.
        let seen: Vec<Vec<Coord>> = self
            .agents
            .agent_ids()
            .map(|agent| {
                if !self.agents.is_active(agent) {
                    return Vec::new();
                }
                let pose = self.agents.pose(agent);
                let range = effective_distance(&self.map, pose.coord, self.config.view_distance);
                self.visions[agent.index()].observe(&self.map, pose, range)
            })
            .collect();

        // ── Phase 2: belief update ────────────────────────────────────────
        for i in 0..self.agents.count {
            if !self.agents.is_active(AgentId(i as u32)) {
                continue;
            }
            let at = self.agents.position[i];
            let belief = &mut self.agents.belief[i];
            belief.sense_surroundings(&self.map, at, now);
            belief.observe(&self.map, &seen[i], now);
        }

        // ── Phase 3: intent (produce) ─────────────────────────────────────
        let decisions = self.compute_decisions(now);
        summary.active = decisions.iter().filter(|d| d.is_some()).count();

        // ── Phase 4: apply (consume) ──────────────────────────────────────
        //
        // Decay runs before any drop so a fresh mark starts the next tick at
        // full strength.
        self.map.decay_pheromones();
        self.mark_explored(&seen);

        for (i, decision) in decisions.into_iter().enumerate() {
            let agent = AgentId(i as u32);
            // An agent captured earlier in this loop forfeits its move.
            if !self.agents.is_active(agent) {
                continue;
            }
            let decision = match decision {
                None => continue,
                Some(Ok(d)) => d,
                Some(Err(e)) => {
                    debug!(%agent, error = %e, "agent could not decide");
                    observer.on_agent_error(now, agent, &e);
                    summary.errors += 1;
                    continue;
                }
            };

            if let Some(c) = decision.pheromone_drop {
                if let Err(e) = self.map.drop_pheromone(c) {
                    warn!(%agent, at = %c, error = %e, "pheromone drop rejected");
                }
            }

            let mv = decision.mv;
            let outcome = self.movement.resolve(&mut self.map, &mut self.agents, mv, self.rngs.get_mut(agent))?;
            observer.on_move(now, &mv, &outcome);

            match outcome {
                MoveOutcome::Moved { .. } => summary.moved += 1,
                MoveOutcome::Teleported { .. } => summary.teleported += 1,
                MoveOutcome::Blocked { cause, veer, captured, .. } => {
                    summary.blocked += 1;
                    self.algorithms[i].interrupt(agent, veer);
                    if let Some(intruder) = captured {
                        summary.captured += 1;
                        self.map.place_marker(cause.coord(), MarkerKind::Danger, AgentKind::Guard, agent, now)?;
                        info!(tick = %now, guard = %agent, %intruder, "intruder captured");
                    }
                }
                MoveOutcome::ReachedTarget { at, .. } => {
                    summary.moved += 1;
                    info!(tick = %now, intruder = %agent, %at, "intruder reached the target");
                    self.outcome = Some(SimOutcome::IntruderReachedTarget(agent));
                    break;
                }
                MoveOutcome::Idle | MoveOutcome::Turned { .. } => {}
            }
        }

        // ── Phase 5: sound ────────────────────────────────────────────────
        let radius = self.config.sound_radius;
        if radius > 0 {
            for agent in self.agents.active_ids() {
                let at = self.agents.position[agent.index()];
                let heard = agents_within_earshot(&self.map, agent, at, radius);
                if !heard.is_empty() {
                    observer.on_sound(now, agent, &heard);
                }
            }
        }

        if self.outcome.is_none() && self.all_intruders_caught() {
            self.outcome = Some(SimOutcome::AllIntrudersCaught);
        }

        summary.guard_coverage = self.map.coverage(AgentKind::Guard);
        summary.intruder_coverage = self.map.coverage(AgentKind::Intruder);
        Ok(summary)
    }

    /// Ask every active agent's algorithm for this tick's decision.
    ///
    /// `None` for inactive agents.  With the `parallel` Cargo feature the
    /// calls run on Rayon's thread pool; each task owns a disjoint
    /// algorithm and RNG, so results match the sequential order exactly.
    fn compute_decisions(&mut self, now: Tick) -> Vec<Option<BehaviorResult<Decision>>> {
        // Explicit field borrows so the borrow checker sees disjoint access.
        let agents     = &self.agents;
        let map        = &self.map;
        let algorithms = &mut self.algorithms;
        let rngs       = &mut self.rngs.inner;

        let decide = |i: usize, algorithm: &mut AgentAlgorithm, rng: &mut AgentRng| {
            let agent = AgentId(i as u32);
            if !agents.is_active(agent) {
                return None;
            }
            let ctx = PlanContext::new(
                now,
                agent,
                agents.kind[i],
                agents.pose(agent),
                agents.speed[i],
                &agents.belief[i],
                map,
            );
            Some(algorithm.next_move(&ctx, rng))
        };

        #[cfg(not(feature = "parallel"))]
        {
            algorithms
                .iter_mut()
                .zip(rngs.iter_mut())
                .enumerate()
                .map(|(i, (algorithm, rng))| decide(i, algorithm, rng))
                .collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            let run = || {
                algorithms
                    .par_iter_mut()
                    .zip(rngs.par_iter_mut())
                    .enumerate()
                    .map(|(i, (algorithm, rng))| decide(i, algorithm, rng))
                    .collect::<Vec<_>>()
            };
            match &self.pool {
                Some(pool) => pool.install(run),
                None => run(),
            }
        }
    }

    /// Flag every tile an agent saw or touched this tick as explored by its
    /// side.
    fn mark_explored(&mut self, seen: &[Vec<Coord>]) {
        for agent in self.agents.active_ids() {
            let i = agent.index();
            let kind = self.agents.kind[i];
            let at = self.agents.position[i];
            let touch = std::iter::once(at).chain(at.neighbors().map(|(_, c)| c));
            for c in seen[i].iter().copied().chain(touch) {
                if self.map.in_bounds(c) {
                    let _ = self.map.mark_explored(c, kind);
                }
            }
        }
    }

    fn all_intruders_caught(&self) -> bool {
        let mut intruders = self
            .agents
            .kind
            .iter()
            .zip(&self.agents.status)
            .filter(|&(&k, _)| k == AgentKind::Intruder)
            .peekable();
        intruders.peek().is_some()
            && intruders.all(|(_, &s)| s == AgentStatus::Captured)
    }
}
