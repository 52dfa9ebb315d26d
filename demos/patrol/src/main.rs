//! patrol — guards sweep a walled arena while intruders hunt for the target.
//!
//! Builds a 24×16 arena in code (interior walls, a portal, a shaded patch,
//! a target area and two spawn areas), runs it to an outcome, writes CSV
//! output, and prints coverage and final poses.
//!
//! Set `RUST_LOG=debug` to see every resolved move.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use arena_agent::AgentStore;
use arena_behavior::AlgorithmKind;
use arena_core::{Coord, Heading, Pose, Rect, SimConfig, Tick};
use arena_output::{CsvWriter, OutputWriter, SimOutputObserver};
use arena_sim::{AgentSpec, SimBuilder, SimObserver, SimOutcome, TickSummary};
use arena_vision::VisionModel;
use arena_world::{TileMap, TileMapBuilder};

// ── Constants ─────────────────────────────────────────────────────────────────

const WIDTH:                 i32   = 24;
const HEIGHT:                i32   = 16;
const SEED:                  u64   = 42;
const TOTAL_TICKS:           u64   = 500;
const OUTPUT_INTERVAL_TICKS: u64   = 10;
const PATROL_GUARDS:         usize = 3;
const INTRUDERS:             usize = 2;
const OUTPUT_DIR:            &str  = "output/patrol";

// ── Arena ─────────────────────────────────────────────────────────────────────

fn c(x: i32, y: i32) -> Coord {
    Coord::new(x, y)
}

fn build_arena() -> Result<TileMap> {
    let map = TileMapBuilder::new(WIDTH, HEIGHT)
        .border_walls()
        .walls(Rect::new(c(8, 3), c(8, 10)))
        .walls(Rect::new(c(15, 6), c(15, 13)))
        .walls(Rect::new(c(3, 8), c(6, 8)))
        .target_area(Rect::new(c(20, 1), c(22, 2)))
        .guard_spawn(Rect::new(c(1, 1), c(4, 3)))
        .intruder_spawn(Rect::new(c(1, 12), c(4, 14)))
        .shaded(Rect::new(c(10, 10), c(13, 13)))
        .portal(c(11, 2), c(18, 12), Heading::North)
        .build()?;
    Ok(map)
}

// ── Observer wrapper to count rows and captures ───────────────────────────────

struct CountingObserver<W: OutputWriter> {
    inner:         SimOutputObserver<W>,
    snapshot_rows: usize,
    summary_rows:  usize,
    captures:      usize,
    blocked:       usize,
    last:          TickSummary,
}

impl<W: OutputWriter> CountingObserver<W> {
    fn new(inner: SimOutputObserver<W>) -> Self {
        Self {
            inner,
            snapshot_rows: 0,
            summary_rows:  0,
            captures:      0,
            blocked:       0,
            last:          TickSummary::default(),
        }
    }
}

impl<W: OutputWriter> SimObserver for CountingObserver<W> {
    fn on_tick_end(&mut self, summary: &TickSummary) {
        self.summary_rows += 1;
        self.captures += summary.captured;
        self.blocked += summary.blocked;
        self.last = *summary;
        self.inner.on_tick_end(summary);
    }

    fn on_snapshot(&mut self, tick: Tick, agents: &AgentStore, map: &TileMap) {
        self.snapshot_rows += agents.count;
        self.inner.on_snapshot(tick, agents, map);
    }

    fn on_sim_end(&mut self, final_tick: Tick, outcome: SimOutcome) {
        self.inner.on_sim_end(final_tick, outcome);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== patrol — guards vs intruders ===");
    println!("Arena: {WIDTH}×{HEIGHT}  |  Ticks: {TOTAL_TICKS}  |  Seed: {SEED}");
    println!();

    // 1. Arena.
    let map = build_arena()?;
    println!("Walkable tiles: {}", map.passable_count());

    // 2. Config.
    let config = SimConfig {
        total_ticks:           TOTAL_TICKS,
        seed:                  SEED,
        view_distance:         6,
        sound_radius:          3,
        output_interval_ticks: OUTPUT_INTERVAL_TICKS,
        num_threads:           None,
    };

    // 3. Agents: pheromone patrollers from the guard spawn, one A* hunter in
    //    the middle with cone vision, intruders from their own spawn.
    let hunter = AgentSpec::guard(Pose::new(c(12, 7), Heading::West))
        .algorithm(AlgorithmKind::AStarPursuit)
        .vision(VisionModel::Cone);
    let mut sim = SimBuilder::new(config, map)
        .agent(hunter)
        .spawn_in_area(AgentSpec::guard(Pose::new(c(0, 0), Heading::East)), PATROL_GUARDS)
        .spawn_in_area(AgentSpec::intruder(Pose::new(c(0, 0), Heading::North)), INTRUDERS)
        .build()?;

    // 4. Output.
    let writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    let mut obs = CountingObserver::new(SimOutputObserver::new(writer));

    // 5. Run.
    let t0 = Instant::now();
    let outcome = sim.run(&mut obs)?;
    let elapsed = t0.elapsed();
    info!(%outcome, ticks = sim.tick().0, "run complete");

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    // 6. Summary.
    println!("Outcome: {outcome} after {} ticks ({:.3} s)", sim.tick().0, elapsed.as_secs_f64());
    println!("  guard coverage    : {:.1}%", obs.last.guard_coverage * 100.0);
    println!("  intruder coverage : {:.1}%", obs.last.intruder_coverage * 100.0);
    println!("  captures          : {}", obs.captures);
    println!("  blocked moves     : {}", obs.blocked);
    println!("  agent_snapshots.csv : {} rows", obs.snapshot_rows);
    println!("  tick_summaries.csv  : {} rows", obs.summary_rows);
    println!();

    // 7. Final agent poses.
    println!("{:<6} {:<9} {:<18} {:<8} {:<9} {:<10}", "Agent", "Kind", "Algorithm", "Tile", "Heading", "Status");
    println!("{}", "-".repeat(64));
    for agent in sim.agents.agent_ids() {
        let i = agent.index();
        let at = sim.agents.position[i];
        println!(
            "{:<6} {:<9} {:<18} {:<8} {:<9} {:<10}",
            i,
            sim.agents.kind[i].as_str(),
            sim.algorithms[i].kind().as_str(),
            format!("{},{}", at.x, at.y),
            sim.agents.heading[i].as_str(),
            sim.agents.status[i].as_str(),
        );
    }

    Ok(())
}
