//! Fluent builder for constructing a [`Sim`].

use std::collections::HashMap;

use arena_agent::AgentStoreBuilder;
use arena_behavior::AgentAlgorithm;
use arena_core::{AgentId, AgentKind, Coord, Pose, SimConfig, SimRng};
use arena_movement::MovementEngine;
use arena_vision::VisionModel;
use arena_world::{TileKind, TileMap};
use tracing::info;

use crate::{AgentSpec, Sim, SimError, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`SimConfig`] — total ticks, seed, view distance, …
/// - [`TileMap`] — from [`arena_world::TileMapBuilder`]
///
/// # Agents
///
/// | Method                      | Placement                                    |
/// |-----------------------------|----------------------------------------------|
/// | `.agent(spec)`              | exactly at `spec.pose`                       |
/// | `.spawn_in_area(spec, n)`   | `n` random free tiles of the kind's spawn area, heading from `spec` |
///
/// Explicit agents get ids first, in call order, then spawned agents.
///
/// # Example
///
/// ```rust,ignore
/// let map = TileMapBuilder::from_ascii(LAYOUT)?.build()?;
/// let mut sim = SimBuilder::new(config, map)
///     .agent(AgentSpec::guard(Pose::new(Coord::new(1, 1), Heading::East)))
///     .spawn_in_area(AgentSpec::intruder(Pose::default()), 3)
///     .build()?;
/// let outcome = sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    config: SimConfig,
    map:    TileMap,
    specs:  Vec<AgentSpec>,
    spawns: Vec<(AgentSpec, usize)>,
}

impl SimBuilder {
    pub fn new(config: SimConfig, map: TileMap) -> Self {
        Self { config, map, specs: Vec::new(), spawns: Vec::new() }
    }

    pub fn agent(mut self, spec: AgentSpec) -> Self {
        self.specs.push(spec);
        self
    }

    pub fn agents(mut self, specs: impl IntoIterator<Item = AgentSpec>) -> Self {
        self.specs.extend(specs);
        self
    }

    /// Place `count` agents built from `template` on random free tiles of
    /// the spawn area for `template.kind`.  `template.pose.coord` is ignored.
    pub fn spawn_in_area(mut self, template: AgentSpec, count: usize) -> Self {
        self.spawns.push((template, count));
        self
    }

    /// Validate inputs, place every agent, and return a ready-to-run
    /// [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        self.config.validate()?;
        let Self { config, mut map, specs, spawns } = self;

        // ── Explicit placements ───────────────────────────────────────────
        let mut placed: Vec<AgentSpec> = Vec::with_capacity(specs.len());
        let mut taken: HashMap<Coord, AgentId> = HashMap::new();
        for spec in specs {
            let agent = AgentId(placed.len() as u32);
            let at = spec.pose.coord;
            check_placement(&map, agent, at)?;
            if let Some(first) = taken.insert(at, agent) {
                return Err(SimError::Overlap { first, second: agent, at });
            }
            placed.push(spec);
        }

        // ── Spawn areas ───────────────────────────────────────────────────
        let mut rng = SimRng::new(config.seed).child(1);
        for (template, count) in spawns {
            let area = match template.kind {
                AgentKind::Guard    => TileKind::GuardSpawn,
                AgentKind::Intruder => TileKind::IntruderSpawn,
            };
            let mut free: Vec<Coord> = map.coords_of(area).filter(|c| !taken.contains_key(c)).collect();
            if free.len() < count {
                return Err(SimError::SpawnAreaFull { kind: template.kind, wanted: count, free: free.len() });
            }
            rng.shuffle(&mut free);
            for at in free.into_iter().take(count) {
                let agent = AgentId(placed.len() as u32);
                taken.insert(at, agent);
                placed.push(AgentSpec { pose: Pose::new(at, template.pose.heading), ..template });
            }
        }

        // ── Agent state and map registry ──────────────────────────────────
        let (agents, rngs) = placed
            .iter()
            .fold(AgentStoreBuilder::new(config.seed), |b, s| b.agent(s.kind, s.pose, s.speed))
            .build();
        for agent in agents.agent_ids() {
            let i = agent.index();
            map.register_agent(agent, agents.kind[i], agents.position[i])?;
        }
        let algorithms: Vec<AgentAlgorithm> = placed.iter().map(|s| s.algorithm.build()).collect();
        let visions: Vec<VisionModel> = placed.iter().map(|s| s.vision).collect();

        #[cfg(feature = "parallel")]
        let pool = match config.num_threads {
            Some(n) => Some(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(n)
                    .build()
                    .map_err(|e| SimError::ThreadPool(e.to_string()))?,
            ),
            None => None,
        };

        info!(
            width = map.width(),
            height = map.height(),
            guards = agents.kind.iter().filter(|k| k.is_guard()).count(),
            intruders = agents.kind.iter().filter(|k| k.is_intruder()).count(),
            "simulation built"
        );

        Ok(Sim {
            clock: config.make_clock(),
            config,
            map,
            agents,
            rngs,
            algorithms,
            visions,
            movement: MovementEngine::new(),
            outcome: None,
            #[cfg(feature = "parallel")]
            pool,
        })
    }
}

/// An agent may start on any walkable tile except a portal.
fn check_placement(map: &TileMap, agent: AgentId, at: Coord) -> SimResult<()> {
    let reason = match map.kind_at(at) {
        None                   => "off the map",
        Some(TileKind::Wall)   => "inside a wall",
        Some(TileKind::Portal) => "on a portal",
        Some(_)                => return Ok(()),
    };
    Err(SimError::InvalidPlacement { agent, at, reason })
}
