//! `arena-sim` — tick loop orchestrator for the patrol arena simulator.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks (or until an outcome):
//!   ① Perception — each active agent's vision model scans the frozen map.
//!   ② Belief     — touch range + sight folded into the agent's BeliefMap.
//!   ③ Intent     — Algorithm::next_move per active agent
//!                  (parallel with the `parallel` feature).
//!   ④ Apply      — decay pheromones, mark explored tiles, then for each
//!                  agent in ascending AgentId order:
//!                    pheromone drop → MovementEngine::resolve
//!                    Blocked        → Algorithm::interrupt(veer)
//!                    capture        → Danger marker
//!                    ReachedTarget  → run ends
//!   ⑤ Sound      — observers hear who is within `sound_radius`.
//! ```
//!
//! # Crate layout
//!
//! | Module       | Contents                                               |
//! |--------------|--------------------------------------------------------|
//! | [`builder`]  | `SimBuilder` — placement validation, spawn areas       |
//! | [`sim`]      | `Sim` — the tick loop                                  |
//! | [`spec`]     | `AgentSpec` — one agent's pose, speed, policy, vision  |
//! | [`observer`] | `SimObserver`, `NoopObserver`                          |
//! | [`outcome`]  | `SimOutcome`, `TickSummary`                            |
//! | [`error`]    | `SimError`, `SimResult<T>`                             |
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the intent phase on Rayon's thread pool.          |
//! | `fx-hash`  | FxHash for coordinate-keyed tables in every crate.     |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use arena_core::{Coord, Heading, Pose, SimConfig};
//! use arena_sim::{AgentSpec, NoopObserver, SimBuilder};
//! use arena_world::TileMapBuilder;
//!
//! let map = TileMapBuilder::new(5, 5).build()?;
//! let mut sim = SimBuilder::new(SimConfig::default(), map)
//!     .agent(AgentSpec::guard(Pose::new(Coord::new(2, 4), Heading::North)))
//!     .build()?;
//! let outcome = sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod outcome;
pub mod sim;
pub mod spec;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use outcome::{SimOutcome, TickSummary};
pub use sim::Sim;
pub use spec::AgentSpec;
